//! Lorem-style text generators.

use super::data::LOREM_WORDS;
use super::pick_str;
use synth_core::{FieldType, RandomSource, Value};

/// Generate a text-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    match field_type {
        FieldType::Word => Value::from(pick_str(rng, LOREM_WORDS)),
        FieldType::Sentence => Value::String(sentence(rng)),
        FieldType::Paragraph => Value::String(paragraph(rng)),
        FieldType::Title => Value::String(title(rng)),
        _ => Value::Null,
    }
}

/// Six to twelve words, capitalized, ending in a period.
pub fn sentence<R: RandomSource>(rng: &mut R) -> String {
    let count = rng.next_int(6, 12);
    let words: Vec<&str> = (0..count).map(|_| pick_str(rng, LOREM_WORDS)).collect();
    format!("{}.", capitalize(&words.join(" ")))
}

/// Three to five sentences.
pub fn paragraph<R: RandomSource>(rng: &mut R) -> String {
    let count = rng.next_int(3, 5);
    (0..count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two to five title-cased words.
pub fn title<R: RandomSource>(rng: &mut R) -> String {
    let count = rng.next_int(2, 5);
    (0..count)
        .map(|_| capitalize(pick_str(rng, LOREM_WORDS)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
