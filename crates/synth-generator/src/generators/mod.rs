//! Individual value generators for every field type.
//!
//! This module provides the generation logic for each semantic type. Every
//! generator draws from a caller-supplied [`RandomSource`], so the same code
//! serves fresh output (an entropy source) and reproducible output (a
//! `SeededRandom`).

pub mod business;
pub mod data;
pub mod health;
pub mod internet;
pub mod location;
pub mod numeric;
pub mod pattern;
pub mod personal;
pub mod template;
pub mod temporal;
pub mod text;

use synth_core::{EntropyRandom, FieldCategory, FieldConfig, FieldType, RandomSource, Value};

/// Generate one value of `field_type` from a fresh, unseeded source.
///
/// Custom kinds read their parameters from `config`; a missing config yields
/// `Value::Null`.
pub fn generate_value(field_type: FieldType, config: Option<&FieldConfig>) -> Value {
    let mut rng = EntropyRandom::new();
    generate_value_with(field_type, config, &mut rng)
}

/// Generate one value for a type given by name. Unknown names yield `Value::Null`.
pub fn generate_value_by_name<R: RandomSource>(
    name: &str,
    config: Option<&FieldConfig>,
    rng: &mut R,
) -> Value {
    match FieldType::from_name(name) {
        Some(field_type) => generate_value_with(field_type, config, rng),
        None => Value::Null,
    }
}

/// Generate one value of `field_type` drawing from `rng`.
pub fn generate_value_with<R: RandomSource>(
    field_type: FieldType,
    config: Option<&FieldConfig>,
    rng: &mut R,
) -> Value {
    match field_type.category() {
        FieldCategory::Personal => personal::generate(field_type, rng),
        FieldCategory::Location => location::generate(field_type, rng),
        FieldCategory::Business => business::generate(field_type, rng),
        FieldCategory::Numeric => numeric::generate(field_type, rng),
        FieldCategory::Internet => internet::generate(field_type, rng),
        FieldCategory::Temporal => temporal::generate(field_type, rng),
        FieldCategory::Text => text::generate(field_type, rng),
        FieldCategory::Health => health::generate(field_type, rng),
        FieldCategory::Custom => generate_custom(field_type, config, rng),
    }
}

/// Generate a value for one of the custom kinds.
fn generate_custom<R: RandomSource>(
    field_type: FieldType,
    config: Option<&FieldConfig>,
    rng: &mut R,
) -> Value {
    let Some(config) = config else {
        return Value::Null;
    };

    match field_type {
        FieldType::List => {
            let items = config.list_items();
            rng.pick(&items)
                .map(|s| Value::String(s.clone()))
                .unwrap_or(Value::Null)
        }
        FieldType::Pattern => match &config.regex_pattern {
            Some(p) => Value::String(pattern::expand_pattern(p, rng)),
            None => Value::Null,
        },
        FieldType::Template => match &config.template {
            Some(t) => Value::String(template::expand_template(t, rng)),
            None => Value::Null,
        },
        _ => Value::Null,
    }
}

/// Uniform pick from a static seed list.
pub(crate) fn pick_str<R: RandomSource>(rng: &mut R, items: &[&'static str]) -> &'static str {
    rng.pick(items).copied().unwrap_or_default()
}

/// `n` random decimal digits.
pub(crate) fn digits<R: RandomSource>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| char::from(b'0' + rng.next_int(0, 9) as u8))
        .collect()
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::SeededRandom;

    #[test]
    fn test_every_builtin_type_produces_a_value() {
        let mut rng = SeededRandom::new(42);
        for field_type in FieldType::ALL.iter().filter(|t| !t.is_custom()) {
            let value = generate_value_with(*field_type, None, &mut rng);
            assert!(
                !value.is_null(),
                "{field_type} produced null"
            );
        }
    }

    #[test]
    fn test_custom_kinds_without_config_are_null() {
        let mut rng = SeededRandom::new(42);
        for field_type in [FieldType::List, FieldType::Pattern, FieldType::Template] {
            assert_eq!(generate_value_with(field_type, None, &mut rng), Value::Null);
        }
        let empty = FieldConfig::default();
        assert_eq!(
            generate_value_with(FieldType::List, Some(&empty), &mut rng),
            Value::Null
        );
    }

    #[test]
    fn test_list_picks_from_pool() {
        let mut rng = SeededRandom::new(1);
        let config = FieldConfig::list("red, green ,blue");
        for _ in 0..50 {
            let value = generate_value_with(FieldType::List, Some(&config), &mut rng);
            let s = value.as_str().unwrap().to_string();
            assert!(["red", "green", "blue"].contains(&s.as_str()));
        }
    }

    #[test]
    fn test_unknown_name_is_null() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(generate_value_by_name("spaceship", None, &mut rng), Value::Null);
        assert!(!generate_value_by_name("city", None, &mut rng).is_null());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = SeededRandom::new(77);
        let mut b = SeededRandom::new(77);
        for field_type in FieldType::ALL.iter().filter(|t| !t.is_custom()) {
            assert_eq!(
                generate_value_with(*field_type, None, &mut a),
                generate_value_with(*field_type, None, &mut b)
            );
        }
    }

    #[test]
    fn test_unseeded_entry_point() {
        assert!(generate_value(FieldType::Uuid, None).as_str().is_some());
    }

    #[test]
    fn test_helpers() {
        let mut rng = SeededRandom::new(9);
        let d = digits(&mut rng, 8);
        assert_eq!(d.len(), 8);
        assert!(d.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
