//! Character-class pattern expander.
//!
//! A pattern is a sequence of:
//! - `[class]{n}` - `n` characters drawn independently (with replacement) from
//!   the class alphabet. `[class]` without a count draws one character.
//! - any other text, copied verbatim.
//!
//! Classes mix ranges (`A-Z`, `0-9`) and literal characters (`[ABC_]`). A
//! range whose end is below its start contributes nothing; a class with an
//! empty alphabet emits `?` for each requested character. An unclosed `[` is
//! literal text.
//!
//! ```text
//! [A-Z]{3}-[0-9]{4}   ->   QXF-0831
//! ```

use synth_core::RandomSource;

/// Character emitted when a class alphabet is empty.
pub const SENTINEL: char = '?';

/// Upper bound on a single `{n}` repeat count.
pub const MAX_REPEAT: usize = 1024;

/// One parsed piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied as-is
    Literal(String),
    /// `count` draws from `alphabet`
    Class { alphabet: Vec<char>, count: usize },
}

/// Parse a pattern into segments.
pub fn parse_pattern(pattern: &str) -> Vec<Segment> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '[' {
            if let Some(close) = find_from(&chars, i + 1, ']') {
                let alphabet = expand_class(&chars[i + 1..close]);
                let (count, next) = parse_count(&chars, close + 1);

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Class { alphabet, count });
                i = next;
                continue;
            }
        }
        literal.push(chars[i]);
        i += 1;
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Expand a pattern into a concrete string, drawing from `rng`.
///
/// Each class character costs one draw; sentinel characters cost none.
pub fn expand_pattern<R: RandomSource>(pattern: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(pattern.len());
    for segment in parse_pattern(pattern) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Class { alphabet, count } => {
                for _ in 0..count {
                    out.push(rng.pick(&alphabet).copied().unwrap_or(SENTINEL));
                }
            }
        }
    }
    out
}

/// Expand a class body like `A-Z0-9_` into an explicit alphabet.
pub fn expand_class(body: &[char]) -> Vec<char> {
    let mut alphabet = Vec::new();
    let mut j = 0;

    while j < body.len() {
        if j + 2 < body.len() && body[j + 1] == '-' {
            let (start, end) = (body[j] as u32, body[j + 2] as u32);
            if start <= end {
                alphabet.extend((start..=end).filter_map(char::from_u32));
            }
            j += 3;
        } else {
            alphabet.push(body[j]);
            j += 1;
        }
    }
    alphabet
}

fn find_from(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars
        .iter()
        .skip(from)
        .position(|c| *c == target)
        .map(|p| p + from)
}

/// Read an optional `{n}` at `at`. Returns the count and the index after it.
fn parse_count(chars: &[char], at: usize) -> (usize, usize) {
    if chars.get(at) != Some(&'{') {
        return (1, at);
    }
    let Some(close) = find_from(chars, at + 1, '}') else {
        return (1, at);
    };
    let digits: String = chars[at + 1..close].iter().collect();
    match digits.trim().parse::<usize>() {
        Ok(n) => (n.min(MAX_REPEAT), close + 1),
        Err(_) => (1, at),
    }
}
