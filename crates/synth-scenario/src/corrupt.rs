//! Malformed-value injection.

use crate::mix::{mix_chance, mix_index, Concern};
use synth_core::{Record, Value};

/// Field never chosen for corruption.
pub const ID_FIELD: &str = "id";

/// Prefix of a garbled value.
pub const GARBLE_PREFIX: &str = "##ERR##";

/// How a chosen value is corrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `##ERR##` followed by the first three characters of the original
    Garble,
    /// Numbers become the string `"NaN"`; everything else becomes `-1`
    TypeMismatch,
    /// Only the first character survives
    Truncate,
    /// Empty string
    Empty,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::Garble,
        ErrorKind::TypeMismatch,
        ErrorKind::Truncate,
        ErrorKind::Empty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Garble => "garble",
            ErrorKind::TypeMismatch => "type-mismatch",
            ErrorKind::Truncate => "truncate",
            ErrorKind::Empty => "empty",
        }
    }

    /// Corrupt `value`.
    pub fn apply(&self, value: &Value) -> Value {
        match self {
            ErrorKind::Garble => {
                let head: String = value.to_display_string().chars().take(3).collect();
                Value::String(format!("{GARBLE_PREFIX}{head}"))
            }
            ErrorKind::TypeMismatch => {
                if value.is_number() {
                    Value::String("NaN".to_string())
                } else {
                    Value::Int(-1)
                }
            }
            ErrorKind::Truncate => {
                Value::String(value.to_display_string().chars().take(1).collect())
            }
            ErrorKind::Empty => Value::String(String::new()),
        }
    }
}

/// Possibly corrupt one field of `record`.
///
/// Returns the corrupted field and the kind used, or `None` when the row was
/// not selected or has no eligible field.
pub fn corrupt_row(
    record: &mut Record,
    row: usize,
    rate: f64,
    seed: u32,
) -> Option<(String, ErrorKind)> {
    if !mix_chance(seed, row, "", Concern::ErrorRow, rate) {
        return None;
    }

    let candidates: Vec<String> = record
        .keys()
        .filter(|k| *k != ID_FIELD)
        .map(str::to_string)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let field = &candidates[mix_index(seed, row, "", Concern::ErrorField, candidates.len())];
    let kind = ErrorKind::ALL[mix_index(seed, row, field, Concern::ErrorKind, ErrorKind::ALL.len())];

    let corrupted = kind.apply(record.get(field)?);
    record.set(field, corrupted);
    Some((field.clone(), kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_shapes() {
        let name = Value::from("Jonathan");
        assert_eq!(ErrorKind::Garble.apply(&name), Value::from("##ERR##Jon"));
        assert_eq!(ErrorKind::Truncate.apply(&name), Value::from("J"));
        assert_eq!(ErrorKind::Empty.apply(&name), Value::from(""));
        assert_eq!(ErrorKind::TypeMismatch.apply(&name), Value::Int(-1));
        assert_eq!(ErrorKind::TypeMismatch.apply(&Value::Int(7)), Value::from("NaN"));
        assert_eq!(ErrorKind::TypeMismatch.apply(&Value::Float(1.5)), Value::from("NaN"));
    }

    #[test]
    fn test_short_and_null_values() {
        assert_eq!(ErrorKind::Garble.apply(&Value::from("ab")), Value::from("##ERR##ab"));
        assert_eq!(ErrorKind::Garble.apply(&Value::Null), Value::from("##ERR##"));
        assert_eq!(ErrorKind::Truncate.apply(&Value::Null), Value::from(""));
    }

    #[test]
    fn test_full_rate_corrupts_one_non_id_field() {
        for row in 0..100 {
            let mut record = Record::new().with("id", "abc").with("name", "Ann").with("age", 40);
            let (field, _) = corrupt_row(&mut record, row, 100.0, 42).unwrap();
            assert_ne!(field, ID_FIELD);
            assert_eq!(record.get("id"), Some(&Value::from("abc")));
        }
    }

    #[test]
    fn test_zero_rate_is_noop() {
        let mut record = Record::new().with("name", "Ann");
        assert!(corrupt_row(&mut record, 0, 0.0, 42).is_none());
        assert_eq!(record.get("name"), Some(&Value::from("Ann")));
    }

    #[test]
    fn test_id_only_row_is_skipped() {
        let mut record = Record::new().with("id", 1);
        assert!(corrupt_row(&mut record, 0, 100.0, 42).is_none());
    }
}
