//! Per-field rules.
//!
//! For one enabled rule and one row, at most one rewrite applies, in this
//! order: fixed value, custom-value pick, numeric range, date range. The
//! rule's `null_percent` is checked afterwards and can null the rewritten
//! value.

use crate::mix::{mix, mix_chance, mix_index, Concern};
use chrono::{Datelike, Days, NaiveDate};
use synth_core::{FieldRule, Record, Value};
use synth_generator::{format_date, parse_date};

/// Field whose date-range rule also re-derives [`AGE_FIELD`].
pub const DATE_OF_BIRTH_FIELD: &str = "dateOfBirth";

/// Field re-derived from [`DATE_OF_BIRTH_FIELD`].
pub const AGE_FIELD: &str = "age";

/// Reference date used for age arithmetic.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Apply one rule to one row. Rows without the field are left untouched.
///
/// Returns whether the field was present.
pub fn apply_rule(record: &mut Record, row: usize, field: &str, rule: &FieldRule, seed: u32) -> bool {
    let Some(current) = record.get(field).cloned() else {
        return false;
    };

    if let Some(fixed) = &rule.fixed_value {
        record.set(field, Value::String(fixed.clone()));
    } else if !rule.custom_values.is_empty() {
        let idx = mix_index(seed, row, field, Concern::CustomValue, rule.custom_values.len());
        record.set(field, Value::String(rule.custom_values[idx].clone()));
    } else if let (Some(min), Some(max)) = (rule.min_value, rule.max_value) {
        if let Some(value) = remap_numeric(&current, min, max, mix(seed, row, field, Concern::NumericRange)) {
            record.set(field, value);
        }
    } else if let (Some(start), Some(end)) = (&rule.date_start, &rule.date_end) {
        if let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) {
            let date = remap_date(start, end, mix(seed, row, field, Concern::DateRange));
            record.set(field, Value::String(format_date(date)));
            if field == DATE_OF_BIRTH_FIELD && record.contains_key(AGE_FIELD) {
                record.set(AGE_FIELD, Value::Int(age_at(date, reference_date())));
            }
        }
    }

    if let Some(percent) = rule.null_percent {
        if mix_chance(seed, row, field, Concern::FieldNull, percent) {
            record.set(field, Value::Null);
        }
    }
    true
}

/// Map `draw` in `[0, 1)` onto `[min, max]`, keeping the decimal places of
/// `current`. Returns `None` when `current` is not numeric.
pub fn remap_numeric(current: &Value, min: f64, max: f64, draw: f64) -> Option<Value> {
    current.parse_numeric()?;
    let (lo, hi) = if max < min { (max, min) } else { (min, max) };
    let decimals = decimal_places(current);

    if decimals == 0 {
        let (bottom, lo, hi) = (lo, lo.ceil(), hi.floor());
        if hi < lo {
            // No integer inside the bounds
            return Some(Value::number(bottom));
        }
        let n = lo + (draw * (hi - lo + 1.0)).floor();
        Some(Value::Int(n.min(hi) as i64))
    } else {
        let factor = 10f64.powi(decimals as i32);
        let n = ((lo + draw * (hi - lo)) * factor).round() / factor;
        Some(Value::Float(n))
    }
}

/// Decimal places in the value's textual form.
fn decimal_places(value: &Value) -> usize {
    match value {
        Value::Int(_) => 0,
        other => {
            let text = other.to_display_string();
            text.trim()
                .split_once('.')
                .map(|(_, frac)| frac.chars().take_while(char::is_ascii_digit).count())
                .unwrap_or(0)
        }
    }
}

/// Map `draw` in `[0, 1)` onto a day in `[start, end]` (inclusive).
pub fn remap_date(start: NaiveDate, end: NaiveDate, draw: f64) -> NaiveDate {
    let (lo, hi) = if end < start { (end, start) } else { (start, end) };
    let span = (hi - lo).num_days();
    let offset = ((draw * (span + 1) as f64).floor() as i64).clamp(0, span);
    lo.checked_add_days(Days::new(offset as u64)).unwrap_or(lo)
}

/// Whole years between `birth` and `on`, not counting a birthday that has not
/// been reached yet.
pub fn age_at(birth: NaiveDate, on: NaiveDate) -> i64 {
    let mut age = i64::from(on.year() - birth.year());
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_value_wins() {
        let rule = FieldRule {
            fixed_value: Some("5".to_string()),
            custom_values: vec!["A".to_string(), "B".to_string()],
            ..FieldRule::enabled()
        };
        for row in 0..20 {
            let mut record = Record::new().with("grade", "C");
            apply_rule(&mut record, row, "grade", &rule, 42);
            assert_eq!(record.get("grade"), Some(&Value::from("5")));
        }
    }

    #[test]
    fn test_custom_values_pick_from_pool() {
        let rule = FieldRule::one_of(["A", "B"]);
        for row in 0..50 {
            let mut record = Record::new().with("grade", "C");
            apply_rule(&mut record, row, "grade", &rule, 42);
            let grade = record.get("grade").unwrap().as_str().unwrap();
            assert!(grade == "A" || grade == "B");
        }
    }

    #[test]
    fn test_missing_field_is_noop() {
        let mut record = Record::new().with("other", 1);
        let before = record.clone();
        assert!(!apply_rule(&mut record, 0, "grade", &FieldRule::fixed("x"), 1));
        assert_eq!(record, before);
    }

    #[test]
    fn test_remap_numeric_keeps_decimals() {
        let v = remap_numeric(&Value::Float(3.25), 10.0, 20.0, 0.5).unwrap();
        assert_eq!(v, Value::Float(15.0));

        let v = remap_numeric(&Value::from("7.125"), 0.0, 1.0, 0.3333).unwrap();
        assert_eq!(v, Value::Float(0.333));

        let v = remap_numeric(&Value::Int(40), 18.0, 20.0, 0.999).unwrap();
        assert_eq!(v, Value::Int(20));
        let v = remap_numeric(&Value::Int(40), 18.0, 20.0, 0.0).unwrap();
        assert_eq!(v, Value::Int(18));
    }

    #[test]
    fn test_remap_numeric_skips_non_numeric() {
        assert_eq!(remap_numeric(&Value::from("98%"), 0.0, 1.0, 0.5), None);
        assert_eq!(remap_numeric(&Value::Null, 0.0, 1.0, 0.5), None);
        assert_eq!(remap_numeric(&Value::Bool(true), 0.0, 1.0, 0.5), None);
    }

    #[test]
    fn test_range_rule_leaves_non_numeric_untouched() {
        let mut record = Record::new().with("bp", "120/80 mmHg");
        apply_rule(&mut record, 0, "bp", &FieldRule::range(1.0, 2.0), 9);
        assert_eq!(record.get("bp"), Some(&Value::from("120/80 mmHg")));
    }

    #[test]
    fn test_remap_date_bounds() {
        let (start, end) = (ymd(1930, 1, 1), ymd(1955, 12, 31));
        assert_eq!(remap_date(start, end, 0.0), start);
        assert_eq!(remap_date(start, end, 0.999_999_99), end);
        assert_eq!(remap_date(end, start, 0.0), start);
    }

    #[test]
    fn test_age_at() {
        let on = ymd(2025, 1, 1);
        assert_eq!(age_at(ymd(1950, 1, 1), on), 75);
        assert_eq!(age_at(ymd(1950, 1, 2), on), 74);
        assert_eq!(age_at(ymd(1949, 12, 31), on), 75);
    }

    #[test]
    fn test_date_rule_rederives_age() {
        let rule = FieldRule::date_range("1930-01-01", "1955-12-31");
        for row in 0..30 {
            let mut record = Record::new().with("dateOfBirth", "1990-06-15").with("age", 34);
            apply_rule(&mut record, row, "dateOfBirth", &rule, 42);

            let dob = parse_date(record.get("dateOfBirth").unwrap().as_str().unwrap()).unwrap();
            assert!(dob >= ymd(1930, 1, 1) && dob <= ymd(1955, 12, 31));
            let age = record.get("age").unwrap().as_i64().unwrap();
            assert_eq!(age, age_at(dob, reference_date()));
            assert!((69..=95).contains(&age));
        }
    }

    #[test]
    fn test_invalid_date_range_skipped() {
        let mut record = Record::new().with("visit", "2020-01-01");
        apply_rule(&mut record, 0, "visit", &FieldRule::date_range("soon", "2021-01-01"), 1);
        assert_eq!(record.get("visit"), Some(&Value::from("2020-01-01")));
    }

    #[test]
    fn test_null_percent_runs_after_fixed() {
        let rule = FieldRule::fixed("Denied").with_null_percent(100.0);
        let mut record = Record::new().with("claimStatus", "Paid");
        apply_rule(&mut record, 0, "claimStatus", &rule, 42);
        assert_eq!(record.get("claimStatus"), Some(&Value::Null));
    }

    #[test]
    fn test_remap_numeric_without_integer_in_bounds() {
        for draw in [0.0, 0.5, 0.99] {
            let n = remap_numeric(&Value::Int(7), 1.2, 1.8, draw)
                .unwrap()
                .parse_numeric()
                .unwrap();
            assert!((1.2..=1.8).contains(&n), "{n}");
        }
    }
}
