//! Custom column engine.
//!
//! Adds computed columns to an existing record set. Columns draw from their
//! own `SeededRandom` stream, offset from the base seed so it never lines up
//! with the scenario engine's draws. Per row and column the order is:
//! null check, value by kind, then prefix/suffix wrap for non-null values.
//!
//! Formula columns see the row as it stands when they run, including custom
//! columns declared before them.

use crate::formula::evaluate_formula;
use synth_core::{CustomColumn, CustomColumnType, RandomSource, Record, SeededRandom, Value};
use synth_generator::{format_date, parse_date, random_date_between};
use tracing::debug;

/// Offset between the base seed and the custom column stream.
pub const COLUMN_SEED_OFFSET: u32 = 7919;

/// Whether a column takes part in generation.
pub fn is_active(column: &CustomColumn) -> bool {
    column.enabled && !column.name.trim().is_empty()
}

/// Append every active column to every record.
///
/// With no active columns the records are returned unchanged.
pub fn apply_custom_columns(mut records: Vec<Record>, columns: &[CustomColumn], seed: u32) -> Vec<Record> {
    let active: Vec<&CustomColumn> = columns.iter().filter(|c| is_active(c)).collect();
    if active.is_empty() {
        return records;
    }

    let mut rng = SeededRandom::new(seed.wrapping_add(COLUMN_SEED_OFFSET));
    for record in records.iter_mut() {
        for column in &active {
            let value = column_value(column, record, &mut rng);
            record.insert(column.name.clone(), value);
        }
    }

    debug!(
        "Added {} custom columns to {} rows",
        active.len(),
        records.len()
    );
    records
}

/// Compute one column's value for one row.
pub fn column_value<R: RandomSource>(column: &CustomColumn, record: &Record, rng: &mut R) -> Value {
    if column.null_percent > 0.0 && rng.chance(column.null_percent) {
        return Value::Null;
    }

    let value = match column.column_type {
        CustomColumnType::Text => pick_string(&column.text_pool, rng),
        CustomColumnType::Select => pick_string(&column.options, rng),
        CustomColumnType::Number => number(column, rng),
        CustomColumnType::Boolean => Value::Bool(rng.chance(column.true_percent)),
        CustomColumnType::Date => match (parse_date(&column.date_start), parse_date(&column.date_end)) {
            (Some(start), Some(end)) => Value::String(format_date(random_date_between(rng, start, end))),
            _ => Value::Null,
        },
        CustomColumnType::Formula => Value::number(evaluate_formula(&column.formula, record)),
    };

    wrap(column, value)
}

fn pick_string<R: RandomSource>(pool: &[String], rng: &mut R) -> Value {
    rng.pick(pool)
        .map(|s| Value::String(s.clone()))
        .unwrap_or(Value::Null)
}

fn number<R: RandomSource>(column: &CustomColumn, rng: &mut R) -> Value {
    let (min, max) = if column.max_value < column.min_value {
        (column.max_value, column.min_value)
    } else {
        (column.min_value, column.max_value)
    };
    if column.decimals == 0 {
        let lo = min.ceil() as i64;
        let hi = max.floor() as i64;
        if hi < lo {
            // No integer inside the bounds
            return Value::number(min);
        }
        Value::Int(rng.next_int(lo, hi))
    } else {
        let factor = 10f64.powi(column.decimals.min(15) as i32);
        let n = rng.next_range(min, max);
        Value::number((n * factor).round() / factor)
    }
}

fn wrap(column: &CustomColumn, value: Value) -> Value {
    if value.is_null() || (column.prefix.is_empty() && column.suffix.is_empty()) {
        return value;
    }
    Value::String(format!(
        "{}{}{}",
        column.prefix,
        value.to_display_string(),
        column.suffix
    ))
}
