//! Numeric value generators.

use super::round_to;
use synth_core::{FieldType, RandomSource, Value};

/// Generate a numeric-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    match field_type {
        FieldType::Integer => generate_int_range(rng, 1, 10_000),
        FieldType::Float => generate_float_range(rng, 0.0, 1000.0, 2),
        FieldType::Boolean => Value::Bool(rng.chance(50.0)),
        FieldType::Percentage => generate_int_range(rng, 0, 100),
        FieldType::Rating => generate_int_range(rng, 1, 5),
        _ => Value::Null,
    }
}

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: RandomSource>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::Int(rng.next_int(min, max))
}

/// Generate a random number in `[min, max)` rounded to `decimals` places.
pub fn generate_float_range<R: RandomSource>(
    rng: &mut R,
    min: f64,
    max: f64,
    decimals: u32,
) -> Value {
    Value::number(round_to(rng.next_range(min, max), decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::SeededRandom;

    #[test]
    fn test_generate_int_range() {
        let mut rng = SeededRandom::new(42);

        for _ in 0..100 {
            let value = generate_int_range(&mut rng, 10, 20);
            if let Value::Int(v) = value {
                assert!((10..=20).contains(&v));
            } else {
                panic!("Expected Int value");
            }
        }
    }

    #[test]
    fn test_generate_float_range() {
        let mut rng = SeededRandom::new(42);

        for _ in 0..100 {
            let value = generate_float_range(&mut rng, 0.0, 100.0, 2).parse_numeric().unwrap();
            assert!((0.0..=100.0).contains(&value));
            assert_eq!(round_to(value, 2), value);
        }
    }

    #[test]
    fn test_rating_and_percentage() {
        let mut rng = SeededRandom::new(42);
        for _ in 0..100 {
            let rating = generate(FieldType::Rating, &mut rng).as_i64().unwrap();
            let pct = generate(FieldType::Percentage, &mut rng).as_i64().unwrap();
            assert!((1..=5).contains(&rating));
            assert!((0..=100).contains(&pct));
        }
    }

    #[test]
    fn test_boolean() {
        let mut rng = SeededRandom::new(42);
        assert!(generate(FieldType::Boolean, &mut rng).as_bool().is_some());
    }
}
