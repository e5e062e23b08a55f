//! Geography generators.

use super::data::{CITIES, COUNTRIES, STATES, STREET_NAMES, STREET_SUFFIXES};
use super::{digits, pick_str, round_to};
use synth_core::{FieldType, RandomSource, Value};

/// Generate a location-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    match field_type {
        FieldType::Address => Value::String(address(rng)),
        FieldType::StreetAddress => Value::String(street_address(rng)),
        FieldType::City => Value::from(pick_str(rng, CITIES)),
        FieldType::State => Value::from(pick_str(rng, STATES)),
        FieldType::ZipCode => Value::String(digits(rng, 5)),
        FieldType::Country => Value::from(pick_str(rng, COUNTRIES)),
        FieldType::Latitude => Value::number(round_to(rng.next_range(-90.0, 90.0), 6)),
        FieldType::Longitude => Value::number(round_to(rng.next_range(-180.0, 180.0), 6)),
        _ => Value::Null,
    }
}

/// `1234 Oak Ave`.
pub fn street_address<R: RandomSource>(rng: &mut R) -> String {
    let number = rng.next_int(100, 9999);
    let street = pick_str(rng, STREET_NAMES);
    let suffix = pick_str(rng, STREET_SUFFIXES);
    format!("{number} {street} {suffix}")
}

/// `1234 Oak Ave, Denver, CO 80203`.
pub fn address<R: RandomSource>(rng: &mut R) -> String {
    let street = street_address(rng);
    let city = pick_str(rng, CITIES);
    let state = pick_str(rng, STATES);
    let zip = digits(rng, 5);
    format!("{street}, {city}, {state} {zip}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::SeededRandom;

    #[test]
    fn test_coordinates_in_range() {
        let mut rng = SeededRandom::new(42);
        for _ in 0..200 {
            let lat = generate(FieldType::Latitude, &mut rng).parse_numeric().unwrap();
            let lon = generate(FieldType::Longitude, &mut rng).parse_numeric().unwrap();
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_address_parts() {
        let mut rng = SeededRandom::new(42);
        let a = address(&mut rng);
        assert_eq!(a.split(", ").count(), 3);
    }

    #[test]
    fn test_zip_code_is_five_digits() {
        let mut rng = SeededRandom::new(1);
        let zip = generate(FieldType::ZipCode, &mut rng);
        let zip = zip.as_str().unwrap();
        assert_eq!(zip.len(), 5);
        assert!(zip.chars().all(|c| c.is_ascii_digit()));
    }
}
