//! Personal identity generators.

use super::data::{EMAIL_DOMAINS, FIRST_NAMES, GENDERS, LAST_NAMES};
use super::{digits, pick_str, temporal};
use synth_core::{FieldType, RandomSource, Value};

/// Generate a personal-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    match field_type {
        FieldType::FirstName => Value::from(pick_str(rng, FIRST_NAMES)),
        FieldType::LastName => Value::from(pick_str(rng, LAST_NAMES)),
        FieldType::FullName => Value::String(full_name(rng)),
        FieldType::Email => Value::String(email(rng)),
        FieldType::Phone => Value::String(phone(rng)),
        FieldType::Username => Value::String(username(rng)),
        FieldType::Gender => Value::from(pick_str(rng, GENDERS)),
        FieldType::DateOfBirth => Value::String(temporal::date_of_birth(rng)),
        FieldType::Age => Value::Int(rng.next_int(18, 90)),
        FieldType::Ssn => Value::String(ssn(rng)),
        _ => Value::Null,
    }
}

/// `First Last`.
pub fn full_name<R: RandomSource>(rng: &mut R) -> String {
    let first = pick_str(rng, FIRST_NAMES);
    let last = pick_str(rng, LAST_NAMES);
    format!("{first} {last}")
}

/// `first.last42@domain`.
pub fn email<R: RandomSource>(rng: &mut R) -> String {
    let first = pick_str(rng, FIRST_NAMES).to_lowercase();
    let last = pick_str(rng, LAST_NAMES).to_lowercase();
    let n = rng.next_int(1, 99);
    let domain = pick_str(rng, EMAIL_DOMAINS);
    format!("{first}.{last}{n}@{domain}")
}

/// `(555) 123-4567`.
pub fn phone<R: RandomSource>(rng: &mut R) -> String {
    let area = rng.next_int(200, 999);
    let exchange = rng.next_int(200, 999);
    let line = digits(rng, 4);
    format!("({area}) {exchange}-{line}")
}

/// `jsmith42`.
pub fn username<R: RandomSource>(rng: &mut R) -> String {
    let first = pick_str(rng, FIRST_NAMES);
    let last = pick_str(rng, LAST_NAMES).to_lowercase();
    let n = rng.next_int(1, 999);
    let initial = first.chars().next().unwrap_or('x').to_ascii_lowercase();
    format!("{initial}{last}{n}")
}

/// `123-45-6789`, avoiding the never-issued 000 and 9xx areas.
pub fn ssn<R: RandomSource>(rng: &mut R) -> String {
    let area = rng.next_int(1, 899);
    let group = rng.next_int(1, 99);
    let serial = rng.next_int(1, 9999);
    format!("{area:03}-{group:02}-{serial:04}")
}
