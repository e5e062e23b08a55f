//! Business and commerce generators.

use super::data::{
    COMPANY_SUFFIXES, CURRENCIES, DEPARTMENTS, JOB_TITLES, LAST_NAMES, ORDER_STATUSES,
    PRODUCT_ADJECTIVES, PRODUCT_MATERIALS, PRODUCT_NOUNS,
};
use super::{digits, pick_str};
use synth_core::{FieldType, RandomSource, Value};

/// Generate a business-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    match field_type {
        FieldType::Company => Value::String(company(rng)),
        FieldType::JobTitle => Value::from(pick_str(rng, JOB_TITLES)),
        FieldType::Department => Value::from(pick_str(rng, DEPARTMENTS)),
        FieldType::ProductName => Value::String(product_name(rng)),
        FieldType::Price => Value::String(money(rng, 1.0, 1000.0)),
        FieldType::Currency => Value::from(pick_str(rng, CURRENCIES)),
        FieldType::Sku => Value::String(sku(rng)),
        FieldType::OrderStatus => Value::from(pick_str(rng, ORDER_STATUSES)),
        FieldType::AccountNumber => Value::String(digits(rng, 10)),
        FieldType::CreditCard => Value::String(credit_card(rng)),
        _ => Value::Null,
    }
}

/// Dollar amount in `[min, max)` rendered with two decimals, e.g. `$12.50`.
pub fn money<R: RandomSource>(rng: &mut R, min: f64, max: f64) -> String {
    format!("${:.2}", rng.next_range(min, max))
}

/// `Garcia Holdings`.
pub fn company<R: RandomSource>(rng: &mut R) -> String {
    let name = pick_str(rng, LAST_NAMES);
    let suffix = pick_str(rng, COMPANY_SUFFIXES);
    format!("{name} {suffix}")
}

/// `Rustic Steel Lamp`.
pub fn product_name<R: RandomSource>(rng: &mut R) -> String {
    let adjective = pick_str(rng, PRODUCT_ADJECTIVES);
    let material = pick_str(rng, PRODUCT_MATERIALS);
    let noun = pick_str(rng, PRODUCT_NOUNS);
    format!("{adjective} {material} {noun}")
}

/// `ABC-12345`.
pub fn sku<R: RandomSource>(rng: &mut R) -> String {
    let letters: String = (0..3)
        .map(|_| char::from(b'A' + rng.next_int(0, 25) as u8))
        .collect();
    format!("{letters}-{}", digits(rng, 5))
}

/// `4xxx-xxxx-xxxx-xxxx`.
pub fn credit_card<R: RandomSource>(rng: &mut R) -> String {
    let number = format!("4{}", digits(rng, 15));
    number
        .as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::SeededRandom;

    #[test]
    fn test_price_format() {
        let mut rng = SeededRandom::new(42);
        for _ in 0..100 {
            let price = generate(FieldType::Price, &mut rng);
            let price = price.as_str().unwrap();
            assert!(price.starts_with('$'));
            let (_, cents) = price.split_once('.').unwrap();
            assert_eq!(cents.len(), 2);
            let amount: f64 = price[1..].parse().unwrap();
            assert!((1.0..=1000.0).contains(&amount));
        }
    }

    #[test]
    fn test_sku_format() {
        let mut rng = SeededRandom::new(4);
        let s = sku(&mut rng);
        assert_eq!(s.len(), 9);
        assert!(s[..3].chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(&s[3..4], "-");
    }

    #[test]
    fn test_credit_card_format() {
        let mut rng = SeededRandom::new(4);
        let cc = credit_card(&mut rng);
        assert_eq!(cc.len(), 19);
        assert!(cc.starts_with('4'));
        assert_eq!(cc.split('-').count(), 4);
    }
}
