//! Health-domain generators.
//!
//! Vital-sign types return pre-formatted strings with embedded units
//! (`120/80 mmHg`, `98%`), not raw numbers. Consumers that need numbers must
//! parse them back out.

use super::business::money;
use super::data::{
    ALLERGIES, BLOOD_TYPES, CLAIM_STATUSES, CPT_CODES, DOSAGE_AMOUNTS, DOSAGE_FREQUENCIES,
    FIRST_NAMES, ICD10, INSURANCE_PROVIDERS, LAB_TESTS, LAST_NAMES, MEDICATIONS,
};
use super::{digits, pick_str};
use synth_core::{FieldType, RandomSource, Value};

/// Generate a health-category value. Other types yield null.
pub fn generate<R: RandomSource>(field_type: FieldType, rng: &mut R) -> Value {
    let text = match field_type {
        FieldType::Mrn => format!("MRN{}", digits(rng, 8)),
        FieldType::Npi => format!("{}{}", rng.next_int(1, 2), digits(rng, 9)),
        FieldType::Icd10Code => icd10(rng).0.to_string(),
        FieldType::Diagnosis => icd10(rng).1.to_string(),
        FieldType::Medication => pick_str(rng, MEDICATIONS).to_string(),
        FieldType::Dosage => dosage(rng),
        FieldType::BloodType => pick_str(rng, BLOOD_TYPES).to_string(),
        FieldType::BloodPressure => {
            let systolic = rng.next_int(90, 180);
            let diastolic = rng.next_int(60, 120);
            format!("{systolic}/{diastolic} mmHg")
        }
        FieldType::HeartRate => format!("{} bpm", rng.next_int(55, 110)),
        FieldType::Temperature => format!("{:.1} °F", rng.next_range(97.0, 101.0)),
        FieldType::Spo2 => format!("{}%", rng.next_int(90, 100)),
        FieldType::Bmi => format!("{:.1} kg/m²", rng.next_range(18.5, 40.0)),
        FieldType::Height => format!("{} cm", rng.next_int(150, 200)),
        FieldType::Weight => format!("{} kg", rng.next_int(45, 130)),
        FieldType::Allergy => pick_str(rng, ALLERGIES).to_string(),
        FieldType::InsuranceProvider => pick_str(rng, INSURANCE_PROVIDERS).to_string(),
        FieldType::ClaimNumber => format!("CLM-{}", digits(rng, 10)),
        FieldType::ClaimStatus => pick_str(rng, CLAIM_STATUSES).to_string(),
        FieldType::ClaimAmount => money(rng, 50.0, 25_000.0),
        FieldType::RxNumber => format!("RX{}", digits(rng, 7)),
        FieldType::LabOrderId => format!("LAB-{}", digits(rng, 8)),
        FieldType::LabTest => pick_str(rng, LAB_TESTS).to_string(),
        FieldType::CptCode => pick_str(rng, CPT_CODES).to_string(),
        FieldType::Provider => {
            let first = pick_str(rng, FIRST_NAMES);
            let last = pick_str(rng, LAST_NAMES);
            format!("Dr. {first} {last}")
        }
        _ => return Value::Null,
    };
    Value::String(text)
}

fn icd10<R: RandomSource>(rng: &mut R) -> (&'static str, &'static str) {
    rng.pick(ICD10).copied().unwrap_or(("R69", "Illness, unspecified"))
}

/// `500 mg twice daily`.
pub fn dosage<R: RandomSource>(rng: &mut R) -> String {
    let amount = rng.pick(DOSAGE_AMOUNTS).copied().unwrap_or(10);
    let frequency = pick_str(rng, DOSAGE_FREQUENCIES);
    format!("{amount} mg {frequency}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::SeededRandom;

    fn text_of(field_type: FieldType, rng: &mut SeededRandom) -> String {
        generate(field_type, rng).as_str().unwrap().to_string()
    }

    #[test]
    fn test_vitals_carry_units() {
        let mut rng = SeededRandom::new(42);
        assert!(text_of(FieldType::BloodPressure, &mut rng).ends_with(" mmHg"));
        assert!(text_of(FieldType::HeartRate, &mut rng).ends_with(" bpm"));
        assert!(text_of(FieldType::Spo2, &mut rng).ends_with('%'));
        assert!(text_of(FieldType::Bmi, &mut rng).ends_with(" kg/m²"));
        assert!(text_of(FieldType::Temperature, &mut rng).ends_with(" °F"));
    }

    #[test]
    fn test_vitals_are_not_numbers() {
        let mut rng = SeededRandom::new(42);
        assert_eq!(generate(FieldType::Spo2, &mut rng).parse_numeric(), None);
    }

    #[test]
    fn test_identifier_shapes() {
        let mut rng = SeededRandom::new(7);
        let mrn = text_of(FieldType::Mrn, &mut rng);
        assert!(mrn.starts_with("MRN"));
        assert_eq!(mrn.len(), 11);

        let npi = text_of(FieldType::Npi, &mut rng);
        assert_eq!(npi.len(), 10);
        assert!(npi.starts_with('1') || npi.starts_with('2'));

        assert!(text_of(FieldType::ClaimNumber, &mut rng).starts_with("CLM-"));
        assert!(text_of(FieldType::RxNumber, &mut rng).starts_with("RX"));
        assert!(text_of(FieldType::LabOrderId, &mut rng).starts_with("LAB-"));
        assert!(text_of(FieldType::ClaimAmount, &mut rng).starts_with('$'));
    }

    #[test]
    fn test_diagnosis_comes_from_icd10_table() {
        let mut rng = SeededRandom::new(3);
        let diagnosis = text_of(FieldType::Diagnosis, &mut rng);
        assert!(ICD10.iter().any(|(_, d)| *d == diagnosis));
        let code = text_of(FieldType::Icd10Code, &mut rng);
        assert!(ICD10.iter().any(|(c, _)| *c == code));
    }

    #[test]
    fn test_provider_prefix() {
        let mut rng = SeededRandom::new(3);
        assert!(text_of(FieldType::Provider, &mut rng).starts_with("Dr. "));
    }
}
