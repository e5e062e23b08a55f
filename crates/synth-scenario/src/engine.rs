//! Scenario engine: applies a [`ScenarioConfig`] to a generated record set.
//!
//! Stages run in a fixed order:
//!
//! 1. field rules
//! 2. global null rate
//! 3. error injection
//! 4. duplicate rows
//!
//! Each decision is a pure function of `(seed, row, field, concern)`, so the
//! same inputs always give the same output and unrelated settings never shift
//! each other's outcomes.

use crate::corrupt::corrupt_row;
use crate::mix::{mix_chance, mix_index, Concern};
use crate::rules::apply_rule;
use std::collections::HashSet;
use synth_core::{Record, ScenarioConfig, Value};
use tracing::debug;

/// Fields the global null rate never touches.
pub const PROTECTED_FIELDS: &[&str] = &["id", "mrn", "npi", "claimNumber", "rxNumber", "labOrderId"];

/// Counts of what a scenario run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioStats {
    /// Cells visited by an enabled field rule
    pub rule_cells: usize,
    /// Cells nulled by the global null rate
    pub nulls_injected: usize,
    /// Rows that received an injected error
    pub errors_injected: usize,
    /// Duplicate rows spliced in before trimming
    pub duplicates_inserted: usize,
}

/// Apply `scenario` to `records`. `None` returns the records unchanged.
pub fn apply_scenario(records: Vec<Record>, scenario: Option<&ScenarioConfig>, seed: u32) -> Vec<Record> {
    apply_scenario_with_stats(records, scenario, seed).0
}

/// Like [`apply_scenario`], also reporting what changed.
pub fn apply_scenario_with_stats(
    mut records: Vec<Record>,
    scenario: Option<&ScenarioConfig>,
    seed: u32,
) -> (Vec<Record>, ScenarioStats) {
    let mut stats = ScenarioStats::default();
    let Some(scenario) = scenario else {
        return (records, stats);
    };

    let governed = apply_field_rules(&mut records, scenario, seed, &mut stats);

    if let Some(rate) = active_rate(scenario.null_rate) {
        stats.nulls_injected = apply_null_rate(&mut records, rate, &governed, seed);
    }

    if let Some(rate) = active_rate(scenario.error_rate) {
        for (row, record) in records.iter_mut().enumerate() {
            if corrupt_row(record, row, rate, seed).is_some() {
                stats.errors_injected += 1;
            }
        }
    }

    if let Some(rate) = active_rate(scenario.duplicate_rate) {
        stats.duplicates_inserted = apply_duplicates(&mut records, rate, seed);
    }

    debug!(
        "Scenario applied to {} rows: {} rule cells, {} nulls, {} errors, {} duplicates",
        records.len(),
        stats.rule_cells,
        stats.nulls_injected,
        stats.errors_injected,
        stats.duplicates_inserted
    );
    (records, stats)
}

/// Rates at or below zero are inactive; rates above 100 act as 100.
fn active_rate(rate: Option<f64>) -> Option<f64> {
    rate.filter(|r| *r > 0.0).map(|r| r.min(100.0))
}

/// Apply every enabled rule. Returns the names of governed fields.
fn apply_field_rules(
    records: &mut [Record],
    scenario: &ScenarioConfig,
    seed: u32,
    stats: &mut ScenarioStats,
) -> HashSet<String> {
    let mut governed = HashSet::new();

    for (field, rule) in scenario.field_rules.iter().filter(|(_, r)| r.enabled) {
        governed.insert(field.clone());
        let mut hits = 0;
        for (row, record) in records.iter_mut().enumerate() {
            if apply_rule(record, row, field, rule, seed) {
                hits += 1;
            }
        }
        if hits == 0 && !records.is_empty() {
            debug!("Scenario rule for '{field}' matched no field; skipping");
        }
        stats.rule_cells += hits;
    }
    governed
}

/// Null each unprotected, ungoverned cell whose draw falls under `rate`.
fn apply_null_rate(records: &mut [Record], rate: f64, governed: &HashSet<String>, seed: u32) -> usize {
    let mut nulled = 0;
    for (row, record) in records.iter_mut().enumerate() {
        let targets: Vec<String> = record
            .keys()
            .filter(|k| !PROTECTED_FIELDS.contains(k) && !governed.contains(*k))
            .filter(|k| mix_chance(seed, row, k, Concern::GlobalNull, rate))
            .map(str::to_string)
            .collect();
        for field in targets {
            record.set(&field, Value::Null);
            nulled += 1;
        }
    }
    nulled
}

/// Splice `floor(len * rate / 100)` copies of existing rows in at
/// deterministic positions, then trim back to the original length.
///
/// Trimming drops rows from the tail, which may include original rows that
/// were never duplicated.
fn apply_duplicates(records: &mut Vec<Record>, rate: f64, seed: u32) -> usize {
    let original_len = records.len();
    if original_len == 0 {
        return 0;
    }
    let dupe_count = (original_len as f64 * rate / 100.0).floor() as usize;

    records.reserve(dupe_count);
    for i in 0..dupe_count {
        let len = records.len();
        let source = mix_index(seed, i, "", Concern::DuplicateSource, len);
        let target = mix_index(seed, i, "", Concern::DuplicateTarget, len + 1);
        let copy = records[source].clone();
        records.insert(target, copy);
    }
    records.truncate(original_len);
    dupe_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::FieldRule;

    fn sample(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| {
                Record::new()
                    .with("id", i as i64)
                    .with("name", format!("person-{i}"))
                    .with("age", 30 + (i as i64 % 40))
                    .with("mrn", format!("MRN{i:08}"))
                    .with("status", "pending")
            })
            .collect()
    }

    #[test]
    fn test_none_is_identity() {
        let records = sample(5);
        assert_eq!(apply_scenario(records.clone(), None, 42), records);
    }

    #[test]
    fn test_fixed_value_example() {
        let records = vec![Record::new().with("status", "pending"); 3];
        let scenario = ScenarioConfig::default().with_rule("status", FieldRule::fixed("Denied"));
        let out = apply_scenario(records, Some(&scenario), 42);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|r| r.get("status") == Some(&Value::from("Denied"))));
    }

    #[test]
    fn test_disabled_rule_is_ignored() {
        let rule = FieldRule {
            enabled: false,
            ..FieldRule::fixed("Denied")
        };
        let scenario = ScenarioConfig::default().with_rule("status", rule);
        let out = apply_scenario(sample(4), Some(&scenario), 1);
        assert!(out.iter().all(|r| r.get("status") == Some(&Value::from("pending"))));
    }

    #[test]
    fn test_deterministic() {
        let scenario = ScenarioConfig::default()
            .with_null_rate(15.0)
            .with_error_rate(20.0)
            .with_duplicate_rate(10.0)
            .with_rule("age", FieldRule::range(18.0, 25.0));
        let a = apply_scenario(sample(50), Some(&scenario), 42);
        let b = apply_scenario(sample(50), Some(&scenario), 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_null_rate_spares_protected_fields() {
        let scenario = ScenarioConfig::default().with_null_rate(100.0);
        let out = apply_scenario(sample(20), Some(&scenario), 7);
        for record in &out {
            assert!(!record.get("id").unwrap().is_null());
            assert!(!record.get("mrn").unwrap().is_null());
            assert!(record.get("name").unwrap().is_null());
            assert!(record.get("status").unwrap().is_null());
        }
    }

    #[test]
    fn test_zero_null_rate_is_noop() {
        let scenario = ScenarioConfig::default().with_null_rate(0.0);
        assert_eq!(apply_scenario(sample(20), Some(&scenario), 7), sample(20));
    }

    #[test]
    fn test_null_rate_skips_governed_fields() {
        let scenario = ScenarioConfig::default()
            .with_null_rate(100.0)
            .with_rule("status", FieldRule::fixed("Denied"));
        let out = apply_scenario(sample(10), Some(&scenario), 7);
        assert!(out.iter().all(|r| r.get("status") == Some(&Value::from("Denied"))));
    }

    #[test]
    fn test_duplicates_preserve_length() {
        for rate in [0.0, 1.0, 10.0, 33.0, 50.0, 99.0, 100.0] {
            let scenario = ScenarioConfig::default().with_duplicate_rate(rate);
            let out = apply_scenario(sample(37), Some(&scenario), 3);
            assert_eq!(out.len(), 37, "rate {rate}");
        }
    }

    #[test]
    fn test_duplicates_come_from_existing_rows() {
        let scenario = ScenarioConfig::default().with_duplicate_rate(50.0);
        let original = sample(20);
        let (out, stats) = apply_scenario_with_stats(original.clone(), Some(&scenario), 3);
        assert_eq!(stats.duplicates_inserted, 10);
        assert!(out.iter().all(|r| original.contains(r)));
    }

    #[test]
    fn test_full_error_rate_touches_one_field_per_row() {
        let scenario = ScenarioConfig::default().with_error_rate(100.0);
        let original = sample(30);
        let (out, stats) = apply_scenario_with_stats(original.clone(), Some(&scenario), 11);
        assert_eq!(stats.errors_injected, 30);

        for (before, after) in original.iter().zip(&out) {
            assert_eq!(before.get("id"), after.get("id"));
            let changed = before
                .iter()
                .zip(after.iter())
                .filter(|((_, a), (_, b))| a != b)
                .count();
            assert!(changed <= 1);
        }
    }

    #[test]
    fn test_rule_outcomes_independent_of_other_settings() {
        let rule = FieldRule::one_of(["A", "B", "C"]);
        let plain = ScenarioConfig::default().with_rule("status", rule.clone());
        let noisy = ScenarioConfig::default()
            .with_rule("status", rule)
            .with_rule("name", FieldRule::fixed("x"));

        let a = apply_scenario(sample(25), Some(&plain), 5);
        let b = apply_scenario(sample(25), Some(&noisy), 5);
        for (ra, rb) in a.iter().zip(&b) {
            assert_eq!(ra.get("status"), rb.get("status"));
        }
    }

    #[test]
    fn test_empty_records() {
        let scenario = ScenarioConfig::default()
            .with_duplicate_rate(50.0)
            .with_error_rate(50.0);
        assert!(apply_scenario(Vec::new(), Some(&scenario), 1).is_empty());
    }

    #[test]
    fn test_rule_for_absent_field_is_noop() {
        let scenario = ScenarioConfig::default().with_rule("claimStatus", FieldRule::fixed("Denied"));
        let (out, stats) = apply_scenario_with_stats(sample(4), Some(&scenario), 42);
        assert_eq!(out, sample(4));
        assert_eq!(stats, ScenarioStats::default());
    }
}
