//! Deterministic perturbation and column augmentation for synthgen.
//!
//! Both engines run on records that already exist:
//!
//! ```text
//! records ──► apply_scenario (mix(seed, row, field, concern))
//!         ──► apply_custom_columns (SeededRandom(seed + 7919))
//!         ──► records
//! ```
//!
//! Neither engine can fail. Malformed input degrades to a safe value (`0`,
//! `null`, the unmodified value) instead of an error; only preset lookup
//! returns [`ScenarioError`].
//!
//! # Example
//!
//! ```rust
//! use synth_core::{FieldRule, Record, ScenarioConfig, Value};
//! use synth_scenario::apply_scenario;
//!
//! let records = vec![Record::new().with("status", "pending"); 3];
//! let scenario = ScenarioConfig::default().with_rule("status", FieldRule::fixed("Denied"));
//!
//! let out = apply_scenario(records, Some(&scenario), 42);
//! assert!(out.iter().all(|r| r.get("status") == Some(&Value::from("Denied"))));
//! ```

pub mod columns;
pub mod corrupt;
pub mod engine;
pub mod error;
pub mod formula;
pub mod mix;
pub mod presets;
pub mod rules;

// Re-exports for convenience
pub use columns::{apply_custom_columns, COLUMN_SEED_OFFSET};
pub use corrupt::ErrorKind;
pub use engine::{apply_scenario, apply_scenario_with_stats, ScenarioStats, PROTECTED_FIELDS};
pub use error::{FormulaError, ScenarioError};
pub use formula::{evaluate_formula, parse_expression, preview_formula, Expression};
pub use mix::{mix, Concern};
pub use presets::{preset, Preset, PRESETS};
