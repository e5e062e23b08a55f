//! Value catalogue and row generator for synthgen.
//!
//! This crate turns a field list (usually one table of a YAML schema) into
//! records. Every value is drawn from a [`RandomSource`](synth_core::RandomSource):
//! custom kinds (`list`, `pattern`, `template`) always use a Park–Miller stream
//! seeded by the generator seed, while built-in types use an OS-seeded source
//! unless the generator runs in [`Determinism::Reproducible`] mode.
//!
//! # Architecture
//!
//! ```text
//! Schema (YAML) ──► TableDefinition.fields
//!                          │
//!                          ▼
//!                 ┌─────────────────┐
//!                 │  DataGenerator  │
//!                 │                 │
//!                 │  - custom_rng   │  SeededRandom(seed)
//!                 │  - builtin_rng  │  entropy | SeededRandom(derived)
//!                 │  - index        │
//!                 └────────┬────────┘
//!                          │
//!                          ▼
//!               Record { field name -> Value }
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{Field, FieldConfig, FieldType};
//! use synth_generator::generate_rows_seeded;
//!
//! let fields = vec![
//!     Field::new("id", FieldType::Uuid),
//!     Field::new("code", FieldType::Pattern)
//!         .with_config(FieldConfig::pattern("[A-Z]{3}-[0-9]{4}")),
//! ];
//!
//! let records = generate_rows_seeded(&fields, 10, 42);
//! assert_eq!(records.len(), 10);
//! ```
//!
//! # Custom kinds
//!
//! - `list` - uniform pick from `list_values` (comma separated)
//! - `pattern` - character-class pattern such as `[A-Z]{3}-[0-9]{4}`
//! - `template` - text with `{{fieldType}}` tokens such as `ORDER-{{integer}}`

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{
    clamp_row_count, derive_seed, generate_rows, generate_rows_seeded, DataGenerator,
    Determinism, GeneratorError, RecordIterator, DEFAULT_SEED,
};
pub use generators::pattern::expand_pattern;
pub use generators::template::expand_template;
pub use generators::temporal::{format_date, parse_date, random_date_between};
pub use generators::{generate_value, generate_value_by_name, generate_value_with};
