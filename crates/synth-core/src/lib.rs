//! Core types for the synthgen synthetic record generator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`FieldType`] - Closed catalogue of semantic column kinds
//! - [`Field`] / [`Schema`] - Schema definitions loaded from YAML
//! - [`Value`] / [`Record`] - Scalar values and ordered rows
//! - [`ScenarioConfig`] / [`CustomColumn`] - Overlays applied after generation
//! - [`RandomSource`] / [`SeededRandom`] - Threaded random sources
//!
//! # Architecture
//!
//! ```text
//! synth-core (this crate)
//!    │
//!    ├─── synth-generator   (value catalogue, DSL expanders, row generator)
//!    │
//!    ├─── synth-scenario    (perturbation engine, custom columns)
//!    │
//!    └─── synth-populate    (CSV / JSON / JSONL writers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use synth_core::{RandomSource, SeededRandom};
//!
//! let mut a = SeededRandom::new(42);
//! let mut b = SeededRandom::new(42);
//! assert_eq!(a.next_int(1, 6), b.next_int(1, 6));
//! ```

pub mod random;
pub mod scenario;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use random::{EntropyRandom, RandomSource, SeededRandom};
pub use scenario::{load_custom_columns, CustomColumn, CustomColumnType, FieldRule, ScenarioConfig};
pub use schema::{Field, FieldConfig, Schema, SchemaError, TableDefinition};
pub use types::{FieldCategory, FieldType, UnknownFieldType};
pub use values::{Record, Value};

/// Upper bound on rows generated per call.
pub const MAX_ROWS: usize = 10_000;
