//! synthgen library
//!
//! A deterministic synthetic-record generator: schema-driven rows, a seeded
//! perturbation engine that injects nulls, malformed values, duplicates and
//! per-field overrides, and computed custom columns.
//!
//! # Crates
//!
//! - `synth_core` - data model, schema loading, random sources
//! - `synth_generator` - value catalogue, pattern/template expanders, row generator
//! - `synth_scenario` - scenario engine, presets, custom columns, formulas
//! - `synth_populate` - CSV / JSON / JSON Lines writers
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate every table as JSON
//! synthgen generate --schema schema.yaml --row-count 500 --output-dir out
//!
//! # Dirty CSV data, reproducible end to end
//! synthgen generate --schema schema.yaml --preset dirty --format csv --reproducible
//!
//! # One value
//! synthgen value bloodPressure
//! ```

pub mod pipeline;

pub use pipeline::{
    load_columns, load_scenario, run_table, run_tables, select_tables, PipelineOptions, TableRun,
    DEFAULT_ROW_COUNT,
};

// Re-export workspace crates for convenience
pub use synth_core as core;
pub use synth_generator as generator;
pub use synth_populate as populate;
pub use synth_scenario as scenario;
