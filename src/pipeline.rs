//! Per-table pipeline: generate, perturb, augment.
//!
//! ```text
//! schema table ──► DataGenerator ──► apply_scenario ──► apply_custom_columns ──► records
//! ```
//!
//! Each table run builds its own random sources from the seed, so tables can
//! run concurrently without sharing state.

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use synth_core::{load_custom_columns, CustomColumn, Record, ScenarioConfig, Schema};
use synth_generator::{DataGenerator, Determinism, DEFAULT_SEED};
use synth_scenario::{apply_custom_columns, apply_scenario_with_stats, preset};
use tracing::{debug, info};

/// Rows per table when neither the CLI nor the schema gives a count.
pub const DEFAULT_ROW_COUNT: usize = 100;

/// Everything a table run needs besides the schema.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Rows per table; `None` falls back to the table's `rows`, then
    /// [`DEFAULT_ROW_COUNT`]
    pub row_count: Option<usize>,
    /// Seed; `None` falls back to the schema's `seed`, then [`DEFAULT_SEED`]
    pub seed: Option<u32>,
    pub determinism: Determinism,
    pub scenario: Option<ScenarioConfig>,
    pub columns: Vec<CustomColumn>,
}

impl PipelineOptions {
    /// Effective seed for `schema`.
    pub fn seed_for(&self, schema: &Schema) -> u32 {
        self.seed.or(schema.seed).unwrap_or(DEFAULT_SEED)
    }
}

/// Records produced for one table.
#[derive(Debug, Clone)]
pub struct TableRun {
    pub table: String,
    pub seed: u32,
    pub records: Vec<Record>,
}

/// Run the pipeline for one table.
pub fn run_table(schema: &Schema, table: &str, options: &PipelineOptions) -> anyhow::Result<TableRun> {
    let table_def = schema
        .get_table(table)
        .with_context(|| format!("Table '{table}' not found in schema"))?;
    let seed = options.seed_for(schema);
    let row_count = options
        .row_count
        .or(table_def.rows)
        .unwrap_or(DEFAULT_ROW_COUNT);

    let mut generator = DataGenerator::for_table(schema, table, seed, options.determinism)?;
    let records = generator.generate(row_count);
    debug!("Generated {} rows for '{table}'", records.len());

    let (records, stats) = apply_scenario_with_stats(records, options.scenario.as_ref(), seed);
    if options.scenario.is_some() {
        info!(
            "Scenario on '{}': {} nulls, {} errors, {} duplicates",
            table, stats.nulls_injected, stats.errors_injected, stats.duplicates_inserted
        );
    }

    let records = apply_custom_columns(records, &options.columns, seed);

    Ok(TableRun {
        table: table.to_string(),
        seed,
        records,
    })
}

/// Run the pipeline for several tables concurrently on blocking tasks.
///
/// Results come back in the order of `tables`.
pub async fn run_tables(
    schema: Arc<Schema>,
    tables: Vec<String>,
    options: Arc<PipelineOptions>,
) -> anyhow::Result<Vec<TableRun>> {
    let handles: Vec<_> = tables
        .into_iter()
        .map(|table| {
            let schema = Arc::clone(&schema);
            let options = Arc::clone(&options);
            tokio::task::spawn_blocking(move || run_table(&schema, &table, &options))
        })
        .collect();

    let mut runs = Vec::with_capacity(handles.len());
    for handle in handles {
        runs.push(handle.await.context("Table task panicked")??);
    }
    Ok(runs)
}

/// Tables to run: the requested ones, or every table in the schema.
pub fn select_tables(schema: &Schema, requested: &[String]) -> anyhow::Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(schema.table_names().into_iter().map(str::to_string).collect());
    }
    for name in requested {
        if schema.get_table(name).is_none() {
            anyhow::bail!(
                "Table '{name}' not found in schema (available: {})",
                schema.table_names().join(", ")
            );
        }
    }
    Ok(requested.to_vec())
}

/// Resolve the scenario from a file or a preset name (at most one is given).
pub fn load_scenario(path: Option<&Path>, preset_name: Option<&str>) -> anyhow::Result<Option<ScenarioConfig>> {
    match (path, preset_name) {
        (Some(path), _) => ScenarioConfig::from_file(path)
            .map(Some)
            .with_context(|| format!("Failed to load scenario from {path:?}")),
        (None, Some(name)) => Ok(Some(preset(name)?)),
        (None, None) => Ok(None),
    }
}

/// Load custom columns from a YAML file, if one is given.
pub fn load_columns(path: Option<&Path>) -> anyhow::Result<Vec<CustomColumn>> {
    match path {
        Some(path) => load_custom_columns(path)
            .with_context(|| format!("Failed to load custom columns from {path:?}")),
        None => Ok(Vec::new()),
    }
}
