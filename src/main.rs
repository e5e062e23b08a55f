//! Command-line interface for synthgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # All tables, JSON, 500 rows each
//! synthgen generate --schema schema.yaml --row-count 500 -o out
//!
//! # Claims only, CSV, with a scenario file and custom columns
//! synthgen generate --schema schema.yaml --tables claims --format csv \
//!   --scenario scenario.yaml --columns columns.yaml
//!
//! # Built-in preset, fully reproducible
//! SYNTHGEN_SEED=7 synthgen generate --schema schema.yaml --preset dirty --reproducible
//! ```
//!
//! ## Single values
//! ```bash
//! synthgen value email
//! synthgen value pattern --pattern "[A-Z]{3}-[0-9]{4}" --count 5 --seed 42
//! synthgen value template --template "ORDER-{{integer}}"
//! ```
//!
//! ## Presets
//! ```bash
//! synthgen presets
//! synthgen presets elderly-cohort > scenario.yaml
//! ```
//!
//! ## Formulas
//! ```bash
//! synthgen formula "{price} * {qty}" --set price=9.99 --set qty=3
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use synth_core::{FieldConfig, FieldType, RandomSource, Record, Schema, SeededRandom, Value};
use synth_generator::{generate_value_with, Determinism};
use synth_populate::{CommonPopulateArgs, OutputArgs, Populator};
use synth_scenario::{preset, preview_formula, PRESETS};
use synthgen::{load_columns, load_scenario, run_tables, select_tables, PipelineOptions};

#[derive(Parser)]
#[command(name = "synthgen")]
#[command(about = "Deterministic synthetic record generator")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate record sets for schema tables and write them to files
    Generate {
        #[command(flatten)]
        common: CommonPopulateArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Scenario YAML file to apply after generation
        #[arg(long, conflicts_with = "preset")]
        scenario: Option<PathBuf>,

        /// Built-in scenario preset (see `synthgen presets`)
        #[arg(long)]
        preset: Option<String>,

        /// Custom column YAML file to append after the scenario
        #[arg(long)]
        columns: Option<PathBuf>,
    },

    /// Print generated values of one field type
    Value {
        /// Field type name, e.g. `email`, `bloodPressure`, `pattern`
        field_type: String,

        /// Comma-separated pool for `list`
        #[arg(long)]
        list_values: Option<String>,

        /// Character-class pattern for `pattern`
        #[arg(long)]
        pattern: Option<String>,

        /// Token template for `template`
        #[arg(long)]
        template: Option<String>,

        /// Number of values to print
        #[arg(long, short = 'n', default_value = "1")]
        count: usize,

        /// Draw from a seeded stream instead of a fresh one
        #[arg(long, env = "SYNTHGEN_SEED")]
        seed: Option<u32>,
    },

    /// List the built-in scenario presets, or print one as scenario YAML
    Presets {
        /// Preset to print
        name: Option<String>,
    },

    /// Evaluate a custom-column formula against literal field values
    Formula {
        /// Expression with `{field}` tokens
        expression: String,

        /// Field values as `name=value` (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        values: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            common,
            output,
            scenario,
            preset,
            columns,
        } => run_generate(common, output, scenario, preset, columns).await,
        Commands::Value {
            field_type,
            list_values,
            pattern,
            template,
            count,
            seed,
        } => {
            let field_type: FieldType = field_type.parse()?;
            let config = FieldConfig {
                list_values,
                regex_pattern: pattern,
                template,
            };
            let values = match seed {
                Some(seed) => draw_values(field_type, &config, count, &mut SeededRandom::new(seed)),
                None => draw_values(field_type, &config, count, &mut synth_core::EntropyRandom::new()),
            };
            for value in values {
                println!("{}", serde_json::to_string(&value)?);
            }
            Ok(())
        }
        Commands::Presets { name: None } => {
            for preset in PRESETS {
                println!("{:<16} {}", preset.name, preset.description);
            }
            Ok(())
        }
        Commands::Presets { name: Some(name) } => {
            let config = preset(&name)?;
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
        Commands::Formula { expression, values } => {
            let record = parse_assignments(&values)?;
            println!("{}", preview_formula(&expression, &record));
            Ok(())
        }
    }
}

async fn run_generate(
    common: CommonPopulateArgs,
    output: OutputArgs,
    scenario: Option<PathBuf>,
    preset: Option<String>,
    columns: Option<PathBuf>,
) -> anyhow::Result<()> {
    let schema = Schema::from_file(&common.schema)
        .with_context(|| format!("Failed to load schema from {:?}", common.schema))?;

    let options = PipelineOptions {
        row_count: common.row_count,
        seed: common.seed,
        determinism: if common.reproducible {
            Determinism::Reproducible
        } else {
            Determinism::Fresh
        },
        scenario: load_scenario(scenario.as_deref(), preset.as_deref())?,
        columns: load_columns(columns.as_deref())?,
    };
    let tables = select_tables(&schema, &common.tables)?;

    tracing::info!(
        "Generating {} table(s) as {} (seed={}, {:?})",
        tables.len(),
        output.format,
        options.seed_for(&schema),
        options.determinism
    );

    if common.dry_run {
        tracing::info!("Dry run: schema and overlays are valid; nothing written");
        return Ok(());
    }

    std::fs::create_dir_all(&output.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", output.output_dir))?;

    let runs = run_tables(Arc::new(schema), tables, Arc::new(options)).await?;

    let populator = Populator::new(output.format).with_header(!output.no_header);
    for run in &runs {
        let output_path = populator.output_path(&output.output_dir, &run.table);
        let metrics = populator
            .populate(&run.records, &output_path)
            .with_context(|| format!("Failed to write '{}'", run.table))?;

        tracing::info!(
            "Generated {:?}: {} rows in {:?}",
            output_path,
            metrics.rows_written,
            metrics.total_duration
        );
    }
    Ok(())
}

fn draw_values<R: RandomSource>(
    field_type: FieldType,
    config: &FieldConfig,
    count: usize,
    rng: &mut R,
) -> Vec<Value> {
    (0..count)
        .map(|_| generate_value_with(field_type, Some(config), rng))
        .collect()
}

/// Parse `name=value` pairs into a record. Numeric values stay numeric.
fn parse_assignments(values: &[String]) -> anyhow::Result<Record> {
    let mut record = Record::new();
    for pair in values {
        let (name, raw) = pair
            .split_once('=')
            .with_context(|| format!("Expected NAME=VALUE, got '{pair}'"))?;
        let value = match raw.trim().parse::<f64>() {
            Ok(n) => Value::number(n),
            Err(_) => Value::from(raw),
        };
        record.insert(name.trim(), value);
    }
    Ok(record)
}
