//! CLI argument definitions shared by the synthgen commands.

use crate::populator::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Arguments that select what to generate.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Number of rows to generate per table (capped at 10000). Defaults to the
    /// table's `rows`, then 100.
    #[arg(long, env = "SYNTHGEN_ROW_COUNT")]
    pub row_count: Option<usize>,

    /// Seed for the seeded streams (same seed = same overlays). Defaults to the
    /// schema's `seed`, then 42.
    #[arg(long, env = "SYNTHGEN_SEED")]
    pub seed: Option<u32>,

    /// Specific tables to generate (comma-separated, empty = all tables from schema)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,

    /// Draw built-in field types from the seed too, making whole runs reproducible
    #[arg(long)]
    pub reproducible: bool,

    /// Dry-run mode: validate schema and overlays without writing files
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments that control where and how records are written.
#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Output directory (one file per table)
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Omit the CSV header row
    #[arg(long)]
    pub no_header: bool,
}
