//! Output writers for synthgen record sets.
//!
//! This crate writes finished records (after generation, scenario and custom
//! columns) to CSV, JSON or JSON Lines files, and carries the CLI argument
//! structs shared by the synthgen commands.
//!
//! # Example
//!
//! ```ignore
//! use synth_populate::{OutputFormat, Populator};
//!
//! let populator = Populator::new(OutputFormat::Csv);
//! let path = populator.output_path(Path::new("out"), "patients");
//! let metrics = populator.populate(&records, &path)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CommonPopulateArgs, OutputArgs};
pub use error::PopulatorError;
pub use populator::{OutputFormat, PopulateMetrics, Populator, DEFAULT_BUFFER_SIZE};
