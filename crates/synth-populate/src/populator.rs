//! Record-set writers.

use crate::error::PopulatorError;
use csv::Writer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use synth_core::Record;
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// One JSON array of objects
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes finished record sets to files.
#[derive(Debug, Clone)]
pub struct Populator {
    format: OutputFormat,
    include_header: bool,
}

impl Populator {
    /// Create a populator for `format`.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            include_header: true,
        }
    }

    /// Set whether to include a header row in CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// `<dir>/<table>.<ext>`
    pub fn output_path(&self, dir: &Path, table: &str) -> PathBuf {
        dir.join(format!("{table}.{}", self.format.extension()))
    }

    /// Write `records` to `output_path`, replacing any existing file.
    pub fn populate<P: AsRef<Path>>(
        &self,
        records: &[Record],
        output_path: P,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();
        info!(
            "Writing {} rows to '{}' as {}",
            records.len(),
            output_path.display(),
            self.format
        );

        let file = File::create(output_path)?;
        let mut buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let rows_written = self.write_to(records, &mut buf_writer)?;
        buf_writer.flush()?;
        drop(buf_writer);

        let metrics = PopulateMetrics {
            rows_written,
            file_size_bytes: std::fs::metadata(output_path)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "Write complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        Ok(metrics)
    }

    /// Write `records` to any writer. Returns the number of rows written.
    pub fn write_to<W: Write>(&self, records: &[Record], writer: W) -> Result<u64, PopulatorError> {
        match self.format {
            OutputFormat::Csv => self.write_csv(records, writer),
            OutputFormat::Json => {
                let mut writer = writer;
                serde_json::to_writer_pretty(&mut writer, records)?;
                writer.write_all(b"\n")?;
                Ok(records.len() as u64)
            }
            OutputFormat::Jsonl => {
                let mut writer = writer;
                for record in records {
                    serde_json::to_writer(&mut writer, record)?;
                    writer.write_all(b"\n")?;
                }
                Ok(records.len() as u64)
            }
        }
    }

    fn write_csv<W: Write>(&self, records: &[Record], writer: W) -> Result<u64, PopulatorError> {
        let mut writer = Writer::from_writer(writer);
        let columns = column_names(records);

        if self.include_header && !columns.is_empty() {
            writer.write_record(&columns)?;
        }

        let mut rows_written = 0u64;
        for record in records {
            writer.write_record(record_to_csv(record, &columns))?;
            rows_written += 1;
            if rows_written % 1000 == 0 {
                debug!("Written {} rows", rows_written);
            }
        }
        writer.flush()?;
        Ok(rows_written)
    }
}

/// Column names in record order, taken from the first record.
fn column_names(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|r| r.keys().map(str::to_string).collect())
        .unwrap_or_default()
}

/// One CSV row. Null and missing values become empty cells.
fn record_to_csv(record: &Record, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|c| record.get(c).map(|v| v.to_display_string()).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::Value;
    use tempfile::TempDir;

    fn records() -> Vec<Record> {
        vec![
            Record::new()
                .with("id", 1)
                .with("name", "Ann, Jr.")
                .with("active", true)
                .with("score", 9.5),
            Record::new()
                .with("id", 2)
                .with("name", Value::Null)
                .with("active", false)
                .with("score", 7),
        ]
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };
        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(PopulateMetrics::default().rows_per_second(), 0.0);
    }

    #[test]
    fn test_csv_output() {
        let mut out = Vec::new();
        let rows = Populator::new(OutputFormat::Csv)
            .write_to(&records(), &mut out)
            .unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,name,active,score");
        assert_eq!(lines[1], "1,\"Ann, Jr.\",true,9.5");
        assert_eq!(lines[2], "2,,false,7");
    }

    #[test]
    fn test_csv_without_header() {
        let mut out = Vec::new();
        Populator::new(OutputFormat::Csv)
            .with_header(false)
            .write_to(&records(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        Populator::new(OutputFormat::Json)
            .write_to(&records(), &mut out)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Ann, Jr.");
        assert_eq!(rows[0]["score"], 9.5);
        assert!(rows[1]["name"].is_null());
        assert_eq!(rows[1]["active"], false);
    }

    #[test]
    fn test_jsonl_output_keeps_field_order() {
        let mut out = Vec::new();
        Populator::new(OutputFormat::Jsonl)
            .write_to(&records(), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            r#"{"id":2,"name":null,"active":false,"score":7}"#
        );
    }

    #[test]
    fn test_populate_file() {
        let temp_dir = TempDir::new().unwrap();
        let populator = Populator::new(OutputFormat::Csv);
        let path = populator.output_path(temp_dir.path(), "patients");
        assert!(path.ends_with("patients.csv"));

        let metrics = populator.populate(&records(), &path).unwrap();
        assert_eq!(metrics.rows_written, 2);
        assert!(metrics.file_size_bytes > 0);
        assert_eq!(
            metrics.file_size_bytes,
            std::fs::metadata(&path).unwrap().len()
        );
    }

    #[test]
    fn test_empty_record_set() {
        let mut out = Vec::new();
        let rows = Populator::new(OutputFormat::Csv)
            .write_to(&[], &mut out)
            .unwrap();
        assert_eq!(rows, 0);
        assert!(out.is_empty());
    }
}
