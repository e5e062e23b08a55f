//! Overlay configuration: scenarios and custom columns.
//!
//! A [`ScenarioConfig`] perturbs an already-generated record set. It matches
//! fields by **name**, independent of the schema that produced the records, so
//! rules for fields a record set does not have simply do nothing.
//!
//! A [`CustomColumn`] adds a new computed column to an existing record set and
//! carries all of its own generation parameters.

use crate::schema::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn default_true() -> bool {
    true
}

/// Per-field perturbation rule.
///
/// At most one of `fixed_value`, `custom_values`, `min_value`/`max_value` and
/// `date_start`/`date_end` takes effect, in that precedence order.
/// `null_percent` is checked independently afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Whether the rule is active
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Replace every value with this string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<String>,

    /// Replace every value with a deterministic pick from this pool
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_values: Vec<String>,

    /// Lower bound for numeric remapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,

    /// Upper bound for numeric remapping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,

    /// Start of the date range (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,

    /// End of the date range (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,

    /// Percentage (0-100) of rows where this field becomes null
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_percent: Option<f64>,
}

impl FieldRule {
    /// An enabled rule with nothing set.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// An enabled rule that pins the field to one value.
    pub fn fixed(value: impl Into<String>) -> Self {
        Self {
            fixed_value: Some(value.into()),
            ..Self::enabled()
        }
    }

    /// An enabled rule that picks from a pool.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            custom_values: values.into_iter().map(Into::into).collect(),
            ..Self::enabled()
        }
    }

    /// An enabled rule that remaps numbers into `[min, max]`.
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min_value: Some(min),
            max_value: Some(max),
            ..Self::enabled()
        }
    }

    /// An enabled rule that remaps dates into `[start, end]`.
    pub fn date_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            date_start: Some(start.into()),
            date_end: Some(end.into()),
            ..Self::enabled()
        }
    }

    /// Set the per-field null percentage.
    pub fn with_null_percent(mut self, percent: f64) -> Self {
        self.null_percent = Some(percent);
        self
    }
}

/// Declarative perturbation overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Rules keyed by field name
    #[serde(default)]
    pub field_rules: BTreeMap<String, FieldRule>,

    /// Percentage (0-100) of non-protected, unruled values to null out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_rate: Option<f64>,

    /// Percentage (0-100) of the row count to duplicate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_rate: Option<f64>,

    /// Percentage (0-100) of rows that get one corrupted field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_rate: Option<f64>,
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Add or replace a field rule.
    pub fn with_rule(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.field_rules.insert(field.into(), rule);
        self
    }

    /// Set the global null rate.
    pub fn with_null_rate(mut self, rate: f64) -> Self {
        self.null_rate = Some(rate);
        self
    }

    /// Set the duplicate rate.
    pub fn with_duplicate_rate(mut self, rate: f64) -> Self {
        self.duplicate_rate = Some(rate);
        self
    }

    /// Set the error rate.
    pub fn with_error_rate(mut self, rate: f64) -> Self {
        self.error_rate = Some(rate);
        self
    }
}

/// Kind of a custom column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomColumnType {
    /// Uniform pick from `text_pool`
    #[default]
    Text,
    /// Integer or decimal in `[min_value, max_value]`
    Number,
    /// `true` with probability `true_percent`
    Boolean,
    /// Date in `[date_start, date_end]`
    Date,
    /// Uniform pick from `options`
    Select,
    /// Arithmetic over other columns of the same row
    Formula,
}

/// Self-contained definition of an added column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomColumn {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: CustomColumnType,
    pub enabled: bool,
    pub options: Vec<String>,
    pub text_pool: Vec<String>,
    pub min_value: f64,
    pub max_value: f64,
    pub decimals: u32,
    pub true_percent: f64,
    pub date_start: String,
    pub date_end: String,
    /// Expression with `{fieldName}` tokens, e.g. `{price} * {qty}`
    pub formula: String,
    pub prefix: String,
    pub suffix: String,
    pub null_percent: f64,
}

impl Default for CustomColumn {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            column_type: CustomColumnType::Text,
            enabled: true,
            options: Vec::new(),
            text_pool: Vec::new(),
            min_value: 0.0,
            max_value: 100.0,
            decimals: 0,
            true_percent: 50.0,
            date_start: "2020-01-01".to_string(),
            date_end: "2024-12-31".to_string(),
            formula: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            null_percent: 0.0,
        }
    }
}

impl CustomColumn {
    /// Create an enabled column of the given kind with default parameters.
    pub fn new(name: impl Into<String>, column_type: CustomColumnType) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            column_type,
            ..Self::default()
        }
    }

    /// Parse a list of custom columns from a YAML string.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Load a list of custom columns from a YAML file.
pub fn load_custom_columns<P: AsRef<Path>>(path: P) -> Result<Vec<CustomColumn>, SchemaError> {
    let content = fs::read_to_string(path)?;
    CustomColumn::list_from_yaml(&content)
}
