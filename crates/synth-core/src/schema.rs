//! Schema definitions for synthgen.
//!
//! A schema is an ordered list of named fields per table. Each field declares a
//! [`FieldType`] and, for the custom kinds, a [`FieldConfig`] carrying the
//! user-authored parameters.
//!
//! ## YAML Format
//!
//! ```yaml
//! version: 1
//! seed: 42
//! tables:
//!   - name: claims
//!     rows: 250
//!     fields:
//!       - name: claimNumber
//!         type: claimNumber
//!       - name: status
//!         type: list
//!         config:
//!           list_values: "pending,approved,denied"
//!       - name: reference
//!         type: pattern
//!         config:
//!           regex_pattern: "[A-Z]{3}-[0-9]{4}"
//! ```

use crate::types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for loading schema and overlay documents.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading a file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Table not found in schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Field not found in table schema
    #[error("Field '{field}' not found in table '{table}'")]
    FieldNotFound { table: String, field: String },

    /// Two fields in one table share a name
    #[error("Duplicate field '{field}' in table '{table}'")]
    DuplicateField { table: String, field: String },
}

// ============================================================================
// Field Types
// ============================================================================

/// Parameters for the custom field kinds.
///
/// Only the entry matching the owning field's kind is read: `list_values` for
/// `list`, `regex_pattern` for `pattern`, `template` for `template`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Comma-joined pool of values for `list` fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_values: Option<String>,

    /// Character-class pattern for `pattern` fields, e.g. `[A-Z]{3}-[0-9]{4}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_pattern: Option<String>,

    /// Token template for `template` fields, e.g. `ORDER-{{integer}}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl FieldConfig {
    /// Config for a `list` field.
    pub fn list(values: impl Into<String>) -> Self {
        Self {
            list_values: Some(values.into()),
            ..Self::default()
        }
    }

    /// Config for a `pattern` field.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            regex_pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Config for a `template` field.
    pub fn template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Self::default()
        }
    }

    /// The list pool split on commas, trimmed, with blanks dropped.
    pub fn list_items(&self) -> Vec<String> {
        self.list_values
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// One output column of a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Stable identifier (defaults to the name when omitted)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Column name, unique within the table
    pub name: String,

    /// Semantic type deciding which generator runs
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Parameters for custom kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<FieldConfig>,
}

impl Field {
    /// Create a field whose id equals its name.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            field_type,
            config: None,
        }
    }

    /// Attach a custom-kind config.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = Some(config);
        self
    }
}

// ============================================================================
// Table and Schema
// ============================================================================

/// Table with an ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name
    pub name: String,

    /// Default number of rows to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,

    /// Field definitions in output order
    pub fields: Vec<Field>,
}

impl TableDefinition {
    /// Create a new table definition.
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            rows: None,
            fields,
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all field names in order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn check_unique_fields(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    table: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn fill_missing_ids(&mut self) {
        for field in &mut self.fields {
            if field.id.is_empty() {
                field.id = field.name.clone();
            }
        }
    }
}

fn default_version() -> u32 {
    1
}

/// Full schema document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default seed for runs that do not specify one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    /// Table definitions
    pub tables: Vec<TableDefinition>,

    /// Cached table lookup (not serialized)
    #[serde(skip)]
    table_map: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema from tables in memory.
    pub fn new(tables: Vec<TableDefinition>) -> Result<Self, SchemaError> {
        let mut schema = Self {
            version: default_version(),
            seed: None,
            tables,
            table_map: HashMap::new(),
        };
        schema.finish()?;
        Ok(schema)
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: Schema = serde_yaml::from_str(yaml)?;
        schema.finish()?;
        Ok(schema)
    }

    fn finish(&mut self) -> Result<(), SchemaError> {
        for table in &mut self.tables {
            table.check_unique_fields()?;
            table.fill_missing_ids();
        }
        self.table_map = self
            .tables
            .iter()
            .enumerate()
            .map(|(idx, table)| (table.name.clone(), idx))
            .collect();
        Ok(())
    }

    /// Get a table by name.
    pub fn get_table(&self, name: &str) -> Option<&TableDefinition> {
        self.table_map
            .get(name)
            .and_then(|&idx| self.tables.get(idx))
    }

    /// Get the type of a field in a specific table.
    pub fn get_field_type(&self, table: &str, field: &str) -> Result<FieldType, SchemaError> {
        let table_schema = self
            .get_table(table)
            .ok_or_else(|| SchemaError::TableNotFound(table.to_string()))?;

        table_schema
            .get_field(field)
            .map(|f| f.field_type)
            .ok_or_else(|| SchemaError::FieldNotFound {
                table: table.to_string(),
                field: field.to_string(),
            })
    }

    /// Get all table names in the schema.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SCHEMA: &str = r#"
version: 1
seed: 42

tables:
  - name: claims
    rows: 25
    fields:
      - name: id
        type: uuid
      - name: claimNumber
        type: claimNumber
      - name: status
        type: list
        config:
          list_values: "pending, approved ,denied,,"
      - name: reference
        id: ref-1
        type: pattern
        config:
          regex_pattern: "[A-Z]{3}-[0-9]{4}"

  - name: orders
    fields:
      - name: label
        type: template
        config:
          template: "ORDER-{{integer}}"
"#;

    #[test]
    fn test_parse_schema() {
        let schema = Schema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(42));
        assert_eq!(schema.table_names(), vec!["claims", "orders"]);

        let claims = schema.get_table("claims").unwrap();
        assert_eq!(claims.rows, Some(25));
        assert_eq!(
            claims.field_names(),
            vec!["id", "claimNumber", "status", "reference"]
        );
        assert_eq!(claims.fields[1].field_type, FieldType::ClaimNumber);
    }

    #[test]
    fn test_missing_ids_default_to_name() {
        let schema = Schema::from_yaml(SAMPLE_SCHEMA).unwrap();
        let claims = schema.get_table("claims").unwrap();

        assert_eq!(claims.get_field("status").unwrap().id, "status");
        assert_eq!(claims.get_field("reference").unwrap().id, "ref-1");
    }

    #[test]
    fn test_list_items() {
        let schema = Schema::from_yaml(SAMPLE_SCHEMA).unwrap();
        let status = schema.get_table("claims").unwrap().get_field("status").unwrap();
        let items = status.config.as_ref().unwrap().list_items();

        assert_eq!(items, vec!["pending", "approved", "denied"]);
        assert!(FieldConfig::default().list_items().is_empty());
    }

    #[test]
    fn test_get_field_type() {
        let schema = Schema::from_yaml(SAMPLE_SCHEMA).unwrap();

        assert_eq!(
            schema.get_field_type("orders", "label").unwrap(),
            FieldType::Template
        );
        assert!(matches!(
            schema.get_field_type("nonexistent", "label"),
            Err(SchemaError::TableNotFound(_))
        ));
        assert!(matches!(
            schema.get_field_type("orders", "nonexistent"),
            Err(SchemaError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let yaml = r#"
tables:
  - name: t
    fields:
      - name: a
        type: integer
      - name: a
        type: word
"#;
        let result = Schema::from_yaml(yaml);
        assert!(matches!(result, Err(SchemaError::DuplicateField { .. })));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let yaml = r#"
tables:
  - name: t
    fields:
      - name: a
        type: spaceship
"#;
        assert!(matches!(
            Schema::from_yaml(yaml),
            Err(SchemaError::YamlError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yaml");
        fs::write(&path, SAMPLE_SCHEMA).unwrap();

        let schema = Schema::from_file(&path).unwrap();
        assert!(schema.get_table("orders").is_some());

        let missing = Schema::from_file(dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(SchemaError::IoError(_))));
    }

    #[test]
    fn test_field_builder() {
        let field = Field::new("ref", FieldType::Pattern).with_config(FieldConfig::pattern("[0-9]{2}"));
        assert_eq!(field.id, "ref");
        assert_eq!(
            field.config.unwrap().regex_pattern.as_deref(),
            Some("[0-9]{2}")
        );
    }
}
