//! Built-in scenario presets.

use crate::error::ScenarioError;
use synth_core::{FieldRule, ScenarioConfig};

/// A named, ready-made scenario.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> ScenarioConfig,
}

impl Preset {
    /// Build the preset's configuration.
    pub fn config(&self) -> ScenarioConfig {
        (self.build)()
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "sparse",
        description: "20% of unprotected values are null",
        build: || ScenarioConfig::default().with_null_rate(20.0),
    },
    Preset {
        name: "duplicates",
        description: "10% of rows are duplicated in place",
        build: || ScenarioConfig::default().with_duplicate_rate(10.0),
    },
    Preset {
        name: "dirty",
        description: "10% malformed rows, 5% nulls, 5% duplicates",
        build: || {
            ScenarioConfig::default()
                .with_error_rate(10.0)
                .with_null_rate(5.0)
                .with_duplicate_rate(5.0)
        },
    },
    Preset {
        name: "claim-denials",
        description: "every claimStatus is Denied",
        build: || ScenarioConfig::default().with_rule("claimStatus", FieldRule::fixed("Denied")),
    },
    Preset {
        name: "elderly-cohort",
        description: "dateOfBirth between 1930 and 1955, age re-derived",
        build: || {
            ScenarioConfig::default().with_rule(
                "dateOfBirth",
                FieldRule::date_range("1930-01-01", "1955-12-31"),
            )
        },
    },
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Result<ScenarioConfig, ScenarioError> {
    PRESETS
        .iter()
        .find(|p| p.name == name.trim())
        .map(Preset::config)
        .ok_or_else(|| {
            let available: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
            ScenarioError::UnknownPreset(name.to_string(), available.join(", "))
        })
}
