//! Generation request assembly.
//!
//! A request can come from a JSON file, from command-line flags, or both,
//! with flags taking precedence. It is turned into the typed mapping,
//! defaults and percentages once, before the source file is read.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rate_model::{
    ColumnRef, DefaultValues, FieldAssignment, FieldMapping, RequiredField, TransformConfig,
    parse_percentage,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A percentage as submitted: JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PercentInput {
    Number(f64),
    Text(String),
}

impl PercentInput {
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

/// Raw generation inputs, as stored in a request file.
///
/// ```json
/// {
///   "mapping": { "destination": "Destino", "rate": "Tarifa", "setup": "__DEFAULT__" },
///   "defaults": { "currency": "USD", "setup": "0" },
///   "discount": 10,
///   "gain": "5"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateRequest {
    pub mapping: BTreeMap<RequiredField, String>,
    pub defaults: BTreeMap<RequiredField, String>,
    pub discount: Option<PercentInput>,
    pub gain: Option<PercentInput>,
}

impl GenerateRequest {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read request file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parse request file {}", path.display()))
    }

    /// Applies command-line values over the loaded request.
    pub fn apply_overrides(
        &mut self,
        mapping: &[FieldAssignment],
        defaults: &[FieldAssignment],
        discount: Option<&str>,
        gain: Option<&str>,
    ) {
        for assignment in mapping {
            self.mapping
                .insert(assignment.field, assignment.value.clone());
        }
        for assignment in defaults {
            self.defaults
                .insert(assignment.field, assignment.value.clone());
        }
        if let Some(raw) = discount {
            self.discount = Some(PercentInput::Text(raw.to_string()));
        }
        if let Some(raw) = gain {
            self.gain = Some(PercentInput::Text(raw.to_string()));
        }
    }

    /// Fields absent from the request are unmapped.
    pub fn field_mapping(&self) -> FieldMapping {
        self.mapping
            .iter()
            .fold(FieldMapping::new(), |mapping, (field, column)| {
                mapping.with(*field, ColumnRef::from_input(column))
            })
    }

    pub fn default_values(&self) -> DefaultValues {
        self.defaults
            .iter()
            .fold(DefaultValues::new(), |defaults, (field, value)| {
                defaults.with(*field, value.as_str())
            })
    }

    /// Invalid percentages are logged and treated as 0.
    pub fn transform_config(&self) -> TransformConfig {
        let discount = self.discount.as_ref().map(PercentInput::as_text);
        let gain = self.gain.as_ref().map(PercentInput::as_text);
        warn_invalid_percentage("discount", discount.as_deref());
        warn_invalid_percentage("gain", gain.as_deref());
        TransformConfig::from_inputs(discount.as_deref(), gain.as_deref())
    }
}

fn warn_invalid_percentage(name: &str, raw: Option<&str>) {
    let Some(raw) = raw else {
        return;
    };
    if !raw.trim().is_empty() && parse_percentage(raw).is_none() {
        warn!(input = name, value = %raw, "invalid percentage, using 0");
    }
}
