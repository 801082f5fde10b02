//! Per-field source column mapping and default values.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::field::RequiredField;

/// Input token meaning "no source column, use the field's default".
pub const MAPPING_SENTINEL: &str = "__DEFAULT__";

/// Where a required field takes its value from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "column")]
pub enum ColumnRef {
    #[default]
    Unmapped,
    Column(String),
}

impl ColumnRef {
    /// Interprets a raw mapping input. The sentinel and the empty string are
    /// both unmapped; anything else names a column verbatim.
    pub fn from_input(raw: &str) -> Self {
        if raw.is_empty() || raw == MAPPING_SENTINEL {
            Self::Unmapped
        } else {
            Self::Column(raw.to_string())
        }
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Column(name) => Some(name),
            Self::Unmapped => None,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

/// Source column choice for every required field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    columns: [ColumnRef; RequiredField::COUNT],
}

impl FieldMapping {
    /// A mapping with every field unmapped.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: RequiredField, column: ColumnRef) -> Self {
        self.set(field, column);
        self
    }

    #[must_use]
    pub fn with_column(self, field: RequiredField, column: &str) -> Self {
        self.with(field, ColumnRef::from_input(column))
    }

    pub fn set(&mut self, field: RequiredField, column: ColumnRef) {
        self.columns[field.index()] = column;
    }

    pub fn get(&self, field: RequiredField) -> &ColumnRef {
        &self.columns[field.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RequiredField, &ColumnRef)> {
        RequiredField::ALL.into_iter().zip(self.columns.iter())
    }

    pub fn mapped_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_mapped()).count()
    }

    /// Mapped columns that the source header does not contain.
    pub fn missing_columns<'a>(&'a self, columns: &[String]) -> Vec<(RequiredField, &'a str)> {
        self.iter()
            .filter_map(|(field, column)| column.column().map(|name| (field, name)))
            .filter(|(_, name)| !columns.iter().any(|c| c == name))
            .collect()
    }
}

/// Fallback text per required field. Fields without an entry default to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultValues {
    values: BTreeMap<RequiredField, String>,
}

impl DefaultValues {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: RequiredField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// An empty value clears the default.
    pub fn set(&mut self, field: RequiredField, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    pub fn get(&self, field: RequiredField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn contains(&self, field: RequiredField) -> bool {
        self.values.contains_key(&field)
    }
}

/// A parsed `FIELD=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field: RequiredField,
    pub value: String,
}

impl FromStr for FieldAssignment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| ModelError::InvalidAssignment(s.to_string()))?;
        Ok(Self {
            field: field.parse()?,
            value: value.to_string(),
        })
    }
}
