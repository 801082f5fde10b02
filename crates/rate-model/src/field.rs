//! The fixed, ordered set of canonical output fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the six canonical rate schedule columns.
///
/// Variant order is the output column order; `Ord` follows it, so ordered
/// maps keyed by field iterate in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Destination,
    Prefix,
    Rate,
    Setup,
    Currency,
    Description,
}

impl RequiredField {
    /// All required fields in output order.
    pub const ALL: [RequiredField; 6] = [
        RequiredField::Destination,
        RequiredField::Prefix,
        RequiredField::Rate,
        RequiredField::Setup,
        RequiredField::Currency,
        RequiredField::Description,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Prefix => "prefix",
            Self::Rate => "rate",
            Self::Setup => "setup",
            Self::Currency => "currency",
            Self::Description => "description",
        }
    }

    /// Position of this field in the output column order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Monetary fields rescaled by the discount and gain percentages.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Rate | Self::Setup)
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequiredField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownField(trimmed.to_string()))
    }
}
