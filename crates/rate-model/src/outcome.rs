//! Results of the numeric rescaling step.

use serde::{Deserialize, Serialize};

use crate::field::RequiredField;

/// What happened to one monetary cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum NumericOutcome {
    /// Parsed, rescaled and formatted with six decimals.
    Transformed(String),
    /// Not a number; the original text is kept verbatim.
    PassThrough(String),
    /// Blank after trimming; written as an empty string.
    Blank,
}

impl NumericOutcome {
    pub fn into_value(self) -> String {
        match self {
            Self::Transformed(value) | Self::PassThrough(value) => value,
            Self::Blank => String::new(),
        }
    }
}

/// A monetary cell that could not be parsed and was kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericFallback {
    /// Zero-based data row index.
    pub row: usize,
    pub field: RequiredField,
    pub value: String,
}
