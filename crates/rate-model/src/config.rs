//! Discount and gain percentages applied to monetary fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    pub discount_pct: f64,
    pub gain_pct: f64,
}

impl TransformConfig {
    pub fn new(discount_pct: f64, gain_pct: f64) -> Self {
        Self {
            discount_pct,
            gain_pct,
        }
    }

    /// Builds a config from raw textual inputs. Missing or unusable values
    /// fall back to 0.0.
    pub fn from_inputs(discount: Option<&str>, gain: Option<&str>) -> Self {
        Self {
            discount_pct: discount.and_then(parse_percentage).unwrap_or(0.0),
            gain_pct: gain.and_then(parse_percentage).unwrap_or(0.0),
        }
    }

    /// Applies the discount, then the gain. The order is fixed.
    pub fn apply(&self, value: f64) -> f64 {
        let discounted = value * (1.0 - self.discount_pct / 100.0);
        discounted * (1.0 + self.gain_pct / 100.0)
    }

    pub fn is_identity(&self) -> bool {
        self.discount_pct == 0.0 && self.gain_pct == 0.0
    }
}

/// Parses a percentage input. Returns `None` for text that is not a finite,
/// non-negative number.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
