use serde::{Deserialize, Serialize};

use crate::Result;

/// Configuration for a legalization pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalizerConfig {
    /// Absolute tolerance for the up-to-phase self-check
    pub equivalence_tolerance: f64,

    /// Compare the output unitary against the input after each pass.
    /// Costs a dense `2^n × 2^n` simulation of both circuits.
    pub check_equivalence: bool,

    /// Lower corrective RX(π) insertions into native R(π, 0)
    pub lower_corrections: bool,

    /// Check the pass output against the native gate set
    pub validate_output: bool,
}

impl Default for LegalizerConfig {
    fn default() -> Self {
        Self {
            equivalence_tolerance: 1e-8,
            check_equivalence: false,
            lower_corrections: true,
            validate_output: true,
        }
    }
}

impl LegalizerConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_equivalence_tolerance(mut self, tolerance: f64) -> Self {
        self.equivalence_tolerance = tolerance;
        self
    }

    pub fn with_check_equivalence(mut self, check: bool) -> Self {
        self.check_equivalence = check;
        self
    }

    pub fn with_lower_corrections(mut self, lower: bool) -> Self {
        self.lower_corrections = lower;
        self
    }

    pub fn with_validate_output(mut self, validate: bool) -> Self {
        self.validate_output = validate;
        self
    }

    /// Ensure the configuration values are usable
    pub fn validate(&self) -> Result<()> {
        if !self.equivalence_tolerance.is_finite() || self.equivalence_tolerance <= 0.0 {
            return Err(crate::LegalizeError::Config(format!(
                "equivalence_tolerance must be positive and finite, got {}",
                self.equivalence_tolerance
            )));
        }
        Ok(())
    }
}
