//! Elo tuning configuration
//!
//! Both historical defaults observed in production (K = 32 and K = 40) are
//! kept available as explicit constructors; callers pick one rather than
//! the crate silently choosing.

use crate::error::{Result, VictoryError};
use serde::{Deserialize, Serialize};

/// Configuration for the Elo group-ranking strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    /// Maximum rating swing per match
    pub k: f64,
    /// Rating-difference divisor in the expected-score term
    pub scale_factor: f64,
    /// Base of the expected-score exponential
    pub exponent_base: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k: 32.0,
            scale_factor: 400.0,
            exponent_base: 10.0,
        }
    }
}

impl EloConfig {
    pub fn new(k: f64, scale_factor: f64, exponent_base: f64) -> Self {
        Self {
            k,
            scale_factor,
            exponent_base,
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            k: 40.0,
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.k <= 0.0 {
            return Err(VictoryError::ConfigurationError {
                message: "K factor must be positive".to_string(),
            }
            .into());
        }

        if self.scale_factor <= 0.0 {
            return Err(VictoryError::ConfigurationError {
                message: "Scale factor must be positive".to_string(),
            }
            .into());
        }

        if self.exponent_base <= 1.0 {
            return Err(VictoryError::ConfigurationError {
                message: "Exponent base must be greater than 1".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EloConfig::default();
        assert_eq!(config.k, 32.0);
        assert_eq!(config.scale_factor, 400.0);
        assert_eq!(config.exponent_base, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_aggressive_preset() {
        let config = EloConfig::aggressive();
        assert_eq!(config.k, 40.0);
        assert_eq!(config.scale_factor, 400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_parameters() {
        let mut config = EloConfig::default();
        config.k = -1.0;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.scale_factor = 0.0;
        assert!(config.validate().is_err());

        config = EloConfig::default();
        config.exponent_base = 1.0;
        assert!(config.validate().is_err());
    }
}
