//! Error types for arm configuration.

use thiserror::Error;

/// Errors reported when validating arm and search configuration.
///
/// The physical model itself is total over numeric inputs; these errors only
/// come out of the explicit `validate()` calls on configuration types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArmError {
    /// A physical constant is non-finite or not strictly positive.
    #[error("invalid physical constant {name}: {value} (must be positive and finite)")]
    InvalidPhysicalConstant {
        /// Name of the offending constant.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Invalid search configuration.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl ArmError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Check that a physical constant is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), ArmError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ArmError::InvalidPhysicalConstant { name, value })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArmError::InvalidPhysicalConstant {
            name: "density",
            value: -0.5,
        };
        assert!(err.to_string().contains("density"));
        assert!(err.to_string().contains("-0.5"));

        let err = ArmError::invalid_config("segments must be at least 1");
        assert!(err.to_string().contains("segments"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(ArmError::invalid_config("bad").is_config_error());
        assert!(!ArmError::InvalidPhysicalConstant {
            name: "width",
            value: 0.0
        }
        .is_config_error());
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("width", 3.0).is_ok());
        assert!(require_positive("width", 0.0).is_err());
        assert!(require_positive("width", f64::NAN).is_err());
        assert!(require_positive("width", f64::INFINITY).is_err());
    }
}
