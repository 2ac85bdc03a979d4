//! Error types for eigenfunction-series evaluation.
//!
//! Every variant is fatal: a run either produces a complete field or
//! reports one of these. Accuracy limits (coarse quadrature, early
//! truncation) are not errors.

use thiserror::Error;

/// Errors that can occur while building or evaluating a series solution.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Truncation order must be at least 1.
    #[error("invalid mode count: {order} (must be >= 1)")]
    InvalidModeCount {
        /// The rejected truncation order
        order: usize,
    },

    /// Sample grid cannot be used as a domain.
    #[error("malformed domain: {reason}")]
    MalformedDomain {
        /// What is wrong with the grid
        reason: String,
    },

    /// Physical constant or time sample is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// No sign change in the bracket of a Bessel zero.
    #[error("no sign change for zero #{index} in bracket [{lower}, {upper}]")]
    RootBracket {
        /// 1-based index of the requested zero
        index: usize,
        /// Lower end of the bracket
        lower: f64,
        /// Upper end of the bracket
        upper: f64,
    },

    /// Bracketed root search did not reach the tolerance.
    #[error("root #{index} did not converge after {iterations} iterations")]
    RootNotConverged {
        /// 1-based index of the requested zero
        index: usize,
        /// Iterations performed
        iterations: usize,
    },

    /// Evaluation point lies outside the geometry.
    #[error("point ({x}, {y}) lies outside the domain")]
    PointOutsideDomain {
        /// x-coordinate
        x: f64,
        /// y-coordinate
        y: f64,
    },

    /// Invalid problem configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure while reading a configuration or writing frames.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

impl SeriesError {
    /// Returns `true` for errors raised while validating the problem setup.
    ///
    /// This includes `InvalidModeCount`, `MalformedDomain`,
    /// `InvalidParameter` and `Config`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SeriesError::InvalidModeCount { .. }
                | SeriesError::MalformedDomain { .. }
                | SeriesError::InvalidParameter { .. }
                | SeriesError::Config(_)
        )
    }

    /// Returns `true` if this is a Bessel-zero search failure.
    pub fn is_root_error(&self) -> bool {
        matches!(
            self,
            SeriesError::RootBracket { .. } | SeriesError::RootNotConverged { .. }
        )
    }

    /// Returns `true` if this is a domain-related error.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            SeriesError::MalformedDomain { .. } | SeriesError::PointOutsideDomain { .. }
        )
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SeriesError::MalformedDomain {
            reason: reason.into(),
        }
    }
}

/// Reject non-positive or non-finite physical constants.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SeriesError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeriesError::InvalidModeCount { order: 0 };
        assert_eq!(err.to_string(), "invalid mode count: 0 (must be >= 1)");
    }

    #[test]
    fn test_root_bracket_display() {
        let err = SeriesError::RootBracket {
            index: 3,
            lower: 1.0,
            upper: 2.0,
        };
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("[1, 2]"));
    }

    #[test]
    fn test_categories() {
        let mode_err = SeriesError::InvalidModeCount { order: 0 };
        let root_err = SeriesError::RootNotConverged {
            index: 1,
            iterations: 100,
        };
        let outside = SeriesError::PointOutsideDomain { x: -1.0, y: 0.0 };

        assert!(mode_err.is_config_error());
        assert!(!mode_err.is_root_error());
        assert!(root_err.is_root_error());
        assert!(!root_err.is_config_error());
        assert!(outside.is_domain_error());
        assert!(!outside.is_config_error());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("length", 2.0).unwrap(), 2.0);
        assert!(require_positive("length", 0.0).is_err());
        assert!(require_positive("length", f64::NAN).is_err());
        assert!(require_positive("length", f64::INFINITY).is_err());
    }
}
