//! Error types for statistical test validation.
//!
//! This module provides:
//! - `StatsError`: Errors from test input validation and quantile evaluation

use thiserror::Error;

/// Statistical test errors.
///
/// Every test validates its inputs before computing anything, so a failed
/// call never returns a partial result.
///
/// # Variants
/// - `InvalidAlpha`: Significance level outside the open interval (0, 1)
/// - `InsufficientSample`: Too few values for the requested test
/// - `InvalidIntervals`: Uniformity interval count below 2
/// - `Numerical`: A quantile evaluation failed
///
/// # Examples
/// ```
/// use randgen_stats::StatsError;
///
/// let err = StatsError::InvalidAlpha { alpha: 1.5 };
/// assert!(format!("{}", err).contains("between 0 and 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Significance level outside (0, 1).
    #[error("Significance level must lie strictly between 0 and 1, got {alpha}")]
    InvalidAlpha {
        /// The rejected significance level
        alpha: f64,
    },

    /// Sample too small for the requested test.
    #[error("Sample must contain at least {need} values, got {got}")]
    InsufficientSample {
        /// Number of values provided
        got: usize,
        /// Minimum number of values required
        need: usize,
    },

    /// Uniformity interval count below 2.
    #[error("Interval count must be at least 2, got {k}")]
    InvalidIntervals {
        /// The rejected interval count
        k: usize,
    },

    /// A distribution quantile could not be evaluated.
    #[error("Quantile evaluation failed: {message}")]
    Numerical {
        /// Description of the numerical issue
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_alpha_display() {
        let err = StatsError::InvalidAlpha { alpha: 0.0 };
        assert_eq!(
            format!("{}", err),
            "Significance level must lie strictly between 0 and 1, got 0"
        );
    }

    #[test]
    fn test_insufficient_sample_display() {
        let err = StatsError::InsufficientSample { got: 1, need: 2 };
        assert_eq!(
            format!("{}", err),
            "Sample must contain at least 2 values, got 1"
        );
    }

    #[test]
    fn test_invalid_intervals_display() {
        let err = StatsError::InvalidIntervals { k: 1 };
        assert_eq!(format!("{}", err), "Interval count must be at least 2, got 1");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = StatsError::InvalidIntervals { k: 0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = StatsError::InsufficientSample { got: 0, need: 2 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
