//! Error types for distribution parameter validation.
//!
//! This module provides:
//! - `DistributionError`: Errors from mapper parameter and input validation

use thiserror::Error;

/// Distribution mapper errors.
///
/// Parameters are validated before any element is mapped, so a failed call
/// never returns a partial sequence. Invalid parameterisations are
/// signalled, never silently clamped.
///
/// # Variants
/// - `NonPositive`: A parameter that must be positive is not
/// - `InvalidRange`: Discrete range with min greater than max
/// - `InvalidProbability`: Probability outside [0, 1]
/// - `InvalidMoments`: Moment pair with no valid native parameterisation
/// - `InvalidVariate`: Input variate outside [0, 1]
/// - `Numerical`: A quantile function could not be constructed
///
/// # Examples
/// ```
/// use randgen_dist::DistributionError;
///
/// let err = DistributionError::InvalidMoments { mean: 2.0, variance: 3.0 };
/// assert!(format!("{}", err).contains("mean > variance"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A parameter that must be positive is zero or negative.
    #[error("Parameter {name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Discrete range with min greater than max.
    #[error("Empty integer range: min {min} greater than max {max}")]
    InvalidRange {
        /// Lower end of the range
        min: i64,
        /// Upper end of the range
        max: i64,
    },

    /// Probability outside the closed unit interval.
    #[error("Probability must lie in [0, 1], got {p}")]
    InvalidProbability {
        /// The rejected probability
        p: f64,
    },

    /// Moment pair yielding a non-physical native parameterisation.
    #[error("Binomial moments require mean > variance > 0 and a positive trial count, got mean {mean} and variance {variance}")]
    InvalidMoments {
        /// The supplied mean
        mean: f64,
        /// The supplied variance
        variance: f64,
    },

    /// Input variate outside the quantile domain [0, 1].
    #[error("Variate at index {index} is outside [0, 1]: {value}")]
    InvalidVariate {
        /// Position of the offending variate
        index: usize,
        /// The rejected value
        value: f64,
    },

    /// A quantile function could not be constructed.
    #[error("Quantile evaluation failed: {message}")]
    Numerical {
        /// Description of the numerical issue
        message: String,
    },
}
