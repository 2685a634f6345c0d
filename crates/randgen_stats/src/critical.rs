//! Critical values from standard distribution quantiles.
//!
//! Thin wrappers over the statrs inverse CDFs, returning [`StatsError`]
//! instead of panicking when a distribution cannot be constructed.

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

use crate::error::StatsError;

/// Two-sided standard-normal critical value at confidence `1 - alpha/2`.
///
/// Returns the z such that `P(Z <= z) = 1 - alpha/2` for standard normal Z.
/// Callers are expected to have validated `alpha` against (0, 1).
///
/// # Examples
/// ```
/// let z = randgen_stats::z_critical(0.05).unwrap();
/// assert!((z - 1.959964).abs() < 1e-5);
/// ```
pub fn z_critical(alpha: f64) -> Result<f64, StatsError> {
    let standard_normal = Normal::new(0.0, 1.0).map_err(|e| StatsError::Numerical {
        message: e.to_string(),
    })?;
    Ok(standard_normal.inverse_cdf(1.0 - alpha / 2.0))
}

/// Chi-square quantile at probability `p` with `dof` degrees of freedom.
pub fn chi_squared_quantile(p: f64, dof: f64) -> Result<f64, StatsError> {
    let chi_squared = ChiSquared::new(dof).map_err(|e| StatsError::Numerical {
        message: e.to_string(),
    })?;
    Ok(chi_squared.inverse_cdf(p))
}
