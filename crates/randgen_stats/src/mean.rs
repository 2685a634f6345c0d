//! Mean Test.
//!
//! Under the Uniform(0,1) null hypothesis the sample mean has expectation
//! 0.5 and standard error `sqrt(1/(12n))`, so the standardised statistic
//! ```text
//! z0 = (mean - 0.5) / sqrt(1/(12n))
//! ```
//! is approximately standard normal. The null is not rejected when
//! `|z0| < z_alpha`, the two-sided normal critical value.

use serde::{Deserialize, Serialize};

use crate::critical::z_critical;
use crate::error::StatsError;

/// Outcome of the Mean Test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanTest {
    /// Sample size.
    pub n: usize,
    /// Sample mean.
    pub mean: f64,
    /// Standardised statistic z0.
    pub statistic: f64,
    /// Two-sided normal critical value z_alpha at confidence 1 - alpha/2.
    pub z_critical: f64,
    /// Null hypothesis not rejected: `|z0| < z_alpha` (strict).
    pub accepted: bool,
}

impl MeanTest {
    /// Standard error of a Uniform(0,1) mean under the null, `sqrt(1/(12n))`.
    #[inline]
    fn standard_error(&self) -> f64 {
        (1.0 / (12.0 * self.n as f64)).sqrt()
    }

    /// Lower display bound `0.5 - z_alpha * sqrt(1/(12n))`.
    ///
    /// Derived for presentation; the acceptance decision uses the
    /// standardised statistic, not these bounds.
    pub fn lower_bound(&self) -> f64 {
        0.5 - self.z_critical * self.standard_error()
    }

    /// Upper display bound `0.5 + z_alpha * sqrt(1/(12n))`.
    pub fn upper_bound(&self) -> f64 {
        0.5 + self.z_critical * self.standard_error()
    }
}

/// Runs the Mean Test on a sequence of uniform variates.
///
/// # Arguments
/// * `values` - The Ri sequence; at least 2 values
/// * `alpha` - Significance level, strictly between 0 and 1
///
/// # Errors
/// - `StatsError::InvalidAlpha` if `alpha` is outside (0, 1)
/// - `StatsError::InsufficientSample` if fewer than 2 values are given
///
/// # Examples
/// ```
/// use randgen_stats::mean_test;
///
/// // A sequence pinned to the expected mean always passes.
/// let values = vec![0.5; 20];
/// let result = mean_test(&values, 0.05).unwrap();
/// assert_eq!(result.statistic, 0.0);
/// assert!(result.accepted);
/// ```
pub fn mean_test(values: &[f64], alpha: f64) -> Result<MeanTest, StatsError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::InvalidAlpha { alpha });
    }
    let n = values.len();
    if n < 2 {
        return Err(StatsError::InsufficientSample { got: n, need: 2 });
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let standard_error = (1.0 / (12.0 * n as f64)).sqrt();
    let statistic = (mean - 0.5) / standard_error;
    let z_critical = z_critical(alpha)?;

    Ok(MeanTest {
        n,
        mean,
        statistic,
        z_critical,
        accepted: statistic.abs() < z_critical,
    })
}
