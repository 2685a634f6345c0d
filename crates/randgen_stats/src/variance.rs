//! Variance Test.
//!
//! Two-sided chi-square interval test on the sample variance: with
//! Bessel's correction,
//! ```text
//! var  = Σ(xi - mean)² / (n-1)
//! stat = (n-1) · var
//! ```
//! and the null is not rejected when `chi_lower <= stat <= chi_upper`,
//! the chi-square quantiles at `alpha/2` and `1 - alpha/2` with n-1
//! degrees of freedom. The interval is inclusive on both ends, unlike the
//! strict comparisons used by the Mean and Uniformity tests.

use serde::{Deserialize, Serialize};

use crate::critical::chi_squared_quantile;
use crate::error::StatsError;

/// Outcome of the Variance Test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceTest {
    /// Sample size.
    pub n: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample variance with Bessel's correction.
    pub variance: f64,
    /// Test statistic `(n-1) · var`.
    pub statistic: f64,
    /// Lower chi-square critical value, quantile at alpha/2 with n-1 dof.
    pub chi_lower: f64,
    /// Upper chi-square critical value, quantile at 1 - alpha/2 with n-1 dof.
    pub chi_upper: f64,
    /// Null hypothesis not rejected: statistic inside the closed interval.
    pub accepted: bool,
}

impl VarianceTest {
    /// Lower display bound `chi_lower / (12(n-1))`, the theoretical
    /// Uniform(0,1) variance bound for presentation.
    pub fn lower_bound(&self) -> f64 {
        self.chi_lower / (12.0 * (self.n as f64 - 1.0))
    }

    /// Upper display bound `chi_upper / (12(n-1))`.
    pub fn upper_bound(&self) -> f64 {
        self.chi_upper / (12.0 * (self.n as f64 - 1.0))
    }
}

/// Accepts when the statistic lies inside the closed critical interval.
#[inline]
fn interval_accepts(statistic: f64, lower: f64, upper: f64) -> bool {
    lower <= statistic && statistic <= upper
}

/// Runs the Variance Test on a sequence of uniform variates.
///
/// # Arguments
/// * `values` - The Ri sequence; at least 2 values (Bessel divisor n-1 > 0)
/// * `alpha` - Significance level, strictly between 0 and 1
///
/// # Errors
/// - `StatsError::InvalidAlpha` if `alpha` is outside (0, 1)
/// - `StatsError::InsufficientSample` if fewer than 2 values are given
pub fn variance_test(values: &[f64], alpha: f64) -> Result<VarianceTest, StatsError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::InvalidAlpha { alpha });
    }
    let n = values.len();
    if n < 2 {
        return Err(StatsError::InsufficientSample { got: n, need: 2 });
    }

    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    let variance = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n_f - 1.0);
    let statistic = (n_f - 1.0) * variance;

    let dof = n_f - 1.0;
    let chi_lower = chi_squared_quantile(alpha / 2.0, dof)?;
    let chi_upper = chi_squared_quantile(1.0 - alpha / 2.0, dof)?;

    Ok(VarianceTest {
        n,
        mean,
        variance,
        statistic,
        chi_lower,
        chi_upper,
        accepted: interval_accepts(statistic, chi_lower, chi_upper),
    })
}
