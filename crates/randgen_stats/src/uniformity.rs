//! Uniformity (Chi-Square) Test.
//!
//! Partitions [0,1) into k equal-width half-open intervals, counts the
//! observations per interval, and compares against the uniform expectation
//! n/k:
//! ```text
//! chi_calc = Σ (observed - expected)² / expected
//! ```
//! The null is not rejected when `chi_calc < chi_critical`, the chi-square
//! quantile at `1 - alpha` with k-1 degrees of freedom (strict comparison).
//! The result always carries the full per-interval frequency table.

use serde::{Deserialize, Serialize};

use crate::critical::chi_squared_quantile;
use crate::error::StatsError;

/// Default number of sub-intervals.
pub const DEFAULT_INTERVALS: usize = 10;

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalBin {
    /// Interval label, e.g. `"[0.20, 0.30)"`.
    pub label: String,
    /// Observed count in this interval.
    pub observed: usize,
    /// Expected count under the uniform null, n/k.
    pub expected: f64,
    /// Contribution `(observed - expected)² / expected`.
    pub contribution: f64,
}

/// Outcome of the Uniformity Test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformityTest {
    /// Sample size.
    pub n: usize,
    /// Number of equal-width intervals.
    pub k: usize,
    /// Test statistic chi_calc, the sum of per-interval contributions.
    pub statistic: f64,
    /// Chi-square critical value at 1 - alpha with k-1 degrees of freedom.
    pub chi_critical: f64,
    /// Null hypothesis not rejected: `chi_calc < chi_critical` (strict).
    pub accepted: bool,
    /// Per-interval frequency table, in interval order, always k entries.
    pub table: Vec<IntervalBin>,
}

impl UniformityTest {
    /// Observed counts in interval order, one per bin.
    pub fn observed(&self) -> Vec<usize> {
        self.table.iter().map(|bin| bin.observed).collect()
    }
}

/// Runs the Uniformity Test on a sequence of uniform variates.
///
/// Values are bucketed by `min(floor(v·k), k-1)`; the clamp keeps a value
/// numerically at 1.0 inside the last interval instead of indexing out of
/// range.
///
/// # Arguments
/// * `values` - The Ri sequence; at least 2 values
/// * `alpha` - Significance level, strictly between 0 and 1
/// * `k` - Number of intervals, at least 2 (see [`DEFAULT_INTERVALS`])
///
/// # Errors
/// - `StatsError::InvalidAlpha` if `alpha` is outside (0, 1)
/// - `StatsError::InsufficientSample` if fewer than 2 values are given
/// - `StatsError::InvalidIntervals` if `k < 2`
///
/// # Examples
/// ```
/// use randgen_stats::uniformity_test;
///
/// // One observation per decile: a perfect fit.
/// let values: Vec<f64> = (0..10).map(|i| 0.05 + 0.1 * i as f64).collect();
/// let result = uniformity_test(&values, 0.05, 10).unwrap();
/// assert_eq!(result.statistic, 0.0);
/// assert!(result.accepted);
/// ```
pub fn uniformity_test(
    values: &[f64],
    alpha: f64,
    k: usize,
) -> Result<UniformityTest, StatsError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(StatsError::InvalidAlpha { alpha });
    }
    let n = values.len();
    if n < 2 {
        return Err(StatsError::InsufficientSample { got: n, need: 2 });
    }
    if k < 2 {
        return Err(StatsError::InvalidIntervals { k });
    }

    let mut observed = vec![0usize; k];
    for &v in values {
        let index = ((v * k as f64).floor() as usize).min(k - 1);
        observed[index] += 1;
    }

    let expected = n as f64 / k as f64;
    let mut statistic = 0.0;
    let mut table = Vec::with_capacity(k);
    for (i, &count) in observed.iter().enumerate() {
        let deviation = count as f64 - expected;
        let contribution = deviation * deviation / expected;
        statistic += contribution;
        table.push(IntervalBin {
            label: format!(
                "[{:.2}, {:.2})",
                i as f64 / k as f64,
                (i + 1) as f64 / k as f64
            ),
            observed: count,
            expected,
            contribution,
        });
    }

    let chi_critical = chi_squared_quantile(1.0 - alpha, (k - 1) as f64)?;

    Ok(UniformityTest {
        n,
        k,
        statistic,
        chi_critical,
        accepted: statistic < chi_critical,
        table,
    })
}
