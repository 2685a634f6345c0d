//! Discrete distribution mappers.
//!
//! Four element-wise transforms from uniform variates to integer samples.
//! Bernoulli is a direct threshold; Binomial and Poisson invert their CDFs
//! after converting the (mean, variance)-style inputs to native
//! parameters. The discrete Uniform mapper keeps the classroom behaviour
//! of drawing fresh randomness per element instead of consuming its
//! input; [`uniform_discrete_inverse`] is the corrected inverse-transform
//! variant under a separate name.

use rand::Rng;
use statrs::distribution::{Binomial, DiscreteCDF, Poisson};

use crate::check_variates;
use crate::error::DistributionError;

/// Discrete Uniform on [min, max]: one fresh independent random integer
/// per input element.
///
/// The input variates only determine the output length — each element is a
/// new draw, so this mapper breaks the inverse-transform contract the
/// other mappers follow. Kept for output compatibility; use
/// [`uniform_discrete_inverse`] for the deterministic variant.
///
/// # Errors
/// - `DistributionError::InvalidRange` if `min > max`
pub fn uniform_discrete(
    values: &[f64],
    min: i64,
    max: i64,
) -> Result<Vec<i64>, DistributionError> {
    if min > max {
        return Err(DistributionError::InvalidRange { min, max });
    }
    let mut rng = rand::thread_rng();
    Ok(values.iter().map(|_| rng.gen_range(min..=max)).collect())
}

/// Discrete Uniform via inverse transform: `min + floor(v·(max - min + 1))`,
/// clamped to `max` for a variate numerically at 1.
///
/// # Errors
/// - `DistributionError::InvalidRange` if `min > max`
pub fn uniform_discrete_inverse(
    values: &[f64],
    min: i64,
    max: i64,
) -> Result<Vec<i64>, DistributionError> {
    if min > max {
        return Err(DistributionError::InvalidRange { min, max });
    }
    let span = (max - min + 1) as f64;
    Ok(values
        .iter()
        .map(|&v| (min + (v * span).floor() as i64).min(max))
        .collect())
}

/// Bernoulli with success probability `mean`: `0` if `v < 1 - mean`, else `1`.
///
/// # Errors
/// - `DistributionError::InvalidProbability` if `mean` is outside [0, 1]
pub fn bernoulli(values: &[f64], mean: f64) -> Result<Vec<i64>, DistributionError> {
    if !(0.0..=1.0).contains(&mean) {
        return Err(DistributionError::InvalidProbability { p: mean });
    }
    Ok(values
        .iter()
        .map(|&v| i64::from(v >= 1.0 - mean))
        .collect())
}

/// Binomial by moments: `n = trunc(mean²/(mean - variance))`,
/// `p = (mean - variance)/mean`, then the Binomial quantile at each variate.
///
/// The trial count is truncated toward zero, matching the classroom
/// moment conversion.
///
/// # Errors
/// - `DistributionError::InvalidMoments` if `mean <= variance`, either
///   moment is non-positive, or the truncated trial count is zero
/// - `DistributionError::InvalidVariate` if any variate is outside [0, 1]
pub fn binomial(
    values: &[f64],
    mean: f64,
    variance: f64,
) -> Result<Vec<i64>, DistributionError> {
    if mean <= 0.0 || variance <= 0.0 || mean <= variance {
        return Err(DistributionError::InvalidMoments { mean, variance });
    }
    let n = (mean * mean / (mean - variance)) as i64;
    if n < 1 {
        return Err(DistributionError::InvalidMoments { mean, variance });
    }
    let p = (mean - variance) / mean;
    check_variates(values)?;
    let dist = Binomial::new(p, n as u64).map_err(|e| DistributionError::Numerical {
        message: e.to_string(),
    })?;
    Ok(values
        .iter()
        .map(|&v| dist.inverse_cdf(v) as i64)
        .collect())
}

/// Poisson with rate `mean`: the Poisson quantile at each variate.
///
/// The distribution's variance equals its mean, so a separately supplied
/// variance is display-only for callers and never consumed here.
///
/// # Errors
/// - `DistributionError::NonPositive` if `mean` is not positive
/// - `DistributionError::InvalidVariate` if any variate is outside [0, 1]
pub fn poisson(values: &[f64], mean: f64) -> Result<Vec<i64>, DistributionError> {
    if mean <= 0.0 {
        return Err(DistributionError::NonPositive {
            name: "mean",
            value: mean,
        });
    }
    check_variates(values)?;
    let dist = Poisson::new(mean).map_err(|e| DistributionError::Numerical {
        message: e.to_string(),
    })?;
    Ok(values
        .iter()
        .map(|&v| dist.inverse_cdf(v) as i64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uniform_discrete_length_and_range() {
        let values = vec![0.5; 200];
        let mapped = uniform_discrete(&values, -3, 4).unwrap();
        assert_eq!(mapped.len(), 200);
        assert!(mapped.iter().all(|&x| (-3..=4).contains(&x)));
    }

    #[test]
    fn test_uniform_discrete_ignores_its_input() {
        // Out-of-unit-interval inputs are fine: only the length is read.
        let mapped = uniform_discrete(&[-5.0, 42.0], 1, 1).unwrap();
        assert_eq!(mapped, vec![1, 1]);
    }

    #[test]
    fn test_uniform_discrete_inverse_is_deterministic() {
        let mapped = uniform_discrete_inverse(&[0.0, 0.5, 0.95, 1.0], 0, 9).unwrap();
        assert_eq!(mapped, vec![0, 5, 9, 9]);
    }

    #[test]
    fn test_uniform_discrete_inverse_offset_range() {
        let mapped = uniform_discrete_inverse(&[0.0, 0.49, 0.51, 0.9999], 10, 11).unwrap();
        assert_eq!(mapped, vec![10, 10, 11, 11]);
    }

    #[test]
    fn test_range_validation() {
        assert!(matches!(
            uniform_discrete(&[0.5], 5, 2),
            Err(DistributionError::InvalidRange { min: 5, max: 2 })
        ));
        assert!(matches!(
            uniform_discrete_inverse(&[0.5], 5, 2),
            Err(DistributionError::InvalidRange { min: 5, max: 2 })
        ));
    }

    #[test]
    fn test_bernoulli_threshold() {
        // mean 0.3: the cut sits at 1 - 0.3 = 0.7, inclusive on the right.
        let mapped = bernoulli(&[0.0, 0.69, 0.7, 0.71, 0.9999], 0.3).unwrap();
        assert_eq!(mapped, vec![0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_bernoulli_degenerate_probabilities() {
        assert_eq!(bernoulli(&[0.0, 0.5, 0.9999], 0.0).unwrap(), vec![0, 0, 0]);
        assert_eq!(bernoulli(&[0.0, 0.5, 0.9999], 1.0).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_bernoulli_rejects_bad_probability() {
        assert!(matches!(
            bernoulli(&[0.5], 1.2),
            Err(DistributionError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_binomial_moment_conversion() {
        // mean 5, variance 2 → n = trunc(25/3) = 8, p = 0.6; the median of
        // Binomial(8, 0.6) is 5.
        let mapped = binomial(&[0.0, 0.5, 0.9999999], 5.0, 2.0).unwrap();
        assert_eq!(mapped[0], 0);
        assert_eq!(mapped[1], 5);
        assert_eq!(mapped[2], 8);
    }

    #[test]
    fn test_binomial_rejects_invalid_moments() {
        // Equal moments: no finite trial count.
        assert!(binomial(&[0.5], 2.0, 2.0).is_err());
        // Variance above mean: negative trial count.
        assert!(binomial(&[0.5], 2.0, 3.0).is_err());
        // Truncation to zero trials.
        assert!(binomial(&[0.5], 0.3, 0.2).is_err());
        // Non-positive moments.
        assert!(binomial(&[0.5], 0.0, -1.0).is_err());
    }

    #[test]
    fn test_poisson_median_and_floor() {
        // Poisson(3): CDF(2) ≈ 0.4232 < 0.5 ≤ CDF(3), so the 0.5 quantile is 3.
        let mapped = poisson(&[0.0, 0.5], 3.0).unwrap();
        assert_eq!(mapped, vec![0, 3]);
    }

    #[test]
    fn test_poisson_rejects_non_positive_mean() {
        assert!(matches!(
            poisson(&[0.5], 0.0),
            Err(DistributionError::NonPositive { name: "mean", .. })
        ));
    }

    #[test]
    fn test_quantile_mappers_reject_out_of_range_variates() {
        assert!(matches!(
            binomial(&[2.0], 5.0, 2.0),
            Err(DistributionError::InvalidVariate { index: 0, .. })
        ));
        assert!(matches!(
            poisson(&[0.2, -0.1], 3.0),
            Err(DistributionError::InvalidVariate { index: 1, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_uniform_discrete_inverse_within_range(
            v in 0.0f64..1.0,
            min in -50i64..0,
            span in 0i64..100,
        ) {
            let max = min + span;
            let mapped = uniform_discrete_inverse(&[v], min, max).unwrap();
            prop_assert!(mapped[0] >= min && mapped[0] <= max);
        }

        #[test]
        fn prop_binomial_output_bounded_by_trials(v in 0.0f64..1.0) {
            // n = 8 trials for mean 5, variance 2
            let mapped = binomial(&[v], 5.0, 2.0).unwrap();
            prop_assert!((0..=8).contains(&mapped[0]));
        }
    }
}
