//! Continuous distribution mappers.
//!
//! Six element-wise transforms from uniform variates to continuous
//! distributions. Uniform and Weibull are direct algebraic transforms; the
//! rest invert a Gamma or Normal CDF. Parameter conversions from the
//! (mean, variance)-style inputs to the native parameterisations follow
//! the classical classroom formulas exactly.

use statrs::distribution::{ContinuousCDF, Gamma, Normal};

use crate::check_variates;
use crate::error::DistributionError;

fn gamma_quantile_map(
    values: &[f64],
    shape: f64,
    scale: f64,
) -> Result<Vec<f64>, DistributionError> {
    check_variates(values)?;
    // statrs parameterises Gamma by rate, the reciprocal of scale.
    let dist = Gamma::new(shape, 1.0 / scale).map_err(|e| DistributionError::Numerical {
        message: e.to_string(),
    })?;
    Ok(values.iter().map(|&v| dist.inverse_cdf(v)).collect())
}

/// Continuous Uniform on [min, max]: `min + (max - min)·v`.
///
/// # Examples
/// ```
/// let mapped = randgen_dist::continuous::uniform(&[0.0, 0.5, 1.0], 2.0, 8.0);
/// assert_eq!(mapped, vec![2.0, 5.0, 8.0]);
/// ```
pub fn uniform(values: &[f64], min: f64, max: f64) -> Vec<f64> {
    values.iter().map(|&v| min + (max - min) * v).collect()
}

/// K-Erlang: Gamma quantile with shape `k` and scale `mean / k`.
///
/// # Errors
/// - `DistributionError::NonPositive` if `k` or `mean` is not positive
/// - `DistributionError::InvalidVariate` if any variate is outside [0, 1]
pub fn erlang(values: &[f64], k: u32, mean: f64) -> Result<Vec<f64>, DistributionError> {
    if k == 0 {
        return Err(DistributionError::NonPositive {
            name: "K",
            value: 0.0,
        });
    }
    if mean <= 0.0 {
        return Err(DistributionError::NonPositive {
            name: "mean",
            value: mean,
        });
    }
    gamma_quantile_map(values, f64::from(k), mean / f64::from(k))
}

/// Exponential: Gamma quantile with shape 1 and scale `mean`, equivalently
/// `-mean · ln(1 - v)`.
///
/// # Errors
/// - `DistributionError::NonPositive` if `mean` is not positive
/// - `DistributionError::InvalidVariate` if any variate is outside [0, 1]
///
/// # Examples
/// ```
/// let mapped = randgen_dist::continuous::exponential(&[0.0], 2.0).unwrap();
/// assert_eq!(mapped, vec![0.0]);
/// ```
pub fn exponential(values: &[f64], mean: f64) -> Result<Vec<f64>, DistributionError> {
    if mean <= 0.0 {
        return Err(DistributionError::NonPositive {
            name: "mean",
            value: mean,
        });
    }
    gamma_quantile_map(values, 1.0, mean)
}

/// Gamma by moments: shape `mean²/variance`, scale `variance/mean`.
///
/// # Errors
/// - `DistributionError::NonPositive` if `mean` or `variance` is not positive
/// - `DistributionError::InvalidVariate` if any variate is outside [0, 1]
pub fn gamma(values: &[f64], mean: f64, variance: f64) -> Result<Vec<f64>, DistributionError> {
    if mean <= 0.0 {
        return Err(DistributionError::NonPositive {
            name: "mean",
            value: mean,
        });
    }
    if variance <= 0.0 {
        return Err(DistributionError::NonPositive {
            name: "variance",
            value: variance,
        });
    }
    gamma_quantile_map(values, mean * mean / variance, variance / mean)
}

/// Normal: quantile with location `mean` and scale `sqrt(variance)`.
///
/// A variate of exactly 0 or 1 maps to the corresponding infinity, as the
/// quantile function prescribes.
///
/// # Errors
/// - `DistributionError::NonPositive` if `variance` is not positive
/// - `DistributionError::InvalidVariate` if any variate is outside [0, 1]
pub fn normal(values: &[f64], mean: f64, variance: f64) -> Result<Vec<f64>, DistributionError> {
    if variance <= 0.0 {
        return Err(DistributionError::NonPositive {
            name: "variance",
            value: variance,
        });
    }
    check_variates(values)?;
    let dist = Normal::new(mean, variance.sqrt()).map_err(|e| DistributionError::Numerical {
        message: e.to_string(),
    })?;
    Ok(values.iter().map(|&v| dist.inverse_cdf(v)).collect())
}

/// Weibull: `offset + beta² · (-ln(1 - v))^(1/shape)`.
///
/// The beta parameter enters squared — a deliberate trait of this
/// parameterisation, not the textbook Weibull scale.
///
/// # Errors
/// - `DistributionError::NonPositive` if `shape` is not positive
pub fn weibull(
    values: &[f64],
    shape: f64,
    beta: f64,
    offset: f64,
) -> Result<Vec<f64>, DistributionError> {
    if shape <= 0.0 {
        return Err(DistributionError::NonPositive {
            name: "shape",
            value: shape,
        });
    }
    let scale = beta * beta;
    Ok(values
        .iter()
        .map(|&v| offset + scale * (-(1.0 - v).ln()).powf(1.0 / shape))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const LN_E_VARIATE: f64 = 0.632_120_558_828_557_7; // 1 - 1/e

    #[test]
    fn test_uniform_midpoint() {
        let mapped = uniform(&[0.5], 2.0, 8.0);
        assert_eq!(mapped, vec![5.0]);
    }

    #[test]
    fn test_uniform_endpoints_and_length() {
        let mapped = uniform(&[0.0, 0.25, 0.9999], -1.0, 1.0);
        assert_eq!(mapped.len(), 3);
        assert_eq!(mapped[0], -1.0);
        assert_eq!(mapped[1], -0.5);
        assert!(mapped[2] < 1.0);
    }

    #[test]
    fn test_exponential_at_zero_is_zero() {
        let mapped = exponential(&[0.0], 2.0).unwrap();
        assert_eq!(mapped[0], 0.0);
    }

    #[test]
    fn test_exponential_matches_closed_form() {
        // At v = 1 - 1/e the Exponential(mean) quantile is exactly mean.
        // Tolerance allows for the numeric CDF inversion behind the Gamma
        // quantile.
        let mapped = exponential(&[LN_E_VARIATE], 2.0).unwrap();
        assert_relative_eq!(mapped[0], 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_erlang_shape_one_is_exponential() {
        let values = [0.1, 0.35, 0.6, 0.85];
        let erl = erlang(&values, 1, 3.0).unwrap();
        let exp = exponential(&values, 3.0).unwrap();
        for (a, b) in erl.iter().zip(&exp) {
            assert_relative_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gamma_monotonic_and_nonnegative() {
        let values = [0.0, 0.2, 0.5, 0.8, 0.99];
        let mapped = gamma(&values, 2.0, 1.0).unwrap();
        assert_eq!(mapped[0], 0.0);
        for pair in mapped.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_normal_median_and_one_sigma() {
        // loc 5, variance 4: median is 5 and Φ(1) maps to 5 + 2.
        let mapped = normal(&[0.5, 0.841_344_746_068_542_9], 5.0, 4.0).unwrap();
        assert_relative_eq!(mapped[0], 5.0, epsilon = 1e-9);
        assert_relative_eq!(mapped[1], 7.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normal_at_zero_is_negative_infinity() {
        let mapped = normal(&[0.0], 0.0, 1.0).unwrap();
        assert_eq!(mapped[0], f64::NEG_INFINITY);
    }

    #[test]
    fn test_weibull_offset_at_zero_variate() {
        let mapped = weibull(&[0.0], 2.0, 3.0, 10.0).unwrap();
        assert_eq!(mapped[0], 10.0);
    }

    #[test]
    fn test_weibull_beta_enters_squared() {
        // shape 1 reduces the tail term to -ln(1-v); at v = 1 - 1/e that is
        // exactly 1, leaving beta² visible.
        let mapped = weibull(&[LN_E_VARIATE], 1.0, 3.0, 0.0).unwrap();
        assert_relative_eq!(mapped[0], 9.0, epsilon = 1e-9);
    }

    #[test]
    fn test_parameter_validation() {
        assert!(matches!(
            erlang(&[0.5], 0, 1.0),
            Err(DistributionError::NonPositive { name: "K", .. })
        ));
        assert!(matches!(
            exponential(&[0.5], 0.0),
            Err(DistributionError::NonPositive { name: "mean", .. })
        ));
        assert!(matches!(
            gamma(&[0.5], 2.0, -1.0),
            Err(DistributionError::NonPositive { name: "variance", .. })
        ));
        assert!(matches!(
            normal(&[0.5], 0.0, 0.0),
            Err(DistributionError::NonPositive { name: "variance", .. })
        ));
        assert!(matches!(
            weibull(&[0.5], 0.0, 1.0, 0.0),
            Err(DistributionError::NonPositive { name: "shape", .. })
        ));
    }

    #[test]
    fn test_quantile_mappers_reject_out_of_range_variates() {
        assert!(matches!(
            exponential(&[0.5, 1.5], 2.0),
            Err(DistributionError::InvalidVariate { index: 1, .. })
        ));
        assert!(matches!(
            normal(&[-0.1], 0.0, 1.0),
            Err(DistributionError::InvalidVariate { index: 0, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_exponential_equals_neg_mean_log(v in 0.0f64..0.99, mean in 0.1f64..50.0) {
            let mapped = exponential(&[v], mean).unwrap();
            let closed_form = -mean * (1.0 - v).ln();
            prop_assert!((mapped[0] - closed_form).abs() < 1e-3 * (1.0 + closed_form.abs()));
        }

        #[test]
        fn prop_uniform_stays_in_range(v in 0.0f64..1.0, min in -100.0f64..0.0, max in 0.0f64..100.0) {
            let mapped = uniform(&[v], min, max);
            prop_assert!(mapped[0] >= min && mapped[0] <= max);
        }
    }
}
