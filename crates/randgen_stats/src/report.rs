//! Static dispatch over the three test families.
//!
//! Mirrors the tagged-enum dispatch used elsewhere in the workspace: a
//! [`TestKind`] selects the family, [`run_test`] dispatches via `match`,
//! and [`TestReport`] wraps the per-family result structs behind uniform
//! accessors. No trait objects are involved.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::mean::{mean_test, MeanTest};
use crate::uniformity::{uniformity_test, UniformityTest, DEFAULT_INTERVALS};
use crate::variance::{variance_test, VarianceTest};

/// Identifies one of the three test families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestKind {
    /// Mean Test (normal Z test on the sample mean)
    Mean,
    /// Variance Test (two-sided chi-square interval test)
    Variance,
    /// Uniformity Test (chi-square frequency test)
    Uniformity,
}

impl TestKind {
    /// Human-readable test name.
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::Mean => "Mean",
            TestKind::Variance => "Variance",
            TestKind::Uniformity => "Uniformity",
        }
    }
}

/// Outcome of one dispatched test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TestReport {
    /// Mean Test outcome.
    Mean(MeanTest),
    /// Variance Test outcome.
    Variance(VarianceTest),
    /// Uniformity Test outcome.
    Uniformity(UniformityTest),
}

impl TestReport {
    /// The family that produced this report.
    pub fn kind(&self) -> TestKind {
        match self {
            TestReport::Mean(_) => TestKind::Mean,
            TestReport::Variance(_) => TestKind::Variance,
            TestReport::Uniformity(_) => TestKind::Uniformity,
        }
    }

    /// Whether the null hypothesis was not rejected.
    pub fn accepted(&self) -> bool {
        match self {
            TestReport::Mean(r) => r.accepted,
            TestReport::Variance(r) => r.accepted,
            TestReport::Uniformity(r) => r.accepted,
        }
    }

    /// The computed test statistic (z0 or chi_calc as appropriate).
    pub fn statistic(&self) -> f64 {
        match self {
            TestReport::Mean(r) => r.statistic,
            TestReport::Variance(r) => r.statistic,
            TestReport::Uniformity(r) => r.statistic,
        }
    }
}

/// Runs the test selected by `kind` over `values`.
///
/// `intervals` applies to the Uniformity Test only and defaults to
/// [`DEFAULT_INTERVALS`] when `None`; the other families ignore it.
///
/// # Errors
/// Propagates the validation errors of the underlying test family.
pub fn run_test(
    kind: TestKind,
    values: &[f64],
    alpha: f64,
    intervals: Option<usize>,
) -> Result<TestReport, StatsError> {
    match kind {
        TestKind::Mean => Ok(TestReport::Mean(mean_test(values, alpha)?)),
        TestKind::Variance => Ok(TestReport::Variance(variance_test(values, alpha)?)),
        TestKind::Uniformity => Ok(TestReport::Uniformity(uniformity_test(
            values,
            alpha,
            intervals.unwrap_or(DEFAULT_INTERVALS),
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TestKind::Mean.name(), "Mean");
        assert_eq!(TestKind::Variance.name(), "Variance");
        assert_eq!(TestKind::Uniformity.name(), "Uniformity");
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let values: Vec<f64> = (0..10).map(|i| 0.05 + 0.1 * i as f64).collect();

        let report = run_test(TestKind::Mean, &values, 0.05, None).unwrap();
        assert_eq!(report, TestReport::Mean(mean_test(&values, 0.05).unwrap()));

        let report = run_test(TestKind::Variance, &values, 0.05, None).unwrap();
        assert_eq!(
            report,
            TestReport::Variance(variance_test(&values, 0.05).unwrap())
        );

        let report = run_test(TestKind::Uniformity, &values, 0.05, Some(5)).unwrap();
        assert_eq!(
            report,
            TestReport::Uniformity(uniformity_test(&values, 0.05, 5).unwrap())
        );
    }

    #[test]
    fn test_uniformity_interval_default() {
        let values: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
        let report = run_test(TestKind::Uniformity, &values, 0.05, None).unwrap();
        match report {
            TestReport::Uniformity(r) => assert_eq!(r.k, DEFAULT_INTERVALS),
            other => panic!("expected uniformity report, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_report_uniform_accessors() {
        let values: Vec<f64> = (0..10).map(|i| 0.05 + 0.1 * i as f64).collect();
        let report = run_test(TestKind::Uniformity, &values, 0.05, None).unwrap();
        assert_eq!(report.kind(), TestKind::Uniformity);
        assert_eq!(report.statistic(), 0.0);
        assert!(report.accepted());
    }

    #[test]
    fn test_dispatch_propagates_validation_errors() {
        let err = run_test(TestKind::Mean, &[0.5], 0.05, None).unwrap_err();
        assert_eq!(err, StatsError::InsufficientSample { got: 1, need: 2 });
    }
}
