//! # randgen_stats: Goodness-of-Fit Tests for Uniform Variates
//!
//! Statistical validation of pseudo-random sequences against the null
//! hypothesis that they behave like independent Uniform(0,1) draws:
//! - Mean Test (`mean`): standard-normal Z test on the sample mean
//! - Variance Test (`variance`): two-sided chi-square interval test on the
//!   sample variance
//! - Uniformity Test (`uniformity`): chi-square frequency test over k
//!   equal-width sub-intervals of [0,1), with the full per-interval table
//!
//! Each test is a pure function of an already-materialised `&[f64]` slice
//! and a significance level; results carry the computed statistics, the
//! critical values, and an `accepted` flag (null hypothesis not rejected).
//!
//! ## Example
//!
//! ```
//! use randgen_stats::{run_test, TestKind};
//!
//! let values = [0.05, 0.15, 0.25, 0.35, 0.45, 0.55, 0.65, 0.75, 0.85, 0.95];
//! let report = run_test(TestKind::Uniformity, &values, 0.05, Some(10)).unwrap();
//! assert!(report.accepted());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod critical;
pub mod error;
pub mod mean;
pub mod report;
pub mod uniformity;
pub mod variance;

// Re-export main types at crate level
pub use critical::{chi_squared_quantile, z_critical};
pub use error::StatsError;
pub use mean::{mean_test, MeanTest};
pub use report::{run_test, TestKind, TestReport};
pub use uniformity::{uniformity_test, IntervalBin, UniformityTest, DEFAULT_INTERVALS};
pub use variance::{variance_test, VarianceTest};
