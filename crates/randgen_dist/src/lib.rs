//! # randgen_dist: Inverse-Transform Distribution Mappers
//!
//! Pure, stateless transforms from uniform variates in [0,1) to samples of
//! ten named distributions — six continuous, four discrete:
//! - `continuous`: Uniform, K-Erlang, Exponential, Gamma, Normal, Weibull
//! - `discrete`: Uniform, Bernoulli, Binomial, Poisson
//!
//! Each mapper is applied element-wise: one output value per input variate,
//! via the distribution's quantile function or a direct algebraic
//! transform. Two deliberate quirks of the classroom formulation are
//! preserved rather than corrected: the Weibull beta parameter enters
//! squared, and the discrete Uniform mapper draws fresh randomness instead
//! of consuming its input (a corrected inverse-transform variant is
//! available under a separate name).
//!
//! ## Example
//!
//! ```
//! use randgen_dist::{map_distribution, DistributionSpec, MappedValues};
//!
//! let spec = DistributionSpec::Uniform { min: 2.0, max: 8.0 };
//! let mapped = map_distribution(&spec, &[0.0, 0.5, 0.75]).unwrap();
//! assert_eq!(mapped, MappedValues::Continuous(vec![2.0, 5.0, 6.5]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod continuous;
pub mod discrete;
pub mod error;
pub mod mapping;

// Re-export main types at crate level
pub use error::DistributionError;
pub use mapping::{map_distribution, DistributionSpec, MappedValues};

/// Rejects variates outside [0, 1] before a quantile function sees them.
///
/// The quantile-backed mappers call this up front so an out-of-domain input
/// fails fast instead of reaching the inverse CDF; the purely algebraic
/// mappers follow their arithmetic without it.
pub(crate) fn check_variates(values: &[f64]) -> Result<(), error::DistributionError> {
    for (index, &value) in values.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(error::DistributionError::InvalidVariate { index, value });
        }
    }
    Ok(())
}
