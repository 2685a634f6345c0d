//! Static dispatch over the ten distribution mappers.
//!
//! A [`DistributionSpec`] names the distribution and carries its
//! parameters; [`map_distribution`] dispatches via `match` to the
//! element-wise mapper and wraps the output in [`MappedValues`]. Tagged
//! enums, no trait objects — the same shape as the generator and test
//! dispatch layers.

use serde::{Deserialize, Serialize};

use crate::continuous;
use crate::discrete;
use crate::error::DistributionError;

/// A fully-parameterised distribution mapping invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DistributionSpec {
    /// Continuous Uniform on [min, max].
    Uniform {
        /// Lower end of the range
        min: f64,
        /// Upper end of the range
        max: f64,
    },
    /// K-Erlang with integer shape and mean.
    Erlang {
        /// Shape K (number of exponential stages, ≥ 1)
        k: u32,
        /// Distribution mean (> 0)
        mean: f64,
    },
    /// Exponential with the given mean.
    Exponential {
        /// Distribution mean (> 0)
        mean: f64,
    },
    /// Gamma parameterised by its first two moments.
    Gamma {
        /// Distribution mean (> 0)
        mean: f64,
        /// Distribution variance (> 0)
        variance: f64,
    },
    /// Normal parameterised by mean and variance.
    Normal {
        /// Distribution mean
        mean: f64,
        /// Distribution variance (> 0)
        variance: f64,
    },
    /// Three-parameter Weibull with squared beta scale.
    Weibull {
        /// Shape alpha (> 0)
        shape: f64,
        /// Scale parameter; enters the formula squared
        beta: f64,
        /// Location offset gamma
        offset: f64,
    },
    /// Discrete Uniform on the integer range [min, max].
    UniformDiscrete {
        /// Lower end of the range
        min: i64,
        /// Upper end of the range
        max: i64,
    },
    /// Bernoulli with success probability `mean`.
    Bernoulli {
        /// Success probability, in [0, 1]
        mean: f64,
    },
    /// Binomial parameterised by its first two moments.
    Binomial {
        /// Distribution mean (> variance)
        mean: f64,
        /// Distribution variance (> 0)
        variance: f64,
    },
    /// Poisson with rate `mean`.
    Poisson {
        /// Distribution mean, used as the rate (> 0)
        mean: f64,
    },
}

impl DistributionSpec {
    /// Human-readable distribution name.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionSpec::Uniform { .. } => "Uniform (Continuous)",
            DistributionSpec::Erlang { .. } => "K-Erlang",
            DistributionSpec::Exponential { .. } => "Exponential",
            DistributionSpec::Gamma { .. } => "Gamma",
            DistributionSpec::Normal { .. } => "Normal",
            DistributionSpec::Weibull { .. } => "Weibull",
            DistributionSpec::UniformDiscrete { .. } => "Uniform (Discrete)",
            DistributionSpec::Bernoulli { .. } => "Bernoulli",
            DistributionSpec::Binomial { .. } => "Binomial",
            DistributionSpec::Poisson { .. } => "Poisson",
        }
    }

    /// Whether this distribution maps to integer values.
    pub fn is_discrete(&self) -> bool {
        matches!(
            self,
            DistributionSpec::UniformDiscrete { .. }
                | DistributionSpec::Bernoulli { .. }
                | DistributionSpec::Binomial { .. }
                | DistributionSpec::Poisson { .. }
        )
    }
}

/// An ordered sequence of mapped values, one per input variate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MappedValues {
    /// Output of a continuous mapper.
    Continuous(Vec<f64>),
    /// Output of a discrete mapper.
    Discrete(Vec<i64>),
}

impl MappedValues {
    /// Number of mapped values.
    pub fn len(&self) -> usize {
        match self {
            MappedValues::Continuous(v) => v.len(),
            MappedValues::Discrete(v) => v.len(),
        }
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The continuous values, if this is a continuous mapping.
    pub fn as_continuous(&self) -> Option<&[f64]> {
        match self {
            MappedValues::Continuous(v) => Some(v),
            MappedValues::Discrete(_) => None,
        }
    }

    /// The discrete values, if this is a discrete mapping.
    pub fn as_discrete(&self) -> Option<&[i64]> {
        match self {
            MappedValues::Continuous(_) => None,
            MappedValues::Discrete(v) => Some(v),
        }
    }
}

/// Maps a sequence of uniform variates through the distribution described
/// by `spec`.
///
/// # Errors
/// Propagates the parameter and variate validation errors of the
/// underlying mapper; parameters are checked before any element is mapped.
///
/// # Examples
/// ```
/// use randgen_dist::{map_distribution, DistributionSpec};
///
/// let spec = DistributionSpec::Exponential { mean: 2.0 };
/// let mapped = map_distribution(&spec, &[0.0, 0.5]).unwrap();
/// assert_eq!(mapped.as_continuous().unwrap()[0], 0.0);
/// ```
pub fn map_distribution(
    spec: &DistributionSpec,
    values: &[f64],
) -> Result<MappedValues, DistributionError> {
    match *spec {
        DistributionSpec::Uniform { min, max } => Ok(MappedValues::Continuous(
            continuous::uniform(values, min, max),
        )),
        DistributionSpec::Erlang { k, mean } => Ok(MappedValues::Continuous(
            continuous::erlang(values, k, mean)?,
        )),
        DistributionSpec::Exponential { mean } => Ok(MappedValues::Continuous(
            continuous::exponential(values, mean)?,
        )),
        DistributionSpec::Gamma { mean, variance } => Ok(MappedValues::Continuous(
            continuous::gamma(values, mean, variance)?,
        )),
        DistributionSpec::Normal { mean, variance } => Ok(MappedValues::Continuous(
            continuous::normal(values, mean, variance)?,
        )),
        DistributionSpec::Weibull {
            shape,
            beta,
            offset,
        } => Ok(MappedValues::Continuous(continuous::weibull(
            values, shape, beta, offset,
        )?)),
        DistributionSpec::UniformDiscrete { min, max } => Ok(MappedValues::Discrete(
            discrete::uniform_discrete(values, min, max)?,
        )),
        DistributionSpec::Bernoulli { mean } => Ok(MappedValues::Discrete(
            discrete::bernoulli(values, mean)?,
        )),
        DistributionSpec::Binomial { mean, variance } => Ok(MappedValues::Discrete(
            discrete::binomial(values, mean, variance)?,
        )),
        DistributionSpec::Poisson { mean } => Ok(MappedValues::Discrete(
            discrete::poisson(values, mean)?,
        )),
    }
}
