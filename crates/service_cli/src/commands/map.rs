//! Map command implementation
//!
//! Maps a ratio sequence through one of the ten distributions and emits
//! the values as an aligned table, JSON, or CSV.

use tracing::info;

use randgen_dist::{map_distribution, DistributionSpec, MappedValues};

use super::{print_table, read_ratios, write_output};
use crate::{CliError, Result};

/// Optional distribution parameters collected from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct MapParams {
    /// Range minimum (uniform, uniform-discrete)
    pub min: Option<f64>,
    /// Range maximum (uniform, uniform-discrete)
    pub max: Option<f64>,
    /// Distribution mean
    pub mean: Option<f64>,
    /// Distribution variance
    pub variance: Option<f64>,
    /// Erlang shape K
    pub k: Option<u32>,
    /// Weibull shape alpha
    pub shape: Option<f64>,
    /// Weibull scale beta
    pub beta: Option<f64>,
    /// Weibull location offset
    pub offset: Option<f64>,
}

/// Run the map command
pub fn run(
    input: &str,
    distribution: &str,
    params: &MapParams,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let spec = build_spec(distribution, params)?;
    let ratios = read_ratios(input)?;
    info!(
        "Mapping {} ratios from {input} through {}",
        ratios.len(),
        spec.name()
    );

    let mapped = map_distribution(&spec, &ratios)?;

    match format {
        "table" => {
            println!("\n{} - {} values", spec.name(), mapped.len());
            let rows: Vec<Vec<String>> = render_values(&mapped)
                .into_iter()
                .enumerate()
                .map(|(i, value)| vec![(i + 1).to_string(), value])
                .collect();
            print_table(&["#", "Value"], &rows);
        }
        "json" => {
            let mut json = match &mapped {
                MappedValues::Continuous(values) => serde_json::to_string_pretty(values)?,
                MappedValues::Discrete(values) => serde_json::to_string_pretty(values)?,
            };
            json.push('\n');
            write_output(output, &json)?;
        }
        "csv" => {
            let mut csv = String::from("value\n");
            for value in render_values(&mapped) {
                csv.push_str(&value);
                csv.push('\n');
            }
            write_output(output, &csv)?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {other}. Supported: table, json, csv"
            )))
        }
    }

    info!("Mapping complete");
    Ok(())
}

fn render_values(mapped: &MappedValues) -> Vec<String> {
    match mapped {
        MappedValues::Continuous(values) => {
            values.iter().map(|v| format!("{v:.4}")).collect()
        }
        MappedValues::Discrete(values) => values.iter().map(|v| v.to_string()).collect(),
    }
}

fn require(name: &str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| CliError::InvalidArgument(format!("missing --{name}")))
}

fn require_int(name: &str, value: Option<f64>) -> Result<i64> {
    let value = require(name, value)?;
    if value.fract() != 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "--{name} must be an integer for the discrete uniform, got {value}"
        )));
    }
    Ok(value as i64)
}

/// Builds the distribution spec from the name and the flag set.
pub(crate) fn build_spec(distribution: &str, params: &MapParams) -> Result<DistributionSpec> {
    match distribution {
        "uniform" => Ok(DistributionSpec::Uniform {
            min: require("min", params.min)?,
            max: require("max", params.max)?,
        }),
        "erlang" => Ok(DistributionSpec::Erlang {
            k: params
                .k
                .ok_or_else(|| CliError::InvalidArgument("missing --k".to_string()))?,
            mean: require("mean", params.mean)?,
        }),
        "exponential" => Ok(DistributionSpec::Exponential {
            mean: require("mean", params.mean)?,
        }),
        "gamma" => Ok(DistributionSpec::Gamma {
            mean: require("mean", params.mean)?,
            variance: require("variance", params.variance)?,
        }),
        "normal" => Ok(DistributionSpec::Normal {
            mean: require("mean", params.mean)?,
            variance: require("variance", params.variance)?,
        }),
        "weibull" => Ok(DistributionSpec::Weibull {
            shape: require("shape", params.shape)?,
            beta: require("beta", params.beta)?,
            offset: params.offset.unwrap_or(0.0),
        }),
        "uniform-discrete" => Ok(DistributionSpec::UniformDiscrete {
            min: require_int("min", params.min)?,
            max: require_int("max", params.max)?,
        }),
        "bernoulli" => Ok(DistributionSpec::Bernoulli {
            mean: require("mean", params.mean)?,
        }),
        "binomial" => Ok(DistributionSpec::Binomial {
            mean: require("mean", params.mean)?,
            variance: require("variance", params.variance)?,
        }),
        "poisson" => {
            if params.variance.is_some() {
                info!("Poisson uses the mean as its rate; --variance is display-only");
            }
            Ok(DistributionSpec::Poisson {
                mean: require("mean", params.mean)?,
            })
        }
        other => Err(CliError::InvalidArgument(format!(
            "Unknown distribution: {other}. Supported: uniform, erlang, exponential, \
             gamma, normal, weibull, uniform-discrete, bernoulli, binomial, poisson"
        ))),
    }
}
