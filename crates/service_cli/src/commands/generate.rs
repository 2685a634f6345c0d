//! Generate command implementation
//!
//! Runs one of the three middle-digit generators and emits the record
//! table as an aligned table, JSON, or CSV.

use tracing::info;

use randgen_core::generators::{generate, GeneratorOutput, GeneratorSpec};

use super::{print_table, write_output};
use crate::{CliError, Result};

/// Run the generate command
pub fn run(
    algorithm: &str,
    seed: u64,
    seed_y: Option<u64>,
    constant: u64,
    count: usize,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let spec = match algorithm {
        "squares" => GeneratorSpec::MidSquares { seed, count },
        "products" => {
            let seed_y = seed_y.ok_or_else(|| {
                CliError::InvalidArgument(
                    "the products algorithm needs --seed-y".to_string(),
                )
            })?;
            GeneratorSpec::MidProducts {
                seed_x: seed,
                seed_y,
                count,
            }
        }
        "constant" => GeneratorSpec::ConstMultiplier {
            seed,
            count,
            constant,
        },
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown algorithm: {other}. Supported: squares, products, constant"
            )))
        }
    };

    info!("Generating {count} records with {}", spec.kind().name());
    let records = generate(&spec)?;

    match format {
        "table" => {
            println!("\n{} - {} records", spec.kind().name(), records.len());
            let (headers, rows) = tabulate(&records);
            print_table(&headers, &rows);
        }
        "json" => {
            write_output(output, &to_json(&records)?)?;
        }
        "csv" => {
            write_output(output, &to_csv(&records)?)?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {other}. Supported: table, json, csv"
            )))
        }
    }

    info!("Generation complete");
    Ok(())
}

/// Table headers and rows for each record layout.
fn tabulate(records: &GeneratorOutput) -> (Vec<&'static str>, Vec<Vec<String>>) {
    match records {
        GeneratorOutput::MidSquares(records) => (
            vec!["Xi", "Xi^2", "Middle", "Ri"],
            records
                .iter()
                .map(|r| {
                    vec![
                        r.x.to_string(),
                        r.square.clone(),
                        r.middle.clone(),
                        format!("{:.4}", r.ratio),
                    ]
                })
                .collect(),
        ),
        GeneratorOutput::MidProducts(records) => (
            vec!["Xi", "Yi", "Xi*Yi", "Middle", "Ri"],
            records
                .iter()
                .map(|r| {
                    vec![
                        r.x.to_string(),
                        r.y.to_string(),
                        r.product.clone(),
                        r.middle.clone(),
                        format!("{:.4}", r.ratio),
                    ]
                })
                .collect(),
        ),
        GeneratorOutput::ConstMultiplier(records) => (
            vec!["Xi", "a*Xi", "Middle", "Ri"],
            records
                .iter()
                .map(|r| {
                    vec![
                        r.x.to_string(),
                        r.product.clone(),
                        r.middle.clone(),
                        format!("{:.4}", r.ratio),
                    ]
                })
                .collect(),
        ),
    }
}

fn to_json(records: &GeneratorOutput) -> Result<String> {
    let mut json = match records {
        GeneratorOutput::MidSquares(records) => serde_json::to_string_pretty(records)?,
        GeneratorOutput::MidProducts(records) => serde_json::to_string_pretty(records)?,
        GeneratorOutput::ConstMultiplier(records) => serde_json::to_string_pretty(records)?,
    };
    json.push('\n');
    Ok(json)
}

fn to_csv(records: &GeneratorOutput) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    match records {
        GeneratorOutput::MidSquares(records) => {
            writer.write_record(["x", "square", "middle", "ratio"])?;
            for r in records {
                writer.write_record([
                    r.x.to_string(),
                    r.square.clone(),
                    r.middle.clone(),
                    format!("{:.4}", r.ratio),
                ])?;
            }
        }
        GeneratorOutput::MidProducts(records) => {
            writer.write_record(["x", "y", "product", "middle", "ratio"])?;
            for r in records {
                writer.write_record([
                    r.x.to_string(),
                    r.y.to_string(),
                    r.product.clone(),
                    r.middle.clone(),
                    format!("{:.4}", r.ratio),
                ])?;
            }
        }
        GeneratorOutput::ConstMultiplier(records) => {
            writer.write_record(["x", "product", "middle", "ratio"])?;
            for r in records {
                writer.write_record([
                    r.x.to_string(),
                    r.product.clone(),
                    r.middle.clone(),
                    format!("{:.4}", r.ratio),
                ])?;
            }
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes)
        .map_err(|e| CliError::InvalidArgument(format!("CSV output is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout_round_trips_through_ratio_reader() {
        let records = generate(&GeneratorSpec::MidSquares {
            seed: 1234,
            count: 3,
        })
        .unwrap();
        let csv = to_csv(&records).unwrap();

        let path = std::env::temp_dir().join("randgen_cli_roundtrip.csv");
        std::fs::write(&path, &csv).unwrap();
        let ratios = super::super::read_ratios(&path.to_string_lossy()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(ratios, records.ratios());
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = run("fibonacci", 1234, None, 73, 5, "table", None).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_products_requires_second_seed() {
        let err = run("products", 5015, None, 73, 5, "table", None).unwrap_err();
        assert!(format!("{err}").contains("--seed-y"));
    }

    #[test]
    fn test_generator_errors_propagate() {
        let err = run("squares", 123, None, 73, 5, "table", None).unwrap_err();
        assert!(matches!(err, CliError::Generator(_)));
    }
}
