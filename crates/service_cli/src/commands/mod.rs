//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared plumbing for
//! ratio-file input, table rendering, and output writing lives here.

use tracing::info;

use crate::{CliError, Result};

pub mod generate;
pub mod map;

/// Reads the ratio column from a CSV file.
///
/// Accepts either a headerless single-column file, or a file whose first
/// row is a header naming a `ratio` (or `ri`) column — the layout written
/// by `randgen generate --format csv`.
pub(crate) fn read_ratios(path: &str) -> Result<Vec<f64>> {
    if !std::path::Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }
    if rows.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "{path} contains no data"
        )));
    }

    let first = &rows[0];
    let has_header = first.iter().any(|field| field.trim().parse::<f64>().is_err());
    let (start, column) = if has_header {
        let column = first
            .iter()
            .position(|field| {
                let name = field.trim().to_ascii_lowercase();
                name == "ratio" || name == "ri"
            })
            .ok_or_else(|| {
                CliError::InvalidArgument(format!("no 'ratio' column in {path}"))
            })?;
        (1, column)
    } else if first.len() == 1 {
        (0, 0)
    } else {
        return Err(CliError::InvalidArgument(format!(
            "{path} has multiple columns but no header naming the ratio column"
        )));
    };

    let mut ratios = Vec::with_capacity(rows.len().saturating_sub(start));
    for (line, row) in rows.iter().enumerate().skip(start) {
        let field = row.get(column).ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "{path}: row {} is missing column {}",
                line + 1,
                column + 1
            ))
        })?;
        let value = field.trim().parse::<f64>().map_err(|_| {
            CliError::InvalidArgument(format!(
                "{path}: row {}: '{}' is not a number",
                line + 1,
                field
            ))
        })?;
        ratios.push(value);
    }
    Ok(ratios)
}

/// Writes `content` to the output file, or to stdout when none was given.
pub(crate) fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            info!("Wrote {path}");
        }
        None => print!("{content}"),
    }
    Ok(())
}

/// Renders an aligned box table to stdout.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let mut line = String::from(left);
        for (i, width) in widths.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            line.push_str(if i + 1 == widths.len() { right } else { mid });
        }
        line
    };

    println!("{}", rule("┌", "┬", "┐"));
    let mut header = String::from("│");
    for (title, &width) in headers.iter().zip(&widths) {
        header.push_str(&format!(" {title:<width$} │"));
    }
    println!("{header}");
    println!("{}", rule("├", "┼", "┤"));
    for row in rows {
        let mut line = String::from("│");
        for (cell, &width) in row.iter().zip(&widths) {
            line.push_str(&format!(" {cell:<width$} │"));
        }
        println!("{line}");
    }
    println!("{}", rule("└", "┴", "┘"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_read_ratios_headerless_single_column() {
        let path = write_temp("randgen_cli_headerless.csv", "0.5227\n0.3215\n0.3362\n");
        let ratios = read_ratios(&path).unwrap();
        assert_eq!(ratios, vec![0.5227, 0.3215, 0.3362]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_ratios_generate_layout() {
        let path = write_temp(
            "randgen_cli_records.csv",
            "x,square,middle,ratio\n1234,01522756,5227,0.5227\n5227,27321529,3215,0.3215\n",
        );
        let ratios = read_ratios(&path).unwrap();
        assert_eq!(ratios, vec![0.5227, 0.3215]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_ratios_rejects_missing_ratio_column() {
        let path = write_temp("randgen_cli_noratio.csv", "a,b\n1,2\n");
        assert!(matches!(
            read_ratios(&path),
            Err(CliError::InvalidArgument(_))
        ));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_ratios_rejects_missing_file() {
        assert!(matches!(
            read_ratios("/nonexistent/ratios.csv"),
            Err(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_read_ratios_rejects_bad_number() {
        let path = write_temp("randgen_cli_badnum.csv", "ratio\n0.5\nabc\n");
        assert!(matches!(
            read_ratios(&path),
            Err(CliError::InvalidArgument(_))
        ));
        std::fs::remove_file(&path).unwrap();
    }
}
