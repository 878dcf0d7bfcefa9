//! Batch processing
//!
//! Reads newline-separated application names, classifies each one strictly
//! sequentially, and writes a CSV report. Any failure aborts the run: a
//! missing input file is reported as not-found, and no output file is
//! produced on error.

use appcat_common::{Error, Result};
use std::path::{Path, PathBuf};

use crate::pipeline::Categorizer;

/// CSV header row for batch output
pub const CSV_HEADER: &str = "Application,Category,EnergyLabel";

/// Process an input file of application names into a CSV report.
///
/// Input: plain text, one application name per non-blank line.
/// Output: CSV with header `Application,Category,EnergyLabel` and one row
/// per processed application. Returns the output path on success.
pub async fn run_batch(
    categorizer: &Categorizer,
    input: &Path,
    output: &Path,
) -> Result<PathBuf> {
    let content = std::fs::read_to_string(input).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(format!("Input file not found: {}", input.display()))
        } else {
            Error::Io(e)
        }
    })?;

    let apps: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    tracing::info!(
        input = %input.display(),
        count = apps.len(),
        "Starting batch categorization"
    );

    let mut csv = String::with_capacity(apps.len() * 48 + CSV_HEADER.len() + 1);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for app_name in apps {
        let report = categorizer.process_app(app_name).await;
        csv.push_str(&format!(
            "{},{},{}\n",
            csv_escape(&report.app_name),
            csv_escape(&report.category),
            csv_escape(&report.energy_label),
        ));
    }

    std::fs::write(output, csv)?;
    tracing::info!(output = %output.display(), "Batch results written");

    Ok(output.to_path_buf())
}

/// Quote a CSV field when it contains a delimiter, quote, or line break
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
