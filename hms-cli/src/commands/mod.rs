pub mod build;
pub mod clock;
pub mod format;
pub mod parse;
pub mod table;
pub mod timestamp;

use anyhow::{Context, Result};
use hms_core::constants::MISSING_LABEL;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Collect inputs from an optional file ("-" for stdin) followed by the
/// positional values. Blank lines are skipped.
pub(crate) fn read_inputs(values: &[String], input: Option<&str>) -> Result<Vec<String>> {
    let mut inputs = Vec::new();

    if let Some(path) = input {
        let content = if path == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path))?
        };

        inputs.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
        );
    }

    inputs.extend(values.iter().cloned());
    Ok(inputs)
}

/// Read a raw count of seconds; `NA` is the missing value
pub(crate) fn parse_seconds(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed == MISSING_LABEL {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .with_context(|| format!("Not a number of seconds: {}", text))
}

/// Write rendered output to a file, or stdout when no path is given
pub(crate) fn emit(rendered: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Output written to: {}", path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// One entry per line, with a trailing newline
pub(crate) fn lines(entries: &[String]) -> String {
    let mut out = entries.join("\n");
    out.push('\n');
    out
}
