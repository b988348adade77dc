use super::{emit, lines, read_inputs};
use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use hms_core::constants::{MAX_REPORTED_FAILURES, MISSING_LABEL};
use hms_core::parse::{parse_hms_vec, parse_hms_vec_strict};
use hms_core::HmsVec;
use tracing::info;

pub fn execute(
    values: &[String],
    input: Option<&str>,
    output: Option<&str>,
    strict: bool,
    format: OutputFormat,
) -> Result<()> {
    let inputs = read_inputs(values, input)?;
    info!("Parsing {} value(s)", inputs.len());

    let parsed = if strict {
        parse_hms_vec_strict(&inputs).with_context(|| "Strict parse failed")?
    } else {
        let report = parse_hms_vec(&inputs);
        if !report.is_clean() {
            eprintln!(
                "{} {} of {} input(s) could not be parsed",
                "warning:".yellow().bold(),
                report.failures.len(),
                inputs.len()
            );
            for failure in report.failures.iter().take(MAX_REPORTED_FAILURES) {
                eprintln!("  #{}: {:?}", failure.index, failure.input);
            }
        }
        report.values
    };

    emit(&render(&parsed, format)?, output)
}

fn render(values: &HmsVec, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let entries: Vec<String> = values
                .iter()
                .map(|v| {
                    if v.is_missing() {
                        MISSING_LABEL.to_string()
                    } else {
                        v.seconds().to_string()
                    }
                })
                .collect();
            Ok(lines(&entries))
        }
        OutputFormat::Json => serde_json::to_string_pretty(values)
            .with_context(|| "Failed to serialize parsed values"),
    }
}
