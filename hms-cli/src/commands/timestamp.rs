use super::{emit, lines, parse_seconds, read_inputs};
use crate::OutputFormat;
use anyhow::{Context, Result};
use hms_core::coerce::to_timestamps;
use hms_core::constants::MISSING_LABEL;
use hms_core::HmsVec;
use tracing::info;

/// Render values as UTC timestamps on the epoch day
pub fn execute(
    values: &[String],
    input: Option<&str>,
    output: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let inputs = read_inputs(values, input)?;
    info!("Converting {} value(s) to timestamps", inputs.len());

    let seconds = inputs
        .iter()
        .map(|s| parse_seconds(s))
        .collect::<Result<Vec<f64>>>()?;
    let stamps: Vec<Option<String>> = to_timestamps(&HmsVec::from_seconds(&seconds))
        .into_iter()
        .map(|ts| ts.map(|t| t.to_rfc3339()))
        .collect();

    let rendered = match format {
        OutputFormat::Text => {
            let entries: Vec<String> = stamps
                .into_iter()
                .map(|s| s.unwrap_or_else(|| MISSING_LABEL.to_string()))
                .collect();
            lines(&entries)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&stamps)
            .with_context(|| "Failed to serialize timestamps")?,
    };

    emit(&rendered, output)
}
