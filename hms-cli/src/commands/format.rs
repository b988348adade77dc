use super::{emit, lines, parse_seconds, read_inputs};
use crate::OutputFormat;
use anyhow::{Context, Result};
use hms_core::{format_hms, format_hms_vec, HmsVec};
use tracing::info;

pub fn execute(
    values: &[String],
    input: Option<&str>,
    output: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let inputs = read_inputs(values, input)?;
    info!("Formatting {} value(s)", inputs.len());

    let seconds = inputs
        .iter()
        .map(|s| parse_seconds(s))
        .collect::<Result<Vec<f64>>>()?;
    let values = HmsVec::from_seconds(&seconds);

    let rendered = match format {
        OutputFormat::Text => lines(&format_hms_vec(&values)),
        OutputFormat::Json => {
            let entries: Vec<Option<String>> = values
                .iter()
                .map(|v| (!v.is_missing()).then(|| format_hms(v)))
                .collect();
            serde_json::to_string_pretty(&entries)
                .with_context(|| "Failed to serialize formatted values")?
        }
    };

    emit(&rendered, output)
}
