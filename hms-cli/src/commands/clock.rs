use super::{emit, lines, read_inputs};
use crate::OutputFormat;
use anyhow::{Context, Result};
use chrono::DateTime;
use hms_core::coerce::{from_timestamp, parse_timezone};
use hms_core::{format_hms_vec, CoercionOptions, HmsVec};
use tracing::{debug, info};

/// Read the time of day off RFC 3339 timestamps
pub fn execute(
    values: &[String],
    input: Option<&str>,
    output: Option<&str>,
    tz: Option<&str>,
    options: &CoercionOptions,
    format: OutputFormat,
) -> Result<()> {
    let inputs = read_inputs(values, input)?;
    info!("Reading time of day from {} timestamp(s)", inputs.len());

    let zone = tz
        .map(parse_timezone)
        .transpose()
        .with_context(|| "Invalid --tz")?;

    let mut clock = Vec::with_capacity(inputs.len());
    for text in &inputs {
        let ts = DateTime::parse_from_rfc3339(text.trim())
            .with_context(|| format!("Not an RFC 3339 timestamp: {}", text))?;
        let value = from_timestamp(&ts, zone, options);
        debug!("{} -> {}", text, value);
        clock.push(value);
    }
    let values = HmsVec::from(clock);

    let rendered = match format {
        OutputFormat::Text => lines(&format_hms_vec(&values)),
        OutputFormat::Json => serde_json::to_string_pretty(&values)
            .with_context(|| "Failed to serialize values")?,
    };

    emit(&rendered, output)
}
