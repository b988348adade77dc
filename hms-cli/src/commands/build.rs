use super::{emit, lines};
use crate::OutputFormat;
use anyhow::{Context, Result};
use hms_core::{format_hms_vec, hms};
use tracing::info;

/// Components as given on the command line, each optional
#[derive(Debug, Default, Clone)]
pub struct Components {
    pub seconds: Option<Vec<f64>>,
    pub minutes: Option<Vec<f64>>,
    pub hours: Option<Vec<f64>>,
    pub days: Option<Vec<f64>>,
}

pub fn execute(components: &Components, output: Option<&str>, format: OutputFormat) -> Result<()> {
    info!("Building values from components");

    let values = hms(
        components.seconds.as_deref(),
        components.minutes.as_deref(),
        components.hours.as_deref(),
        components.days.as_deref(),
    )
    .with_context(|| "Failed to build values")?;

    info!("Built {} value(s)", values.len());

    let rendered = match format {
        OutputFormat::Text => lines(&format_hms_vec(&values)),
        OutputFormat::Json => serde_json::to_string_pretty(&values)
            .with_context(|| "Failed to serialize built values")?,
    };

    emit(&rendered, output)
}
