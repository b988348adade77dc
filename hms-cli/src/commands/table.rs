use super::{emit, read_inputs};
use anyhow::{Context, Result};
use hms_core::parse::parse_hms_vec;
use hms_core::table::RecordTable;
use tracing::info;

/// Show inputs next to their parsed seconds and canonical rendering
pub fn execute(values: &[String], input: Option<&str>, output: Option<&str>) -> Result<()> {
    let inputs = read_inputs(values, input)?;
    info!("Tabulating {} value(s)", inputs.len());

    let report = parse_hms_vec(&inputs);
    if !report.is_clean() {
        info!("{} input(s) shown as NA", report.failures.len());
    }

    let seconds = report.values.to_seconds();
    let table = RecordTable::new()
        .with_column("input", inputs)
        .and_then(|t| t.with_column("seconds", seconds))
        .and_then(|t| t.with_column("hms", report.values))
        .with_context(|| "Failed to build table")?;

    emit(&table.to_string(), output)
}
