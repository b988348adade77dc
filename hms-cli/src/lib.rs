//! Library entry for hms-cli used by integration tests and embedding.

pub mod commands;

use anyhow::{Context, Result};
use hms_core::CoercionOptions;

// Re-export commands for convenience
pub use commands::*;

/// Shared output format for every command
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One value per line, aligned
    #[default]
    Text,
    /// A JSON array, `null` for missing values
    Json,
}

/// Resolve the timezone settings given on the command line or environment
///
/// `--default-tz` names any IANA zone; `--legacy-utc` forces UTC.
pub fn coercion_options(default_tz: Option<&str>, legacy_utc: bool) -> Result<CoercionOptions> {
    match default_tz {
        Some(name) => CoercionOptions::from_timezone_name(name)
            .with_context(|| format!("Invalid default timezone: {}", name)),
        None if legacy_utc => Ok(CoercionOptions::legacy_utc()),
        None => Ok(CoercionOptions::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_options() {
        assert_eq!(coercion_options(None, false).unwrap(), CoercionOptions::new());
        assert_eq!(
            coercion_options(None, true).unwrap(),
            CoercionOptions::legacy_utc()
        );
        assert!(coercion_options(Some("Europe/Berlin"), false)
            .unwrap()
            .default_timezone
            .is_some());
        assert!(coercion_options(Some("Nowhere/Special"), false).is_err());
    }
}
