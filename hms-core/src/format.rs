//! Rendering as `[-]H:MM:SS[.fff]`

use crate::constants::{EMPTY_LABEL, MISSING_LABEL};
use crate::decompose::Decomposed;
use crate::types::{Hms, HmsVec};
use core::fmt;

/// Format a single value
///
/// - missing values render as `NA`, infinite ones as `Inf` / `-Inf`
/// - hours have no leading zero and are never wrapped at 24
/// - minutes and seconds always take two digits
/// - a fraction is written with exactly the digits needed to reproduce it
///
/// ```
/// use hms_core::{format_hms, Hms};
///
/// assert_eq!(format_hms(Hms::from_seconds(45_026.0)), "12:30:26");
/// assert_eq!(format_hms(Hms::from_seconds(-90_000.0)), "-25:00:00");
/// ```
pub fn format_hms(value: Hms) -> String {
    let seconds = value.seconds();

    let Some(parts) = Decomposed::from_hms(value) else {
        return if seconds.is_nan() {
            MISSING_LABEL.to_string()
        } else if seconds.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    };

    let sign = if parts.negative { "-" } else { "" };
    let fraction = fraction_digits(seconds.abs(), parts.split_seconds);

    format!(
        "{}{}:{:02}:{:02}{}",
        sign, parts.hours, parts.minute_of_hour, parts.second_of_minute, fraction
    )
}

// Shortest round-trip rendering of the magnitude never uses an exponent, so
// its decimal tail is the minimal exact fraction.
fn fraction_digits(abs: f64, split_seconds: f64) -> String {
    if split_seconds == 0.0 {
        return String::new();
    }

    let rendered = abs.to_string();
    match rendered.split_once('.') {
        Some((_, digits)) => format!(".{digits}"),
        None => String::new(),
    }
}

/// Format every entry and align them to a common width
///
/// The part up to the first colon is right-justified and the rest
/// left-justified, so colons line up across entries with different hour
/// widths. An empty sequence renders as the single label `hms()`.
pub fn format_hms_vec(values: &HmsVec) -> Vec<String> {
    if values.is_empty() {
        return vec![EMPTY_LABEL.to_string()];
    }
    format_cells(values)
}

/// Format every entry aligned, without the empty-sequence label
pub(crate) fn format_cells(values: &HmsVec) -> Vec<String> {
    let formatted: Vec<String> = values.iter().map(format_hms).collect();

    let split: Vec<(&str, &str)> = formatted
        .iter()
        .map(|s| match s.find(':') {
            Some(pos) => s.split_at(pos),
            None => (s.as_str(), ""),
        })
        .collect();

    let head_width = split.iter().map(|(h, _)| h.len()).max().unwrap_or(0);
    let tail_width = split.iter().map(|(_, t)| t.len()).max().unwrap_or(0);

    split
        .iter()
        .map(|(head, tail)| format!("{head:>head_width$}{tail:<tail_width$}"))
        .collect()
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_hms(*self))
    }
}

impl fmt::Display for HmsVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = format_hms_vec(self);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
