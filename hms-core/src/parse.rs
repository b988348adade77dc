//! Parsing of `[-]H:MM:SS[.fff]` text
//!
//! Accepted input, after trimming surrounding whitespace:
//!
//! ```text
//! -?[0-9]+:[0-9]{2}:[0-9]{2}(\.[0-9]+)?
//! ```
//!
//! Minutes and seconds must be below 60. The literal `NA` is the rendering
//! of a missing value and parses back to one without counting as a failure.

use crate::constants::{MAX_REPORTED_FAILURES, MISSING_LABEL};
use crate::decompose::mul_add_digits;
use crate::error::HmsError;
use crate::types::{Hms, HmsVec};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// An input that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// Position of the input in the call
    pub index: usize,

    /// The offending text
    pub input: String,
}

/// Outcome of a lenient vectorized parse
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// One value per input, missing where parsing failed
    pub values: HmsVec,

    /// Inputs that could not be parsed
    pub failures: Vec<ParseFailure>,
}

impl ParseReport {
    /// Check if every input parsed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into the values, failing if any input did not parse
    pub fn into_result(self) -> Result<HmsVec, HmsError> {
        if self.failures.is_empty() {
            return Ok(self.values);
        }

        Err(HmsError::ParseFailures {
            count: self.failures.len(),
            inputs: self
                .failures
                .into_iter()
                .take(MAX_REPORTED_FAILURES)
                .map(|f| f.input)
                .collect(),
        })
    }
}

/// Parse a single value, failing on non-conforming text
pub fn parse_hms_strict(text: &str) -> Result<Hms, HmsError> {
    let trimmed = text.trim();
    if trimmed == MISSING_LABEL {
        return Ok(Hms::MISSING);
    }

    Clock::scan(trimmed)
        .map(|clock| clock.to_hms())
        .ok_or_else(|| HmsError::InvalidFormat(text.to_string()))
}

/// Parse a single value, yielding a missing value on non-conforming text
pub fn parse_hms(text: &str) -> Hms {
    parse_hms_strict(text).unwrap_or(Hms::MISSING)
}

/// Parse every input, substituting missing values for failures
///
/// Failures are collected in the report and summarised in a single warning.
pub fn parse_hms_vec<I, S>(inputs: I) -> ParseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let report = scan_all(inputs);

    #[cfg(feature = "logging")]
    {
        debug!("Parsed {} input(s)", report.values.len());
        if !report.failures.is_empty() {
            let shown: Vec<&str> = report
                .failures
                .iter()
                .take(MAX_REPORTED_FAILURES)
                .map(|f| f.input.as_str())
                .collect();
            warn!(
                "{} of {} input(s) failed to parse, e.g. {:?}",
                report.failures.len(),
                report.values.len(),
                shown
            );
        }
    }

    report
}

/// Parse every input, failing the whole call if any input does not parse
pub fn parse_hms_vec_strict<I, S>(inputs: I) -> Result<HmsVec, HmsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    scan_all(inputs).into_result()
}

fn scan_all<I, S>(inputs: I) -> ParseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();
    let mut failures = Vec::new();

    for (index, input) in inputs.into_iter().enumerate() {
        let input = input.as_ref();
        match parse_hms_strict(input) {
            Ok(value) => values.push(value),
            Err(_) => {
                values.push(Hms::MISSING);
                failures.push(ParseFailure {
                    index,
                    input: input.to_string(),
                });
            }
        }
    }

    ParseReport {
        values: HmsVec::from(values),
        failures,
    }
}

/// Digit groups of a conforming input
struct Clock<'a> {
    negative: bool,
    hours: &'a str,
    minutes: u64,
    seconds: u64,
    fraction: Option<&'a str>,
}

impl<'a> Clock<'a> {
    fn scan(text: &'a str) -> Option<Self> {
        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut parts = rest.splitn(3, ':');
        let hours = parts.next()?;
        let minutes = parts.next()?;
        let tail = parts.next()?;

        let (seconds, fraction) = match tail.split_once('.') {
            Some((seconds, fraction)) => (seconds, Some(fraction)),
            None => (tail, None),
        };

        if !is_digits(hours) || hours.is_empty() {
            return None;
        }
        if let Some(fraction) = fraction {
            if fraction.is_empty() || !is_digits(fraction) {
                return None;
            }
        }

        Some(Self {
            negative,
            hours,
            minutes: two_digits(minutes).filter(|m| *m < 60)?,
            seconds: two_digits(seconds).filter(|s| *s < 60)?,
            fraction,
        })
    }

    fn to_hms(&self) -> Hms {
        let whole = self
            .hours
            .parse::<u64>()
            .ok()
            .and_then(|h| h.checked_mul(3_600))
            .and_then(|s| s.checked_add(self.minutes * 60 + self.seconds));

        let magnitude = match (whole, self.fraction) {
            (Some(whole), None) => whole as f64,
            (whole, fraction) => {
                let whole = match whole {
                    Some(whole) => whole.to_string(),
                    None => mul_add_digits(self.hours, 3_600, self.minutes * 60 + self.seconds),
                };
                let text = match fraction {
                    Some(fraction) => format!("{whole}.{fraction}"),
                    None => whole,
                };
                // Correctly rounded, so formatter output comes back bit for bit.
                text.parse::<f64>().unwrap_or(f64::NAN)
            }
        };

        if self.negative {
            Hms::from_seconds(-magnitude)
        } else {
            Hms::from_seconds(magnitude)
        }
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn two_digits(s: &str) -> Option<u64> {
    if s.len() != 2 || !is_digits(s) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse_hms("12:30:26").seconds(), 45_026.0);
        assert_eq!(parse_hms("0:00:00").seconds(), 0.0);
        assert_eq!(parse_hms("25:00:00").seconds(), 90_000.0);
    }

    #[test]
    fn test_parse_sign_applies_to_whole_value() {
        assert_eq!(parse_hms("-12:30:26").seconds(), -45_026.0);
        assert!(parse_hms("-0:00:00").is_negative());
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_hms("0:00:01.5").seconds(), 1.5);
        assert_eq!(parse_hms("12:30:26.1").seconds(), 45_026.1);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_hms("  1:00:00\t").seconds(), 3_600.0);
    }

    #[test]
    fn test_parse_missing_label() {
        assert!(parse_hms_strict("NA").unwrap().is_missing());
        assert!(parse_hms_vec([" NA "]).is_clean());
    }

    #[test]
    fn test_parse_rejects() {
        for bad in [
            "not-a-time",
            "",
            "12:30",
            "12:3:26",
            "12:30:260",
            "12:60:00",
            "12:30:60",
            "+1:00:00",
            "1:00:00.",
            "1:00:00.5x",
            "a1:00:00",
            "1:00:00:00",
            "--1:00:00",
            ":00:00",
        ] {
            assert!(parse_hms(bad).is_missing(), "accepted {bad:?}");
            assert!(matches!(
                parse_hms_strict(bad),
                Err(HmsError::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn test_parse_vec_reports_failures() {
        let report = parse_hms_vec(["1:00:00", "bogus", "0:00:30", "1:2:3"]);

        assert_eq!(report.values.len(), 4);
        assert_eq!(report.values[0].seconds(), 3_600.0);
        assert!(report.values[1].is_missing());
        assert_eq!(report.values[2].seconds(), 30.0);
        assert!(report.values[3].is_missing());

        assert_eq!(
            report.failures,
            vec![
                ParseFailure {
                    index: 1,
                    input: "bogus".to_string()
                },
                ParseFailure {
                    index: 3,
                    input: "1:2:3".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_vec_strict() {
        let ok = parse_hms_vec_strict(vec!["1:00:00", "2:00:00"]).unwrap();
        assert_eq!(ok.to_seconds(), vec![3_600.0, 7_200.0]);

        let err = parse_hms_vec_strict(vec!["1:00:00", "x"]).unwrap_err();
        assert_eq!(
            err,
            HmsError::ParseFailures {
                count: 1,
                inputs: vec!["x".to_string()]
            }
        );
    }

    #[test]
    fn test_report_into_result() {
        assert!(parse_hms_vec(["0:00:01"]).into_result().is_ok());
        assert!(parse_hms_vec(["nope"]).into_result().is_err());
    }

    #[test]
    fn test_parse_vec_strict_caps_reported_inputs() {
        let inputs: Vec<String> = (0..8).map(|i| format!("bad{}", i)).collect();
        match parse_hms_vec_strict(&inputs).unwrap_err() {
            HmsError::ParseFailures { count, inputs } => {
                assert_eq!(count, 8);
                assert_eq!(inputs.len(), MAX_REPORTED_FAILURES);
                assert_eq!(inputs[0], "bad0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_hours_beyond_u64_seconds() {
        assert_eq!(parse_hms("5555555555555555:33:20").seconds(), 2.0e19);
        assert_eq!(
            parse_hms("-5555555555555555:33:20.5").seconds(),
            -20_000_000_000_000_000_000.5
        );
    }

    #[test]
    fn test_parse_huge_hours() {
        let v = parse_hms("99999999999999999999999:00:00");
        assert!(v.seconds() > 3.5e26);
    }
}
