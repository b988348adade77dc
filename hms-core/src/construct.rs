//! Construction from component sequences

use crate::constants::Component;
use crate::error::HmsError;
use crate::types::{Hms, HmsVec};

#[cfg(feature = "logging")]
use tracing::debug;

/// Build a sequence of values from parallel component sequences
///
/// Every argument is optional. Provided arguments must all have the same
/// length (no broadcasting); each is scaled by its unit and the results are
/// summed elementwise. With no arguments the result is an empty sequence.
///
/// ```
/// use hms_core::hms;
///
/// let v = hms(Some(&[26.0]), Some(&[30.0]), Some(&[12.0]), None).unwrap();
/// assert_eq!(v[0].seconds(), 45_026.0);
/// ```
pub fn hms(
    seconds: Option<&[f64]>,
    minutes: Option<&[f64]>,
    hours: Option<&[f64]>,
    days: Option<&[f64]>,
) -> Result<HmsVec, HmsError> {
    combine(&[
        (Component::Seconds, seconds),
        (Component::Minutes, minutes),
        (Component::Hours, hours),
        (Component::Days, days),
    ])
}

fn combine(args: &[(Component, Option<&[f64]>)]) -> Result<HmsVec, HmsError> {
    let provided: Vec<(Component, &[f64])> = args
        .iter()
        .filter_map(|(component, values)| values.map(|v| (*component, v)))
        .collect();

    let Some(&(first, first_values)) = provided.first() else {
        return Ok(HmsVec::new());
    };

    for &(other, values) in &provided[1..] {
        if values.len() != first_values.len() {
            return Err(HmsError::LengthMismatch {
                first,
                first_len: first_values.len(),
                other,
                other_len: values.len(),
            });
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Combining {} component(s) of length {}",
        provided.len(),
        first_values.len()
    );

    // Start from the first provided term so that a lone `-0` keeps its sign.
    Ok((0..first_values.len())
        .map(|i| {
            let total = provided[1..]
                .iter()
                .fold(first_values[i] * first.multiplier(), |acc, (c, v)| {
                    acc + v[i] * c.multiplier()
                });
            Hms::from_seconds(total)
        })
        .collect())
}

/// Builder for constructing sequences component by component
#[derive(Debug, Clone, Default)]
pub struct HmsBuilder {
    seconds: Option<Vec<f64>>,
    minutes: Option<Vec<f64>>,
    hours: Option<Vec<f64>>,
    days: Option<Vec<f64>>,
}

impl HmsBuilder {
    /// Create a builder with no components
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seconds component
    pub fn seconds(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.seconds = Some(values.into());
        self
    }

    /// Set the minutes component
    pub fn minutes(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.minutes = Some(values.into());
        self
    }

    /// Set the hours component
    pub fn hours(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.hours = Some(values.into());
        self
    }

    /// Set the days component
    pub fn days(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.days = Some(values.into());
        self
    }

    /// Validate the components and build the sequence
    pub fn build(&self) -> Result<HmsVec, HmsError> {
        hms(
            self.seconds.as_deref(),
            self.minutes.as_deref(),
            self.hours.as_deref(),
            self.days.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_empty() {
        let v = hms(None, None, None, None).unwrap();
        assert!(v.is_empty());
        assert!(HmsBuilder::new().build().unwrap().is_empty());
    }

    #[test]
    fn test_all_components() {
        let v = HmsBuilder::new()
            .seconds([1.0, 0.0])
            .minutes([2.0, 0.0])
            .hours([3.0, 0.0])
            .days([1.0, 2.0])
            .build()
            .unwrap();

        assert_eq!(v.to_seconds(), vec![86_400.0 + 3.0 * 3_600.0 + 120.0 + 1.0, 172_800.0]);
    }

    #[test]
    fn test_gaps_between_components_allowed() {
        let v = hms(Some(&[5.0]), None, Some(&[1.0]), None).unwrap();
        assert_eq!(v[0].seconds(), 3_605.0);
    }

    #[test]
    fn test_length_mismatch() {
        let err = hms(Some(&[1.0, 2.0]), Some(&[1.0]), None, None).unwrap_err();

        assert_eq!(
            err,
            HmsError::LengthMismatch {
                first: Component::Seconds,
                first_len: 2,
                other: Component::Minutes,
                other_len: 1,
            }
        );
    }

    #[test]
    fn test_no_wraparound() {
        let v = HmsBuilder::new().hours([25.0]).build().unwrap();
        assert_eq!(v[0].seconds(), 90_000.0);
    }

    #[test]
    fn test_missing_component_propagates() {
        let v = hms(Some(&[1.0, f64::NAN]), Some(&[1.0, 1.0]), None, None).unwrap();
        assert_eq!(v[0].seconds(), 61.0);
        assert!(v[1].is_missing());
    }

    #[test]
    fn test_negative_zero_preserved() {
        let v = HmsBuilder::new().seconds([-0.0]).build().unwrap();
        assert!(v[0].is_negative());
    }
}
