//! Core types for time-of-day values

use crate::constants::{SECS_PER_HOUR, SECS_PER_MINUTE, UNITS};
use core::iter::Sum;
use core::ops::{Add, Div, Index, Mul, Neg, Range, Sub};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "logging")]
use tracing::warn;

/// A time of day, stored as seconds since midnight
///
/// The count is signed, may carry a fraction and is never wrapped at 24
/// hours, so `Hms::from_seconds(90_000.0)` is `25:00:00`. A missing value is
/// stored as `NaN` and stays missing through arithmetic and comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Hms(f64);

impl Hms {
    /// The missing value
    pub const MISSING: Hms = Hms(f64::NAN);

    /// Midnight
    pub const ZERO: Hms = Hms(0.0);

    /// Wrap a raw count of seconds
    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Build a value from clock components
    pub fn from_hms(hours: f64, minutes: f64, seconds: f64) -> Self {
        Self(hours * SECS_PER_HOUR + minutes * SECS_PER_MINUTE + seconds)
    }

    /// Raw count of seconds (`NaN` when missing)
    pub const fn seconds(&self) -> f64 {
        self.0
    }

    /// Check if the value is missing
    pub fn is_missing(&self) -> bool {
        self.0.is_nan()
    }

    /// Check if the value carries a negative sign, including `-0`
    pub fn is_negative(&self) -> bool {
        !self.is_missing() && self.0.is_sign_negative()
    }

    /// Absolute value
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// The storage unit, always `"secs"`
    pub fn units(&self) -> &'static str {
        UNITS
    }

    /// Unit setter kept for API parity: `"secs"` is a no-op, anything else
    /// logs a warning and leaves the value unchanged
    pub fn with_units(self, units: &str) -> Self {
        check_units(units);
        self
    }
}

fn check_units(units: &str) {
    if units != UNITS {
        #[cfg(feature = "logging")]
        warn!(
            "hms values are always stored in {}, ignoring units {:?}",
            UNITS, units
        );
    }
}

impl From<f64> for Hms {
    fn from(seconds: f64) -> Self {
        Self(seconds)
    }
}

impl From<i64> for Hms {
    fn from(seconds: i64) -> Self {
        Self(seconds as f64)
    }
}

impl From<Hms> for f64 {
    fn from(value: Hms) -> Self {
        value.0
    }
}

impl Add for Hms {
    type Output = Hms;

    fn add(self, rhs: Hms) -> Hms {
        Hms(self.0 + rhs.0)
    }
}

impl Sub for Hms {
    type Output = Hms;

    fn sub(self, rhs: Hms) -> Hms {
        Hms(self.0 - rhs.0)
    }
}

impl Neg for Hms {
    type Output = Hms;

    fn neg(self) -> Hms {
        Hms(-self.0)
    }
}

impl Mul<f64> for Hms {
    type Output = Hms;

    fn mul(self, rhs: f64) -> Hms {
        Hms(self.0 * rhs)
    }
}

impl Div<f64> for Hms {
    type Output = Hms;

    fn div(self, rhs: f64) -> Hms {
        Hms(self.0 / rhs)
    }
}

impl Sum for Hms {
    fn sum<I: Iterator<Item = Hms>>(iter: I) -> Hms {
        iter.fold(Hms::ZERO, |acc, v| acc + v)
    }
}

// Missing values travel as `null`; JSON has no NaN.
impl Serialize for Hms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_missing() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Hms {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let seconds = Option::<f64>::deserialize(deserializer)?;
        Ok(seconds.map_or(Hms::MISSING, Hms))
    }
}

/// An immutable sequence of time-of-day values
///
/// Every operation that looks like an update (slicing, selecting,
/// concatenating) returns a new sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HmsVec(Vec<Hms>);

impl HmsVec {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wrap raw counts of seconds
    pub fn from_seconds(seconds: &[f64]) -> Self {
        seconds.iter().copied().map(Hms::from_seconds).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the entry at `index`
    pub fn get(&self, index: usize) -> Option<Hms> {
        self.0.get(index).copied()
    }

    /// Iterate over the entries
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, Hms>> {
        self.0.iter().copied()
    }

    /// Borrow the entries
    pub fn as_slice(&self) -> &[Hms] {
        &self.0
    }

    /// Raw counts of seconds
    pub fn to_seconds(&self) -> Vec<f64> {
        self.iter().map(|v| v.seconds()).collect()
    }

    /// Entries in `range`, clamped to the sequence bounds
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        Self(self.0[start..end].to_vec())
    }

    /// Entries at `indices`, in order; an out-of-range index yields a missing entry
    pub fn select(&self, indices: &[usize]) -> Self {
        indices
            .iter()
            .map(|&i| self.get(i).unwrap_or(Hms::MISSING))
            .collect()
    }

    /// A new sequence holding `self` followed by `other`
    pub fn concat(&self, other: &HmsVec) -> Self {
        self.iter().chain(other.iter()).collect()
    }

    /// Apply `f` to every entry
    pub fn map<F: FnMut(Hms) -> Hms>(&self, f: F) -> Self {
        self.iter().map(f).collect()
    }

    /// The storage unit, always `"secs"`
    pub fn units(&self) -> &'static str {
        UNITS
    }

    /// Unit setter, see [`Hms::with_units`]
    pub fn with_units(self, units: &str) -> Self {
        check_units(units);
        self
    }
}

impl From<Vec<Hms>> for HmsVec {
    fn from(values: Vec<Hms>) -> Self {
        Self(values)
    }
}

impl FromIterator<Hms> for HmsVec {
    fn from_iter<I: IntoIterator<Item = Hms>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for HmsVec {
    type Item = Hms;
    type IntoIter = std::vec::IntoIter<Hms>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HmsVec {
    type Item = Hms;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, Hms>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for HmsVec {
    type Output = Hms;

    fn index(&self, index: usize) -> &Hms {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_propagates_through_arithmetic() {
        let sum = Hms::from_seconds(10.0) + Hms::MISSING;
        assert!(sum.is_missing());
        assert!((-Hms::MISSING).is_missing());
        assert!((Hms::MISSING * 2.0).is_missing());
    }

    #[test]
    fn test_missing_is_unordered() {
        let a = Hms::from_seconds(1.0);
        assert_eq!(a.partial_cmp(&Hms::MISSING), None);
        assert_ne!(Hms::MISSING, Hms::MISSING);
        assert!(a < Hms::from_seconds(2.0));
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        let v = Hms::from_seconds(-0.0);
        assert!(v.is_negative());
        assert!(!Hms::ZERO.is_negative());
        assert!(!Hms::MISSING.is_negative());
    }

    #[test]
    fn test_from_hms() {
        assert_eq!(Hms::from_hms(12.0, 30.0, 26.0).seconds(), 45_026.0);
    }

    #[test]
    fn test_sum() {
        let total: Hms = HmsVec::from_seconds(&[60.0, 120.0, 3.5]).iter().sum();
        assert_eq!(total.seconds(), 183.5);
    }

    #[test]
    fn test_with_units_is_noop() {
        let v = Hms::from_seconds(42.0);
        assert_eq!(v.with_units("secs"), v);
        assert_eq!(v.with_units("mins"), v);
        assert_eq!(v.units(), "secs");
    }

    #[test]
    fn test_slice_and_select() {
        let v = HmsVec::from_seconds(&[1.0, 2.0, 3.0]);

        assert_eq!(v.slice(1..10).to_seconds(), vec![2.0, 3.0]);
        assert!(v.slice(5..7).is_empty());

        let picked = v.select(&[2, 0, 9]);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].seconds(), 3.0);
        assert_eq!(picked[1].seconds(), 1.0);
        assert!(picked[2].is_missing());

        // original untouched
        assert_eq!(v.to_seconds(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_concat() {
        let a = HmsVec::from_seconds(&[1.0]);
        let b = HmsVec::from_seconds(&[2.0, 3.0]);
        let c = a.concat(&b);

        assert_eq!(c.to_seconds(), vec![1.0, 2.0, 3.0]);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_serde_missing_as_null() {
        let v = HmsVec::from_seconds(&[90.0, f64::NAN]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[90.0,null]");

        let back: HmsVec = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].seconds(), 90.0);
        assert!(back[1].is_missing());
    }
}
