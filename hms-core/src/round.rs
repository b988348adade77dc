//! Rounding and truncation to a multiple of seconds

use crate::error::HmsError;
use crate::types::{Hms, HmsVec};

fn check_unit(secs: f64) -> Result<(), HmsError> {
    if secs.is_finite() && secs > 0.0 {
        Ok(())
    } else {
        Err(HmsError::InvalidRoundingUnit(secs))
    }
}

/// Round to the nearest multiple of `secs`, ties to even
///
/// ```
/// use hms_core::{round::round_hms, Hms};
///
/// let v = round_hms(Hms::from_seconds(90.0), 60.0).unwrap();
/// assert_eq!(v.seconds(), 120.0);
/// ```
pub fn round_hms(value: Hms, secs: f64) -> Result<Hms, HmsError> {
    check_unit(secs)?;
    Ok(Hms::from_seconds(
        (value.seconds() / secs).round_ties_even() * secs,
    ))
}

/// Truncate toward zero to a multiple of `secs`
pub fn trunc_hms(value: Hms, secs: f64) -> Result<Hms, HmsError> {
    check_unit(secs)?;
    Ok(Hms::from_seconds((value.seconds() / secs).trunc() * secs))
}

/// Round every entry, see [`round_hms`]
pub fn round_hms_vec(values: &HmsVec, secs: f64) -> Result<HmsVec, HmsError> {
    check_unit(secs)?;
    Ok(values.map(|v| Hms::from_seconds((v.seconds() / secs).round_ties_even() * secs)))
}

/// Truncate every entry, see [`trunc_hms`]
pub fn trunc_hms_vec(values: &HmsVec, secs: f64) -> Result<HmsVec, HmsError> {
    check_unit(secs)?;
    Ok(values.map(|v| Hms::from_seconds((v.seconds() / secs).trunc() * secs)))
}
