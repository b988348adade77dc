//! Breakdown of a value into clock components

use crate::types::Hms;
use core::fmt;

/// Whole hours of a decomposed value, never wrapped at 24
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hours {
    /// Hour count that fits in a `u64`
    Count(u64),

    /// Decimal digits of a larger hour count
    Digits(String),
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hours::Count(n) => write!(f, "{}", n),
            Hours::Digits(digits) => f.write_str(digits),
        }
    }
}

/// Clock components of a finite value
///
/// Computed from the absolute count of seconds; the sign is tracked on its
/// own so that `-0` keeps it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposed {
    /// Whether the value carries a negative sign
    pub negative: bool,

    /// Whole hours
    pub hours: Hours,

    /// Minute of the hour (0-59)
    pub minute_of_hour: u8,

    /// Second of the minute (0-59)
    pub second_of_minute: u8,

    /// Remainder below one second, in `[0, 1)`
    pub split_seconds: f64,
}

impl Decomposed {
    /// Decompose `value`; `None` for missing or infinite values
    ///
    /// The components are exact for every finite magnitude.
    pub fn from_hms(value: Hms) -> Option<Self> {
        let seconds = value.seconds();
        if !seconds.is_finite() {
            return None;
        }

        let abs = seconds.abs();
        let whole = abs.floor();

        // Integer division keeps the components exact; float division can
        // round 3599.9999999999995 / 3600 up to a whole hour.
        let (hours, remainder) = if whole < u64::MAX as f64 {
            let w = whole as u64;
            (Hours::Count(w / 3_600), (w % 3_600) as u32)
        } else {
            // Integral at this magnitude, and `{:.0}` prints every digit.
            let (quotient, remainder) = div_rem_digits(&format!("{:.0}", whole), 3_600);
            let hours = match quotient.parse::<u64>() {
                Ok(n) => Hours::Count(n),
                Err(_) => Hours::Digits(quotient),
            };
            (hours, remainder)
        };

        Some(Self {
            negative: seconds.is_sign_negative(),
            hours,
            minute_of_hour: (remainder / 60) as u8,
            second_of_minute: (remainder % 60) as u8,
            split_seconds: abs - whole,
        })
    }
}

/// Long division of a decimal digit string by a small divisor
pub(crate) fn div_rem_digits(digits: &str, divisor: u32) -> (String, u32) {
    let mut quotient = String::with_capacity(digits.len());
    let mut remainder = 0u32;

    for b in digits.bytes() {
        let acc = remainder * 10 + u32::from(b - b'0');
        let q = acc / divisor;
        remainder = acc % divisor;
        if q > 0 || !quotient.is_empty() {
            quotient.push(char::from(b'0' + q as u8));
        }
    }

    if quotient.is_empty() {
        quotient.push('0');
    }
    (quotient, remainder)
}

/// `digits * factor + addend` on a decimal digit string
pub(crate) fn mul_add_digits(digits: &str, factor: u32, addend: u64) -> String {
    let mut reversed = Vec::with_capacity(digits.len() + 8);
    let mut carry = addend;

    for b in digits.bytes().rev() {
        let acc = u64::from(b - b'0') * u64::from(factor) + carry;
        reversed.push(b'0' + (acc % 10) as u8);
        carry = acc / 10;
    }
    while carry > 0 {
        reversed.push(b'0' + (carry % 10) as u8);
        carry /= 10;
    }

    reversed.iter().rev().map(|&b| char::from(b)).collect()
}
