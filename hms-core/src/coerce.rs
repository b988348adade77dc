//! Conversions between time-of-day values and other representations

use crate::error::HmsError;
use crate::parse::parse_hms_strict;
use crate::types::{Hms, HmsVec};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use core::fmt;

#[cfg(feature = "logging")]
use tracing::warn;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;
const MAX_NANOS: u32 = 999_999_999;

/// Options consulted when reading a time of day off a timestamp
///
/// `default_timezone` replaces the timestamp's own zone when no zone is
/// passed explicitly. Setting it to UTC reproduces the legacy behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoercionOptions {
    /// Zone used when none is given; `None` means the timestamp's own zone
    pub default_timezone: Option<Tz>,
}

impl CoercionOptions {
    /// Use each timestamp's own zone
    pub fn new() -> Self {
        Self::default()
    }

    /// Always read timestamps in UTC unless a zone is given
    pub fn legacy_utc() -> Self {
        Self::with_default_timezone(Tz::UTC)
    }

    /// Read timestamps in `tz` unless a zone is given
    pub fn with_default_timezone(tz: Tz) -> Self {
        Self {
            default_timezone: Some(tz),
        }
    }

    /// Resolve an IANA zone name such as `Europe/Berlin`
    pub fn from_timezone_name(name: &str) -> Result<Self, HmsError> {
        parse_timezone(name).map(Self::with_default_timezone)
    }
}

/// Resolve an IANA zone name
pub fn parse_timezone(name: &str) -> Result<Tz, HmsError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| HmsError::UnknownTimezone(name.to_string()))
}

/// Interpret `value` as an offset from the UTC epoch at midnight
///
/// Returns `None` for missing or infinite values and for magnitudes chrono
/// cannot represent.
pub fn to_timestamp(value: Hms) -> Option<DateTime<Utc>> {
    let seconds = value.seconds();
    if !seconds.is_finite() {
        return None;
    }

    let mut whole = seconds.floor();
    let mut nanos = ((seconds - whole) * NANOS_PER_SEC).round();
    if nanos >= NANOS_PER_SEC {
        whole += 1.0;
        nanos = 0.0;
    }
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp(whole as i64, nanos as u32)
}

/// Convert every entry with [`to_timestamp`]
pub fn to_timestamps(values: &HmsVec) -> Vec<Option<DateTime<Utc>>> {
    values.iter().map(to_timestamp).collect()
}

/// Read the time of day off a timestamp
///
/// The timestamp is converted into the civil time of the resolved zone
/// before its clock fields are read, so DST and historical offsets apply.
/// Zone resolution: `tz`, then `options.default_timezone`, then the
/// timestamp's own zone. A leap second such as `23:59:60.5` reads as
/// `23:59:59.999999999`.
pub fn from_timestamp<T: TimeZone>(
    ts: &DateTime<T>,
    tz: Option<Tz>,
    options: &CoercionOptions,
) -> Hms {
    match tz.or(options.default_timezone) {
        Some(zone) => clock_of(&ts.with_timezone(&zone)),
        None => clock_of(ts),
    }
}

// A leap second carries `nanosecond() >= 1e9`; it is held at the last
// nanosecond of the minute so the result stays below 24:00:00.
fn clock_of<T: TimeZone>(ts: &DateTime<T>) -> Hms {
    let time = ts.time();
    let nanos = time.nanosecond().min(MAX_NANOS);
    Hms::from_hms(
        f64::from(time.hour()),
        f64::from(time.minute()),
        f64::from(time.second()) + f64::from(nanos) / NANOS_PER_SEC,
    )
}

/// Convert a chrono duration, keeping nanoseconds
pub fn from_duration(duration: Duration) -> Hms {
    Hms::from_seconds(
        duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / NANOS_PER_SEC,
    )
}

/// Source values a time of day can be read from
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw count of seconds
    Seconds(f64),
    /// Whole count of seconds
    Int(i64),
    /// `[-]H:MM:SS[.fff]` text
    Text(String),
    /// Calendar timestamp
    Timestamp(DateTime<FixedOffset>),
    /// Elapsed duration
    Duration(Duration),
    /// Already a time of day
    Hms(Hms),
    /// Boolean
    Boolean(bool),
    /// Calendar date without a time
    Date(NaiveDate),
    /// Raw bytes
    Binary(Vec<u8>),
    /// Absent value
    Null,
}

/// Type tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `f64`
    Seconds,
    /// `i64`
    Int,
    /// Text
    Text,
    /// Timestamp
    Timestamp,
    /// Duration
    Duration,
    /// Time of day
    Hms,
    /// Boolean
    Boolean,
    /// Date
    Date,
    /// Bytes
    Binary,
    /// Null
    Null,
}

impl ValueType {
    /// Type name used in messages
    pub const fn name(&self) -> &'static str {
        match self {
            ValueType::Seconds => "f64",
            ValueType::Int => "i64",
            ValueType::Text => "text",
            ValueType::Timestamp => "timestamp",
            ValueType::Duration => "duration",
            ValueType::Hms => "hms",
            ValueType::Boolean => "bool",
            ValueType::Date => "date",
            ValueType::Binary => "binary",
            ValueType::Null => "null",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Type tag of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Seconds(_) => ValueType::Seconds,
            Value::Int(_) => ValueType::Int,
            Value::Text(_) => ValueType::Text,
            Value::Timestamp(_) => ValueType::Timestamp,
            Value::Duration(_) => ValueType::Duration,
            Value::Hms(_) => ValueType::Hms,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Date(_) => ValueType::Date,
            Value::Binary(_) => ValueType::Binary,
            Value::Null => ValueType::Null,
        }
    }

    /// Check if this value is already a time of day
    pub fn is_hms(&self) -> bool {
        matches!(self, Value::Hms(_))
    }
}

/// Check if `value` is already a time of day
pub fn is_hms(value: &Value) -> bool {
    value.is_hms()
}

/// Convert a source value into a time of day
///
/// Text that does not parse becomes a missing value with a warning. Types
/// without a time-of-day reading fail with [`HmsError::UnsupportedType`].
pub fn as_hms(value: &Value, options: &CoercionOptions) -> Result<Hms, HmsError> {
    match value {
        Value::Seconds(s) => Ok(Hms::from_seconds(*s)),
        Value::Int(i) => Ok(Hms::from(*i)),
        Value::Text(text) => Ok(parse_hms_strict(text).unwrap_or_else(|_e| {
            #[cfg(feature = "logging")]
            warn!("{}", _e);
            Hms::MISSING
        })),
        Value::Timestamp(ts) => Ok(from_timestamp(ts, None, options)),
        Value::Duration(d) => Ok(from_duration(*d)),
        Value::Hms(h) => Ok(*h),
        Value::Null => Ok(Hms::MISSING),
        other => Err(HmsError::UnsupportedType(other.value_type())),
    }
}

/// Convert every source value, failing on the first unsupported type
pub fn as_hms_vec(values: &[Value], options: &CoercionOptions) -> Result<HmsVec, HmsError> {
    values.iter().map(|v| as_hms(v, options)).collect()
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Seconds(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Hms> for Value {
    fn from(v: Hms) -> Self {
        Value::Hms(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}
