//! Error types for hms operations

use crate::coerce::ValueType;
use crate::constants::Component;

/// Errors that can occur while building, parsing or converting values
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HmsError {
    /// Value of a type that has no time-of-day interpretation
    #[error("Can't convert a value of type `{0}` to hms")]
    UnsupportedType(ValueType),

    /// Provided constructor arguments differ in length
    #[error(
        "All provided arguments must have the same length: \
         `{first}` has {first_len} element(s), `{other}` has {other_len}"
    )]
    LengthMismatch {
        /// The first provided argument.
        first: Component,
        /// Its length.
        first_len: usize,
        /// The argument whose length differs.
        other: Component,
        /// Its length.
        other_len: usize,
    },

    /// Text not matching `[-]H:MM:SS[.fff]`
    #[error("Invalid time of day: {0:?}, expected [-]H:MM:SS[.fff]")]
    InvalidFormat(String),

    /// One or more entries of a vectorized parse failed
    #[error("Failed to parse {count} input(s), first offenders: {inputs:?}")]
    ParseFailures {
        /// Number of entries that failed.
        count: usize,
        /// The first offending inputs.
        inputs: Vec<String>,
    },

    /// Timezone name not present in the tz database
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Rounding unit that is zero, negative or not finite
    #[error("Rounding unit must be a positive number of seconds, got {0}")]
    InvalidRoundingUnit(f64),

    /// Table column whose length differs from the table's row count
    #[error("Column `{column}` has {actual} row(s), table has {expected}")]
    ColumnLengthMismatch {
        /// The column being added.
        column: String,
        /// Rows already in the table.
        expected: usize,
        /// Rows in the new column.
        actual: usize,
    },
}
