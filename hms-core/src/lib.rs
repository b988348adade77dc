//! # hms Core
//!
//! Time-of-day values stored as a signed count of seconds since midnight.
//!
//! ## Modules
//!
//! - `constants`: Unit multipliers and fixed labels
//! - `types`: Core types (Hms, HmsVec)
//! - `decompose`: Breakdown into hours, minutes, seconds and fraction
//! - `construct`: Construction from component sequences
//! - `parse`: `H:MM:SS[.fff]` parsing
//! - `format`: `H:MM:SS[.fff]` rendering
//! - `coerce`: Conversions from and to numbers, text and calendar timestamps
//! - `round`: Rounding and truncation to a multiple of seconds
//! - `table`: Column support for record tables

#![warn(missing_docs)]

pub mod coerce;
pub mod constants;
pub mod construct;
pub mod decompose;
pub mod error;
pub mod format;
pub mod parse;
pub mod round;
#[cfg(feature = "table")]
pub mod table;
pub mod types;

// Re-export commonly used types
pub use coerce::{as_hms, is_hms, CoercionOptions, Value, ValueType};
pub use construct::{hms, HmsBuilder};
pub use error::HmsError;
pub use format::{format_hms, format_hms_vec};
pub use parse::{parse_hms, parse_hms_strict, parse_hms_vec, ParseReport};
pub use types::{Hms, HmsVec};

/// Result type alias for hms operations
pub type Result<T> = core::result::Result<T, HmsError>;
