//! Constants for time-of-day values

/// The only unit a value is ever stored in
pub const UNITS: &str = "secs";

/// Seconds per minute
pub const SECS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECS_PER_HOUR: f64 = 3_600.0;

/// Seconds per day
pub const SECS_PER_DAY: f64 = 86_400.0;

/// Rendering of a missing value, also accepted by the parser
pub const MISSING_LABEL: &str = "NA";

/// Rendering of an empty sequence
pub const EMPTY_LABEL: &str = "hms()";

/// Maximum number of offending inputs named in a parse warning or error
pub const MAX_REPORTED_FAILURES: usize = 5;

/// Component arguments accepted by the constructor, least significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
}

impl Component {
    /// Returns the number of seconds in one unit of this component
    pub const fn multiplier(&self) -> f64 {
        match self {
            Component::Seconds => 1.0,
            Component::Minutes => SECS_PER_MINUTE,
            Component::Hours => SECS_PER_HOUR,
            Component::Days => SECS_PER_DAY,
        }
    }

    /// Argument name used in error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Component::Seconds => "seconds",
            Component::Minutes => "minutes",
            Component::Hours => "hours",
            Component::Days => "days",
        }
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
