//! Error types for tickplan.

use thiserror::Error;

/// Result type alias for tick planning operations.
pub type Result<T> = std::result::Result<T, TickError>;

/// Errors that can occur while planning axis ticks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    /// The zone name is not in the IANA database.
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    /// Invalid time range.
    #[error(transparent)]
    Range(#[from] TimeRangeError),

    /// Calendar arithmetic left the representable date range.
    #[error("Tick instant out of representable range")]
    OutOfRange,
}

/// Error for invalid time ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    /// Start is not strictly before end.
    #[error("Invalid time range: start {start} is not before end {end}")]
    Empty {
        /// The start instant, epoch milliseconds.
        start: i64,
        /// The end instant, epoch milliseconds.
        end: i64,
    },

    /// Epoch milliseconds outside the supported calendar.
    #[error("Instant out of range: {0}")]
    OutOfRange(i64),

    /// Unparseable timestamp.
    #[error("Invalid timestamp '{input}': {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// Parser message.
        reason: String,
    },
}
