//! Time window for which ticks are planned.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::Serialize;

use crate::TimeRangeError;

/// Milliseconds since the Unix epoch (UTC).
pub type EpochMillis = i64;

/// Formats accepted for timestamps without an explicit offset (read as UTC).
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// A non-empty window between two UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a new time range, validating that start < end.
    ///
    /// # Errors
    ///
    /// Returns an error if start >= end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if start >= end {
            return Err(TimeRangeError::Empty {
                start: start.timestamp_millis(),
                end: end.timestamp_millis(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a time range from epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if either instant is unrepresentable or start >= end.
    pub fn from_millis(start: EpochMillis, end: EpochMillis) -> Result<Self, TimeRangeError> {
        Self::new(instant_from_millis(start)?, instant_from_millis(end)?)
    }

    /// Creates a time range from two timestamp strings.
    ///
    /// See [`TimeRange::parse_instant`] for the accepted forms.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is invalid or start >= end.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeRangeError> {
        Self::new(Self::parse_instant(start)?, Self::parse_instant(end)?)
    }

    /// Parses a single instant.
    ///
    /// Accepts epoch milliseconds (`1520538281000`), RFC 3339 timestamps
    /// (`2018-03-08T19:44:41Z`), ISO timestamps without offset (read as UTC)
    /// and plain dates (`2018-03-08`, UTC midnight).
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches none of the accepted forms.
    pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, TimeRangeError> {
        let input = input.trim();

        if let Ok(millis) = input.parse::<i64>() {
            return instant_from_millis(millis);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(naive.and_utc());
            }
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            .map_err(|e| TimeRangeError::Parse {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the start instant as epoch milliseconds.
    #[must_use]
    pub fn start_millis(&self) -> EpochMillis {
        self.start.timestamp_millis()
    }

    /// Returns the end instant as epoch milliseconds.
    #[must_use]
    pub fn end_millis(&self) -> EpochMillis {
        self.end.timestamp_millis()
    }

    /// Returns the elapsed time between start and end.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns true if the instant lies within the range (inclusive).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.end.format("%Y-%m-%dT%H:%M:%S%.3fZ")
        )
    }
}

fn instant_from_millis(millis: EpochMillis) -> Result<DateTime<Utc>, TimeRangeError> {
    DateTime::from_timestamp_millis(millis).ok_or(TimeRangeError::OutOfRange(millis))
}
