//! Calendar-aware span measurement.

use chrono::{Datelike, Days, Months};
use chrono_tz::Tz;
use serde::Serialize;
use tickplan_types::TimeRange;

use crate::calendar::{resolve, to_local};

/// Whole calendar units elapsed between the start and end of a range,
/// counted on the wall clock of a time zone.
///
/// Days and months are measured by stepping the local start time forward,
/// so a day that loses an hour to daylight saving still counts as one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SpanMeasure {
    /// Exact elapsed milliseconds.
    pub millis: i64,
    /// Elapsed whole hours.
    pub hours: i64,
    /// Largest n such that start + n local days <= end.
    pub days: i64,
    /// Largest n such that start + n local months <= end.
    pub months: i64,
    /// Whole years (`months / 12`).
    pub years: i64,
}

impl SpanMeasure {
    /// Measures the range on the zone's calendar.
    ///
    /// Returns `None` if the arithmetic leaves the representable date range.
    #[must_use]
    pub fn measure(range: &TimeRange, zone: &Tz) -> Option<Self> {
        let start = to_local(zone, range.start());
        let end = to_local(zone, range.end());

        let mut days = (end.date() - start.date()).num_days().max(0);
        while days > 0
            && resolve(zone, start.checked_add_days(Days::new(days.unsigned_abs()))?)?
                > range.end()
        {
            days -= 1;
        }

        let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
            + i64::from(end.month())
            - i64::from(start.month());
        months = months.max(0);
        while months > 0
            && resolve(
                zone,
                start.checked_add_months(Months::new(u32::try_from(months).ok()?))?,
            )? > range.end()
        {
            months -= 1;
        }

        let elapsed = range.duration();
        Some(Self {
            millis: elapsed.num_milliseconds(),
            hours: elapsed.num_hours(),
            days,
            months,
            years: months / 12,
        })
    }
}

impl std::fmt::Display for SpanMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}h / {}d / {}mo / {}y",
            self.hours, self.days, self.months, self.years
        )
    }
}
