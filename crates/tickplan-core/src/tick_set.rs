//! Planned ticks and their label formatter.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tickplan_types::{EpochMillis, Granularity};

use crate::TimeScale;

/// Renders tick instants as labels for one granularity in one zone.
///
/// The output depends only on the granularity and zone, never on which
/// ticks were planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFormat {
    granularity: Granularity,
    zone: Tz,
}

impl TickFormat {
    /// Creates a formatter.
    #[must_use]
    pub const fn new(granularity: Granularity, zone: Tz) -> Self {
        Self { granularity, zone }
    }

    /// Returns the granularity the labels are rendered for.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the zone labels are rendered in.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Formats an instant given in epoch milliseconds.
    ///
    /// Instants outside the representable range render as the raw number.
    #[must_use]
    pub fn format(&self, millis: EpochMillis) -> String {
        DateTime::from_timestamp_millis(millis)
            .map_or_else(|| millis.to_string(), |dt| self.format_instant(dt))
    }

    /// Formats an instant.
    #[must_use]
    pub fn format_instant(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.zone)
            .format(self.granularity.label_pattern())
            .to_string()
    }

    /// Returns the formatter as a plain function of epoch milliseconds.
    pub fn as_fn(self) -> impl Fn(EpochMillis) -> String + Send + Sync {
        move |millis| self.format(millis)
    }
}

/// A tick instant paired with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledTick {
    /// Tick instant (UTC).
    pub timestamp: DateTime<Utc>,
    /// Tick instant, epoch milliseconds.
    pub millis: EpochMillis,
    /// Rendered label.
    pub label: String,
}

/// A labeled tick positioned on a horizontal scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    /// Tick instant, epoch milliseconds.
    pub millis: EpochMillis,
    /// Horizontal position in pixels.
    pub x: f64,
    /// Rendered label.
    pub label: String,
}

/// Result of tick planning: ascending tick instants and their formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSet {
    /// Tick instants, epoch milliseconds, strictly ascending.
    pub dates: Vec<EpochMillis>,
    /// Label formatter bound to the chosen granularity.
    pub format: TickFormat,
}

impl TickSet {
    /// Returns the granularity the ticks were planned at.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.format.granularity()
    }

    /// Returns the number of ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the label of every tick, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.dates.iter().map(|&millis| self.format.format(millis)).collect()
    }

    /// Returns every tick with its label.
    #[must_use]
    pub fn ticks(&self) -> Vec<LabeledTick> {
        self.dates
            .iter()
            .filter_map(|&millis| {
                let timestamp = DateTime::from_timestamp_millis(millis)?;
                Some(LabeledTick {
                    timestamp,
                    millis,
                    label: self.format.format_instant(timestamp),
                })
            })
            .collect()
    }

    /// Positions every tick on a horizontal scale.
    #[must_use]
    pub fn place(&self, scale: &TimeScale) -> Vec<AxisTick> {
        self.dates
            .iter()
            .map(|&millis| AxisTick {
                millis,
                x: scale.to_px(millis),
                label: self.format.format(millis),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tickplan_types::TimeRange;

    const TICK: EpochMillis = 1_520_575_200_000; // 2018-03-09T06:00:00Z, midnight in Chicago

    #[test]
    fn test_format_in_zone() {
        let day = TickFormat::new(Granularity::Day, Tz::America__Chicago);
        assert_eq!(day.format(TICK), "Mar 09");

        let utc = TickFormat::new(Granularity::Hour, Tz::UTC);
        assert_eq!(utc.format(TICK), "Mar 09 06:00");

        let month = TickFormat::new(Granularity::Month, Tz::America__Chicago);
        assert_eq!(month.format(TICK), "Mar 2018");

        let year = TickFormat::new(Granularity::Year, Tz::America__Chicago);
        assert_eq!(year.format(TICK), "2018");
    }

    #[test]
    fn test_format_unrepresentable_instant() {
        let format = TickFormat::new(Granularity::Year, Tz::UTC);
        assert_eq!(format.format(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_as_fn() {
        let format = TickFormat::new(Granularity::Day, Tz::America__Chicago).as_fn();
        let labels: Vec<String> = [TICK, TICK + 86_400_000].into_iter().map(format).collect();
        assert_eq!(labels, vec!["Mar 09", "Mar 10"]);
    }

    #[test]
    fn test_ticks_serialize() {
        let set = TickSet {
            dates: vec![TICK],
            format: TickFormat::new(Granularity::Day, Tz::America__Chicago),
        };

        let json = serde_json::to_value(set.ticks()).unwrap();
        assert_eq!(json[0]["millis"], TICK);
        assert_eq!(json[0]["label"], "Mar 09");
        assert_eq!(json[0]["timestamp"], "2018-03-09T06:00:00Z");
    }

    #[test]
    fn test_place_on_scale() {
        let range = TimeRange::from_millis(TICK - 86_400_000, TICK + 86_400_000).unwrap();
        let set = TickSet {
            dates: vec![TICK - 43_200_000, TICK],
            format: TickFormat::new(Granularity::Hour, Tz::UTC),
        };

        let placed = set.place(&TimeScale::new(&range, 200.0));
        assert_relative_eq!(placed[0].x, 50.0);
        assert_relative_eq!(placed[1].x, 100.0);
        assert_eq!(placed[1].label, "Mar 09 06:00");
    }
}
