//! Bucket selection and tick generation.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tickplan_types::{
    EpochMillis, Granularity, Result, TickError, TimeRange, TimeUnit, parse_time_zone,
};
use tracing::{debug, trace};

use crate::calendar::{add, floor, resolve, to_local};
use crate::{SpanMeasure, TickFormat, TickSet};

/// Fewest ticks a plan produces.
pub const MIN_TICKS: usize = 3;

/// Most ticks a plan produces.
pub const MAX_TICKS: usize = 7;

const HOUR_MILLIS: i64 = 3_600_000;

/// Upper bound on a span, inclusive, in whole units of [`SpanMeasure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanLimit {
    /// Strictly shorter than this many hours, measured exactly.
    UnderHours(i64),
    /// At most this many whole local days.
    Days(i64),
    /// At most this many whole local months.
    Months(i64),
    /// At most this many whole local years.
    Years(i64),
    /// Any span.
    Unbounded,
}

impl SpanLimit {
    /// Returns true if the span is within the limit.
    #[must_use]
    pub const fn admits(&self, span: &SpanMeasure) -> bool {
        match *self {
            Self::UnderHours(max) => span.millis < max.saturating_mul(HOUR_MILLIS),
            Self::Days(max) => span.days <= max,
            Self::Months(max) => span.months <= max,
            Self::Years(max) => span.years <= max,
            Self::Unbounded => true,
        }
    }
}

impl std::fmt::Display for SpanLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnderHours(max) => write!(f, "< {max} hours"),
            Self::Days(max) => write!(f, "<= {max} days"),
            Self::Months(max) => write!(f, "<= {max} months"),
            Self::Years(max) => write!(f, "<= {max} years"),
            Self::Unbounded => write!(f, "any"),
        }
    }
}

/// How a bucket positions its ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Boundaries of the granularity stepped on the local calendar.
    Calendar,
    /// `ticks` points dividing the span evenly, each floored to the
    /// granularity's boundary.
    Spread {
        /// Number of interior points.
        ticks: usize,
    },
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar => write!(f, "calendar"),
            Self::Spread { ticks } => write!(f, "spread x{ticks}"),
        }
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Bucket {
    /// Largest span this row applies to.
    pub limit: SpanLimit,
    /// Tick granularity.
    pub granularity: Granularity,
    /// Tick positioning.
    pub placement: Placement,
}

impl Bucket {
    const fn calendar(limit: SpanLimit, granularity: Granularity) -> Self {
        Self {
            limit,
            granularity,
            placement: Placement::Calendar,
        }
    }

    const fn spread(limit: SpanLimit, granularity: Granularity, ticks: usize) -> Self {
        Self {
            limit,
            granularity,
            placement: Placement::Spread { ticks },
        }
    }
}

/// Decision table, evaluated in order; the first admitting row wins.
pub const BUCKETS: &[Bucket] = &[
    Bucket::spread(SpanLimit::UnderHours(4), Granularity::Minute, 4),
    Bucket::spread(SpanLimit::Days(2), Granularity::Hour, 4),
    Bucket::calendar(SpanLimit::Days(7), Granularity::Day),
    Bucket::calendar(SpanLimit::Days(14), Granularity::TwoDays),
    Bucket::calendar(SpanLimit::Days(28), Granularity::FourDays),
    Bucket::calendar(SpanLimit::Days(50), Granularity::Week),
    Bucket::calendar(SpanLimit::Days(98), Granularity::TwoWeeks),
    Bucket::calendar(SpanLimit::Months(7), Granularity::Month),
    Bucket::calendar(SpanLimit::Months(14), Granularity::TwoMonths),
    Bucket::calendar(SpanLimit::Months(28), Granularity::FourMonths),
    Bucket::calendar(SpanLimit::Months(42), Granularity::SixMonths),
    Bucket::calendar(SpanLimit::Years(7), Granularity::Year),
    LONG_SPAN,
];

const LONG_SPAN: Bucket = Bucket::spread(SpanLimit::Unbounded, Granularity::Year, MAX_TICKS);

/// Returns the first bucket admitting the span.
#[must_use]
pub fn select_bucket(span: &SpanMeasure) -> &'static Bucket {
    BUCKETS
        .iter()
        .find(|bucket| bucket.limit.admits(span))
        .unwrap_or(&LONG_SPAN)
}

/// First calendar tick for a granularity: a boundary strictly after `start`.
fn first_boundary(granularity: Granularity, start: NaiveDateTime) -> Option<NaiveDateTime> {
    let (floor_to, ahead) = match granularity {
        Granularity::Minute | Granularity::Hour => (granularity.unit(), 1),
        Granularity::Day | Granularity::TwoDays | Granularity::FourDays => (TimeUnit::Day, 1),
        Granularity::Week => (TimeUnit::Week, 1),
        // Two-week ticks run from the start date rather than from Sunday.
        Granularity::TwoWeeks => (TimeUnit::Day, 1),
        Granularity::Month | Granularity::TwoMonths => (TimeUnit::Month, 1),
        Granularity::FourMonths => (TimeUnit::Month, 2),
        Granularity::SixMonths => (TimeUnit::Month, 3),
        Granularity::Year => (TimeUnit::Year, 1),
    };
    add(floor(start, floor_to)?, granularity.unit(), ahead)
}

/// Plans axis ticks in one time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPlanner {
    zone: Tz,
}

impl TickPlanner {
    /// Creates a planner for the zone.
    #[must_use]
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Creates a planner for a zone given by IANA name.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::InvalidTimeZone`] if the name is unknown.
    pub fn for_zone(name: &str) -> Result<Self> {
        Ok(Self::new(parse_time_zone(name)?))
    }

    /// Returns the planner's zone.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Measures the range on this planner's calendar.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::OutOfRange`] if the range cannot be measured.
    pub fn measure(&self, range: &TimeRange) -> Result<SpanMeasure> {
        SpanMeasure::measure(range, &self.zone).ok_or(TickError::OutOfRange)
    }

    /// Plans ticks for the range.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::OutOfRange`] if a tick falls outside the
    /// representable date range.
    pub fn plan(&self, range: &TimeRange) -> Result<TickSet> {
        let span = self.measure(range)?;
        let bucket = select_bucket(&span);
        debug!(
            zone = %self.zone,
            range = %range,
            span = %span,
            granularity = %bucket.granularity,
            placement = %bucket.placement,
            "selected tick bucket"
        );

        let instants = match bucket.placement {
            Placement::Calendar => self.calendar_ticks(range, bucket.granularity)?,
            Placement::Spread { ticks } => self.spread_ticks(range, bucket.granularity, ticks)?,
        };
        trace!(count = instants.len(), "generated ticks");

        Ok(TickSet {
            dates: instants.iter().map(DateTime::timestamp_millis).collect(),
            format: TickFormat::new(bucket.granularity, self.zone),
        })
    }

    /// Boundaries stepped from the first one after start, kept while within
    /// the range, capped at [`MAX_TICKS`], and continued past the end until
    /// there are [`MIN_TICKS`].
    fn calendar_ticks(
        &self,
        range: &TimeRange,
        granularity: Granularity,
    ) -> Result<Vec<DateTime<Utc>>> {
        let anchor = first_boundary(granularity, to_local(&self.zone, range.start()))
            .ok_or(TickError::OutOfRange)?;
        let unit = granularity.unit();
        let step = granularity.step();

        let mut ticks = Vec::with_capacity(MAX_TICKS);
        let mut offset = 0;
        while ticks.len() < MAX_TICKS {
            let local = add(anchor, unit, offset).ok_or(TickError::OutOfRange)?;
            let instant = resolve(&self.zone, local).ok_or(TickError::OutOfRange)?;
            if instant > range.end() && ticks.len() >= MIN_TICKS {
                break;
            }
            ticks.push(instant);
            offset += step;
        }
        Ok(ticks)
    }

    /// Points at `start + k * span / (count + 1)` for `k = 1..=count`, floored
    /// to the granularity. A floored point that does not advance past the
    /// previous tick moves to the next boundary, or is dropped if that does
    /// not advance either.
    fn spread_ticks(
        &self,
        range: &TimeRange,
        granularity: Granularity,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>> {
        let unit = granularity.unit();
        let start = i128::from(range.start_millis());
        let span = i128::from(range.end_millis()) - start;
        let parts = count as i128 + 1;

        let mut ticks: Vec<DateTime<Utc>> = Vec::with_capacity(count.max(MIN_TICKS));
        for k in 1..=count as i128 {
            let millis = EpochMillis::try_from(start + span * k / parts)
                .map_err(|_| TickError::OutOfRange)?;
            let raw = DateTime::from_timestamp_millis(millis).ok_or(TickError::OutOfRange)?;
            let boundary = floor(to_local(&self.zone, raw), unit).ok_or(TickError::OutOfRange)?;

            let mut instant = resolve(&self.zone, boundary).ok_or(TickError::OutOfRange)?;
            if ticks.last().is_some_and(|prev| instant <= *prev) {
                let next = add(boundary, unit, 1).ok_or(TickError::OutOfRange)?;
                instant = resolve(&self.zone, next).ok_or(TickError::OutOfRange)?;
            }
            if ticks.last().is_some_and(|prev| instant <= *prev) {
                continue;
            }
            ticks.push(instant);
        }

        while ticks.len() < MIN_TICKS {
            let next = match ticks.last() {
                Some(prev) => {
                    let local = to_local(&self.zone, *prev);
                    add(floor(local, unit).ok_or(TickError::OutOfRange)?, unit, 1)
                }
                None => floor(to_local(&self.zone, range.start()), unit),
            }
            .ok_or(TickError::OutOfRange)?;
            ticks.push(resolve(&self.zone, next).ok_or(TickError::OutOfRange)?);
        }
        Ok(ticks)
    }
}

/// Plans ticks for `[start, end]` (epoch milliseconds) in the named zone.
///
/// # Errors
///
/// Returns [`TickError::InvalidTimeZone`] for an unknown zone name and
/// [`TickError::Range`] if `start >= end`.
pub fn generate_time_ticks(
    start: EpochMillis,
    end: EpochMillis,
    time_zone: &str,
) -> Result<TickSet> {
    let planner = TickPlanner::for_zone(time_zone)?;
    let range = TimeRange::from_millis(start, end)?;
    planner.plan(&range)
}
