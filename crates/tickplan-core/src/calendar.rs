//! Zone-aware calendar arithmetic on local wall-clock time.

use chrono::{
    DateTime, Datelike, Days, LocalResult, Months, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use tickplan_types::TimeUnit;

/// Converts an instant to wall-clock time in the zone.
pub(crate) fn to_local(zone: &Tz, instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(zone).naive_local()
}

/// Resolves a wall-clock time in the zone to an instant.
///
/// Ambiguous times (repeated hour) resolve to the earliest instant. Times
/// skipped by a forward transition are read with the offset in force before
/// the gap, so a boundary that falls in a gap lands on the first instant after it.
pub(crate) fn resolve(zone: &Tz, local: NaiveDateTime) -> Option<DateTime<Utc>> {
    match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => {
            let before = local.checked_sub_signed(TimeDelta::days(1))?;
            let offset = zone.offset_from_utc_datetime(&before).fix();
            let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(
                offset.local_minus_utc(),
            )))?;
            Some(utc.and_utc())
        }
    }
}

/// Truncates wall-clock time to the start of the unit.
///
/// Weeks start on Sunday.
pub(crate) fn floor(local: NaiveDateTime, unit: TimeUnit) -> Option<NaiveDateTime> {
    let date = local.date();
    match unit {
        TimeUnit::Minute => local.with_second(0)?.with_nanosecond(0),
        TimeUnit::Hour => local.with_minute(0)?.with_second(0)?.with_nanosecond(0),
        TimeUnit::Day => Some(date.and_time(NaiveTime::MIN)),
        TimeUnit::Week => {
            let back = u64::from(date.weekday().num_days_from_sunday());
            Some(date.checked_sub_days(Days::new(back))?.and_time(NaiveTime::MIN))
        }
        TimeUnit::Month => Some(date.with_day(1)?.and_time(NaiveTime::MIN)),
        TimeUnit::Year => Some(date.with_day(1)?.with_month(1)?.and_time(NaiveTime::MIN)),
    }
}

/// Adds `count` units to wall-clock time.
///
/// Month and year arithmetic clamps the day to the end of the target month.
pub(crate) fn add(local: NaiveDateTime, unit: TimeUnit, count: u32) -> Option<NaiveDateTime> {
    match unit {
        TimeUnit::Minute => local.checked_add_signed(TimeDelta::minutes(i64::from(count))),
        TimeUnit::Hour => local.checked_add_signed(TimeDelta::hours(i64::from(count))),
        TimeUnit::Day => local.checked_add_days(Days::new(u64::from(count))),
        TimeUnit::Week => local.checked_add_days(Days::new(7 * u64::from(count))),
        TimeUnit::Month => local.checked_add_months(Months::new(count)),
        TimeUnit::Year => local.checked_add_months(Months::new(count.checked_mul(12)?)),
    }
}
