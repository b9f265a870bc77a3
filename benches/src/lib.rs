//! Benchmark fixtures for tickplan.

use tickplan_lib::{EpochMillis, TimeRange};

/// 2018-03-08T19:44:41Z, a few days before the Chicago spring-forward.
pub const ANCHOR: EpochMillis = 1_520_538_281_000;

const HOUR: EpochMillis = 3_600_000;
const DAY: EpochMillis = 24 * HOUR;

/// A named range to plan ticks for.
#[derive(Debug, Clone)]
pub struct BenchmarkCase {
    /// Label used in benchmark IDs.
    pub name: &'static str,
    /// Range to plan.
    pub range: TimeRange,
}

/// One range per span regime, from minutes to decades.
pub fn benchmark_cases() -> Vec<BenchmarkCase> {
    [
        ("3-hours", 3 * HOUR),
        ("2-days", 2 * DAY),
        ("1-week", 7 * DAY),
        ("6-weeks", 42 * DAY),
        ("5-months", 150 * DAY),
        ("3-years", 3 * 365 * DAY),
        ("40-years", 40 * 365 * DAY),
    ]
    .into_iter()
    .filter_map(|(name, span)| {
        let range = TimeRange::from_millis(ANCHOR, ANCHOR + span).ok()?;
        Some(BenchmarkCase { name, range })
    })
    .collect()
}

/// Zones covering no DST, northern DST and a southern zone with midnight transitions.
pub const ZONES: &[&str] = &["UTC", "America/Chicago", "America/Sao_Paulo"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_case_is_valid() {
        assert_eq!(benchmark_cases().len(), 7);
    }
}
