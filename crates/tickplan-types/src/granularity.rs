//! Tick granularity definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calendar unit underlying a [`Granularity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Wall-clock minutes.
    Minute,
    /// Wall-clock hours.
    Hour,
    /// Calendar days (local midnight).
    Day,
    /// Calendar weeks.
    Week,
    /// Calendar months (first of month).
    Month,
    /// Calendar years (January 1).
    Year,
}

impl TimeUnit {
    /// Returns the unit as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spacing of axis ticks: a calendar unit and a step multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// Minute-aligned ticks.
    #[serde(rename = "m1")]
    Minute,
    /// Hour-aligned ticks.
    #[serde(rename = "h1")]
    Hour,
    /// Every day.
    #[serde(rename = "d1")]
    Day,
    /// Every other day.
    #[serde(rename = "d2")]
    TwoDays,
    /// Every fourth day.
    #[serde(rename = "d4")]
    FourDays,
    /// Every week.
    #[serde(rename = "w1")]
    Week,
    /// Every other week.
    #[serde(rename = "w2")]
    TwoWeeks,
    /// Every month.
    #[serde(rename = "mo1")]
    Month,
    /// Every other month.
    #[serde(rename = "mo2")]
    TwoMonths,
    /// Every fourth month.
    #[serde(rename = "mo4")]
    FourMonths,
    /// Every sixth month.
    #[serde(rename = "mo6")]
    SixMonths,
    /// Year-aligned ticks.
    #[serde(rename = "y1")]
    Year,
}

impl Granularity {
    /// Returns the calendar unit.
    #[must_use]
    pub const fn unit(&self) -> TimeUnit {
        match self {
            Self::Minute => TimeUnit::Minute,
            Self::Hour => TimeUnit::Hour,
            Self::Day | Self::TwoDays | Self::FourDays => TimeUnit::Day,
            Self::Week | Self::TwoWeeks => TimeUnit::Week,
            Self::Month | Self::TwoMonths | Self::FourMonths | Self::SixMonths => TimeUnit::Month,
            Self::Year => TimeUnit::Year,
        }
    }

    /// Returns the number of units between consecutive calendar ticks.
    #[must_use]
    pub const fn step(&self) -> u32 {
        match self {
            Self::Minute | Self::Hour | Self::Day | Self::Week | Self::Month | Self::Year => 1,
            Self::TwoDays | Self::TwoWeeks | Self::TwoMonths => 2,
            Self::FourDays | Self::FourMonths => 4,
            Self::SixMonths => 6,
        }
    }

    /// Returns the strftime pattern used to label ticks.
    ///
    /// Renders as `Mar 08 14:20`, `Mar 08`, `Apr 2018` or `2018`.
    #[must_use]
    pub const fn label_pattern(&self) -> &'static str {
        match self.unit() {
            TimeUnit::Minute | TimeUnit::Hour => "%b %d %H:%M",
            TimeUnit::Day | TimeUnit::Week => "%b %d",
            TimeUnit::Month => "%b %Y",
            TimeUnit::Year => "%Y",
        }
    }

    /// Returns the granularity as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "m1",
            Self::Hour => "h1",
            Self::Day => "d1",
            Self::TwoDays => "d2",
            Self::FourDays => "d4",
            Self::Week => "w1",
            Self::TwoWeeks => "w2",
            Self::Month => "mo1",
            Self::TwoMonths => "mo2",
            Self::FourMonths => "mo4",
            Self::SixMonths => "mo6",
            Self::Year => "y1",
        }
    }

    /// Returns all granularities, finest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute,
            Self::Hour,
            Self::Day,
            Self::TwoDays,
            Self::FourDays,
            Self::Week,
            Self::TwoWeeks,
            Self::Month,
            Self::TwoMonths,
            Self::FourMonths,
            Self::SixMonths,
            Self::Year,
        ]
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m1" | "minute" => Ok(Self::Minute),
            "h1" | "hour" => Ok(Self::Hour),
            "d1" | "day" | "daily" => Ok(Self::Day),
            "d2" => Ok(Self::TwoDays),
            "d4" => Ok(Self::FourDays),
            "w1" | "week" | "weekly" => Ok(Self::Week),
            "w2" => Ok(Self::TwoWeeks),
            "mo1" | "month" | "monthly" => Ok(Self::Month),
            "mo2" => Ok(Self::TwoMonths),
            "mo4" => Ok(Self::FourMonths),
            "mo6" => Ok(Self::SixMonths),
            "y1" | "year" | "yearly" => Ok(Self::Year),
            _ => Err(GranularityParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid granularity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityParseError(String);

impl std::fmt::Display for GranularityParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid granularity '{}', expected one of: m1, h1, d1, d2, d4, w1, w2, mo1, mo2, mo4, mo6, y1",
            self.0
        )
    }
}

impl std::error::Error for GranularityParseError {}
