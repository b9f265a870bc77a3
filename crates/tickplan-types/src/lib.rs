//! Core types for the tickplan time-axis tick planner.
//!
//! This crate provides the fundamental data structures used throughout tickplan:
//!
//! - [`TimeRange`] - A non-empty window between two UTC instants
//! - [`Granularity`] - Calendar unit and step used to space ticks
//! - [`TimeUnit`] - The calendar unit underlying a granularity
//! - [`parse_time_zone`] - Resolves an IANA zone name

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod granularity;
mod time_range;
mod zone;

pub use error::{Result, TickError, TimeRangeError};
pub use granularity::{Granularity, GranularityParseError, TimeUnit};
pub use time_range::{EpochMillis, TimeRange};
pub use zone::parse_time_zone;

pub use chrono_tz::Tz;
