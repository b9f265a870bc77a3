//! Adaptive time-axis tick planning for tickplan.
//!
//! This crate decides where to draw time-axis gridlines and how to label them:
//!
//! - [`TickPlanner`] - Selects a granularity and places 3 to 7 ticks
//! - [`generate_time_ticks`] - One-shot planning from epoch milliseconds
//! - [`TickSet`] / [`TickFormat`] - Planned instants and their label formatter
//! - [`SpanMeasure`] - Calendar-aware span measurement in a time zone
//! - [`TimeScale`] - Maps instants to horizontal pixel positions

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calendar;
mod planner;
mod scale;
mod span;
mod tick_set;

pub use planner::{
    BUCKETS, Bucket, MAX_TICKS, MIN_TICKS, Placement, SpanLimit, TickPlanner,
    generate_time_ticks, select_bucket,
};
pub use scale::TimeScale;
pub use span::SpanMeasure;
pub use tick_set::{AxisTick, LabeledTick, TickFormat, TickSet};
