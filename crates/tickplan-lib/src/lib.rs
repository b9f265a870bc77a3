//! Adaptive time-axis tick planning for charts.
//!
//! This is a facade crate that re-exports functionality from the tickplan
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use tickplan_lib::prelude::*;
//!
//! let range = TimeRange::parse("2024-01-01", "2024-03-15")?;
//! let planner = TickPlanner::for_zone("Europe/Berlin")?;
//! let set = planner.plan(&range)?;
//!
//! for label in set.labels() {
//!     println!("{label}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickplan_types::*;

// Re-export planning
pub use tickplan_core::{
    AxisTick, BUCKETS, Bucket, LabeledTick, MAX_TICKS, MIN_TICKS, Placement, SpanLimit,
    SpanMeasure, TickFormat, TickPlanner, TickSet, TimeScale, generate_time_ticks, select_bucket,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickplan_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

/// Prelude module for convenient imports.
///
/// ```
/// use tickplan_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickplan_types::{
        EpochMillis, Granularity, Result, TickError, TimeRange, TimeRangeError, TimeUnit, Tz,
        parse_time_zone,
    };

    pub use tickplan_core::{
        SpanMeasure, TickFormat, TickPlanner, TickSet, TimeScale, generate_time_ticks,
    };

    #[cfg(feature = "format")]
    pub use tickplan_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
