//! Plan command implementation.
//!
//! This module parses a range, plans ticks in the requested zone and writes
//! them in the requested format.

use crate::display::{Format, PlanReport, write_report};
use anyhow::{Context, Result};
use std::path::Path;
use tickplan_lib::prelude::*;
use tickplan_lib::select_bucket;
use tracing::info;

/// Plan ticks for `[start, end]` in `zone`.
pub(crate) fn plan(
    start: &str,
    end: &str,
    zone: &str,
    format: Format,
    output: Option<&Path>,
    width: Option<f64>,
) -> Result<()> {
    let report = build_report(start, end, zone, width)?;
    info!(
        granularity = %report.set.granularity(),
        ticks = report.set.len(),
        format = %format,
        "planned ticks"
    );

    write_report(&report, output, format)?;

    if let Some(path) = output {
        info!(path = %path.display(), "wrote ticks");
    }
    Ok(())
}

fn build_report(start: &str, end: &str, zone: &str, width: Option<f64>) -> Result<PlanReport> {
    let range = TimeRange::parse(start, end)
        .with_context(|| format!("Invalid range: {start} .. {end}"))?;
    let planner = TickPlanner::for_zone(zone)?;

    let span = planner.measure(&range)?;
    let set = planner
        .plan(&range)
        .with_context(|| format!("Failed to plan ticks for {range} in {zone}"))?;
    let axis = width.map(|width| set.place(&TimeScale::new(&range, width)));

    Ok(PlanReport {
        range,
        span,
        bucket: select_bucket(&span),
        set,
        axis,
    })
}
