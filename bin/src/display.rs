//! Display utilities and output formatting for the tickplan CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tickplan_lib::prelude::*;
use tickplan_lib::{AxisTick, Bucket};

/// Output format for planned ticks.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the name of this format.
    pub(crate) const fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything a `plan` run prints.
#[derive(Debug)]
pub(crate) struct PlanReport {
    pub(crate) range: TimeRange,
    pub(crate) span: SpanMeasure,
    pub(crate) bucket: &'static Bucket,
    pub(crate) set: TickSet,
    pub(crate) axis: Option<Vec<AxisTick>>,
}

/// Writes the report to `output`, or to stdout when no path is given.
pub(crate) fn write_report(report: &PlanReport, output: Option<&Path>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render(report, &mut writer, format)?;
            writer.flush()?;
        }
        None => render(report, std::io::stdout(), format)?,
    }
    Ok(())
}

/// Renders the report in the given format.
pub(crate) fn render<W: Write + Send>(report: &PlanReport, writer: W, format: Format) -> Result<()> {
    match (format, &report.axis) {
        (Format::Text, _) => render_text(report, writer)?,
        (Format::Csv, None) => CsvFormatter::new().write_ticks(&report.set, writer)?,
        (Format::Csv, Some(axis)) => CsvFormatter::new().write_axis(axis, writer)?,
        (Format::Json, None) => JsonFormatter::new().write_ticks(&report.set, writer)?,
        (Format::Json, Some(axis)) => JsonFormatter::new().write_axis(axis, writer)?,
        (Format::Ndjson, None) => JsonFormatter::ndjson().write_ticks(&report.set, writer)?,
        (Format::Ndjson, Some(axis)) => JsonFormatter::ndjson().write_axis(axis, writer)?,
    }
    Ok(())
}

fn render_text<W: Write>(report: &PlanReport, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "Range:       {}", report.range)?;
    writeln!(writer, "Zone:        {}", report.set.format.zone())?;
    writeln!(writer, "Span:        {}", report.span)?;
    writeln!(
        writer,
        "Bucket:      {} ({}, {})",
        report.bucket.granularity, report.bucket.limit, report.bucket.placement
    )?;
    writeln!(writer)?;

    match &report.axis {
        Some(axis) => {
            writeln!(writer, "{:<26} {:>10} {}", "TIMESTAMP", "X", "LABEL")?;
            writeln!(writer, "{}", "-".repeat(56))?;
            for (tick, placed) in report.set.ticks().iter().zip(axis) {
                writeln!(
                    writer,
                    "{:<26} {:>10.2} {}",
                    tick.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                    placed.x,
                    tick.label
                )?;
            }
        }
        None => {
            writeln!(writer, "{:<26} {}", "TIMESTAMP", "LABEL")?;
            writeln!(writer, "{}", "-".repeat(45))?;
            for tick in report.set.ticks() {
                writeln!(
                    writer,
                    "{:<26} {}",
                    tick.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
                    tick.label
                )?;
            }
        }
    }

    writeln!(writer, "\nTotal: {} ticks", report.set.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickplan_lib::select_bucket;

    fn report(width: Option<f64>) -> PlanReport {
        let range = TimeRange::from_millis(1_520_538_281_000, 1_521_143_081_000).unwrap();
        let planner = TickPlanner::for_zone("America/Chicago").unwrap();
        let span = planner.measure(&range).unwrap();
        let set = planner.plan(&range).unwrap();
        let axis = width.map(|w| set.place(&TimeScale::new(&range, w)));
        PlanReport {
            range,
            span,
            bucket: select_bucket(&span),
            set,
            axis,
        }
    }

    fn rendered(report: &PlanReport, format: Format) -> String {
        let mut out = Vec::new();
        render(report, &mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = rendered(&report(None), Format::Text);
        assert!(text.contains("Zone:        America/Chicago"));
        assert!(text.contains("Span:        168h / 7d / 0mo / 0y"));
        assert!(text.contains("Bucket:      d1 (<= 7 days, calendar)"));
        assert!(text.contains("2018-03-09T06:00:00.000Z   Mar 09"));
        assert!(text.ends_with("Total: 7 ticks\n"));
    }

    #[test]
    fn test_text_report_with_axis() {
        let text = rendered(&report(Some(700.0)), Format::Text);
        assert!(text.contains("TIMESTAMP"));
        assert!(text.contains(" X "));
        assert!(text.contains("Mar 15"));
    }

    #[test]
    fn test_csv_axis_columns() {
        let csv = rendered(&report(Some(700.0)), Format::Csv);
        assert!(csv.starts_with("millis,x,label\n"));
        assert_eq!(csv.lines().count(), 8);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticks.ndjson");

        write_report(&report(None), Some(&path), Format::Ndjson).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].contains("\"label\":\"Mar 09\""));
    }

    #[test]
    fn test_write_report_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ticks.csv");

        let err = write_report(&report(None), Some(&path), Format::Csv).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create"));
    }
}
