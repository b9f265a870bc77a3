//! JSON output.

use serde::Serialize;
use std::io::Write;
use tickplan_core::{AxisTick, TickSet};

use crate::{FormatError, Formatter};

/// Layout of the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// A single array holding every tick.
    #[default]
    Array,
    /// One object per line.
    Ndjson,
}

/// Serialises ticks as JSON objects.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    style: JsonStyle,
    pretty: bool,
}

impl JsonFormatter {
    /// Compact array output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// One object per line.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self::new().with_style(JsonStyle::Ndjson)
    }

    /// Indents array output. Ignored for NDJSON.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Selects the document layout.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_rows<T: Serialize, W: Write>(&self, rows: &[T], mut writer: W) -> Result<(), FormatError> {
        match (self.style, self.pretty) {
            (JsonStyle::Array, true) => serde_json::to_writer_pretty(&mut writer, rows)?,
            (JsonStyle::Array, false) => serde_json::to_writer(&mut writer, rows)?,
            (JsonStyle::Ndjson, _) => {
                for row in rows {
                    serde_json::to_writer(&mut writer, row)?;
                    writeln!(writer)?;
                }
                return Ok(());
            }
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_ticks<W: Write + Send>(&self, set: &TickSet, writer: W) -> Result<(), FormatError> {
        self.write_rows(&set.ticks(), writer)
    }

    fn write_axis<W: Write + Send>(&self, ticks: &[AxisTick], writer: W) -> Result<(), FormatError> {
        self.write_rows(ticks, writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tickplan_core::{TickFormat, TimeScale};
    use tickplan_types::{Granularity, TimeRange, Tz};

    const MIDNIGHT: i64 = 1_520_575_200_000; // 2018-03-09T06:00:00Z

    fn day_ticks() -> TickSet {
        TickSet {
            dates: vec![MIDNIGHT, MIDNIGHT + 86_400_000],
            format: TickFormat::new(Granularity::Day, Tz::America__Chicago),
        }
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_ticks(&day_ticks(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value[0]["timestamp"], "2018-03-09T06:00:00Z");
        assert_eq!(value[0]["millis"], MIDNIGHT);
        assert_eq!(value[1]["label"], "Mar 10");
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let mut output = Cursor::new(Vec::new());

        formatter.write_ticks(&day_ticks(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        assert_eq!(formatter.extension(), "ndjson");
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter.write_ticks(&day_ticks(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  \"label\": \"Mar 09\""));
    }

    #[test]
    fn test_json_axis() {
        let range = TimeRange::from_millis(MIDNIGHT, MIDNIGHT + 2 * 86_400_000).unwrap();
        let axis = day_ticks().place(&TimeScale::new(&range, 100.0));
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new()
            .with_style(JsonStyle::Ndjson)
            .write_axis(&axis, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let second: serde_json::Value = serde_json::from_str(result.lines().nth(1).unwrap()).unwrap();
        assert_eq!(second["x"], 50.0);
        assert_eq!(second["label"], "Mar 10");
    }
}
