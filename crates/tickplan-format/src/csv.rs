//! Delimited text output.

use std::io::Write;
use tickplan_core::{AxisTick, TickSet};

use crate::{FormatError, Formatter};

/// Writes one row per tick, fields joined by a delimiter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    delimiter: char,
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Comma-separated, with a header row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Tab-separated, with a header row.
    #[must_use]
    pub const fn tsv() -> Self {
        Self::new().with_delimiter('\t')
    }

    /// Uses `delimiter` between fields.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Toggles the header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    fn write_rows<W, I>(&self, columns: [&str; 3], rows: I, mut writer: W) -> Result<(), FormatError>
    where
        W: Write,
        I: IntoIterator<Item = [String; 3]>,
    {
        let separator = self.delimiter.to_string();
        if self.include_header {
            writeln!(writer, "{}", columns.join(separator.as_str()))?;
        }
        for row in rows {
            writeln!(writer, "{}", row.join(separator.as_str()))?;
        }
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_ticks<W: Write + Send>(&self, set: &TickSet, writer: W) -> Result<(), FormatError> {
        let rows = set.ticks().into_iter().map(|tick| {
            [
                tick.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
                tick.millis.to_string(),
                tick.label,
            ]
        });
        self.write_rows(["timestamp", "millis", "label"], rows, writer)
    }

    fn write_axis<W: Write + Send>(&self, ticks: &[AxisTick], writer: W) -> Result<(), FormatError> {
        let rows = ticks
            .iter()
            .map(|tick| [tick.millis.to_string(), format!("{:.2}", tick.x), tick.label.clone()]);
        self.write_rows(["millis", "x", "label"], rows, writer)
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
