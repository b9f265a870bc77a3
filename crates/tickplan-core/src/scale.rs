//! Horizontal time scale mapping instants to pixels.

use tickplan_types::{EpochMillis, TimeRange};

/// Linear map from a time range onto `[0, width]` pixels, left-oriented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: EpochMillis,
    end: EpochMillis,
    width: f64,
}

impl TimeScale {
    /// Creates a scale spanning `range` over `width` pixels.
    ///
    /// Negative widths are clamped to zero.
    #[must_use]
    pub fn new(range: &TimeRange, width: f64) -> Self {
        Self {
            start: range.start_millis(),
            end: range.end_millis(),
            width: width.max(0.0),
        }
    }

    /// Returns the pixel width of the scale.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Maps an instant to a horizontal pixel position.
    ///
    /// Instants outside the range extrapolate beyond `[0, width]`.
    #[inline]
    #[must_use]
    pub fn to_px(&self, millis: EpochMillis) -> f64 {
        let span = (self.end - self.start) as f64;
        (millis - self.start) as f64 / span * self.width
    }

    /// Maps a pixel position back to the nearest millisecond.
    #[inline]
    #[must_use]
    pub fn from_px(&self, px: f64) -> EpochMillis {
        if self.width <= 0.0 {
            return self.start;
        }
        let span = (self.end - self.start) as f64;
        self.start + (px / self.width * span).round() as EpochMillis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scale() -> TimeScale {
        let range = TimeRange::from_millis(1_000_000, 2_000_000).unwrap();
        TimeScale::new(&range, 800.0)
    }

    #[test]
    fn test_endpoints() {
        let scale = scale();
        assert_relative_eq!(scale.to_px(1_000_000), 0.0);
        assert_relative_eq!(scale.to_px(2_000_000), 800.0);
        assert_relative_eq!(scale.to_px(1_250_000), 200.0);
    }

    #[test]
    fn test_extrapolates() {
        assert_relative_eq!(scale().to_px(2_500_000), 1200.0);
        assert_relative_eq!(scale().to_px(500_000), -400.0);
    }

    #[test]
    fn test_from_px_inverts() {
        let scale = scale();
        assert_eq!(scale.from_px(0.0), 1_000_000);
        assert_eq!(scale.from_px(400.0), 1_500_000);
        assert_eq!(scale.from_px(scale.to_px(1_234_567)), 1_234_567);
    }

    #[test]
    fn test_zero_width() {
        let range = TimeRange::from_millis(0, 10).unwrap();
        let scale = TimeScale::new(&range, -5.0);
        assert_relative_eq!(scale.width(), 0.0);
        assert_relative_eq!(scale.to_px(5), 0.0);
        assert_eq!(scale.from_px(3.0), 0);
    }
}
