//! Chart coordinates with a fixed tick set
//!
//! Plotters normally chooses its own tick positions. The bar charts and the
//! heatmap legend must show exactly the shared even ticks, and category axes
//! must label the middle of every row, so both use this coordinate instead.

use crate::analysis::SharedScale;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use std::ops::Range;

/// Linear f64 axis whose key points are exactly `ticks`
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTicks {
    start: f64,
    end: f64,
    ticks: Vec<f64>,
}

impl FixedTicks {
    pub fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self {
            start: range.start,
            end: range.end,
            ticks,
        }
    }

    /// `0..axis_max` labelled at every shared tick
    pub fn from_scale(scale: &SharedScale) -> Self {
        Self::new(0.0..scale.axis_max_f64(), scale.ticks_f64())
    }

    /// `0..count` with one key point in the middle of each unit-wide category
    pub fn categories(count: usize) -> Self {
        let centers = (0..count).map(|i| i as f64 + 0.5).collect();
        Self::new(0.0..count as f64, centers)
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for FixedTicks {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.end - self.start;
        if span == 0.0 {
            return limit.0;
        }
        let ratio = (value - self.start) / span;
        limit.0 + (ratio * (limit.1 - limit.0) as f64 + 1e-3).floor() as i32
    }

    // The hint is ignored: every tick is always drawn
    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters::coord::ranged1d::BoldPoints;

    #[test]
    fn test_scale_ticks_are_kept_exactly() {
        let scale = SharedScale::from_top_values([17.9]);
        let axis = FixedTicks::from_scale(&scale);

        // Even a small hint does not thin the tick set
        let points = axis.key_points(BoldPoints(3));
        assert_eq!(points, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]);
        assert_eq!(axis.range(), 0.0..20.0);
    }

    #[test]
    fn test_ticks_map_evenly_across_pixels() {
        let axis = FixedTicks::from_scale(&SharedScale::from_top_values([9.0]));
        let pixels: Vec<i32> = axis
            .key_points(BoldPoints(100))
            .iter()
            .map(|v| axis.map(v, (0, 100)))
            .collect();
        assert_eq!(pixels, vec![0, 20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_categories_label_row_middles() {
        let axis = FixedTicks::categories(4);
        assert_eq!(axis.ticks(), &[0.5, 1.5, 2.5, 3.5]);
        assert_eq!(axis.map(&0.5, (0, 400)), 50);
        assert!(FixedTicks::categories(0).ticks().is_empty());
    }
}
