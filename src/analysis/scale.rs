//! Shared axis scale
//!
//! The bar charts and the heatmap legend use the same maximum and tick set so
//! genres can be compared across both figures.

/// Spacing between ticks, in percentage points
pub const TICK_STEP: u32 = 2;

/// Axis maximum is rounded up to a multiple of this
pub const AXIS_ROUNDING: u32 = 10;

/// Axis maximum and ticks shared by every chart
#[derive(Debug, Clone, PartialEq)]
pub struct SharedScale {
    /// Largest percentage among all buckets' top keys
    pub max_pct: f64,
    /// `max_pct` rounded up to the next multiple of 10
    ///
    /// Floored at 10: when every bucket is empty `ceil(max_pct / 10) * 10`
    /// would be 0, but the axis is kept at 0..10 instead.
    pub axis_max: u32,
    /// Every even value from 0 to `axis_max` inclusive
    pub ticks: Vec<u32>,
}

impl SharedScale {
    /// Derive the scale from the top percentages of every bucket
    ///
    /// With no data at all (every bucket empty) the axis still spans 0..10 so
    /// the charts have a drawable range.
    pub fn from_top_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let max_pct = values.into_iter().fold(0.0f64, f64::max);
        let rounded = (max_pct / AXIS_ROUNDING as f64).ceil() as u32 * AXIS_ROUNDING;
        let axis_max = rounded.max(AXIS_ROUNDING);
        let ticks = (0..=axis_max).step_by(TICK_STEP as usize).collect();

        Self {
            max_pct,
            axis_max,
            ticks,
        }
    }

    /// Axis maximum as a float coordinate
    pub fn axis_max_f64(&self) -> f64 {
        self.axis_max as f64
    }

    /// Ticks as float coordinates
    pub fn ticks_f64(&self) -> Vec<f64> {
        self.ticks.iter().map(|&t| t as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_up_to_multiple_of_ten() {
        let scale = SharedScale::from_top_values([12.4, 17.9, 9.0]);
        assert_eq!(scale.max_pct, 17.9);
        assert_eq!(scale.axis_max, 20);
        assert_eq!(scale.ticks, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
    }

    #[test]
    fn test_exact_multiple_is_kept() {
        let scale = SharedScale::from_top_values([30.0, 5.0]);
        assert_eq!(scale.axis_max, 30);
        assert_eq!(scale.ticks.last(), Some(&30));
    }

    #[test]
    fn test_full_bucket_reaches_hundred() {
        let scale = SharedScale::from_top_values([100.0, 0.0, 0.0]);
        assert_eq!(scale.axis_max, 100);
        assert_eq!(scale.ticks.len(), 51);
    }

    #[test]
    fn test_no_data_keeps_usable_range() {
        let scale = SharedScale::from_top_values([0.0; 12]);
        assert_eq!(scale.max_pct, 0.0);
        assert_eq!(scale.axis_max, 10);

        let empty = SharedScale::from_top_values(std::iter::empty());
        assert_eq!(empty, scale);
    }

    #[test]
    fn test_axis_covers_max() {
        for max in [0.1, 9.99, 10.0, 10.01, 55.5, 99.9] {
            let scale = SharedScale::from_top_values([max]);
            assert_eq!(scale.axis_max % 10, 0);
            assert!(scale.axis_max as f64 >= max);
            assert!(scale.ticks.iter().all(|t| t % 2 == 0));
        }
    }
}
