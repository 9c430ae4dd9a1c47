//! Key distribution per genre bucket
//!
//! Counts are built in a single pass over the bucket's key notes into a dense
//! table indexed by canonical key order. Missing notes are skipped entirely:
//! they contribute to neither a numerator nor the total.

use crate::types::{PitchClass, KEY_ORDER};

/// Number of songs per key, in canonical key order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyCounts([usize; 12]);

impl KeyCounts {
    /// Count key notes, ignoring missing ones
    pub fn from_notes<'a, I>(notes: I) -> Self
    where
        I: IntoIterator<Item = &'a Option<PitchClass>>,
    {
        let mut counts = [0usize; 12];
        for note in notes.into_iter().flatten() {
            counts[note.to_index()] += 1;
        }
        Self(counts)
    }

    pub fn get(&self, key: PitchClass) -> usize {
        self.0[key.to_index()]
    }

    /// Number of songs with a usable key
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Unrounded percentage per key; all zero when there are no songs
    pub fn percentages(&self) -> [f64; 12] {
        let total = self.total();
        if total == 0 {
            return [0.0; 12];
        }
        self.0.map(|count| 100.0 * count as f64 / total as f64)
    }
}

/// Percentage of songs per key, rounded to one decimal place
///
/// Always dense: every canonical key has a value, zero included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyDistribution([f64; 12]);

impl KeyDistribution {
    pub fn from_counts(counts: &KeyCounts) -> Self {
        Self(counts.percentages().map(round_one_decimal))
    }

    pub fn get(&self, key: PitchClass) -> f64 {
        self.0[key.to_index()]
    }

    /// (key, percentage) pairs in canonical key order
    pub fn iter(&self) -> impl Iterator<Item = (PitchClass, f64)> + '_ {
        KEY_ORDER.iter().map(move |&key| (key, self.get(key)))
    }

    /// Sum of all percentages (100.0 within rounding, or 0.0 for an empty bucket)
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// The `n` most common keys, highest percentage first
    ///
    /// The sort is stable over canonical key order, so ties (including the
    /// all-zero case) resolve to the earlier key: C before C# before D.
    pub fn top_n(&self, n: usize) -> Vec<(PitchClass, f64)> {
        let mut ranked: Vec<(PitchClass, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Percentage distribution of a bucket's key notes
pub fn distribution_for(key_notes: &[Option<PitchClass>]) -> KeyDistribution {
    KeyDistribution::from_counts(&KeyCounts::from_notes(key_notes))
}

/// Ties go to the even digit: 6.25 becomes 6.2, 6.35 becomes 6.4
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(indices: &[i64]) -> Vec<Option<PitchClass>> {
        indices.iter().map(|&i| PitchClass::from_index(i)).collect()
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        // 7 songs spread unevenly so rounding kicks in
        let dist = distribution_for(&notes(&[0, 0, 1, 4, 7, 7, 11]));
        assert!((dist.total() - 100.0).abs() <= 0.1 + 1e-9, "total was {}", dist.total());
        assert_eq!(dist.get(PitchClass::C), 28.6);
        assert_eq!(dist.get(PitchClass::Cs), 14.3);
        assert_eq!(dist.get(PitchClass::D), 0.0);
    }

    #[test]
    fn test_half_ties_round_to_even() {
        // 1 of 16 is exactly 6.25%, 15 of 16 is 93.75%
        let mut keys = vec![0];
        keys.extend([1; 15]);
        let dist = distribution_for(&notes(&keys));
        assert_eq!(dist.get(PitchClass::C), 6.2);
        assert_eq!(dist.get(PitchClass::Cs), 93.8);

        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.75), 0.8);
    }

    #[test]
    fn test_empty_bucket_is_all_zero() {
        let dist = distribution_for(&[]);
        assert!(dist.iter().all(|(_, pct)| pct == 0.0));
        assert_eq!(dist.iter().count(), 12);
    }

    #[test]
    fn test_missing_notes_do_not_inflate_total() {
        let dist = distribution_for(&notes(&[2, 12, -1]));
        assert_eq!(dist.get(PitchClass::D), 100.0);
        assert_eq!(dist.total(), 100.0);

        let only_missing = distribution_for(&notes(&[12, 13]));
        assert_eq!(only_missing.total(), 0.0);
    }

    #[test]
    fn test_top_n_sorted_descending() {
        let dist = distribution_for(&notes(&[9, 9, 9, 4, 4, 0]));
        let top = dist.top_n(3);
        assert_eq!(
            top,
            vec![
                (PitchClass::A, 50.0),
                (PitchClass::E, 33.3),
                (PitchClass::C, 16.7)
            ]
        );
    }

    #[test]
    fn test_top_n_ties_keep_canonical_order() {
        let top = distribution_for(&notes(&[11, 5])).top_n(3);
        assert_eq!(top[0], (PitchClass::F, 50.0));
        assert_eq!(top[1], (PitchClass::B, 50.0));
        assert_eq!(top[2], (PitchClass::C, 0.0));

        let empty = distribution_for(&[]).top_n(3);
        assert_eq!(
            empty,
            vec![
                (PitchClass::C, 0.0),
                (PitchClass::Cs, 0.0),
                (PitchClass::D, 0.0)
            ]
        );
    }

    #[test]
    fn test_counts_percentages_unrounded() {
        let counts = KeyCounts::from_notes(&notes(&[0, 1, 2]));
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(PitchClass::Cs), 1);
        let pct = counts.percentages();
        assert!((pct[0] - 100.0 / 3.0).abs() < 1e-12);
    }
}
