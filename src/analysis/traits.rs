//! Classification trait abstraction
//!
//! Genre buckets are matched through this trait so the keyword matcher can be
//! swapped (or stubbed in tests) without touching the aggregation code.

/// Decides whether a free-text genre label belongs to a bucket
pub trait GenreMatcher {
    /// True if the genre label belongs to this matcher's bucket
    fn matches(&self, genre: &str) -> bool;

    /// Get the name of this matcher (for logging)
    fn name(&self) -> &str;
}
