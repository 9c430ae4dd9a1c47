//! Song table analysis
//!
//! Classification, per-bucket key aggregation and the shared chart scale.
//! Data flows strictly forward: classify -> aggregate -> scale.

pub mod aggregate;
pub mod classify;
pub mod scale;
pub mod traits;

pub use aggregate::{distribution_for, KeyCounts, KeyDistribution};
pub use classify::{members_of, members_matching, KeywordMatcher};
pub use scale::SharedScale;
pub use traits::GenreMatcher;

use crate::types::{Genre, PitchClass, SongTable};
use tracing::{debug, info};

/// How many keys each bar chart shows
pub const TOP_KEYS: usize = 3;

/// Aggregated key statistics for one genre bucket
#[derive(Debug, Clone, PartialEq)]
pub struct GenreKeyStats {
    pub genre: Genre,
    /// Raw counts, used for the heatmap
    pub counts: KeyCounts,
    /// Rounded percentages, used for top-key selection
    pub distribution: KeyDistribution,
    /// The most common keys, highest first
    pub top: Vec<(PitchClass, f64)>,
}

impl GenreKeyStats {
    /// Aggregate the key notes of one bucket's members
    pub fn from_members(genre: Genre, members: &[Option<PitchClass>]) -> Self {
        let counts = KeyCounts::from_notes(members);
        let distribution = KeyDistribution::from_counts(&counts);
        let top = distribution.top_n(TOP_KEYS);

        Self {
            genre,
            counts,
            distribution,
            top,
        }
    }

    /// Songs in this bucket with a usable key
    pub fn song_count(&self) -> usize {
        self.counts.total()
    }

    pub fn is_empty(&self) -> bool {
        self.song_count() == 0
    }
}

/// Everything the renderer needs: one entry per bucket plus the shared scale
#[derive(Debug, Clone, PartialEq)]
pub struct KeyReport {
    /// Buckets in `Genre::ALL` order
    pub genres: Vec<GenreKeyStats>,
    pub scale: SharedScale,
}

impl KeyReport {
    pub fn get(&self, genre: Genre) -> Option<&GenreKeyStats> {
        self.genres.iter().find(|s| s.genre == genre)
    }
}

/// Classify, aggregate and scale the whole table
pub fn analyze(table: &SongTable) -> KeyReport {
    let genres: Vec<GenreKeyStats> = Genre::ALL
        .iter()
        .map(|&genre| {
            let members = members_of(genre, table);
            let stats = GenreKeyStats::from_members(genre, &members);

            if stats.is_empty() {
                info!("{}: no matching songs, distribution is all zero", genre);
            } else {
                debug!(
                    "{}: {} songs, top keys {:?}",
                    genre,
                    stats.song_count(),
                    stats.top
                );
            }
            stats
        })
        .collect();

    let scale = SharedScale::from_top_values(
        genres
            .iter()
            .flat_map(|s| s.top.iter().map(|&(_, pct)| pct)),
    );
    debug!(
        "Shared scale: max {:.1}% -> axis 0..{} ({} ticks)",
        scale.max_pct,
        scale.axis_max,
        scale.ticks.len()
    );

    KeyReport { genres, scale }
}
