//! Core data types for genre-keys
//!
//! These types represent the domain model and flow through the pipeline.

use std::fmt;

// =============================================================================
// Musical primitives
// =============================================================================

/// The 12 pitch classes in Western music
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    Cs, // C#/Db
    D,
    Ds, // D#/Eb
    E,
    F,
    Fs, // F#/Gb
    G,
    Gs, // G#/Ab
    A,
    As, // A#/Bb
    B,
}

/// Canonical key order, used for table indexing, tie-breaking and heatmap columns
pub const KEY_ORDER: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

impl PitchClass {
    /// Convert from a raw key identifier (0 = C, 1 = C#, ..., 11 = B)
    ///
    /// Anything outside 0..=11 (including the -1 "no key detected" marker
    /// some exports use) has no note.
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| KEY_ORDER.get(i))
            .copied()
    }

    /// Position in the canonical key order
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Standard notation (e.g., "C", "F#")
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Genre buckets
// =============================================================================

/// Broad genre bucket a song can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Rap,
    Rock,
    Pop,
    Classical,
}

impl Genre {
    /// Fixed display order: subplot order in the bar grid, row order in the heatmap
    pub const ALL: [Genre; 4] = [Genre::Rap, Genre::Rock, Genre::Pop, Genre::Classical];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Genre::Rap => "Rap",
            Genre::Rock => "Rock",
            Genre::Pop => "Pop",
            Genre::Classical => "Classical",
        }
    }

    /// Lowercase keywords; a genre label containing any of them belongs to this bucket
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Genre::Rap => &["rap", "hip hop", "hip-hop", "trap", "drill", "boom bap"],
            Genre::Rock => &["rock", "punk", "metal", "grunge", "alternative", "indie"],
            Genre::Pop => &["pop", "dance", "electropop", "synthpop", "k-pop", "bubblegum pop"],
            Genre::Classical => &[
                "classical",
                "orchestral",
                "orchestra",
                "baroque",
                "romantic",
                "symphony",
                "opera",
                "renaissance",
            ],
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Song table
// =============================================================================

/// One row of the normalized song table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    /// Free-text genre label, `None` when missing or blank
    pub genre: Option<String>,
    /// Mapped key; `None` when the raw key was missing or outside 0..=11
    pub key_note: Option<PitchClass>,
}

impl SongRecord {
    pub fn new(genre: Option<String>, key_note: Option<PitchClass>) -> Self {
        Self { genre, key_note }
    }

    /// Build a record from a raw key identifier
    pub fn from_raw(genre: Option<&str>, key: Option<i64>) -> Self {
        Self {
            genre: genre.map(str::to_string),
            key_note: key.and_then(PitchClass::from_index),
        }
    }
}

/// Normalized song table produced by the loader
#[derive(Debug, Clone, Default)]
pub struct SongTable {
    pub songs: Vec<SongRecord>,
}

impl SongTable {
    pub fn new(songs: Vec<SongRecord>) -> Self {
        Self { songs }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if table is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Rows whose key could not be mapped to a note
    pub fn unmapped_keys(&self) -> usize {
        self.songs.iter().filter(|s| s.key_note.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping_is_canonical() {
        let names: Vec<&str> = (0..12)
            .map(|i| PitchClass::from_index(i).unwrap().name())
            .collect();
        assert_eq!(
            names,
            ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );

        for (i, pitch) in KEY_ORDER.iter().enumerate() {
            assert_eq!(pitch.to_index(), i);
        }
    }

    #[test]
    fn test_out_of_range_keys_have_no_note() {
        assert_eq!(PitchClass::from_index(12), None);
        assert_eq!(PitchClass::from_index(-1), None);
        assert_eq!(PitchClass::from_index(i64::MAX), None);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for genre in Genre::ALL {
            for keyword in genre.keywords() {
                assert_eq!(*keyword, keyword.to_lowercase(), "{} keyword {}", genre, keyword);
            }
        }
    }

    #[test]
    fn test_unmapped_key_count() {
        let table = SongTable::new(vec![
            SongRecord::from_raw(Some("pop"), Some(0)),
            SongRecord::from_raw(Some("pop"), Some(12)),
            SongRecord::from_raw(None, None),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.unmapped_keys(), 2);
    }
}
