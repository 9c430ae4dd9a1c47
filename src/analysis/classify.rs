//! Keyword-based genre classification
//!
//! A song belongs to a bucket when its genre label contains any of the
//! bucket's keywords, compared case-insensitively as literal text. Buckets
//! are matched independently, so one song may land in several of them
//! ("indie pop" is both Rock and Pop).

use crate::analysis::traits::GenreMatcher;
use crate::types::{Genre, PitchClass, SongTable};
use tracing::debug;

/// Literal, case-insensitive substring matcher over a keyword list
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    name: String,
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Matcher for one of the fixed genre buckets
    pub fn for_genre(genre: Genre) -> Self {
        Self::new(genre.label(), genre.keywords())
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl GenreMatcher for KeywordMatcher {
    fn matches(&self, genre: &str) -> bool {
        let genre = genre.to_lowercase();
        self.keywords.iter().any(|k| genre.contains(k.as_str()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Key notes of every song whose genre matches the bucket
///
/// Unmapped keys are returned as `None` so the caller decides how to count
/// them. Songs without a genre never match.
pub fn members_of(genre: Genre, table: &SongTable) -> Vec<Option<PitchClass>> {
    members_matching(&KeywordMatcher::for_genre(genre), table)
}

/// Key notes of every song accepted by `matcher`
pub fn members_matching<M: GenreMatcher + ?Sized>(
    matcher: &M,
    table: &SongTable,
) -> Vec<Option<PitchClass>> {
    let members: Vec<Option<PitchClass>> = table
        .songs
        .iter()
        .filter(|song| song.genre.as_deref().is_some_and(|g| matcher.matches(g)))
        .map(|song| song.key_note)
        .collect();

    debug!("{}: {} matching songs", matcher.name(), members.len());
    members
}
