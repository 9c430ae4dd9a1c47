//! Song table loading
//!
//! Reads a delimited text table, keeps the `genre` and `key` columns and maps
//! raw key identifiers to note names. Extra columns are ignored.

use crate::error::{GenreKeysError, Result};
use crate::types::{SongRecord, SongTable};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

const GENRE_COLUMN: &str = "genre";
const KEY_COLUMN: &str = "key";

/// The two columns we care about; everything else in the row is skipped
#[derive(Debug, Deserialize)]
struct RawSong {
    genre: Option<String>,
    key: Option<String>,
}

/// Load the song table from a file
pub fn load(path: &Path) -> Result<SongTable> {
    let file = File::open(path).map_err(|e| GenreKeysError::SourceUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    load_from_reader(BufReader::new(file), path)
}

/// Load the song table from any reader; `source` is only used in error messages
pub fn load_from_reader<R: Read>(reader: R, source: &Path) -> Result<SongTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| GenreKeysError::SourceUnreadable {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?
        .clone();

    for column in [GENRE_COLUMN, KEY_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(GenreKeysError::MissingColumn {
                path: source.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut songs = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawSong>().enumerate() {
        // 1-based, header excluded
        let row_number = index + 1;
        let raw = row.map_err(|e| GenreKeysError::InvalidRow {
            path: source.to_path_buf(),
            row: row_number,
            reason: e.to_string(),
        })?;

        let key = parse_key(raw.key.as_deref()).map_err(|reason| GenreKeysError::InvalidRow {
            path: source.to_path_buf(),
            row: row_number,
            reason,
        })?;

        let genre = raw
            .genre
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty());

        let record = SongRecord::from_raw(genre, key);
        if record.key_note.is_none() {
            debug!("Row {}: key {:?} has no note, excluded from percentages", row_number, key);
        }
        songs.push(record);
    }

    let table = SongTable::new(songs);
    info!(
        "Loaded {} songs from {} ({} without a usable key)",
        table.len(),
        source.display(),
        table.unmapped_keys()
    );

    Ok(table)
}

/// Parse a raw key cell
///
/// Integers are taken as-is, integral floats ("5.0") are accepted since
/// spreadsheet exports often write them that way, blank cells are missing.
fn parse_key(raw: Option<&str>) -> std::result::Result<Option<i64>, String> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(t) => t,
    };

    if let Ok(value) = text.parse::<i64>() {
        return Ok(Some(value));
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_nan() => Ok(None),
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(Some(value as i64)),
        _ => Err(format!("key '{}' is not an integer", text)),
    }
}
