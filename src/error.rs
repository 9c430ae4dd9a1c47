//! Unified error types for genre-keys
//!
//! Error strategy:
//! - Load errors (unreadable source, missing columns, bad rows): fatal, abort before rendering
//! - Render errors (unwritable output, backend failure, no font): fatal, no partial output
//!
//! An empty genre bucket is not an error; it yields an all-zero distribution.

use std::path::PathBuf;
use thiserror::Error;

/// Columns the loader requires in the source table
pub const REQUIRED_COLUMNS: &str = "genre, key";

/// Top-level error type for genre-keys operations
#[derive(Debug, Error)]
pub enum GenreKeysError {
    // =========================================================================
    // Load errors
    // =========================================================================
    #[error("Cannot read song table '{path}': {reason}\n  Tip: Check the path exists and is a delimited text file")]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("Song table '{path}' has no '{column}' column\n  Required columns: {REQUIRED_COLUMNS}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid row {row} in '{path}': {reason}")]
    InvalidRow {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    // =========================================================================
    // Render errors
    // =========================================================================
    #[error("Failed to render '{artifact}': {reason}")]
    RenderError { artifact: String, reason: String },

    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    OutputError { path: PathBuf, reason: String },

    #[error("No usable serif font found (searched: {searched})\n  Tip: Install a serif font such as Liberation Serif or DejaVu Serif")]
    FontUnavailable { searched: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for genre-keys operations
pub type Result<T> = std::result::Result<T, GenreKeysError>;

impl GenreKeysError {
    /// Returns true if the source table could not be loaded
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            GenreKeysError::SourceUnreadable { .. }
                | GenreKeysError::MissingColumn { .. }
                | GenreKeysError::InvalidRow { .. }
        )
    }

    /// Returns true if an artifact could not be produced
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            GenreKeysError::RenderError { .. }
                | GenreKeysError::OutputError { .. }
                | GenreKeysError::FontUnavailable { .. }
        )
    }

    /// Create a render error for the named artifact
    pub fn render_error(artifact: impl Into<String>, reason: impl ToString) -> Self {
        GenreKeysError::RenderError {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!("Permission denied. Check that you have write access to {}", path.display())
            }
            std::io::ErrorKind::NotFound => {
                format!(
                    "Directory does not exist: {}",
                    path.parent().map(|p| p.display().to_string()).unwrap_or_default()
                )
            }
            _ => err.to_string(),
        };
        GenreKeysError::OutputError { path, reason }
    }
}
