//! Runtime configuration settings

use crate::render::RenderConfig;
use std::path::PathBuf;

/// Source table read on every run
pub const DEFAULT_INPUT: &str = "Spotify_Song_Attributes.csv";

/// Directory the images are written to
pub const DEFAULT_OUTPUT_DIR: &str = "assets";

/// Runtime settings for the pipeline
#[derive(Debug, Clone)]
pub struct Settings {
    /// Song table path
    pub input: PathBuf,
    /// Output directory for the images
    pub output_dir: PathBuf,
    /// Figure geometry, typography and colors
    pub render: RenderConfig,
}

impl Settings {
    /// Create settings from CLI arguments
    ///
    /// The flags only affect diagnostics; data locations stay at their
    /// build-time values.
    pub fn from_cli(_cli: &super::cli::Cli) -> Self {
        Self::default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            render: RenderConfig::default(),
        }
    }
}
