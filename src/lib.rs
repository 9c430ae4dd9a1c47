//! genre-keys - Musical key distribution by genre
//!
//! Reads a song table with free-text genre labels and numeric keys, buckets
//! songs into Rap, Rock, Pop and Classical by keyword, and renders how keys
//! are distributed within each bucket.
//!
//! # Architecture
//!
//! Data flows strictly forward through the modules:
//!
//! - `loader`: Song table reading and key-to-note mapping
//! - `analysis`: Keyword classification, key distributions and the shared scale
//! - `render`: Bar chart grid and heatmap, written as transparent PNGs
//! - `pipeline`: Orchestration of the three phases
//! - `config`: CLI argument parsing and runtime settings
//!
//! # Example
//!
//! ```no_run
//! use genre_keys::{config::Settings, pipeline};
//!
//! let settings = Settings::default();
//! let result = pipeline::run(&settings).expect("Run failed");
//! println!("Wrote {} images", result.outputs.len());
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod render;
pub mod types;

// Re-export key types at crate root
pub use analysis::{GenreKeyStats, KeyDistribution, KeyReport, SharedScale};
pub use error::{GenreKeysError, Result};
pub use types::{Genre, PitchClass, SongRecord, SongTable};
