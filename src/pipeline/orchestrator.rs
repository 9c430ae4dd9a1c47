//! Pipeline orchestration
//!
//! Runs the phases strictly in order: load -> analyze -> render. Any error
//! aborts the run; there is no partial-success mode.

use crate::analysis::{self, GenreKeyStats, KeyReport};
use crate::config::Settings;
use crate::error::Result;
use crate::loader;
use crate::render;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Pipeline result summary
#[derive(Debug)]
pub struct PipelineResult {
    /// Rows read from the song table
    pub songs: usize,
    /// Rows whose key had no note (excluded from every percentage)
    pub unmapped_keys: usize,
    /// Per-genre statistics in display order
    pub genres: Vec<GenreKeyStats>,
    /// Shared axis maximum used by both figures
    pub axis_max: u32,
    /// Images written, bar chart first
    pub outputs: Vec<PathBuf>,
}

/// Run the full pipeline
pub fn run(settings: &Settings) -> Result<PipelineResult> {
    let pipeline_start = Instant::now();

    // Phase 1: Load
    let load_start = Instant::now();
    info!("Loading songs from {}", settings.input.display());
    let table = loader::load(&settings.input)?;
    info!(
        "Loaded {} songs in {:.2}s",
        table.len(),
        load_start.elapsed().as_secs_f64()
    );

    // Phase 2: Classify, aggregate, scale
    let analysis_start = Instant::now();
    let report = analysis::analyze(&table);
    info!(
        "Analysis completed in {:.3}s (axis 0..{}%)",
        analysis_start.elapsed().as_secs_f64(),
        report.scale.axis_max
    );

    // Phase 3: Render
    let render_start = Instant::now();
    let outputs = render::render_all(&report, &settings.render, &settings.output_dir)?;
    info!(
        "Rendering completed in {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    info!(
        "Total pipeline time: {:.2}s",
        pipeline_start.elapsed().as_secs_f64()
    );

    let KeyReport { genres, scale } = report;
    Ok(PipelineResult {
        songs: table.len(),
        unmapped_keys: table.unmapped_keys(),
        genres,
        axis_max: scale.axis_max,
        outputs,
    })
}
