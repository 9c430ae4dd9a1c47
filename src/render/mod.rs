//! Chart rendering
//!
//! Produces the two artifacts of a run:
//! - `most_common_keys.png`: 2x2 grid of per-genre top-key bar charts
//! - `genre_key_heatmap_proportion.png`: genre x key heatmap
//!
//! Both figures are rendered in memory before either file is written, so a
//! rendering failure never leaves one image without the other.

pub mod axis;
pub mod bars;
pub mod canvas;
pub mod fonts;
pub mod heatmap;
pub mod style;

pub use axis::FixedTicks;
pub use canvas::{DrawResult, RgbaRaster};
pub use style::{RenderConfig, Typography, BAR_CHART_STEM, HEATMAP_STEM};

use crate::analysis::KeyReport;
use crate::error::{GenreKeysError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Render both figures and write them to `output_dir` (created if absent)
///
/// Returns the written paths, bar chart first.
pub fn render_all(report: &KeyReport, config: &RenderConfig, output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| GenreKeysError::output_error(output_dir, e))?;

    fonts::ensure_registered(&config.typography)?;

    let rendered = [
        (
            config.file_name(BAR_CHART_STEM),
            render_bar_grid(report, config)?,
        ),
        (
            config.file_name(HEATMAP_STEM),
            render_heatmap(report, config)?,
        ),
    ];

    let mut written = Vec::with_capacity(rendered.len());
    for (name, raster) in rendered {
        let path = output_dir.join(name);
        canvas::write_png(raster, &path)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Rasterize the bar chart grid
pub fn render_bar_grid(report: &KeyReport, config: &RenderConfig) -> Result<RgbaRaster> {
    let size = config.figure_px(config.bar_figure_inches);
    canvas::rasterize_transparent(size, |root| bars::draw_bar_grid(root, report, config))
        .map_err(|e| GenreKeysError::render_error(config.file_name(BAR_CHART_STEM), e))
}

/// Rasterize the heatmap
pub fn render_heatmap(report: &KeyReport, config: &RenderConfig) -> Result<RgbaRaster> {
    let size = config.figure_px(config.heatmap_figure_inches);
    canvas::rasterize_transparent(size, |root| heatmap::draw_heatmap(root, report, config))
        .map_err(|e| GenreKeysError::render_error(config.file_name(HEATMAP_STEM), e))
}
