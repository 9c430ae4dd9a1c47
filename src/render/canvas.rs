//! Transparent raster output
//!
//! The bitmap backend has no alpha channel, so each figure is drawn twice:
//! once over black and once over white. For a pixel composited with alpha `a`
//! the two results differ by `255 * (1 - a)`, which recovers both the alpha
//! and the unblended color, anti-aliased edges included.

use crate::error::{GenreKeysError, Result};
use image::{ImageFormat, RgbaImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;
use tracing::debug;

/// Result of a drawing routine
pub type DrawResult = std::result::Result<(), Box<dyn Error>>;

/// An RGBA image held in memory until every artifact has rendered
#[derive(Debug, Clone)]
pub struct RgbaRaster {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA, straight (not premultiplied) alpha
    pub pixels: Vec<u8>,
}

impl RgbaRaster {
    /// Alpha at a pixel
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4 + 3) as usize;
        self.pixels.get(offset).copied()
    }

    /// Number of pixels that are not fully transparent
    pub fn visible_pixels(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] > 0).count()
    }
}

/// Draw a figure onto a transparent canvas
pub fn rasterize_transparent<F>(
    (width, height): (u32, u32),
    draw: F,
) -> std::result::Result<RgbaRaster, Box<dyn Error>>
where
    F: for<'b> Fn(&DrawingArea<BitMapBackend<'b>, Shift>) -> DrawResult,
{
    let on_black = rasterize((width, height), 0, &draw)?;
    let on_white = rasterize((width, height), 255, &draw)?;
    debug!("Rasterized {}x{} figure", width, height);

    Ok(RgbaRaster {
        width,
        height,
        pixels: recover_alpha(&on_black, &on_white),
    })
}

fn rasterize<F>(
    (width, height): (u32, u32),
    background: u8,
    draw: &F,
) -> std::result::Result<Vec<u8>, Box<dyn Error>>
where
    F: for<'b> Fn(&DrawingArea<BitMapBackend<'b>, Shift>) -> DrawResult,
{
    let mut buffer = vec![background; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw(&root)?;
        root.present()?;
    }
    Ok(buffer)
}

/// Combine RGB renders over black and white into straight-alpha RGBA
pub fn recover_alpha(on_black: &[u8], on_white: &[u8]) -> Vec<u8> {
    on_black
        .chunks_exact(3)
        .zip(on_white.chunks_exact(3))
        .flat_map(|(black, white)| {
            let spread: i32 = black
                .iter()
                .zip(white)
                .map(|(&b, &w)| w as i32 - b as i32)
                .sum::<i32>()
                / 3;
            let alpha = (255 - spread).clamp(0, 255);

            if alpha == 0 {
                [0, 0, 0, 0]
            } else {
                let unblend = |c: u8| ((c as i32 * 255 + alpha / 2) / alpha).min(255) as u8;
                [unblend(black[0]), unblend(black[1]), unblend(black[2]), alpha as u8]
            }
        })
        .collect()
}

/// Write a raster as PNG
///
/// Uses atomic write pattern: writes to a temp file first, then renames, so
/// an interrupted run never leaves a truncated image behind.
pub fn write_png(raster: RgbaRaster, path: &Path) -> Result<()> {
    let temp_path = path.with_extension("png.tmp");
    let artifact = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let image = RgbaImage::from_raw(raster.width, raster.height, raster.pixels)
        .ok_or_else(|| GenreKeysError::render_error(&artifact, "pixel buffer does not match image size"))?;

    image
        .save_with_format(&temp_path, ImageFormat::Png)
        .map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            match e {
                image::ImageError::IoError(io) => GenreKeysError::output_error(path, io),
                other => GenreKeysError::render_error(&artifact, other),
            }
        })?;

    std::fs::rename(&temp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        GenreKeysError::output_error(path, e)
    })?;

    Ok(())
}
