//! Rendering configuration and color palette
//!
//! All styling lives in an explicit `RenderConfig` handed to the renderer;
//! nothing here touches process-wide plotting defaults.

use crate::types::PitchClass;
use plotters::style::{Color, FontDesc, FontFamily, FontStyle, RGBColor, ShapeStyle, TextStyle, WHITE};
use std::path::PathBuf;

/// File name stem of the 2x2 bar chart grid
pub const BAR_CHART_STEM: &str = "most_common_keys";
/// File name stem of the genre x key heatmap
pub const HEATMAP_STEM: &str = "genre_key_heatmap_proportion";
/// Both artifacts are PNG
pub const IMAGE_EXTENSION: &str = "png";

/// Where to look for a serif typeface
#[derive(Debug, Clone)]
pub struct Typography {
    /// Preferred font files, tried in order
    pub font_files: Vec<PathBuf>,
    /// Directories scanned when none of the preferred files exist
    pub font_dirs: Vec<PathBuf>,
}

impl Default for Typography {
    fn default() -> Self {
        let font_files = [
            "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
            "/Library/Fonts/Times New Roman.ttf",
            "/usr/share/fonts/truetype/msttcorefonts/Times_New_Roman.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
            "/usr/share/fonts/truetype/liberation2/LiberationSerif-Regular.ttf",
            "/usr/share/fonts/liberation-serif/LiberationSerif-Regular.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
            "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
            "C:\\Windows\\Fonts\\times.ttf",
        ];
        let font_dirs = [
            "/usr/share/fonts",
            "/usr/local/share/fonts",
            "/System/Library/Fonts",
            "/Library/Fonts",
            "C:\\Windows\\Fonts",
        ];

        Self {
            font_files: font_files.iter().map(PathBuf::from).collect(),
            font_dirs: font_dirs.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Figure geometry, text sizes and colors
///
/// Sizes are given in inches and points, the way a print layout is specified,
/// and converted to pixels through `dpi`.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub dpi: u32,
    /// Bar chart grid size (width, height) in inches
    pub bar_figure_inches: (f64, f64),
    /// Heatmap size (width, height) in inches
    pub heatmap_figure_inches: (f64, f64),
    /// Color of all text and axis lines
    pub foreground: RGBColor,
    pub suptitle_pt: f64,
    pub title_pt: f64,
    pub label_pt: f64,
    pub tick_pt: f64,
    pub legend_tick_pt: f64,
    pub axis_line_pt: f64,
    pub typography: Typography,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            bar_figure_inches: (14.0, 10.0),
            heatmap_figure_inches: (10.0, 4.0),
            foreground: WHITE,
            suptitle_pt: 25.0,
            title_pt: 16.0,
            label_pt: 12.0,
            tick_pt: 11.0,
            legend_tick_pt: 10.0,
            axis_line_pt: 1.2,
            typography: Typography::default(),
        }
    }
}

impl RenderConfig {
    /// Convert points to pixels at the configured resolution
    pub fn px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    /// Same as `px`, rounded for layout APIs that take whole pixels
    pub fn px_u32(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }

    /// Pixel dimensions of a figure given in inches
    pub fn figure_px(&self, (width, height): (f64, f64)) -> (u32, u32) {
        let dpi = self.dpi as f64;
        ((width * dpi).round() as u32, (height * dpi).round() as u32)
    }

    /// Serif text at the given point size in the foreground color
    pub fn font(&self, points: f64) -> TextStyle<'static> {
        FontDesc::new(FontFamily::Serif, self.px(points), FontStyle::Normal).color(&self.foreground)
    }

    /// Line style for axes
    pub fn axis_style(&self) -> ShapeStyle {
        self.foreground.stroke_width(self.px_u32(self.axis_line_pt))
    }

    /// Output file name for an artifact stem
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, IMAGE_EXTENSION)
    }
}

// =============================================================================
// Palette
// =============================================================================

/// ColorBrewer "Blues", light to dark
const BLUES: [(u8, u8, u8); 9] = [
    (0xf7, 0xfb, 0xff),
    (0xde, 0xeb, 0xf7),
    (0xc6, 0xdb, 0xef),
    (0x9e, 0xca, 0xe1),
    (0x6b, 0xae, 0xd6),
    (0x42, 0x92, 0xc6),
    (0x21, 0x71, 0xb5),
    (0x08, 0x51, 0x9c),
    (0x08, 0x30, 0x6b),
];

/// Sequential blue scale: 0.0 is the lightest shade, 1.0 the darkest
pub fn blues(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let position = t * (BLUES.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(BLUES.len() - 1);
    let frac = position - lower as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (r0, g0, b0) = BLUES[lower];
    let (r1, g1, b1) = BLUES[upper];
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Bar color for a key: reversed Blues sampled at 12 interior points
///
/// Depends only on the key's canonical position, so a key keeps its shade in
/// every subplot. C is the darkest, B the lightest.
pub fn key_color(key: PitchClass) -> RGBColor {
    blues(1.0 - (key.to_index() + 1) as f64 / 13.0)
}

/// Label for a top-down categorical axis whose rows are centered on `i + 0.5`
///
/// Row 0 sits at the bottom of the plot, so the first name is drawn on top.
pub fn top_down_label(names: &[&str], center: f64) -> String {
    if !center.is_finite() || center < 0.0 {
        return String::new();
    }
    let row = center.floor() as usize;
    names
        .len()
        .checked_sub(row + 1)
        .and_then(|rank| names.get(rank))
        .map(|name| name.to_string())
        .unwrap_or_default()
}
