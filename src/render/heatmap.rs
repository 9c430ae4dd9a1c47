//! Genre x key heatmap with a color-scale legend
//!
//! Cells hold the share of each key over all twelve keys (unrounded), colored
//! on the same 0..axis_max scale the bar charts use.

use crate::analysis::{KeyReport, SharedScale};
use crate::render::axis::FixedTicks;
use crate::render::canvas::DrawResult;
use crate::render::style::{blues, top_down_label, RenderConfig};
use crate::types::KEY_ORDER;
use plotters::coord::Shift;
use plotters::prelude::*;

const TITLE: &str = "Distribution of Keys by Music Genre";
const X_DESC: &str = "Key";
const Y_DESC: &str = "Genre";

/// Width reserved for the color-scale legend, in points
const LEGEND_WIDTH_PT: f64 = 60.0;
/// Number of bands the legend gradient is drawn with
const LEGEND_STEPS: usize = 256;
/// Gap between neighbouring cells, in cell units
const CELL_GAP: f64 = 0.02;

/// Draw the heatmap and its legend side by side
pub fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &KeyReport,
    config: &RenderConfig,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let (width, _) = root.dim_in_pixel();
    let legend_width = config.px_u32(LEGEND_WIDTH_PT).min(width / 2);
    let (cells, legend) = root.split_horizontally(width - legend_width);

    draw_cells(&cells, report, config)?;
    draw_legend(&legend, &report.scale, config)?;

    Ok(())
}

fn draw_cells<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &KeyReport,
    config: &RenderConfig,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let rows = report.genres.len();
    let columns = KEY_ORDER.len();
    let genre_names: Vec<&str> = report.genres.iter().map(|s| s.genre.label()).collect();
    let axis_max = report.scale.axis_max_f64();

    let mut chart = ChartBuilder::on(area)
        .caption(TITLE, config.font(config.title_pt))
        .margin(config.px_u32(8.0))
        .x_label_area_size(config.px_u32(36.0))
        .y_label_area_size(config.px_u32(64.0))
        .build_cartesian_2d(
            FixedTicks::categories(columns),
            FixedTicks::categories(rows),
        )?;

    let x_formatter = |v: &f64| {
        KEY_ORDER
            .get(v.floor().max(0.0) as usize)
            .map(|key| key.name().to_string())
            .unwrap_or_default()
    };
    let y_formatter = |v: &f64| top_down_label(&genre_names, *v);

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(config.axis_style())
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(config.font(config.label_pt))
        .label_style(config.font(config.tick_pt))
        .x_labels(columns)
        .y_labels(rows)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .draw()?;

    chart.draw_series(report.genres.iter().enumerate().flat_map(|(rank, stats)| {
        let y = (rows - 1 - rank) as f64;
        stats
            .counts
            .percentages()
            .into_iter()
            .enumerate()
            .map(move |(column, pct)| {
                let x = column as f64;
                Rectangle::new(
                    [(x + CELL_GAP, y + CELL_GAP), (x + 1.0 - CELL_GAP, y + 1.0 - CELL_GAP)],
                    blues(pct / axis_max).filled(),
                )
            })
    }))?;

    Ok(())
}

/// Vertical gradient from 0 to axis_max with percentage ticks
fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scale: &SharedScale,
    config: &RenderConfig,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let axis_max = scale.axis_max_f64();

    // Line the gradient up with the heatmap's plotting area
    let mut chart = ChartBuilder::on(area)
        .margin_top(config.px_u32(config.title_pt * 1.5 + 8.0))
        .margin_bottom(config.px_u32(36.0 + 8.0))
        .margin_left(config.px_u32(6.0))
        .right_y_label_area_size(config.px_u32(34.0))
        .build_cartesian_2d(0f64..1f64, FixedTicks::from_scale(scale))?;

    let y_formatter = |v: &f64| format!("{:.0}%", v);

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .axis_style(config.axis_style())
        .label_style(config.font(config.legend_tick_pt))
        .y_labels(scale.ticks.len())
        .y_label_formatter(&y_formatter)
        .draw()?;

    let band = axis_max / LEGEND_STEPS as f64;
    chart.draw_series((0..LEGEND_STEPS).map(|step| {
        let low = step as f64 * band;
        Rectangle::new(
            [(0.0, low), (1.0, low + band)],
            blues((low + band / 2.0) / axis_max).filled(),
        )
    }))?;

    Ok(())
}
