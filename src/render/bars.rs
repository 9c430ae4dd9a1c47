//! 2x2 grid of top-key bar charts, one panel per genre bucket

use crate::analysis::{GenreKeyStats, KeyReport, SharedScale};
use crate::render::axis::FixedTicks;
use crate::render::canvas::DrawResult;
use crate::render::style::{key_color, top_down_label, RenderConfig};
use plotters::coord::Shift;
use plotters::prelude::*;

const SUPTITLE: &str = "Most Common Keys by Music Genre";
const X_DESC: &str = "Percentage of Songs (%)";
const Y_DESC: &str = "Key";

/// Fraction of a row left empty above and below each bar
const BAR_GAP: f64 = 0.1;

/// Draw the full grid: overall title, then panels in `Genre::ALL` order
pub fn draw_bar_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &KeyReport,
    config: &RenderConfig,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let root = root.titled(SUPTITLE, config.font(config.suptitle_pt))?;
    let panels = root.split_evenly((2, 2));

    for (panel, stats) in panels.iter().zip(&report.genres) {
        draw_key_bars(panel, stats, &report.scale, config)?;
    }

    Ok(())
}

/// Horizontal bars for one bucket's top keys, highest on top
fn draw_key_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    stats: &GenreKeyStats,
    scale: &SharedScale,
    config: &RenderConfig,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    let rows = stats.top.len();
    let key_names: Vec<&str> = stats.top.iter().map(|(key, _)| key.name()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("Most Common Keys in {}", stats.genre),
            config.font(config.title_pt),
        )
        .margin(config.px_u32(14.0))
        .x_label_area_size(config.px_u32(36.0))
        .y_label_area_size(config.px_u32(40.0))
        .build_cartesian_2d(
            FixedTicks::from_scale(scale),
            FixedTicks::categories(rows),
        )?;

    let x_formatter = |v: &f64| format!("{:.0}", v);
    let y_formatter = |v: &f64| top_down_label(&key_names, *v);

    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(config.axis_style())
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .axis_desc_style(config.font(config.label_pt))
        .label_style(config.font(config.tick_pt))
        .x_labels(scale.ticks.len())
        .y_labels(rows)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .draw()?;

    chart.draw_series(stats.top.iter().enumerate().map(|(rank, &(key, pct))| {
        let bottom = (rows - 1 - rank) as f64 + BAR_GAP;
        Rectangle::new(
            [(0.0, bottom), (pct, bottom + 1.0 - 2.0 * BAR_GAP)],
            key_color(key).filled(),
        )
    }))?;

    Ok(())
}
