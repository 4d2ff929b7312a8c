//! Plotting infrastructure for word length bar charts
//!
//! This module renders a [`FrequencyTable`] as a vertical bar chart using the
//! [`plotters`] crate. Charts are saved as PNG files with a fixed 1770x1000 resolution.

use crate::analysis::frequency_table::FrequencyTable;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Chart dimensions in pixels.
pub const CHART_SIZE: (u32, u32) = (1770, 1000);

/// Grey background of the plotting area; gridlines are drawn over it in white.
const PLOT_BACKGROUND: RGBColor = RGBColor(234, 234, 242);

/// Anchor colours of the bar gradient, from darkest to brightest.
const PALETTE: [RGBColor; 5] = [
    RGBColor(28, 16, 68),
    RGBColor(79, 18, 123),
    RGBColor(129, 37, 129),
    RGBColor(229, 80, 100),
    RGBColor(251, 135, 97),
];

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Picks the bar colour for position `index` out of `count` bars.
///
/// Colours are linearly interpolated between the [`PALETTE`] anchors so the
/// first bar is the darkest and the last bar the brightest.
fn bar_color(index: usize, count: usize) -> RGBColor {
    if count <= 1 {
        return PALETTE[0];
    }

    let position = index.min(count - 1) as f64 / (count - 1) as f64;
    let scaled = position * (PALETTE.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(PALETTE.len() - 2);
    let t = scaled - lower as f64;

    let RGBColor(r0, g0, b0) = PALETTE[lower];
    let RGBColor(r1, g1, b1) = PALETTE[lower + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Creates a word length bar chart and saves it as a PNG file
///
/// # Arguments
/// * `table` - The frequency table to chart; must not be empty
/// * `output_path` - Path where the PNG file should be saved
///
/// # Chart Properties
/// * Resolution: 1770x1000 pixels
/// * X-axis: word length, one bar per length between the shortest and longest word
/// * Y-axis: number of unique words, from 0 up to the largest count
/// * Styling: grey plot area with white gridlines, bars shaded dark to bright
///
/// # Headless Compatibility
/// Text is rendered through the `ttf` feature, which needs a system `sans-serif`
/// font. Environments without fonts fail with [`PlotError::ChartConfig`].
pub fn create_length_frequency_plot(table: &FrequencyTable, output_path: &Path) -> Result<()> {
    let (Some(min_length), Some(max_length), Some(max_count)) =
        (table.min_length(), table.max_length(), table.max_count())
    else {
        return Err(PlotError::InvalidData(
            "Frequency table cannot be empty".to_string(),
        ));
    };

    let root = BitMapBackend::new(output_path, CHART_SIZE);
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption("Word length frequency", ("sans-serif", 50))
        .margin(25)
        .x_label_area_size(80)
        .y_label_area_size(100)
        .build_cartesian_2d(
            (min_length..max_length + 1).into_segmented(),
            0usize..max_count,
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .plotting_area()
        .fill(&PLOT_BACKGROUND)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(WHITE)
        .light_line_style(WHITE.mix(0.5))
        .x_desc("Word length")
        .y_desc("Count")
        .axis_desc_style(("sans-serif", 40))
        .label_style(("sans-serif", 30))
        .x_label_formatter(&|value| match value {
            SegmentValue::Exact(length) | SegmentValue::CenterOf(length) => length.to_string(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let bar_count = max_length - min_length + 1;
    chart_context
        .draw_series(
            Histogram::vertical(&chart_context)
                .margin(8)
                .style_func(move |value, _| {
                    let length = match value {
                        SegmentValue::Exact(length) | SegmentValue::CenterOf(length) => *length,
                        SegmentValue::Last => max_length,
                    };
                    bar_color(length - min_length, bar_count).filled()
                })
                .data(table.iter()),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    log::info!("Saved word length chart to {}", output_path.display());
    Ok(())
}
