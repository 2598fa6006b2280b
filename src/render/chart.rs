//! Static line chart of a [`MonthlyTable`], drawn with plotters to SVG.

use crate::render::error::RenderError;
use crate::types::lat_lon::LatLon;
use crate::types::month::label_at;
use crate::types::tables::monthly_table::MonthlyTable;
use log::info;
use plotters::prelude::*;
use std::path::Path;

pub const Y_AXIS_LABEL: &str = "Irradiance (kWh/m²/day)";

const SERIES_COLORS: [RGBColor; 6] = [
    RGBColor(235, 117, 0),
    RGBColor(69, 157, 230),
    RGBColor(46, 160, 67),
    RGBColor(200, 55, 90),
    RGBColor(130, 90, 200),
    RGBColor(90, 90, 90),
];

/// Title and pixel size of a rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Solar irradiance".to_string(),
            width: 960,
            height: 540,
        }
    }
}

impl ChartOptions {
    /// Default size, titled with the queried location, e.g. `Solar irradiance at 40°N, 105°W`.
    pub fn for_location(location: LatLon) -> Self {
        Self {
            title: format!("Solar irradiance at {}", location),
            ..Self::default()
        }
    }
}

/// Renders the chart and writes it to `path` as SVG.
pub fn render_svg(
    table: &MonthlyTable,
    options: &ChartOptions,
    path: &Path,
) -> Result<(), RenderError> {
    let svg = render_svg_string(table, options)?;
    std::fs::write(path, svg).map_err(|e| RenderError::Io(path.to_path_buf(), e))?;
    info!("Wrote chart to {}", path.display());
    Ok(())
}

/// Renders the chart into an SVG document.
///
/// The x-axis is categorical, one tick per month in calendar order. Each
/// series gets its own color, a line, point markers and a legend entry.
pub fn render_svg_string(table: &MonthlyTable, options: &ChartOptions) -> Result<String, RenderError> {
    let (lo, hi) = table.value_range().ok_or(RenderError::EmptyTable)?;
    let (y_min, y_max) = y_bounds(lo, hi);
    let long = table.to_long();
    let draw_err = |e: &dyn std::fmt::Display| RenderError::Drawing(e.to_string());

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_err(&e))?;

        // one slot of padding on each side keeps the end markers inside the plot
        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, ("sans-serif", 24))
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(64)
            .build_cartesian_2d(-1i32..12i32, y_min..y_max)
            .map_err(|e| draw_err(&e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(16)
            .x_label_formatter(&|i| {
                if *i < 0 {
                    String::new()
                } else {
                    label_at(*i as usize).to_string()
                }
            })
            .x_desc("Month")
            .y_desc(Y_AXIS_LABEL)
            .draw()
            .map_err(|e| draw_err(&e))?;

        for (idx, name) in long.series_names().iter().enumerate() {
            let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
            let points: Vec<(i32, f64)> = long
                .series(name)
                .map(|row| (row.month.number_from_month() as i32 - 1, row.value))
                .collect();

            chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                .map_err(|e| draw_err(&e))?
                .label(name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            chart
                .draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
                )
                .map_err(|e| draw_err(&e))?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| draw_err(&e))?;
        root.present().map_err(|e| draw_err(&e))?;
    }
    Ok(svg)
}

fn y_bounds(lo: f64, hi: f64) -> (f64, f64) {
    let lower = if lo >= 0.0 { 0.0 } else { lo * 1.1 };
    let upper = if hi > lower {
        hi + (hi - lower) * 0.1
    } else {
        lower + 1.0
    };
    (lower, upper)
}
