//! Interactive chart in the browser, built with plotlars.
//!
//! Enabled with the `interactive` feature.

use crate::render::chart::Y_AXIS_LABEL;
use crate::render::error::RenderError;
use crate::types::tables::monthly_table::{MonthlyTable, MONTH_COLUMN};
use plotlars::{Axis, Legend, Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};

const COLORS: [Rgb; 3] = [Rgb(235, 117, 0), Rgb(69, 157, 230), Rgb(46, 160, 67)];
const LINES: [Line; 3] = [Line::Solid, Line::Dash, Line::Dot];
const SHAPES: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Diamond];

/// Opens a line+marker plot of every series, months on a categorical x-axis.
pub fn show_interactive(table: &MonthlyTable, title: &str) -> Result<(), RenderError> {
    let (first, rest) = table
        .series_names()
        .split_first()
        .ok_or(RenderError::EmptyTable)?;
    let data = table.to_dataframe()?;
    let additional: Vec<&str> = rest.iter().map(String::as_str).collect();
    let n = table.series_names().len();

    TimeSeriesPlot::builder()
        .data(&data)
        .x(MONTH_COLUMN)
        .y(first.as_str())
        .additional_series(additional)
        .size(8)
        .colors(COLORS.iter().cycle().take(n).cloned().collect())
        .lines(LINES.iter().cycle().take(n).cloned().collect())
        .with_shape(true)
        .shapes(SHAPES.iter().cycle().take(n).cloned().collect())
        .plot_title(Text::from(title).size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .x_title("Month")
        .y_title(Text::from(Y_AXIS_LABEL).color(Rgb(0, 0, 0)))
        .y_axis(
            &Axis::new()
                .value_color(Rgb(0, 0, 0))
                .zero_line_color(Rgb(0, 0, 0)),
        )
        .build()
        .plot();
    Ok(())
}
