//! CLI mode implementations, one per chart type

mod pie;
mod scatter;
mod stack;
mod weekly;

pub use pie::run_pie;
pub use scatter::run_scatter;
pub use stack::run_stack;
pub use weekly::run_weekly;

use crate::chart::{self, ChartOutput, ScatterAxis, build_scatter_chart};
use crate::error::Result;
use crate::output::{format_cell, print_group_row, print_header, print_separator, print_title};
use crate::pipeline::{Measurement, ScatterPoints, point_colors};

/// Where a runner sends its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// ECharts option on stdout
    Json,
    /// PNG chart at the given path
    Image(&'a str),
    /// Colored summary table on stdout
    Table,
}

impl<'a> Destination<'a> {
    /// Chart output for this destination, `None` for tables
    fn chart_output(self) -> Option<ChartOutput<'a>> {
        match self {
            Destination::Json => Some(ChartOutput::Json),
            Destination::Image(path) => Some(ChartOutput::Image(path)),
            Destination::Table => None,
        }
    }
}

/// Shared tail of the two scatter modes: color per group, then chart or table
fn finish_scatter(
    points: &ScatterPoints,
    tooltips: &[String],
    axis: ScatterAxis<'_>,
    measurement: Measurement,
    title: &str,
    destination: Destination<'_>,
) -> Result<()> {
    let colors = point_colors(&points.labels);

    if let Some(output) = destination.chart_output() {
        let chart = build_scatter_chart(
            points,
            &colors,
            tooltips,
            axis,
            measurement.label(),
            title,
        )?;
        return chart::emit_chart(&chart, output);
    }

    print_title(title);
    print_header(&["x", measurement.label(), "Size"]);
    print_separator(3);
    for (i, tooltip) in tooltips.iter().enumerate() {
        print_group_row(
            tooltip,
            &[
                format_cell(points.x[i], 1),
                format_cell(points.y[i], 2),
                format_cell(points.sizes[i], 1),
            ],
            colors[i],
        );
    }

    Ok(())
}
