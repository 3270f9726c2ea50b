//! Stack mode: cumulative series per group over the report dates

use tracing::info;

use crate::chart::{self, build_stacked_chart, chart_title};
use crate::error::Result;
use crate::output::{format_cell, print_group_row, print_header, print_separator, print_title};
use crate::pipeline::{stack_series, weighted_palette};
use crate::request::ChartRequest;

use super::Destination;

/// Build cumulative series and color them by their share of the final stack
pub fn run_stack(request: &ChartRequest, destination: Destination<'_>) -> Result<()> {
    let options = &request.options;
    let stack = stack_series(&request.shifts, options, &request.all_dates)?;
    let finals = stack.final_values();
    let colors = weighted_palette(&finals);
    let title = chart_title(options);

    info!(
        groups = stack.labels.len(),
        dates = request.all_dates.len(),
        "stack chart"
    );

    if let Some(output) = destination.chart_output() {
        let chart = build_stacked_chart(
            &stack,
            &colors,
            &request.all_dates,
            options.measurement,
            &title,
        )?;
        return chart::emit_chart(&chart, output);
    }

    let precision = options.measurement.label_precision();
    let first = &request.all_dates[0];
    let last = &request.all_dates[request.all_dates.len() - 1];

    print_title(&title);
    print_header(&[first.as_str(), last.as_str()]);
    print_separator(2);
    for ((label, series), &color) in stack.labels.iter().zip(&stack.series).zip(&colors) {
        let start = series.first().copied().unwrap_or(0.0);
        let end = series.last().copied().unwrap_or(0.0);
        print_group_row(
            label,
            &[format_cell(start, precision), format_cell(end, precision)],
            color,
        );
    }

    Ok(())
}
