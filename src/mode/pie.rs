//! Pie mode: one total per group

use tracing::info;

use crate::chart::{self, build_pie_chart, chart_title, slice_label};
use crate::error::Result;
use crate::output::{
    format_cell, print_group_row, print_header, print_separator, print_title, print_total,
};
use crate::pipeline::{cyclic_palette, pie_totals};
use crate::request::ChartRequest;

use super::Destination;

/// Aggregate each group and chart the totals as pie slices
pub fn run_pie(request: &ChartRequest, destination: Destination<'_>) -> Result<()> {
    let options = &request.options;
    let totals = pie_totals(&request.shifts, options)?;
    let colors = cyclic_palette(totals.labels.len());
    let title = chart_title(options);

    info!(groups = totals.labels.len(), "pie chart");

    if let Some(output) = destination.chart_output() {
        let chart = build_pie_chart(&totals, &colors, options.measurement, &title)?;
        return chart::emit_chart(&chart, output);
    }

    let precision = options.measurement.label_precision();
    let total: f64 = totals.values.iter().sum();

    print_title(&title);
    print_header(&[options.measurement.label(), "Label"]);
    print_separator(2);
    for ((label, &value), &color) in totals.labels.iter().zip(&totals.values).zip(&colors) {
        print_group_row(
            label,
            &[
                format_cell(value, precision),
                slice_label(value, total, precision),
            ],
            color,
        );
    }
    print_separator(2);
    print_total("Total", &format_cell(total, precision));

    Ok(())
}
