//! Weekly scatter mode: every shift overlaid on one stretched week

use tracing::info;

use crate::chart::{ScatterAxis, chart_title};
use crate::error::Result;
use crate::pipeline::{scatter_points, weekly_timestamps};
use crate::request::ChartRequest;

use super::{Destination, finish_scatter};

/// Plot every shift at its weekday and time of day
pub fn run_weekly(request: &ChartRequest, destination: Destination<'_>) -> Result<()> {
    let options = &request.options;
    let (window, x) = weekly_timestamps(&request.shifts)?;
    let points = scatter_points(&request.shifts, options, x)?;

    info!(
        points = points.x.len(),
        start_hour = window.start_hour,
        end_hour = window.end_hour,
        stretch = window.fill_multiplier(),
        "weekly chart"
    );

    // Tooltips carry the shift's hours as well as its group
    let tooltips: Vec<String> = points
        .labels
        .iter()
        .zip(&request.shifts)
        .map(|(label, shift)| format!("{}: {} - {}", label, shift.start_time, shift.end_time))
        .collect();

    finish_scatter(
        &points,
        &tooltips,
        ScatterAxis::Weekdays,
        options.measurement,
        &chart_title(options),
        destination,
    )
}
