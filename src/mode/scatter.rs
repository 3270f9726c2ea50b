//! Scatter mode: one point per shift, placed by date

use tracing::info;

use crate::chart::{ScatterAxis, chart_title};
use crate::error::Result;
use crate::pipeline::{date_positions, scatter_points};
use crate::request::ChartRequest;

use super::{Destination, finish_scatter};

/// Plot every shift at its date's position in the report window
pub fn run_scatter(request: &ChartRequest, destination: Destination<'_>) -> Result<()> {
    let options = &request.options;
    let x = date_positions(&request.shifts, &request.all_dates)?;
    let points = scatter_points(&request.shifts, options, x)?;

    info!(points = points.x.len(), "scatter chart");

    finish_scatter(
        &points,
        &points.labels,
        ScatterAxis::Dates(&request.all_dates),
        options.measurement,
        &chart_title(options),
        destination,
    )
}
