//! Shift aggregation and derived metrics

mod aggregate;
mod colors;
mod grouping;
mod measurement;
mod shift;
mod weekly;

pub(crate) use aggregate::{
    GroupTotals, ScatterPoints, StackSeries, date_positions, pie_totals, scatter_points,
    stack_series,
};
pub(crate) use colors::{Rgb, cyclic_palette, point_colors, weighted_palette};
pub(crate) use measurement::Measurement;
pub(crate) use shift::{DisplayOptions, GroupFilter, ShiftRecord};
pub(crate) use weekly::{SECONDS_PER_DAY, SECONDS_PER_WEEK, weekly_timestamps};
