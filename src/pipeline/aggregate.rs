//! Group aggregation for pie, stack and scatter charts

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::error::{Result, ShiftError};

use super::grouping::grouping_for;
use super::measurement::{MeasuredValue, Measurement};
use super::shift::{DisplayOptions, ShiftRecord};

/// Pie chart data: one value per group, labels sorted ascending
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Stacked-area data: one cumulative series per group, aligned to the date axis.
/// Groups are in order of first appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct StackSeries {
    pub labels: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

impl StackSeries {
    /// Last cumulative value of each group (0 for an empty date axis)
    pub fn final_values(&self) -> Vec<f64> {
        self.series
            .iter()
            .map(|s| s.last().copied().unwrap_or(0.0))
            .collect()
    }
}

/// Scatter data: one point per shift, no aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub sizes: Vec<f64>,
    /// Group of each point, for coloring and tooltips
    pub labels: Vec<String>,
}

/// Running numerator/denominator sums. Scalars only touch `numer`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Tally {
    numer: f64,
    denom: f64,
}

impl Tally {
    fn add(&mut self, value: MeasuredValue) {
        match value {
            MeasuredValue::Scalar(v) => self.numer += v,
            MeasuredValue::Ratio { numer, denom } => {
                self.numer += numer;
                self.denom += denom;
            }
        }
    }
}

/// Running totals, e.g. [0, 1, 2, 3, 4] -> [0, 1, 3, 6, 10]
pub fn prefix_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc)
        })
        .collect()
}

/// Cumulative weighted rates from per-date (numerator, denominator) sums.
/// A date whose cumulative denominator is still zero yields 0.
fn cumulative_rates(tallies: &[Tally]) -> Vec<f64> {
    let numers: Vec<f64> = tallies.iter().map(|t| t.numer).collect();
    let denoms: Vec<f64> = tallies.iter().map(|t| t.denom).collect();

    prefix_sum(&numers)
        .into_iter()
        .zip(prefix_sum(&denoms))
        .map(|(n, d)| if d > 0.0 { n / d } else { 0.0 })
        .collect()
}

fn require_shifts(shifts: &[ShiftRecord]) -> Result<()> {
    if shifts.is_empty() {
        return Err(ShiftError::InvalidInput("no shifts to chart".to_string()));
    }
    Ok(())
}

fn require_dates(all_dates: &[String]) -> Result<HashMap<&str, usize>> {
    if all_dates.is_empty() {
        return Err(ShiftError::InvalidInput(
            "all_dates is required for this chart".to_string(),
        ));
    }

    let mut index = HashMap::with_capacity(all_dates.len());
    for (i, date) in all_dates.iter().enumerate() {
        if index.insert(date.as_str(), i).is_some() {
            return Err(ShiftError::InvalidInput(format!(
                "date '{}' appears more than once in all_dates",
                date
            )));
        }
    }
    Ok(index)
}

/// Sum each group's measurements. Hourly rate divides once, after summing.
pub fn pie_totals(shifts: &[ShiftRecord], options: &DisplayOptions) -> Result<GroupTotals> {
    require_shifts(shifts)?;

    let key = grouping_for(options);
    let measurement = options.measurement;

    let mut groups: BTreeMap<&str, Tally> = BTreeMap::new();
    for shift in shifts {
        groups
            .entry(key.group_of(shift))
            .or_default()
            .add(measurement.extract(shift));
    }

    let mut labels = Vec::with_capacity(groups.len());
    let mut values = Vec::with_capacity(groups.len());
    for (label, tally) in groups {
        let value = match measurement {
            Measurement::HourlyRate if tally.denom > 0.0 => tally.numer / tally.denom,
            Measurement::HourlyRate => return Err(ShiftError::ZeroHours(label.to_string())),
            Measurement::Signatures | Measurement::Hours => tally.numer,
        };
        labels.push(label.to_string());
        values.push(value);
    }

    debug!(groups = labels.len(), ?key, "pie totals");
    Ok(GroupTotals { labels, values })
}

/// Cumulative per-date series for each group.
///
/// Shifts dated outside `all_dates` are skipped.
pub fn stack_series(
    shifts: &[ShiftRecord],
    options: &DisplayOptions,
    all_dates: &[String],
) -> Result<StackSeries> {
    require_shifts(shifts)?;
    let date_index = require_dates(all_dates)?;

    let key = grouping_for(options);
    let measurement = options.measurement;

    let mut labels: Vec<String> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut daily: Vec<Vec<Tally>> = Vec::new();
    let mut skipped = 0usize;

    for shift in shifts {
        let group = key.group_of(shift);
        let g = *group_index.entry(group).or_insert_with(|| {
            labels.push(group.to_string());
            daily.push(vec![Tally::default(); all_dates.len()]);
            labels.len() - 1
        });

        match date_index.get(shift.date.as_str()) {
            Some(&d) => daily[g][d].add(measurement.extract(shift)),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, "shifts dated outside all_dates were left out of the stack");
    }

    let series = daily
        .iter()
        .map(|tallies| match measurement {
            Measurement::HourlyRate => cumulative_rates(tallies),
            Measurement::Signatures | Measurement::Hours => {
                let raw: Vec<f64> = tallies.iter().map(|t| t.numer).collect();
                prefix_sum(&raw)
            }
        })
        .collect();

    debug!(groups = labels.len(), dates = all_dates.len(), ?key, "stack series");
    Ok(StackSeries { labels, series })
}

/// x position of each shift as the index of its date in `all_dates`
pub fn date_positions(shifts: &[ShiftRecord], all_dates: &[String]) -> Result<Vec<f64>> {
    let date_index = require_dates(all_dates)?;
    shifts
        .iter()
        .map(|shift| {
            date_index
                .get(shift.date.as_str())
                .map(|&i| i as f64)
                .ok_or_else(|| ShiftError::UnknownDate(shift.date.clone()))
        })
        .collect()
}

/// One point per shift at the given x coordinates.
///
/// Hourly-rate values and sizes are not guarded against zero-hour shifts.
pub fn scatter_points(
    shifts: &[ShiftRecord],
    options: &DisplayOptions,
    x: Vec<f64>,
) -> Result<ScatterPoints> {
    require_shifts(shifts)?;
    if x.len() != shifts.len() {
        return Err(ShiftError::InvalidInput(format!(
            "{} x coordinates for {} shifts",
            x.len(),
            shifts.len()
        )));
    }

    let key = grouping_for(options);
    let measurement = options.measurement;

    let y: Vec<f64> = shifts.iter().map(|s| measurement.scatter_value(s)).collect();
    let sizes: Vec<f64> = shifts.iter().map(|s| measurement.scatter_size(s)).collect();
    let labels = shifts
        .iter()
        .map(|s| key.group_of(s).to_string())
        .collect();

    let non_finite = y
        .iter()
        .zip(&sizes)
        .filter(|(v, s)| !v.is_finite() || !s.is_finite())
        .count();
    if non_finite > 0 {
        debug!(non_finite, "scatter points with zero-hour shifts");
    }

    Ok(ScatterPoints { x, y, sizes, labels })
}
