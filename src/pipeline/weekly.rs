//! Projection of shifts onto a single stretched week
//!
//! Every shift is placed at its midpoint, measured in seconds from Sunday
//! 00:00. Within each day the observed working hours (plus two hours either
//! side) are stretched to fill the whole day, so shifts clustered in the
//! afternoon spread out across the axis.
//!
//! Shifts must start and end on the same calendar day.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::error::{Result, ShiftError};

use super::shift::ShiftRecord;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;

/// Hours of margin around the observed activity window
const WINDOW_MARGIN_HOURS: i64 = 2;
const EARLIEST_WINDOW_HOUR: i64 = 1;
const LATEST_WINDOW_HOUR: i64 = 23;

const DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Hours of the day that get stretched across the full day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl DisplayWindow {
    pub fn fill_multiplier(&self) -> f64 {
        24.0 / f64::from(self.end_hour - self.start_hour)
    }
}

/// Where a shift's midpoint falls in the week, before stretching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekPlacement {
    /// Sunday = 0
    pub day_index: u32,
    /// Seconds after midnight
    pub intraday_offset: f64,
}

pub(crate) fn parse_date(text: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text.trim(), fmt).ok())
        .ok_or_else(|| ShiftError::InvalidInput(format!("unrecognized date '{}'", text)))
}

pub(crate) fn parse_time(text: &str) -> Result<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text.trim(), fmt).ok())
        .ok_or_else(|| ShiftError::InvalidInput(format!("unrecognized time '{}'", text)))
}

/// Observed earliest start hour and latest end hour, padded and clamped to 1..=23
pub fn display_window(shifts: &[ShiftRecord]) -> Result<DisplayWindow> {
    let mut earliest: Option<u32> = None;
    let mut latest: Option<u32> = None;

    for shift in shifts {
        let start = parse_time(&shift.start_time)?.hour();
        let end = parse_time(&shift.end_time)?.hour();
        earliest = Some(earliest.map_or(start, |h| h.min(start)));
        latest = Some(latest.map_or(end, |h| h.max(end)));
    }

    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return Err(ShiftError::InvalidInput("no shifts to chart".to_string()));
    };

    let start_hour = (i64::from(earliest) - WINDOW_MARGIN_HOURS).max(EARLIEST_WINDOW_HOUR);
    let end_hour = (i64::from(latest) + WINDOW_MARGIN_HOURS).min(LATEST_WINDOW_HOUR);
    if end_hour <= start_hour {
        return Err(ShiftError::InvalidInput(format!(
            "shift hours {}..{} leave no display window",
            earliest, latest
        )));
    }

    Ok(DisplayWindow {
        start_hour: start_hour as u32,
        end_hour: end_hour as u32,
    })
}

/// Day of week and time of day of the shift's midpoint
pub fn week_placement(shift: &ShiftRecord) -> Result<WeekPlacement> {
    let date = parse_date(&shift.date)?;
    let start = parse_time(&shift.start_time)?;
    let end = parse_time(&shift.end_time)?;

    if end <= start {
        return Err(ShiftError::InvalidInput(format!(
            "shift on {} ends at {} before it starts at {}",
            shift.date, shift.end_time, shift.start_time
        )));
    }

    let start_secs = f64::from(start.num_seconds_from_midnight());
    let end_secs = f64::from(end.num_seconds_from_midnight());
    let midpoint = 0.5 * (start_secs + end_secs);

    let time_from_sunday =
        f64::from(date.weekday().num_days_from_sunday()) * SECONDS_PER_DAY + midpoint;
    let time_from_sunday = time_from_sunday.rem_euclid(SECONDS_PER_WEEK);

    Ok(WeekPlacement {
        day_index: (time_from_sunday / SECONDS_PER_DAY).floor() as u32,
        intraday_offset: time_from_sunday.rem_euclid(SECONDS_PER_DAY),
    })
}

/// Stretched x coordinate of a placement inside `window`
pub fn weekly_timestamp(placement: WeekPlacement, window: DisplayWindow) -> f64 {
    let window_start = f64::from(window.start_hour) * SECONDS_PER_HOUR;
    f64::from(placement.day_index) * SECONDS_PER_DAY
        + (placement.intraday_offset - window_start) * window.fill_multiplier()
}

/// Weekly x coordinate for every shift, plus the window used to stretch them
pub fn weekly_timestamps(shifts: &[ShiftRecord]) -> Result<(DisplayWindow, Vec<f64>)> {
    let window = display_window(shifts)?;
    let timestamps = shifts
        .iter()
        .map(|shift| week_placement(shift).map(|p| weekly_timestamp(p, window)))
        .collect::<Result<Vec<_>>>()?;
    Ok((window, timestamps))
}
