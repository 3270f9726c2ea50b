//! Request payload loading
//!
//! The web layer sends one JSON document per chart:
//! `{"shift_info": [...], "input": {...}, "all_dates": [...]}`.
//! Shift numbers may arrive as JSON numbers or as numeric strings.

use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ShiftError};
use crate::pipeline::{DisplayOptions, GroupFilter, Measurement, ShiftRecord};

/// A parsed chart request
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub shifts: Vec<ShiftRecord>,
    pub options: DisplayOptions,
    /// Ordered, distinct dates of the report window (stack and scatter only)
    pub all_dates: Vec<String>,
}

#[derive(Deserialize)]
struct RawRequest {
    #[serde(default)]
    shift_info: Vec<RawShift>,
    input: RawOptions,
    #[serde(default)]
    all_dates: Vec<String>,
}

#[derive(Deserialize)]
struct RawOptions {
    name: String,
    location: String,
    measurement: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawShift {
    name: Option<String>,
    location: Option<String>,
    date: Option<String>,
    num_signatures: Option<NumberOrText>,
    total_hours: Option<NumberOrText>,
    start_time: Option<String>,
    end_time: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn to_f64(&self, field: &str) -> Result<f64> {
        let value = match self {
            NumberOrText::Number(n) => *n,
            NumberOrText::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                ShiftError::InvalidInput(format!("{} '{}' is not a number", field, s))
            })?,
        };
        if !value.is_finite() || value < 0.0 {
            return Err(ShiftError::InvalidInput(format!(
                "{} must be a non-negative number, got {}",
                field, value
            )));
        }
        Ok(value)
    }

    fn to_count(&self, field: &str) -> Result<u32> {
        match self {
            NumberOrText::Number(_) => {
                let value = self.to_f64(field)?.trunc();
                if value > f64::from(u32::MAX) {
                    return Err(ShiftError::InvalidInput(format!(
                        "{} {} is too large",
                        field, value
                    )));
                }
                Ok(value as u32)
            }
            NumberOrText::Text(s) => s.trim().parse::<u32>().map_err(|_| {
                ShiftError::InvalidInput(format!("{} '{}' is not a whole number", field, s))
            }),
        }
    }
}

impl RawShift {
    fn into_record(self) -> Result<ShiftRecord> {
        let num_signatures = match &self.num_signatures {
            Some(v) => v.to_count("num_signatures")?,
            None => 0,
        };
        let total_hours = match &self.total_hours {
            Some(v) => v.to_f64("total_hours")?,
            None => 0.0,
        };

        Ok(ShiftRecord {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            num_signatures,
            total_hours,
            start_time: self.start_time.unwrap_or_default(),
            end_time: self.end_time.unwrap_or_default(),
        })
    }
}

impl RawOptions {
    fn into_options(self) -> Result<DisplayOptions> {
        Ok(DisplayOptions {
            name: GroupFilter::from_selector(&self.name),
            location: GroupFilter::from_selector(&self.location),
            measurement: self.measurement.parse::<Measurement>()?,
        })
    }
}

/// Parse a request from JSON text
pub fn parse_request(json: &str) -> Result<ChartRequest> {
    let raw: RawRequest = serde_json::from_str(json)?;

    let options = raw.input.into_options()?;
    let shifts = raw
        .shift_info
        .into_iter()
        .map(RawShift::into_record)
        .collect::<Result<Vec<_>>>()?;

    debug!(
        shifts = shifts.len(),
        dates = raw.all_dates.len(),
        measurement = %options.measurement,
        "parsed request"
    );

    Ok(ChartRequest {
        shifts,
        options,
        all_dates: raw.all_dates,
    })
}

/// Load a request from a file, or from stdin when `path` is `None` or `-`
pub fn load_request(path: Option<&str>) -> Result<ChartRequest> {
    let json = match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| ShiftError::Io {
                    path: "stdin".to_string(),
                    source,
                })?;
            buf
        }
        Some(p) => std::fs::read_to_string(p).map_err(|source| ShiftError::Io {
            path: p.to_string(),
            source,
        })?,
    };

    parse_request(&json)
}
