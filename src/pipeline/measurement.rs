//! Measurement selection: what number each shift contributes

use std::fmt;
use std::str::FromStr;

use crate::error::ShiftError;

use super::shift::ShiftRecord;

/// Marker area multiplier for signature/hour charts, typical rate 5-25 -> 40-200 px²
const RATE_SIZE_SCALE: f64 = 8.0;

/// Marker area multiplier for rate charts, typical length 0.5-3 h -> 36-216 px²
const HOURS_SIZE_SCALE: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    Signatures,
    Hours,
    HourlyRate,
}

impl Measurement {
    /// Display name, also the spelling the request uses
    pub fn label(self) -> &'static str {
        match self {
            Measurement::Signatures => "Signatures",
            Measurement::Hours => "Hours",
            Measurement::HourlyRate => "Hourly Rate",
        }
    }

    /// Per-shift contribution to an aggregate. Rates stay split until after summing.
    pub fn extract(self, shift: &ShiftRecord) -> MeasuredValue {
        match self {
            Measurement::Signatures => MeasuredValue::Scalar(f64::from(shift.num_signatures)),
            Measurement::Hours => MeasuredValue::Scalar(shift.total_hours),
            Measurement::HourlyRate => MeasuredValue::Ratio {
                numer: f64::from(shift.num_signatures),
                denom: shift.total_hours,
            },
        }
    }

    /// Scatter y value. Not guarded: zero hours yields a non-finite rate.
    pub fn scatter_value(self, shift: &ShiftRecord) -> f64 {
        match self {
            Measurement::Signatures => f64::from(shift.num_signatures),
            Measurement::Hours => shift.total_hours,
            Measurement::HourlyRate => f64::from(shift.num_signatures) / shift.total_hours,
        }
    }

    /// Scatter marker area. Not guarded: zero hours yields a non-finite size.
    ///
    /// Signatures and Hours both size by the shift's rate.
    pub fn scatter_size(self, shift: &ShiftRecord) -> f64 {
        match self {
            Measurement::Signatures => {
                f64::from(shift.num_signatures) / shift.total_hours * RATE_SIZE_SCALE
            }
            Measurement::Hours => {
                f64::from(shift.num_signatures) / shift.total_hours * RATE_SIZE_SCALE
            }
            Measurement::HourlyRate => shift.total_hours * HOURS_SIZE_SCALE,
        }
    }

    /// Maximum decimals shown on pie slice labels
    pub fn label_precision(self) -> usize {
        match self {
            Measurement::Signatures => 0,
            Measurement::Hours | Measurement::HourlyRate => 2,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Measurement {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Signatures" => Ok(Measurement::Signatures),
            "Hours" => Ok(Measurement::Hours),
            "Hourly Rate" | "HourlyRate" => Ok(Measurement::HourlyRate),
            other => Err(ShiftError::UnknownMeasurement(other.to_string())),
        }
    }
}

/// A shift's measurement: a plain number, or a rate kept as numerator/denominator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasuredValue {
    Scalar(f64),
    Ratio { numer: f64, denom: f64 },
}
