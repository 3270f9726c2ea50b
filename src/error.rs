//! Error type shared by request loading, the pipeline and chart output

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShiftError {
    /// Measurement name outside Signatures / Hours / Hourly Rate
    #[error("unknown measurement '{0}' (expected Signatures, Hours or Hourly Rate)")]
    UnknownMeasurement(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Scatter x lookup failed
    #[error("shift date '{0}' is not listed in all_dates")]
    UnknownDate(String),

    #[error("group '{0}' has zero total hours, hourly rate is undefined")]
    ZeroHours(String),

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render chart: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ShiftError>;
