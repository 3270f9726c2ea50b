//! Shift records and per-request display options

use super::measurement::Measurement;

/// One recorded work shift. Times are wall-clock `HH:MM` on `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftRecord {
    pub name: String,
    pub location: String,
    pub date: String,
    pub num_signatures: u32,
    pub total_hours: f64,
    pub start_time: String,
    pub end_time: String,
}

/// How a name or location selector constrains the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupFilter {
    /// A single named worker or site
    Specific(String),
    /// "All": split the chart by this field
    GroupBySelf,
    /// "Any": no constraint and no grouping signal
    Unconstrained,
}

impl GroupFilter {
    pub fn from_selector(value: &str) -> Self {
        match value {
            "All" => GroupFilter::GroupBySelf,
            "Any" => GroupFilter::Unconstrained,
            other => GroupFilter::Specific(other.to_string()),
        }
    }

    /// Text as the request originally spelled it
    pub fn as_str(&self) -> &str {
        match self {
            GroupFilter::Specific(value) => value,
            GroupFilter::GroupBySelf => "All",
            GroupFilter::Unconstrained => "Any",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    pub name: GroupFilter,
    pub location: GroupFilter,
    pub measurement: Measurement,
}
