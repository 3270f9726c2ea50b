//! Grouping key selection

use super::shift::{DisplayOptions, GroupFilter, ShiftRecord};

/// Field a chart is split by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Name,
    Location,
    Date,
}

impl GroupKey {
    pub fn group_of(self, shift: &ShiftRecord) -> &str {
        match self {
            GroupKey::Name => &shift.name,
            GroupKey::Location => &shift.location,
            GroupKey::Date => &shift.date,
        }
    }
}

/// Name "All" wins over location "All"; anything else splits by date.
pub fn grouping_for(options: &DisplayOptions) -> GroupKey {
    if options.name == GroupFilter::GroupBySelf {
        GroupKey::Name
    } else if options.location == GroupFilter::GroupBySelf {
        GroupKey::Location
    } else {
        GroupKey::Date
    }
}
