//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#0A0A0C"; // Near black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#505050"; // Grid lines

/// Scatter markers are translucent so overlapping shifts stay visible
pub(super) const SCATTER_OPACITY: f64 = 0.67;

/// Stacked areas are drawn opaque with no outline, one smooth rainbow
pub(super) const AREA_OPACITY: f64 = 1.0;
