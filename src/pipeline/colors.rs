//! Group color assignment over a cyclic rainbow colormap

use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Largest position handed out by the weighted policy
const MAX_WEIGHTED_POSITION: f64 = 1.0 - f64::EPSILON;

/// Fraction of the largest group added to every weight so tiny groups stay visible
const VISIBILITY_PADDING: f64 = 0.05;

/// gist_rainbow control points: (position, r, g, b)
const RAINBOW_STOPS: [(f64, f64, f64, f64); 8] = [
    (0.000, 1.00, 0.00, 0.16),
    (0.030, 1.00, 0.00, 0.00),
    (0.215, 1.00, 1.00, 0.00),
    (0.400, 0.00, 1.00, 0.00),
    (0.586, 0.00, 1.00, 1.00),
    (0.770, 0.00, 0.00, 1.00),
    (0.954, 1.00, 0.00, 1.00),
    (1.000, 1.00, 0.00, 0.75),
];

/// RGB color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Sample the rainbow map at `position` (clamped to [0, 1])
pub fn rainbow(position: f64) -> Rgb {
    let x = if position.is_nan() {
        0.0
    } else {
        position.clamp(0.0, 1.0)
    };

    for pair in RAINBOW_STOPS.windows(2) {
        let (x0, r0, g0, b0) = pair[0];
        let (x1, r1, g1, b1) = pair[1];
        if x <= x1 {
            let t = (x - x0) / (x1 - x0);
            return Rgb {
                r: r0 + (r1 - r0) * t,
                g: g0 + (g1 - g0) * t,
                b: b0 + (b1 - b0) * t,
            };
        }
    }

    let (_, r, g, b) = RAINBOW_STOPS[RAINBOW_STOPS.len() - 1];
    Rgb { r, g, b }
}

/// Sample positions for `num_groups` groups using a wrapping stride,
/// so neighbouring groups do not get neighbouring hues.
pub fn cyclic_positions(num_groups: usize) -> Vec<f64> {
    if num_groups == 0 {
        return Vec::new();
    }
    let g = num_groups as f64;
    let step = (num_groups / 7) as f64 * 1.15 + 1.0;
    (0..num_groups)
        .map(|n| (step * n as f64) % g / g)
        .collect()
}

/// One color per group, in group order
pub fn cyclic_palette(num_groups: usize) -> Vec<Rgb> {
    cyclic_positions(num_groups)
        .into_iter()
        .map(rainbow)
        .collect()
}

/// Cumulative color positions proportional to each group's final value.
///
/// Every group gets 5% of the largest final value as padding. Positions are
/// non-decreasing and lie in [0, 1).
pub fn weighted_positions(final_values: &[f64]) -> Vec<f64> {
    if final_values.is_empty() {
        return Vec::new();
    }

    let max_final = final_values.iter().copied().fold(f64::MIN, f64::max);
    let padding = max_final * VISIBILITY_PADDING;
    let weights: Vec<f64> = final_values.iter().map(|v| v + padding).collect();
    let total: f64 = weights.iter().sum();

    let normalized: Vec<f64> = if total > 0.0 && total.is_finite() {
        weights.iter().map(|w| w / total).collect()
    } else {
        let share = 1.0 / final_values.len() as f64;
        vec![share; final_values.len()]
    };

    super::aggregate::prefix_sum(&normalized)
        .into_iter()
        .map(|p| p.clamp(0.0, MAX_WEIGHTED_POSITION))
        .collect()
}

/// Area-fill colors for stacked series
pub fn weighted_palette(final_values: &[f64]) -> Vec<Rgb> {
    weighted_positions(final_values)
        .into_iter()
        .map(rainbow)
        .collect()
}

/// Per-point colors for a scatter chart: groups sorted ascending, then cycled
pub fn point_colors(labels: &[String]) -> Vec<Rgb> {
    let groups: BTreeSet<&str> = labels.iter().map(String::as_str).collect();
    let palette = cyclic_palette(groups.len());
    let index: HashMap<&str, usize> = groups
        .into_iter()
        .enumerate()
        .map(|(i, g)| (g, i))
        .collect();

    labels
        .iter()
        .map(|label| palette[index[label.as_str()]])
        .collect()
}
