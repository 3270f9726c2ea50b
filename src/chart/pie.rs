//! Pie chart rendering (one slice per group)

use charming::{
    Chart,
    element::{Color, Label, Tooltip, Trigger},
    series::Pie,
};

use super::colors::{COLOR_BACKGROUND, COLOR_TEXT};
use super::title_block;
use crate::error::Result;
use crate::output::format_cell;
use crate::pipeline::{GroupTotals, Measurement, Rgb};

/// Slices above this share of the pie get full precision
const FULL_PRECISION_PCT: f64 = 10.0;
/// Slices above this share get half precision
const HALF_PRECISION_PCT: f64 = 4.0;
/// Slices at or below this share get no value label
const HIDDEN_LABEL_PCT: f64 = 1.5;

/// Value label for a slice, coarser (or empty) as the slice gets smaller
pub fn slice_label(value: f64, total: f64, precision: usize) -> String {
    if total <= 0.0 {
        return String::new();
    }
    let pct = value / total * 100.0;
    if pct > FULL_PRECISION_PCT {
        format_cell(value, precision)
    } else if pct > HALF_PRECISION_PCT {
        format_cell(value, precision / 2)
    } else if pct > HIDDEN_LABEL_PCT {
        format_cell(value, 0)
    } else {
        String::new()
    }
}

/// Slice caption: the group, then its value label on a second line when shown
pub fn slice_caption(group: &str, value: f64, total: f64, precision: usize) -> String {
    let label = slice_label(value, total, precision);
    if label.is_empty() {
        group.to_string()
    } else {
        format!("{}\n{}", group, label)
    }
}

/// Build a pie chart from per-group totals
pub fn build_pie_chart(
    totals: &GroupTotals,
    colors: &[Rgb],
    measurement: Measurement,
    title: &str,
) -> Result<Chart> {
    let total: f64 = totals.values.iter().sum();
    let precision = measurement.label_precision();

    // Slice names carry the caption so a plain "{b}" label applies the size rule
    let data: Vec<(f64, String)> = totals
        .values
        .iter()
        .zip(&totals.labels)
        .map(|(&value, label)| (value, slice_caption(label, value, total, precision)))
        .collect();

    let palette: Vec<Color> = colors.iter().map(|c| Color::Value(c.to_hex())).collect();

    let subtitle = format!("Total: {}", format_cell(total, precision));

    Ok(Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .color(palette)
        .title(title_block(title, &subtitle))
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}<br/>{c} ({d}%)"))
        .series(
            Pie::new()
                .name(measurement.label())
                .radius("65%")
                .center(vec!["50%", "55%"])
                .label(
                    Label::new()
                        .show(true)
                        .color(COLOR_TEXT)
                        .font_size(18)
                        .formatter("{b}"),
                )
                .data(data),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_large_slice_full_precision() {
        assert_eq!(slice_label(3.14159, 10.0, 2), "3.14");
    }

    #[test]
    fn test_medium_slice_half_precision() {
        // 5% of the pie, precision 2 -> 1 decimal
        assert_eq!(slice_label(5.34, 100.0, 2), "5.3");
    }

    #[test]
    fn test_small_slice_no_decimals() {
        assert_eq!(slice_label(2.6, 100.0, 2), "3");
    }

    #[test]
    fn test_tiny_slice_hidden() {
        assert_eq!(slice_label(1.0, 100.0, 2), "");
        assert_eq!(slice_label(1.0, 0.0, 2), "");
    }

    #[test]
    fn test_slice_caption() {
        assert_eq!(slice_caption("Alice", 30.0, 35.0, 0), "Alice\n30");
        assert_eq!(slice_caption("Bob", 1.0, 100.0, 2), "Bob");
    }

    #[test]
    fn test_pie_chart_option_is_json() {
        let totals = GroupTotals {
            labels: vec!["Alice".to_string(), "Bob".to_string()],
            values: vec![30.0, 5.0],
        };
        let colors = crate::pipeline::cyclic_palette(2);
        let chart =
            build_pie_chart(&totals, &colors, Measurement::Signatures, "Signatures").unwrap();
        let option: serde_json::Value =
            serde_json::from_str(&super::super::chart_json(&chart)).unwrap();

        let data = option["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["value"].as_f64(), Some(30.0));
        assert_eq!(data[0]["name"], "Alice\n30");
        assert_eq!(data[1]["value"].as_f64(), Some(5.0));
        assert_eq!(data[1]["name"], "Bob\n5");
        assert_eq!(option["series"][0]["label"]["formatter"], "{b}");
        assert_eq!(option["color"][0], colors[0].to_hex().as_str());
        assert_eq!(option["color"][1], colors[1].to_hex().as_str());
    }
}
