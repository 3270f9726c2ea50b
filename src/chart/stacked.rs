//! Stacked area chart rendering (cumulative series per group)

use charming::{
    Chart,
    component::{Axis, Grid},
    element::{
        AreaStyle, AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle,
        Tooltip, Trigger,
    },
    series::Line,
};

use super::colors::{AREA_OPACITY, COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT};
use super::title_block;
use crate::error::{Result, ShiftError};
use crate::output::format_cell;
use crate::pipeline::{Measurement, Rgb, StackSeries};

/// Render a stacked area chart, one band per group, bottom band first
pub fn build_stacked_chart(
    stack: &StackSeries,
    colors: &[Rgb],
    all_dates: &[String],
    measurement: Measurement,
    title: &str,
) -> Result<Chart> {
    if all_dates.is_empty() || stack.labels.is_empty() {
        return Err(ShiftError::InvalidInput("no data to render".to_string()));
    }

    let precision = measurement.label_precision();

    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(title_block(
            title,
            &format!("{} to {}", all_dates[0], all_dates[all_dates.len() - 1]),
        ))
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{a}"))
        .grid(
            Grid::new()
                .left("5%")
                .right("3%")
                .bottom("6%")
                .top("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(false)
                .data(all_dates.to_vec())
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(measurement.label())
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(20))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        );

    for ((label, series), color) in stack.labels.iter().zip(&stack.series).zip(colors) {
        let hex = color.to_hex();
        let final_value = series.last().copied().unwrap_or(0.0);

        // Tooltip shows the group and where it ends up
        let series_name = format!("{} - {}", label, format_cell(final_value, precision));

        // No outline so adjacent bands blend into one rainbow
        chart = chart.series(
            Line::new()
                .name(series_name.as_str())
                .stack("total")
                .symbol_size(0)
                .line_style(LineStyle::new().width(0))
                .area_style(AreaStyle::new().color(hex.as_str()).opacity(AREA_OPACITY))
                .item_style(ItemStyle::new().color(hex.as_str()))
                .data(series.clone()),
        );
    }

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stacked_chart_names_groups_with_totals() {
        let stack = StackSeries {
            labels: vec!["Alice".to_string(), "Bob".to_string()],
            series: vec![vec![5.0, 10.0], vec![5.0, 5.0]],
        };
        let colors = crate::pipeline::weighted_palette(&stack.final_values());
        let dates = vec!["1".to_string(), "2".to_string()];
        let chart =
            build_stacked_chart(&stack, &colors, &dates, Measurement::Hours, "Hours").unwrap();
        let option: serde_json::Value =
            serde_json::from_str(&super::super::chart_json(&chart)).unwrap();

        let series = option["series"].as_array().unwrap();
        assert_eq!(series[0]["name"], "Alice - 10.00");
        assert_eq!(series[0]["stack"], "total");
        assert_eq!(series[0]["data"], serde_json::json!([5.0, 10.0]));
        assert_eq!(series[0]["areaStyle"]["color"], colors[0].to_hex().as_str());
        assert_eq!(series[1]["name"], "Bob - 5.00");
        assert_eq!(series[1]["data"], serde_json::json!([5.0, 5.0]));
        assert_eq!(option["xAxis"][0]["data"], serde_json::json!(["1", "2"]));
    }

    #[test]
    fn test_stacked_chart_requires_dates() {
        let stack = StackSeries {
            labels: vec![],
            series: vec![],
        };
        assert!(build_stacked_chart(&stack, &[], &[], Measurement::Hours, "Hours").is_err());
    }
}
