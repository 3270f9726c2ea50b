//! Scatter chart rendering (one point per shift)

use charming::{
    Chart,
    component::{Axis, Grid},
    element::{
        AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::Scatter,
};
use tracing::warn;

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT, SCATTER_OPACITY};
use super::{DAY_NAMES, title_block};
use crate::error::Result;
use crate::pipeline::{Rgb, SECONDS_PER_DAY, SECONDS_PER_WEEK, ScatterPoints};

/// What the x coordinate of a scatter point means
pub enum ScatterAxis<'a> {
    /// Index into the report's dates
    Dates(&'a [String]),
    /// Stretched seconds into the week
    Weekdays,
}

fn category_axis<S: Into<String>>(names: Vec<S>) -> Axis {
    Axis::new()
        .type_(AxisType::Category)
        .data(names)
        .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
}

/// Build a scatter chart. `tooltips` holds one label per point.
///
/// Points with a non-finite value or size (zero-hour shifts) are left out.
pub fn build_scatter_chart(
    points: &ScatterPoints,
    colors: &[Rgb],
    tooltips: &[String],
    axis: ScatterAxis<'_>,
    y_name: &str,
    title: &str,
) -> Result<Chart> {
    let mut chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(title_block(title, &format!("{} shifts", points.x.len())))
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{a}"))
        .grid(
            Grid::new()
                .left("4%")
                .right("3%")
                .bottom("6%")
                .top("14%")
                .contain_label(true),
        );

    chart = match axis {
        // Category index doubles as the x coordinate
        ScatterAxis::Dates(all_dates) => chart.x_axis(
            category_axis(all_dates.to_vec())
                .name("Date")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(20))
                .boundary_gap(false),
        ),
        // Points live on a seconds axis; the day names sit on a second axis spanning it
        ScatterAxis::Weekdays => chart
            .x_axis(
                Axis::new()
                    .type_(AxisType::Value)
                    .min(0)
                    .max(SECONDS_PER_WEEK)
                    .interval(SECONDS_PER_DAY)
                    .axis_label(AxisLabel::new().show(false))
                    .split_line(
                        SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                    ),
            )
            .x_axis(
                category_axis(DAY_NAMES.to_vec())
                    .name("Day of week")
                    .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(20))
                    .position("bottom"),
            ),
    };

    chart = chart.y_axis(
        Axis::new()
            .type_(AxisType::Value)
            .name(y_name)
            .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(20))
            .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
            .split_line(
                SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
            ),
    );

    let mut skipped = 0usize;
    let coords = points.x.iter().zip(&points.y).zip(&points.sizes);
    for (((&x, &y), &size), (tooltip, color)) in coords.zip(tooltips.iter().zip(colors)) {
        if !x.is_finite() || !y.is_finite() || !size.is_finite() {
            skipped += 1;
            continue;
        }

        // Sizes are marker areas; ECharts wants a diameter
        chart = chart.series(
            Scatter::new()
                .name(tooltip.as_str())
                .symbol_size(size.max(0.0).sqrt())
                .item_style(
                    ItemStyle::new()
                        .color(color.to_hex().as_str())
                        .opacity(SCATTER_OPACITY),
                )
                .data(vec![vec![x, y]]),
        );
    }

    if skipped > 0 {
        warn!(skipped, "left out scatter points with undefined values");
    }

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn points() -> ScatterPoints {
        ScatterPoints {
            x: vec![0.0, 1.0],
            y: vec![3.0, f64::INFINITY],
            sizes: vec![64.0, f64::INFINITY],
            labels: vec!["Alice".to_string(), "Bob".to_string()],
        }
    }

    fn option(chart: &Chart) -> serde_json::Value {
        serde_json::from_str(&super::super::chart_json(chart)).unwrap()
    }

    #[test]
    fn test_scatter_skips_undefined_points() {
        let points = points();
        let colors = crate::pipeline::point_colors(&points.labels);
        let dates = vec!["06/12/2019".to_string(), "06/13/2019".to_string()];
        let chart = build_scatter_chart(
            &points,
            &colors,
            &points.labels,
            ScatterAxis::Dates(&dates),
            "Hourly Rate",
            "title",
        )
        .unwrap();
        let option = option(&chart);

        let series = option["series"].as_array().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0]["name"], "Alice");
        assert_eq!(series[0]["data"][0][0].as_f64(), Some(0.0));
        assert_eq!(series[0]["data"][0][1].as_f64(), Some(3.0));
        // Area 64 -> diameter 8
        assert_eq!(series[0]["symbolSize"].as_f64(), Some(8.0));
        assert_eq!(series[0]["itemStyle"]["color"], colors[0].to_hex().as_str());

        assert_eq!(option["xAxis"][0]["type"], "category");
        assert_eq!(option["xAxis"][0]["data"][1], "06/13/2019");
    }

    #[test]
    fn test_weekday_axis_names_days() {
        let points = points();
        let colors = crate::pipeline::point_colors(&points.labels);
        let chart = build_scatter_chart(
            &points,
            &colors,
            &points.labels,
            ScatterAxis::Weekdays,
            "Signatures",
            "title",
        )
        .unwrap();
        let option = option(&chart);

        assert_eq!(option["xAxis"][0]["type"], "value");
        assert_eq!(option["xAxis"][0]["max"].as_f64(), Some(SECONDS_PER_WEEK));
        assert_eq!(option["xAxis"][1]["data"][3], "Wednesday");
        assert_eq!(option["xAxis"][1]["data"].as_array().map(Vec::len), Some(7));
    }
}
