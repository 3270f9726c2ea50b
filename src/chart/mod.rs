//! Chart construction for shift reports
//!
//! Each builder turns pipeline output into a `charming` chart. The chart is
//! either printed as an ECharts option for the web front end or rendered to PNG.

mod colors;
mod pie;
mod scatter;
mod stacked;

pub use pie::{build_pie_chart, slice_label};
pub use scatter::{ScatterAxis, build_scatter_chart};
pub use stacked::build_stacked_chart;

use charming::{
    Chart, ImageRenderer,
    component::Title,
    element::TextStyle,
    renderer::ImageFormat,
};

use crate::error::{Result, ShiftError};
use crate::pipeline::{DisplayOptions, GroupFilter};

use colors::COLOR_TEXT;

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2000;
pub(super) const CHART_HEIGHT: u32 = 1200;

pub(super) const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Where a finished chart goes
pub enum ChartOutput<'a> {
    /// ECharts option on stdout
    Json,
    /// PNG file at the given path
    Image(&'a str),
}

/// Chart title describing what is measured and how it is split
pub fn chart_title(options: &DisplayOptions) -> String {
    let measurement = options.measurement.label();
    match (&options.name, &options.location) {
        (GroupFilter::GroupBySelf, location) => {
            format!("{} for {} by Name", measurement, location.as_str())
        }
        (name, GroupFilter::GroupBySelf) => {
            format!("{} for {} by Location", measurement, name.as_str())
        }
        (GroupFilter::Unconstrained, _) => format!("{} for all locations", measurement),
        (_, GroupFilter::Unconstrained) => format!("{} for all names", measurement),
        (name, location) => format!(
            "{} for {} at {}",
            measurement,
            name.as_str(),
            location.as_str()
        ),
    }
}

/// Shared title block
pub(super) fn title_block(title: &str, subtitle: &str) -> Title {
    Title::new()
        .text(title)
        .subtext(subtitle)
        .left("center")
        .top("2%")
        .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
        .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(20))
}

/// ECharts option as JSON text
pub fn chart_json(chart: &Chart) -> String {
    chart.to_string()
}

/// Render a chart to a PNG file
pub fn save_chart_image(chart: &Chart, output_path: &str) -> Result<()> {
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, chart, output_path)
        .map_err(|e| ShiftError::Render(format!("failed to save {}: {}", output_path, e)))
}

/// Send a finished chart to its destination
pub fn emit_chart(chart: &Chart, output: ChartOutput<'_>) -> Result<()> {
    match output {
        ChartOutput::Json => {
            println!("{}", chart_json(chart));
            Ok(())
        }
        ChartOutput::Image(path) => save_chart_image(chart, path),
    }
}
