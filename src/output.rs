use colored::*;

use crate::pipeline::Rgb;

/// Width of the label column in tables
const LABEL_WIDTH: usize = 20;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Colored block for a group's chart color
fn swatch(color: Rgb) -> ColoredString {
    let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    "██".truecolor(channel(color.r), channel(color.g), channel(color.b))
}

fn fit_label(label: &str) -> String {
    if label.chars().count() > LABEL_WIDTH {
        let truncated: String = label.chars().take(LABEL_WIDTH - 1).collect();
        format!("{}…", truncated)
    } else {
        label.to_string()
    }
}

pub(crate) fn print_title(title: &str) {
    println!("{}", style_label(title));
    println!();
}

pub(crate) fn print_header(columns: &[&str]) {
    print!("{:<width$}", "GROUP", width = LABEL_WIDTH);
    for column in columns {
        print!(" {:>12}", column);
    }
    println!("  COLOR");
}

pub(crate) fn print_separator(num_columns: usize) {
    println!("{}", "-".repeat(LABEL_WIDTH + num_columns * 13 + 11));
}

/// One table row: label, right-aligned values, then the group color
pub(crate) fn print_group_row(label: &str, values: &[String], color: Rgb) {
    print!("{:<width$}", fit_label(label), width = LABEL_WIDTH);
    for value in values {
        print!(" {:>12}", value);
    }
    println!("  {} {}", swatch(color), color.to_hex());
}

pub(crate) fn print_total(label: &str, value: &str) {
    println!("{:<width$} {:>12}", style_label(label), value, width = LABEL_WIDTH);
}

/// Value cell text; undefined values (zero-hour rates) show as "-"
pub(crate) fn format_cell(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        "-".to_string()
    }
}
