mod chart;
mod error;
mod mode;
mod output;
mod pipeline;
mod request;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mode::{Destination, run_pie, run_scatter, run_stack, run_weekly};
use output::{print_error, print_warning};

/// Environment variable holding the log filter (EnvFilter syntax)
const LOG_ENV: &str = "SHIFTGRAPH_LOG";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ChartMode {
    /// Total per group
    Pie,
    /// One point per shift, by date
    Scatter,
    /// Cumulative stacked area per group
    Stack,
    /// One point per shift, overlaid on a single week
    Weekly,
}

#[derive(Parser)]
#[command(
    name = "shiftgraph",
    version,
    about = "Shift report aggregator producing pie, scatter, stacked and weekly charts",
    after_help = "Examples:
  shiftgraph pie request.json                          Pie chart option on stdout
  shiftgraph stack request.json --image stack.png      Render stacked chart to PNG
  shiftgraph weekly request.json --table               Print weekly placements
  cat request.json | shiftgraph scatter                Read request from stdin
  SHIFTGRAPH_LOG=debug shiftgraph pie request.json     Debug logging on stderr"
)]
struct Args {
    /// Chart to build
    #[arg(value_enum)]
    mode: ChartMode,

    /// Request JSON file (reads stdin when omitted or "-")
    input: Option<String>,

    /// Render the chart to a PNG file instead of printing its option
    #[arg(long, value_name = "PATH", conflicts_with = "table")]
    image: Option<String>,

    /// Print aggregated values as a table instead of a chart
    #[arg(short, long)]
    table: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn init_logging(verbose: bool, ansi: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .init();
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    init_logging(args.verbose, !args.no_color);

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
        if !path.to_ascii_lowercase().ends_with(".png") {
            print_warning(&format!("{} will be written as PNG", path));
        }
    }

    let request = request::load_request(args.input.as_deref()).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    let destination = match (&args.image, args.table) {
        (Some(path), _) => Destination::Image(path.as_str()),
        (None, true) => Destination::Table,
        (None, false) => Destination::Json,
    };

    // Dispatch to appropriate mode
    let result = match args.mode {
        ChartMode::Pie => run_pie(&request, destination),
        ChartMode::Scatter => run_scatter(&request, destination),
        ChartMode::Stack => run_stack(&request, destination),
        ChartMode::Weekly => run_weekly(&request, destination),
    };

    match result {
        Ok(()) => {
            if let Destination::Image(path) = destination {
                eprintln!("Chart saved to: {}", path);
            }
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
