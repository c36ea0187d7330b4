//! Wallplanner CLI
//!
//! Usage:
//!   wallplanner [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --palette <FILE>    Style palette file (TOML format)
//!   -y, --year <YEAR>       Override the planner file's year
//!   -c, --capacity <N>      Maximum stacked events per day
//!   -o, --output <FILE>     Write SVG to a file instead of stdout
//!   --sample                Print a starter planner file
//!   -h, --help              Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use wallplanner::planfile::PlanFile;
use wallplanner::{render_year_with_config, LayoutConfig, PlannerConfig, StylePalette};

#[derive(Parser)]
#[command(name = "wallplanner")]
#[command(about = "Render a year of events as a printable wall-planner SVG")]
struct Cli {
    /// Planner file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Style palette file (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Override the planner file's year
    #[arg(short, long)]
    year: Option<i32>,

    /// Maximum number of events stacked on a single day
    #[arg(short, long)]
    capacity: Option<u32>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a starter planner file
    #[arg(long)]
    sample: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.sample {
        print_sample();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load palette
    let palette = match &cli.palette {
        Some(path) => match StylePalette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StylePalette::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let plan = match PlanFile::from_str(&source) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let year = cli.year.unwrap_or(plan.year);
    let mut events = plan.events(&palette);

    let mut layout = LayoutConfig::default();
    if let Some(capacity) = cli.capacity {
        layout = layout.with_max_day_events(capacity);
    }
    let config = PlannerConfig::new()
        .with_layout(layout)
        .with_palette(palette);

    let svg = match render_year_with_config(year, &mut events, &config) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg + "\n") {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}

fn print_intro() {
    println!(
        r#"Wallplanner - render a year of events as a printable SVG sheet

USAGE:
    wallplanner [OPTIONS] [FILE]
    cat plan.toml | wallplanner > planner.svg

OPTIONS:
    -p, --palette <FILE>   Custom style palette (TOML file)
    -y, --year <YEAR>      Override the planner file's year
    -c, --capacity <N>     Maximum stacked events per day (default 5)
    -o, --output <FILE>    Write SVG to a file instead of stdout
    --sample               Print a starter planner file
    -h, --help             Print help

QUICK START:
    wallplanner --sample > plan.toml
    wallplanner plan.toml -o planner.svg

The output is sized for an A0 landscape page, one month per row."#
    );
}

fn print_sample() {
    println!(
        r##"# Wallplanner input file. One sheet covers one year.
year = 2015

# Normal events become bars packed into lanes; overlapping events
# stack, and a bar spanning months keeps its row.
[[event]]
name = "Conference trip"
start = 2015-03-15
end = 2015-03-22

[[event]]
name = "Release review"
start = 2015-03-18

# Background ranges tint the day cells instead of taking a lane.
[[event]]
name = "Summer holiday"
start = 2015-07-04
end = 2015-08-30
kind = "background"

# Single tinted days, for public holidays and the like.
[[event]]
name = "May Day"
start = 2015-05-01
kind = "special-date"

# An explicit color replaces the default fill for one event.
[[event]]
name = "Hosting migration"
start = 2015-10-05
end = 2015-10-09
color = "#8ecbff""##
    );
}
