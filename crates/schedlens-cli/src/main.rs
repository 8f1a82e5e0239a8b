//! `schedlens` CLI — inspect a schedule collection for time conflicts.
//!
//! ## Usage
//!
//! ```sh
//! # Which dates have overlapping schedules? (stdin → stdout)
//! cat schedules.json | schedlens dates
//!
//! # Same, reading from a file
//! schedlens dates -i schedules.json
//!
//! # Full conflict breakdown for one date
//! schedlens analyze -i schedules.json --date 2025-12-15
//!
//! # Scripting: exit 1 iff any conflict exists
//! schedlens check -i schedules.json
//! schedlens check -i schedules.json --date 2025-12-19
//! ```
//!
//! Input is a JSON array of schedule objects:
//! `{"id", "title", "date", "start_minute", "end_minute"}` with minutes
//! counted from local midnight.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schedlens_core::{
    explain_overlaps, format_minute, has_overlap, overlap_dates, problem_schedules,
    schedules_from_json, Schedule,
};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "schedlens",
    version,
    about = "Schedule overlap detection and explanation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List dates on which at least one pair of schedules overlaps
    Dates {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show the full conflict breakdown for one date
    Analyze {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to analyze, e.g. 2025-12-15
        #[arg(short, long)]
        date: String,
    },
    /// Exit with status 1 if any overlap exists (optionally on one date)
    Check {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Restrict the check to a single date
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dates { input } => {
            let schedules = load_schedules(input.as_deref())?;
            // HashSet order is arbitrary; sort for stable output.
            let mut dates: Vec<&str> = overlap_dates(&schedules).into_iter().collect();
            dates.sort_unstable();
            for date in dates {
                println!("{}", date);
            }
        }
        Commands::Analyze { input, date } => {
            let schedules = load_schedules(input.as_deref())?;
            let day: Vec<Schedule> = schedules.into_iter().filter(|s| s.date == date).collect();
            print_analysis(&date, &day);
        }
        Commands::Check { input, date } => {
            let schedules = load_schedules(input.as_deref())?;
            let day: Vec<Schedule> = match &date {
                Some(date) => schedules.into_iter().filter(|s| s.date == *date).collect(),
                None => schedules,
            };
            let conflicted = match &date {
                Some(_) => has_overlap(&day),
                None => !overlap_dates(&day).is_empty(),
            };
            if conflicted {
                println!("conflicts found");
                process::exit(1);
            }
            println!("no conflicts");
        }
    }

    Ok(())
}

/// Print the analysis view for one date: a summary line, every schedule with
/// its time range (conflicted ones marked `[!]`), then each overlapping pair
/// with its exact intersection.
fn print_analysis(date: &str, day: &[Schedule]) {
    println!("Analysis for {}", date);
    println!("Schedules: {}", day.len());

    if day.is_empty() {
        println!("No schedules on this date");
        return;
    }

    let explanations = explain_overlaps(day);
    let problems = problem_schedules(&explanations);

    println!();
    for schedule in day {
        let marker = if problems.contains(schedule) { "[!]" } else { "   " };
        println!(
            "{} {}  {} ~ {}",
            marker,
            schedule.title,
            format_minute(schedule.start_minute),
            format_minute(schedule.end_minute)
        );
    }

    println!();
    if explanations.is_empty() {
        println!("No overlapping schedules");
        return;
    }

    println!("Overlaps: {}", explanations.len());
    for e in &explanations {
        println!(
            "  {} ({} ~ {}) and {} ({} ~ {})",
            e.first.title,
            format_minute(e.first.start_minute),
            format_minute(e.first.end_minute),
            e.second.title,
            format_minute(e.second.start_minute),
            format_minute(e.second.end_minute)
        );
        println!(
            "    overlap {} ~ {} ({} min)",
            format_minute(e.overlap_start),
            format_minute(e.overlap_end),
            e.overlap_minutes()
        );
    }
}

fn load_schedules(path: Option<&str>) -> Result<Vec<Schedule>> {
    let json = read_input(path)?;
    schedules_from_json(&json).context("Failed to parse schedule JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
