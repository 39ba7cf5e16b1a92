//! # spaceopt
//!
//! A CLI tool that reports apartment floor areas by room and by category.
//!
//! ## Overview
//!
//! spaceopt is built on top of spaceoptlib. It reads apartment records as a
//! flat stream of numbers, prints a listing for every apartment and ends
//! with a dry/wet/utility summary table.
//!
//! ## Usage
//!
//! ```bash
//! # Read from stdin
//! spaceopt < apartments.txt
//!
//! # Read from a file
//! spaceopt apartments.txt
//!
//! # Only the summary table
//! spaceopt apartments.txt --section summary
//!
//! # Output as JSON
//! spaceopt apartments.txt --output json
//!
//! # Show diagnostics on stderr
//! spaceopt apartments.txt -vv
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use spaceoptlib::{report_from_path, report_from_reader, Report, Section, Sections};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Input path meaning "read standard input"
const STDIN_PATH: &str = "-";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("spaceopt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Apartment room listings with a dry/wet/utility area summary")
        .arg(
            Arg::new("input")
                .help("Input file with apartment records ('-' reads stdin)")
                .default_value(STDIN_PATH),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("section")
                .short('s')
                .long("section")
                .value_delimiter(',')
                .value_parser(["listing", "summary"])
                .help("Sections to print (comma-separated: listing,summary)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log diagnostics to stderr (-v info, -vv debug)"),
        )
}

/// Extract sections from matches
fn extract_sections(matches: &ArgMatches) -> Sections {
    let sections: Vec<Section> = matches
        .get_many::<String>("section")
        .map(|v| v.filter_map(|s| s.parse().ok()).collect())
        .unwrap_or_default();

    if sections.is_empty() {
        Sections::all()
    } else {
        sections.into_iter().collect()
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("spaceopt={level},spaceoptlib={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_report(input: &str) -> anyhow::Result<Report> {
    if input == STDIN_PATH {
        debug!("reading apartment records from stdin");
        report_from_reader(io::stdin().lock()).context("failed to read stdin")
    } else {
        debug!(path = input, "reading apartment records");
        Ok(report_from_path(input)?)
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or(STDIN_PATH);
    let report = load_report(input)?;

    let output = match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        _ => report.render_text(extract_sections(matches)),
    };
    Ok(output)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
