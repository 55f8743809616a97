//! Descriptive statistics over numeric tokens in text files.
//!
//! ```bash
//! compute-stats file1.txt [file2.txt ...]
//! ```
//!
//! Writes `StatisticsResults.txt` in the working directory, one row per
//! input file, and prints the aligned table. Malformed tokens are cleaned
//! when possible and dropped otherwise; `--strict` drops them outright.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use tally::render::{self, OutputMode};
use tallylib::coerce::CoercionPolicy;
use tallylib::statistics::{analyze_files, statistics_report};

const RESULTS_FILE: &str = "StatisticsResults.txt";

fn build_command() -> Command {
    Command::new("compute-stats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Mean, median, mode, and population spread over numeric tokens in text files")
        .arg(
            Arg::new("files")
                .help("Input files to analyze")
                .num_args(0..),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Drop malformed tokens instead of attempting cleanup"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Console output format"),
        )
}

fn run(paths: &[PathBuf], policy: CoercionPolicy, output: OutputMode) -> anyhow::Result<()> {
    let results = analyze_files(paths, policy)?;
    let report = statistics_report(&results);

    report
        .save(RESULTS_FILE)
        .with_context(|| format!("writing {RESULTS_FILE}"))?;

    if output.is_json() {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        render::print_aligned(&report);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    let paths: Vec<PathBuf> = matches
        .get_many::<String>("files")
        .map(|v| v.map(PathBuf::from).collect())
        .unwrap_or_default();

    if paths.is_empty() {
        eprintln!("Usage: compute-stats file1.txt [file2.txt ...]");
        return ExitCode::FAILURE;
    }

    let policy = if matches.get_flag("strict") {
        CoercionPolicy::Strict
    } else {
        CoercionPolicy::CleanThenDrop
    };
    let output = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_flag(s))
        .unwrap_or_default();

    match run(&paths, policy, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
