//! Convert base-10 integers in text files to binary and hexadecimal.
//!
//! ```bash
//! convert-numbers file1.txt [file2.txt ...]
//! ```
//!
//! Writes `ConversionResults.txt` in the working directory, one section
//! per input file, and echoes the rows to the console. A file that cannot
//! be read is skipped; the rest of the batch still runs.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Arg, Command};
use tally::render::{self, OutputMode};
use tallylib::convert::{convert_batch, results_document};

const RESULTS_FILE: &str = "ConversionResults.txt";

fn build_command() -> Command {
    Command::new("convert-numbers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert base-10 integers to binary and hexadecimal, one per input line")
        .arg(
            Arg::new("files")
                .help("Input files, one integer per line")
                .num_args(0..),
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

fn run(paths: &[PathBuf], output: OutputMode) -> anyhow::Result<()> {
    let start = Instant::now();
    let sections = convert_batch(paths);

    std::fs::write(RESULTS_FILE, results_document(&sections))
        .with_context(|| format!("writing {RESULTS_FILE}"))?;

    if output.is_json() {
        println!("{}", serde_json::to_string_pretty(&sections)?);
    } else {
        for section in &sections {
            println!();
            render::print_tsv(&section.report());
        }
    }

    println!("Conversion results written to {RESULTS_FILE}");
    println!("Elapsed time: {:.4} seconds", start.elapsed().as_secs_f64());
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
        eprintln!("Usage: convert-numbers file1.txt [file2.txt ...]");
        return ExitCode::FAILURE;
    }

    let output = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_flag(s))
        .unwrap_or_default();

    match run(&paths, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
