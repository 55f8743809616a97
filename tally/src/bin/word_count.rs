//! Exact-token word frequency over a single text file.
//!
//! ```bash
//! word-count file.txt
//! ```
//!
//! Writes `WordCountResults.txt` in the working directory: one row per
//! distinct case-folded token in first-seen order, then the grand total
//! and elapsed time. Unlike the conversion tool, any failure (wrong
//! argument count, missing file, invalid UTF-8) aborts the run.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Arg, Command};
use serde_json::json;
use tally::render::{self, OutputMode};
use tallylib::words::{count_words, word_count_report};

const RESULTS_FILE: &str = "WordCountResults.txt";

fn build_command() -> Command {
    Command::new("word-count")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count distinct whitespace-delimited tokens, case-folded, in first-seen order")
        .arg(
            Arg::new("file")
                .help("Input text file")
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

fn run(path: &Path, output: OutputMode) -> anyhow::Result<()> {
    let start = Instant::now();

    let table = count_words(path)?;
    let elapsed_secs = start.elapsed().as_secs_f64();
    let report = word_count_report(&table, elapsed_secs);

    report
        .save(RESULTS_FILE)
        .with_context(|| format!("writing {RESULTS_FILE}"))?;

    if output.is_json() {
        let entries: Vec<_> = table
            .iter()
            .map(|(word, count)| json!({ "word": word, "count": count }))
            .collect();
        let value = json!({
            "entries": entries,
            "total": table.total(),
            "elapsed_secs": elapsed_secs,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        render::print_tsv(&report);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();
    let files: Vec<PathBuf> = matches
        .get_many::<String>("file")
        .map(|v| v.map(PathBuf::from).collect())
        .unwrap_or_default();

    // exactly one input file; extra arguments are as fatal as none
    if files.len() != 1 {
        eprintln!("Usage: word-count file.txt");
        return ExitCode::FAILURE;
    }

    let output = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_flag(s))
        .unwrap_or_default();

    match run(&files[0], output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
