//! Console rendering for the tally binaries.
//!
//! The persisted report files are always raw TSV; these helpers only
//! shape what goes to the terminal.

use console::Style;
use tallylib::Report;

/// Console output format. Report files are unaffected by the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Tab-separated rows, width-aligned where the tool calls for it.
    #[default]
    Table,
    /// Structured JSON on stdout instead of the table.
    Json,
}

impl OutputMode {
    /// Map a validated `--output` value. Anything unrecognized falls back
    /// to the table (clap's value parser rejects it first).
    pub fn from_flag(raw: &str) -> Self {
        match raw {
            "json" => OutputMode::Json,
            _ => OutputMode::Table,
        }
    }

    /// Whether stdout gets JSON instead of a table.
    pub fn is_json(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

/// Print a width-aligned report table, header styled bold on terminals.
pub fn print_aligned(report: &Report) {
    let aligned = report.to_aligned();
    let mut lines = aligned.lines();
    if let Some(header) = lines.next() {
        println!("{}", Style::new().bold().apply_to(header));
    }
    for line in lines {
        println!("{line}");
    }
}

/// Echo a report as plain tab-separated rows.
pub fn print_tsv(report: &Report) {
    print!("{}", report.to_tsv());
}
