//! Integer-to-radix conversion pipeline.
//!
//! One record per input line: parse as base-10, render binary and hex.
//! A line that fails to parse keeps its row with a visible sentinel in
//! both radix columns, so the report stays aligned with the input file.

use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;

use crate::coerce::parse_integer;
use crate::ingest;
use crate::radix::{to_binary, to_hex};
use crate::report::Report;
use crate::Result;

/// Placeholder written to both radix columns when a line fails to parse.
pub const INVALID_SENTINEL: &str = "#VALUE!";

/// One output row: the original line plus its radix renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRow {
    /// 1-based position in the input file.
    pub index: usize,
    /// The line as read, trimmed.
    pub raw: String,
    pub binary: String,
    pub hex: String,
}

impl ConversionRow {
    /// Whether this row carries the sentinel instead of conversions.
    pub fn is_invalid(&self) -> bool {
        self.binary == INVALID_SENTINEL
    }
}

/// Conversion results for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileConversion {
    pub path: PathBuf,
    /// Section label, `TC<n>` by batch position.
    pub label: String,
    pub rows: Vec<ConversionRow>,
}

impl FileConversion {
    /// Section report: `NUMBER <label> BIN HEX` header plus one row per
    /// input line.
    pub fn report(&self) -> Report {
        let mut report = Report::new(vec![
            "NUMBER".to_string(),
            self.label.clone(),
            "BIN".to_string(),
            "HEX".to_string(),
        ]);
        for row in &self.rows {
            report.push_row(vec![
                row.index.to_string(),
                row.raw.clone(),
                row.binary.clone(),
                row.hex.clone(),
            ]);
        }
        report
    }
}

/// Convert every line, substituting the sentinel for unparseable ones.
/// Processing never aborts on a bad line.
pub fn convert_lines(lines: &[String]) -> Vec<ConversionRow> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| match parse_integer(line) {
            Some(n) => ConversionRow {
                index: i + 1,
                raw: line.clone(),
                binary: to_binary(n),
                hex: to_hex(n),
            },
            None => {
                warn!("invalid numeric line: '{line}'");
                ConversionRow {
                    index: i + 1,
                    raw: line.clone(),
                    binary: INVALID_SENTINEL.to_string(),
                    hex: INVALID_SENTINEL.to_string(),
                }
            }
        })
        .collect()
}

/// Convert one file under the given section label.
pub fn convert_file(path: impl AsRef<Path>, label: impl Into<String>) -> Result<FileConversion> {
    let path = path.as_ref();
    let text = ingest::read_text(path)?;
    Ok(FileConversion {
        path: path.to_path_buf(),
        label: label.into(),
        rows: convert_lines(&ingest::record_lines(&text)),
    })
}

/// Convert a batch of files, labelled `TC1`, `TC2`, … by position.
///
/// A file that cannot be read is logged and skipped; the batch keeps
/// going and the skipped file still consumes its batch number.
pub fn convert_batch(paths: &[PathBuf]) -> Vec<FileConversion> {
    let mut sections = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        info!("processing file: {}", path.display());
        match convert_file(path, format!("TC{}", i + 1)) {
            Ok(section) => sections.push(section),
            Err(e) => error!("{e}"),
        }
    }
    sections
}

/// The persisted `ConversionResults.txt` body: each section preceded by
/// a blank line.
pub fn results_document(sections: &[FileConversion]) -> String {
    let mut out = String::new();
    for section in sections {
        out.push('\n');
        out.push_str(&section.report().to_tsv());
    }
    out
}
