//! Tab-delimited report model.
//!
//! A [`Report`] is the final shape every pipeline produces: a header row,
//! data rows, and optional trailing metadata lines. It renders two ways:
//! raw TSV (the persisted file format) and a width-aligned console table.
//! No computation happens here; pipelines hand over formatted strings.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::TallyError;
use crate::Result;

/// An ordered report: header row, data rows, trailing metadata lines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Trailing lines written verbatim after the rows.
    pub trailer: Vec<String>,
}

impl Report {
    /// Create a report with the given header row.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            trailer: Vec::new(),
        }
    }

    /// Append a data row.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Append a trailing metadata line.
    pub fn push_trailer(&mut self, line: impl Into<String>) {
        self.trailer.push(line.into());
    }

    /// Raw tab-separated rendering, the persisted format.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.headers.join("\t"));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        for line in &self.trailer {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Width-aligned console rendering: each column is left-padded to its
    /// widest cell (header included), columns joined with tabs.
    pub fn to_aligned(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_aligned_row(&mut out, &self.headers, &widths);
        for row in &self.rows {
            push_aligned_row(&mut out, row, &widths);
        }
        for line in &self.trailer {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Overwrite `path` with the TSV rendering, UTF-8.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_tsv()).map_err(|e| TallyError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn push_aligned_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(&rendered.join("\t"));
    out.push('\n');
}
