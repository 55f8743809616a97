//! Per-file descriptive-statistics pipeline.
//!
//! Each input file becomes one report row: the aggregates from
//! [`crate::describe`] plus processing metadata (elapsed time and a
//! completion timestamp).

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use serde::Serialize;

use crate::coerce::{load_numbers, CoercionPolicy};
use crate::describe::Descriptive;
use crate::report::Report;
use crate::Result;

/// Column headers of `StatisticsResults.txt`.
pub const STATISTICS_HEADERS: [&str; 9] = [
    "TC",
    "CANTIDAD",
    "MEDIA",
    "MEDIANA",
    "MODA",
    "SD",
    "VAR",
    "Tiempo Transcurrido",
    "Marca de Tiempo",
];

/// Aggregates for one input file plus its processing metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FileStatistics {
    pub path: PathBuf,
    /// Row label: the input file's stem (`TC1.txt` reports as `TC1`).
    pub label: String,
    pub stats: Descriptive,
    /// Wall-clock processing time for this file, in seconds.
    pub elapsed_secs: f64,
    /// Local completion time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

impl FileStatistics {
    /// This file's row in the statistics report. The mode renders as
    /// `None` for an empty dataset.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            self.stats.count.to_string(),
            self.stats.mean.to_string(),
            self.stats.median.to_string(),
            match self.stats.mode {
                Some(mode) => mode.to_string(),
                None => "None".to_string(),
            },
            self.stats.std_dev.to_string(),
            self.stats.variance.to_string(),
            self.elapsed_secs.to_string(),
            self.timestamp.clone(),
        ]
    }
}

/// Load, coerce, and describe one input file.
pub fn analyze_file(path: impl AsRef<Path>, policy: CoercionPolicy) -> Result<FileStatistics> {
    let path = path.as_ref();
    let start = Instant::now();

    let values = load_numbers(path, policy)?;
    let stats = Descriptive::from_values(&values);

    let elapsed_secs = start.elapsed().as_secs_f64();
    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileStatistics {
        path: path.to_path_buf(),
        label,
        stats,
        elapsed_secs,
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

/// Analyze a list of files in order. An unreadable file aborts the run.
pub fn analyze_files(paths: &[PathBuf], policy: CoercionPolicy) -> Result<Vec<FileStatistics>> {
    paths.iter().map(|path| analyze_file(path, policy)).collect()
}

/// Build the statistics report: fixed header, one row per file.
pub fn statistics_report(results: &[FileStatistics]) -> Report {
    let mut report = Report::new(STATISTICS_HEADERS.iter().map(|h| h.to_string()).collect());
    for result in results {
        report.push_row(result.row());
    }
    report
}
