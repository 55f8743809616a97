//! # tallylib
//!
//! Tolerant text ingestion and tab-delimited reporting.
//!
//! ## Overview
//!
//! Three pipelines share one shape: a loader tolerantly coerces raw file
//! tokens, a pure transform produces the results, and a report model
//! renders them both as a raw TSV file and as an aligned console table.
//!
//! - **Radix conversion** ([`convert`]): base-10 integers, one per input
//!   line, to binary and uppercase hexadecimal; unparseable lines keep
//!   their row with a `#VALUE!` sentinel in both columns.
//! - **Descriptive statistics** ([`statistics`]): count, mean, median,
//!   mode, population standard deviation and variance over floats coerced
//!   from whitespace tokens; malformed tokens are cleaned or dropped
//!   under an explicit [`CoercionPolicy`](coerce::CoercionPolicy).
//! - **Word frequency** ([`words`]): case-folded exact-token tally in
//!   first-seen order.
//!
//! The pipelines never print or exit; failures are typed
//! [`TallyError`](error::TallyError)s and skipped-token notices go
//! through the `log` facade.
//!
//! ## Example
//!
//! ```rust
//! use tallylib::describe::Descriptive;
//! use tallylib::radix::{to_binary, to_hex};
//! use tallylib::words::word_frequencies;
//!
//! let stats = Descriptive::from_values(&[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(stats.mean, 2.5);
//! assert_eq!(stats.variance, 1.25);
//!
//! assert_eq!(to_binary(-3), "-11");
//! assert_eq!(to_hex(-3), "FFFFFFFD");
//!
//! let words = word_frequencies("a A b a");
//! assert_eq!(words.total(), 3);
//! ```

pub mod coerce;
pub mod convert;
pub mod describe;
pub mod error;
pub mod freq;
pub mod ingest;
pub mod radix;
pub mod report;
pub mod statistics;
pub mod words;

pub use coerce::{coerce_float, load_numbers, Coercion, CoercionPolicy};
pub use convert::{
    convert_batch, convert_file, convert_lines, results_document, ConversionRow, FileConversion,
    INVALID_SENTINEL,
};
pub use describe::Descriptive;
pub use error::TallyError;
pub use freq::FrequencyTable;
pub use radix::{to_binary, to_hex};
pub use report::Report;
pub use statistics::{analyze_file, analyze_files, statistics_report, FileStatistics};
pub use words::{count_words, word_count_report, word_frequencies};

/// Result type for tallylib operations
pub type Result<T> = std::result::Result<T, TallyError>;
