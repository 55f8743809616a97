//! Input file ingestion.
//!
//! All readers decode strictly as UTF-8 and surface failures as typed
//! errors so each tool can apply its own policy (abort vs. skip the file).

use std::fs;
use std::path::Path;

use crate::error::TallyError;
use crate::Result;

/// Read a whole input file as UTF-8 text.
///
/// Open/read failures map to [`TallyError::FileRead`]; invalid UTF-8 maps
/// to [`TallyError::Decode`] so callers can report encoding problems
/// distinctly from missing files.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| TallyError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    String::from_utf8(bytes).map_err(|_| TallyError::Decode {
        path: path.to_path_buf(),
    })
}

/// Split text into trimmed lines, one record per line.
///
/// Blank lines are kept: the conversion report numbers every input line,
/// valid or not, so rows stay aligned with the file.
pub fn record_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Whitespace-delimited tokens across all lines.
pub fn whitespace_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_text() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("input.txt");
        fs::write(&path, "1 2 3\n4 5\n").unwrap();

        let text = read_text(&path).unwrap();
        assert_eq!(text, "1 2 3\n4 5\n");
    }

    #[test]
    fn test_read_text_missing_file() {
        let temp = tempdir().unwrap();
        let err = read_text(temp.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, TallyError::FileRead { .. }));
    }

    #[test]
    fn test_read_text_invalid_utf8() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latin1.txt");
        fs::write(&path, [0x61u8, 0xff, 0x62]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, TallyError::Decode { .. }));
    }

    #[test]
    fn test_record_lines_keeps_blanks() {
        let lines = record_lines("5\n\n  -3  \n");
        assert_eq!(lines, vec!["5", "", "-3"]);
    }

    #[test]
    fn test_whitespace_tokens_across_lines() {
        let tokens: Vec<&str> = whitespace_tokens("a b\n\tc  d\n").collect();
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }
}
