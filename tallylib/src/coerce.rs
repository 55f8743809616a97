//! Tolerant numeric coercion.
//!
//! Raw tokens from loosely-formatted input become typed numbers here.
//! Every failure mode is an explicit outcome, and what a pipeline does
//! with a failed token is an explicit [`CoercionPolicy`] rather than ad
//! hoc exception handling, so tests can exercise each policy
//! deterministically.

use std::path::Path;

use log::warn;

use crate::ingest;
use crate::Result;

/// Outcome of coercing one raw token to a float.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// Parsed directly after separator normalization.
    Parsed(f64),
    /// Parsed only after stripping non-numeric characters.
    Cleaned { value: f64, cleaned: String },
    /// No numeric content survived cleanup.
    Rejected,
}

/// What to do with a token that fails the direct parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionPolicy {
    /// Strip non-numeric characters and retry; tokens that still fail
    /// are dropped with a notice. The statistics tool's default.
    #[default]
    CleanThenDrop,
    /// Accept direct parses only; anything else is dropped.
    Strict,
}

/// Strict base-10 integer parse of a trimmed line.
///
/// `None` triggers the sentinel policy in the conversion pipeline.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Coerce a raw token to a float.
///
/// Both `;` and `,` are accepted as alternate decimal separators and
/// mapped to `.` before the direct parse. The cleanup pass keeps ASCII
/// digits and separators only, dropping any sign, so `-3x` cleans to
/// `3`.
pub fn coerce_float(raw: &str) -> Coercion {
    let normalized: String = raw
        .chars()
        .map(|c| if c == ';' || c == ',' { '.' } else { c })
        .collect();
    if let Ok(value) = normalized.parse::<f64>() {
        return Coercion::Parsed(value);
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Coercion::Rejected;
    }
    match cleaned.parse::<f64>() {
        Ok(value) => Coercion::Cleaned { value, cleaned },
        Err(_) => Coercion::Rejected,
    }
}

/// Coerce a stream of tokens under `policy`.
///
/// Dropped tokens shrink the dataset, so the denominator of every
/// aggregate downstream shifts with them. Each cleaned or dropped token
/// logs one warning.
pub fn coerce_tokens<'a>(
    tokens: impl Iterator<Item = &'a str>,
    policy: CoercionPolicy,
) -> Vec<f64> {
    let mut values = Vec::new();
    for token in tokens {
        match coerce_float(token) {
            Coercion::Parsed(value) => values.push(value),
            Coercion::Cleaned { value, cleaned } => match policy {
                CoercionPolicy::CleanThenDrop => {
                    warn!("non-numeric token cleaned: '{token}' -> '{cleaned}'");
                    values.push(value);
                }
                CoercionPolicy::Strict => {
                    warn!("dropping token '{token}' (strict coercion)");
                }
            },
            Coercion::Rejected => {
                warn!("ignoring invalid token: '{token}'");
            }
        }
    }
    values
}

/// Load a numeric dataset from a file, whitespace-tokenized and coerced
/// under `policy`. Order follows the input.
pub fn load_numbers(path: impl AsRef<Path>, policy: CoercionPolicy) -> Result<Vec<f64>> {
    let text = ingest::read_text(path)?;
    Ok(coerce_tokens(ingest::whitespace_tokens(&text), policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("5"), Some(5));
        assert_eq!(parse_integer(" -3 "), Some(-3));
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("3.5"), None);
    }

    #[test]
    fn test_coerce_float_direct() {
        assert_eq!(coerce_float("2.5"), Coercion::Parsed(2.5));
        assert_eq!(coerce_float("-4"), Coercion::Parsed(-4.0));
    }

    #[test]
    fn test_coerce_float_alternate_separators() {
        assert_eq!(coerce_float("3,14"), Coercion::Parsed(3.14));
        assert_eq!(coerce_float("3;14"), Coercion::Parsed(3.14));
    }

    #[test]
    fn test_coerce_float_cleanup() {
        assert_eq!(
            coerce_float("12abc"),
            Coercion::Cleaned {
                value: 12.0,
                cleaned: "12".to_string()
            }
        );
        // cleanup keeps digits and separators only, so the sign is lost
        assert_eq!(
            coerce_float("-3x"),
            Coercion::Cleaned {
                value: 3.0,
                cleaned: "3".to_string()
            }
        );
    }

    #[test]
    fn test_coerce_float_rejected() {
        assert_eq!(coerce_float("abc"), Coercion::Rejected);
        assert_eq!(coerce_float("..."), Coercion::Rejected);
        assert_eq!(coerce_float("1.2.3"), Coercion::Rejected);
    }

    #[test]
    fn test_coerce_tokens_clean_then_drop() {
        let tokens = ["1", "12abc", "junk", "2"];
        let values = coerce_tokens(tokens.into_iter(), CoercionPolicy::CleanThenDrop);
        assert_eq!(values, vec![1.0, 12.0, 2.0]);
    }

    #[test]
    fn test_coerce_tokens_strict_drops_cleaned() {
        let tokens = ["1", "12abc", "junk", "2"];
        let values = coerce_tokens(tokens.into_iter(), CoercionPolicy::Strict);
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_load_numbers() {
        use std::fs;
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let path = temp.path().join("data.txt");
        fs::write(&path, "1 2.5\nbad 4\n").unwrap();

        let values = load_numbers(&path, CoercionPolicy::default()).unwrap();
        assert_eq!(values, vec![1.0, 2.5, 4.0]);
    }
}
