//! Word-frequency pipeline.

use std::path::Path;

use crate::freq::FrequencyTable;
use crate::ingest;
use crate::report::Report;
use crate::Result;

/// Column headers of `WordCountResults.txt`.
pub const WORD_COUNT_HEADERS: [&str; 2] = ["Etiquetas de Fila", "Conteo"];

/// Lowercase and tally every whitespace-delimited token.
///
/// Tokens are case-folded only, never stripped of punctuation: `word.`
/// and `word` are distinct keys. Exact-token frequency, not linguistic
/// word frequency.
pub fn word_frequencies(text: &str) -> FrequencyTable<String> {
    let mut table = FrequencyTable::new();
    for token in text.split_whitespace() {
        table.add(token.to_lowercase());
    }
    table
}

/// Count word frequencies in one UTF-8 text file.
pub fn count_words(path: impl AsRef<Path>) -> Result<FrequencyTable<String>> {
    let text = ingest::read_text(path)?;
    Ok(word_frequencies(&text))
}

/// Build the word-count report: one row per distinct token in first-seen
/// order, then the grand total and elapsed time as trailer lines.
pub fn word_count_report(table: &FrequencyTable<String>, elapsed_secs: f64) -> Report {
    let mut report = Report::new(WORD_COUNT_HEADERS.iter().map(|h| h.to_string()).collect());
    for (word, count) in table.iter() {
        report.push_row(vec![word.clone(), count.to_string()]);
    }
    report.push_trailer("");
    report.push_trailer(format!("Total General: {}", table.total()));
    report.push_trailer(format!("Tiempo Transcurrido: {elapsed_secs:.2} segundos"));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_word_frequencies_case_folds() {
        // "a A b a" -> {a: 2, b: 1} in order a, b; total 3
        let table = word_frequencies("a A b a");
        let entries: Vec<(String, u64)> =
            table.iter().map(|(k, c)| (k.clone(), c)).collect();
        assert_eq!(entries, vec![("a".to_string(), 2), ("b".to_string(), 1)]);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_punctuation_not_stripped() {
        let table = word_frequencies("word word. Word");
        assert_eq!(table.count(&"word".to_string()), 2);
        assert_eq!(table.count(&"word.".to_string()), 1);
    }

    #[test]
    fn test_counts_sum_to_token_total() {
        let text = "uno dos tres dos uno uno";
        let table = word_frequencies(text);
        assert_eq!(table.total(), text.split_whitespace().count() as u64);
    }

    #[test]
    fn test_count_words_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("words.txt");
        fs::write(&path, "Hola mundo\nhola\n").unwrap();

        let table = count_words(&path).unwrap();
        assert_eq!(table.count(&"hola".to_string()), 2);
        assert_eq!(table.count(&"mundo".to_string()), 1);
    }

    #[test]
    fn test_word_count_report_format() {
        let table = word_frequencies("b a b");
        let report = word_count_report(&table, 0.0);
        assert_eq!(
            report.to_tsv(),
            "Etiquetas de Fila\tConteo\nb\t2\na\t1\n\nTotal General: 3\nTiempo Transcurrido: 0.00 segundos\n"
        );
    }
}
