//! Descriptive statistics over a numeric dataset.

use serde::Serialize;

use crate::freq::FrequencyTable;

/// The five aggregates plus the dataset size.
///
/// Variance and standard deviation use the population formulas (divisor
/// `n`, not `n - 1`), and both derive from the single mean computed once,
/// so the two cannot drift apart under floating-point rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptive {
    /// Number of values that survived coercion.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// First-seen value among those sharing the maximum frequency;
    /// `None` only for an empty dataset.
    pub mode: Option<f64>,
    pub std_dev: f64,
    pub variance: f64,
}

impl Descriptive {
    /// Compute all aggregates over `values`. Input order is irrelevant
    /// for every aggregate except the mode's first-seen tie-break.
    ///
    /// An empty dataset is a documented degenerate case, not an error:
    /// every aggregate is `0.0` and the mode is `None`.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                median: 0.0,
                mode: None,
                std_dev: 0.0,
                variance: 0.0,
            };
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        Self {
            count,
            mean,
            median: median(values),
            mode: mode(values),
            std_dev: variance.sqrt(),
            variance,
        }
    }
}

/// Median: the central element of the sorted data, or the average of the
/// two central elements for an even count. Sorts a copy; the input order
/// is untouched.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Mode over exact floating-point equality, tallied by bit pattern so the
/// first-seen tie-break stays deterministic. Zero is canonicalized first
/// so `0.0` and `-0.0` land in the same bucket.
fn mode(values: &[f64]) -> Option<f64> {
    let mut tally = FrequencyTable::new();
    for v in values {
        let v = if *v == 0.0 { 0.0 } else { *v };
        tally.add(v.to_bits());
    }
    tally.top().map(|(bits, _)| f64::from_bits(*bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset() {
        let stats = Descriptive::from_values(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
        assert_eq!(stats.mode, None);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn test_single_value() {
        let stats = Descriptive::from_values(&[7.5]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.mode, Some(7.5));
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_even_count() {
        // worked example: mean 2.5, median 2.5, population variance 1.25
        let stats = Descriptive::from_values(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.variance, 1.25);
        assert!((stats.std_dev - 1.118).abs() < 1e-3);
    }

    #[test]
    fn test_odd_count_median() {
        let stats = Descriptive::from_values(&[9.0, 1.0, 5.0]);
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn test_reorder_invariance() {
        let a = Descriptive::from_values(&[1.0, 2.0, 3.0, 4.0, 4.0]);
        let b = Descriptive::from_values(&[4.0, 1.0, 4.0, 3.0, 2.0]);
        assert_eq!(a.mean, b.mean);
        assert_eq!(a.median, b.median);
        assert_eq!(a.variance, b.variance);
        assert_eq!(a.std_dev, b.std_dev);
    }

    #[test]
    fn test_std_dev_is_sqrt_of_variance() {
        let stats = Descriptive::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.variance, 4.0);
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.std_dev, stats.variance.sqrt());
    }

    #[test]
    fn test_mode_first_seen_tie_break() {
        // 3.0 and 1.0 both occur twice; 3.0 was encountered first
        let stats = Descriptive::from_values(&[3.0, 1.0, 1.0, 3.0]);
        assert_eq!(stats.mode, Some(3.0));

        // reordering flips the winner: the tie-break is insertion order,
        // not numeric order
        let stats = Descriptive::from_values(&[1.0, 3.0, 3.0, 1.0]);
        assert_eq!(stats.mode, Some(1.0));
    }

    #[test]
    fn test_mode_unique_winner() {
        let stats = Descriptive::from_values(&[5.0, 2.0, 5.0]);
        assert_eq!(stats.mode, Some(5.0));
    }

    #[test]
    fn test_variance_non_negative() {
        for data in [
            vec![0.0],
            vec![-1.0, 1.0],
            vec![1e9, -1e9, 0.5],
            vec![2.5, 2.5, 2.5],
        ] {
            let stats = Descriptive::from_values(&data);
            assert!(stats.variance >= 0.0);
        }
    }
}
