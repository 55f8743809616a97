//! Insertion-ordered frequency tallies.
//!
//! A plain `HashMap` loses the order keys were first seen, which both the
//! word-frequency report and the mode tie-break depend on. The tally here
//! keeps counts in a map and first-seen order in a separate key vector.

use std::collections::HashMap;
use std::hash::Hash;

/// A frequency tally that remembers the order keys were first seen.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, u64>,
    order: Vec<K>,
}

impl<K> FrequencyTable<K> {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no keys have been recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    /// Record one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key, 1);
            }
        }
    }

    /// Occurrences of `key` recorded so far.
    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.order.iter().map(move |key| (key, self.counts[key]))
    }

    /// The first-seen entry among those sharing the maximum count.
    pub fn top(&self) -> Option<(&K, u64)> {
        let max = self.counts.values().copied().max()?;
        self.iter().find(|(_, count)| *count == max)
    }
}
