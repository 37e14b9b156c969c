//! Case-insensitive word → weight table with stable insertion order.

use indexmap::IndexMap;

use crate::types::WeightStats;

/// A stored word: the casing seen on first insertion and its weight.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    word: String,
    weight: f64,
}

/// Maps normalized words to weights. Lookups ignore case; the stored key keeps
/// the casing of its first insertion. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordWeightTable {
    /// lowercase key → entry
    entries: IndexMap<String, Entry>,
}

fn fold(word: &str) -> String {
    word.to_lowercase()
}

impl WordWeightTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Weight for `word`, if present.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(&fold(word)).map(|e| e.weight)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&fold(word))
    }

    /// Add `by` to an existing entry. Returns false if the word is absent.
    pub fn increment(&mut self, word: &str, by: f64) -> bool {
        match self.entries.get_mut(&fold(word)) {
            Some(entry) => {
                entry.weight += by;
                true
            }
            None => false,
        }
    }

    /// Insert a new word at the end of the table. An existing entry for the
    /// same key keeps its casing and position and takes the new weight.
    pub fn insert(&mut self, word: &str, weight: f64) {
        self.set(word, weight);
    }

    /// Overwrite (or insert) the weight for `word`.
    pub fn set(&mut self, word: &str, weight: f64) {
        self.entries
            .entry(fold(word))
            .and_modify(|e| e.weight = weight)
            .or_insert_with(|| Entry {
                word: word.to_string(),
                weight,
            });
    }

    /// Remove `word`, returning its weight. Later entries keep their order.
    pub fn remove(&mut self, word: &str) -> Option<f64> {
        self.entries.shift_remove(&fold(word)).map(|e| e.weight)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(stored word, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.values().map(|e| (e.word.as_str(), e.weight))
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.values().map(|e| e.weight).sum()
    }

    /// Min, max and mean weight, or `None` for an empty table.
    pub fn stats(&self) -> Option<WeightStats> {
        if self.entries.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        for e in self.entries.values() {
            min = min.min(e.weight);
            max = max.max(e.weight);
            sum += e.weight;
        }
        Some(WeightStats {
            min,
            max,
            avg: sum / self.entries.len() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_case_but_keep_first_casing() {
        let mut table = WordWeightTable::new();
        table.insert("Rust", 1.0);
        assert!(table.contains("rust"));
        assert!(table.increment("RUST", 1.0));
        assert_eq!(table.get("rust"), Some(2.0));
        assert_eq!(table.iter().next(), Some(("Rust", 2.0)));
    }

    #[test]
    fn remove_then_insert_moves_to_end() {
        let mut table = WordWeightTable::new();
        table.insert("cats", 2.0);
        table.insert("dog", 1.0);
        let moved = table.remove("cats").unwrap();
        table.insert("cat", moved + 1.0);
        let words: Vec<&str> = table.iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["dog", "cat"]);
        assert_eq!(table.get("cat"), Some(3.0));
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut table = WordWeightTable::new();
        table.insert("alpha", 1.0);
        table.insert("beta", 4.0);
        table.set("ALPHA", 9.0);
        let pairs: Vec<(&str, f64)> = table.iter().collect();
        assert_eq!(pairs, vec![("alpha", 9.0), ("beta", 4.0)]);
    }

    #[test]
    fn increment_missing_word_is_noop() {
        let mut table = WordWeightTable::new();
        assert!(!table.increment("ghost", 1.0));
        assert!(table.is_empty());
    }

    #[test]
    fn counts_past_f32_precision_are_kept() {
        let mut table = WordWeightTable::new();
        table.insert("data", 16_777_216.0);
        for _ in 0..10 {
            assert!(table.increment("data", 1.0));
        }
        assert_eq!(table.get("data"), Some(16_777_226.0));
        table.insert("other", 1.0);
        assert_eq!(table.total_weight(), 16_777_227.0);
        assert_eq!(table.stats().unwrap().max, 16_777_226.0);
    }

    #[test]
    fn stats_cover_all_values() {
        let mut table = WordWeightTable::new();
        assert!(table.stats().is_none());
        table.insert("a", 1.0);
        table.insert("b", 3.0);
        table.insert("c", 2.0);
        let stats = table.stats().unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.avg, 2.0);
        assert_eq!(table.total_weight(), 6.0);
    }
}
