//! Frequency aggregation with singular/plural coalescing.
//!
//! Every token adds exactly 1 to the table, so the final total weight equals
//! the number of tokens consumed. The plural rule is a plain trailing-`s`
//! heuristic and its outcome depends on scan order: results are consumed by
//! line arrival index, then token order within the line.

use log::trace;

use crate::index::WordWeightTable;
use crate::types::LineResult;

/// Builds a [`WordWeightTable`] from joined line results.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrequencyAggregator;

/// `word` with one trailing `s`/`S` removed, or `word` unchanged.
pub fn singular_of(word: &str) -> &str {
    word.strip_suffix('s')
        .or_else(|| word.strip_suffix('S'))
        .unwrap_or(word)
}

impl FrequencyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate all results into a fresh table. `results` should already be
    /// in arrival order; the dispatcher's `join` guarantees that.
    pub fn aggregate(&self, results: &[LineResult]) -> WordWeightTable {
        let mut table = WordWeightTable::new();
        for result in results {
            for token in &result.tokens {
                self.add_token(&mut table, token);
            }
        }
        table
    }

    /// Fold one token into `table`.
    pub fn add_token(&self, table: &mut WordWeightTable, word: &str) {
        let singular = singular_of(word);
        if table.increment(singular, 1.0) {
            trace!("'{}' folded into '{}'", word, singular);
            return;
        }

        let plural = format!("{word}s");
        if let Some(weight) = table.remove(&plural) {
            trace!("'{}' takes over the count of '{}'", word, plural);
            table.insert(word, weight + 1.0);
            return;
        }

        if !table.increment(word, 1.0) {
            table.insert(word, 1.0);
        }
    }
}
