//! Ranked output handed to the layout/rendering collaborator.

use serde::{Deserialize, Serialize};

/// Min, max and mean over the word weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// A single word with its final weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub weight: f64,
}

/// Words sorted by descending weight, plus the statistics used for sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWordList {
    pub words: Vec<RankedWord>,
    /// Smallest weight before the focus boost.
    pub min_weight: f64,
    /// Largest weight, including the focus boost when one was applied.
    pub max_weight: f64,
    /// Mean weight before the focus boost.
    pub avg_weight: f64,
}

impl RankedWordList {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedWord> {
        self.words.iter()
    }

    /// Weight of `word`, compared case-insensitively.
    pub fn weight_of(&self, word: &str) -> Option<f64> {
        let key = word.to_lowercase();
        self.words
            .iter()
            .find(|w| w.word.to_lowercase() == key)
            .map(|w| w.weight)
    }

    /// Weight of `word` scaled into `(0, 1]` against the list maximum.
    pub fn relative_size(&self, word: &RankedWord) -> f64 {
        if self.max_weight > 0.0 {
            word.weight / self.max_weight
        } else {
            0.0
        }
    }

    /// Sum of all listed weights.
    pub fn total_weight(&self) -> f64 {
        self.words.iter().map(|w| w.weight).sum()
    }
}
