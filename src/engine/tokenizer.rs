//! Line tokenizer: delimiter splitting plus stop-word removal.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English function words excluded from counting. Matched exactly,
/// case included.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's", "me",
    "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such",
    "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there",
    "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Characters that separate tokens within a line.
pub const DELIMITERS: &[char] = &[
    ' ', '.', ',', '"', '?', '!', '{', '}', '[', ']', ':', '(', ')', '\u{201C}', '\u{201D}', '*',
    '#', '%', '^', '&', '+', '=',
];

static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn stop_word_set() -> &'static HashSet<&'static str> {
    STOP_WORD_SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Stateless line tokenizer, safe to share between worker threads.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    stop_words: &'static HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a tokenizer over the built-in stop word list.
    pub fn new() -> Self {
        Self {
            stop_words: stop_word_set(),
        }
    }

    /// Split a line into tokens, dropping empty fragments and stop words.
    /// Token casing is preserved.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        line.split(DELIMITERS)
            .filter(|token| !token.is_empty())
            .filter(|token| !self.is_stop_word(token))
            .map(|s| s.to_string())
            .collect()
    }

    /// Exact, case-sensitive stop word check.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_word_list_has_no_duplicates() {
        assert_eq!(stop_word_set().len(), STOP_WORDS.len());
    }

    #[test]
    fn every_delimiter_splits() {
        let tokenizer = Tokenizer::new();
        for &d in DELIMITERS {
            let line = format!("left{d}right");
            assert_eq!(tokenizer.tokenize(&line), vec!["left", "right"], "delimiter {d:?}");
        }
    }

    #[test]
    fn tabs_and_apostrophes_are_not_delimiters() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.tokenize("rock\troll"), vec!["rock\troll"]);
        assert_eq!(tokenizer.tokenize("o'clock"), vec!["o'clock"]);
        assert!(!DELIMITERS.contains(&'\''));
        assert!(!DELIMITERS.contains(&'\t'));
    }
}
