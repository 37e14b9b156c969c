//! Engine configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{WcError, WcResult};

/// Default number of ranked words handed to the renderer.
pub const DEFAULT_MAX_RENDERED_WORDS: u16 = 100;

/// Upper bound accepted for `max_rendered_words`.
pub const MAX_RENDERED_WORDS_LIMIT: u16 = 1000;

/// Default capacity of the dispatcher's job queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// What to do with an input line that is not valid text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidLinePolicy {
    /// Drop the line, log a warning and keep going.
    #[default]
    Skip,
    /// Fail the whole batch with `WcError::AggregateFailure`.
    Fail,
}

/// Configuration for a single word cloud run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Word forced to the top of the ranking.
    #[serde(alias = "title")]
    pub focus_word: Option<String>,
    /// Maximum number of ranked words; 0 means unbounded.
    #[serde(alias = "max_words")]
    pub max_rendered_words: u16,
    /// Tokenizer worker threads.
    pub workers: usize,
    /// Bounded job queue size between dispatch and workers.
    pub queue_capacity: usize,
    pub invalid_lines: InvalidLinePolicy,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            focus_word: None,
            max_rendered_words: DEFAULT_MAX_RENDERED_WORDS,
            workers: default_workers(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            invalid_lines: InvalidLinePolicy::default(),
        }
    }
}

/// Output bound for `max_rendered_words`, with the 0 sentinel mapped to
/// unbounded.
pub fn output_limit(max_rendered_words: u16) -> usize {
    match max_rendered_words {
        0 => usize::MAX,
        n => n as usize,
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl CloudConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> WcResult<Self> {
        let config: CloudConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> WcResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> WcResult<()> {
        if self.max_rendered_words > MAX_RENDERED_WORDS_LIMIT {
            return Err(WcError::InvalidConfig(format!(
                "max_rendered_words must be between 0 and {}, got {}",
                MAX_RENDERED_WORDS_LIMIT, self.max_rendered_words
            )));
        }
        if self.workers == 0 {
            return Err(WcError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(WcError::InvalidConfig(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(word) = &self.focus_word {
            if word.trim().is_empty() {
                return Err(WcError::InvalidConfig(
                    "focus_word must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn with_focus_word(mut self, word: impl Into<String>) -> Self {
        self.focus_word = Some(word.into());
        self
    }

    pub fn with_max_rendered_words(mut self, max: u16) -> Self {
        self.max_rendered_words = max;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_invalid_lines(mut self, policy: InvalidLinePolicy) -> Self {
        self.invalid_lines = policy;
        self
    }
}
