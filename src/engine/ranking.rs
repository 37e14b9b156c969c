//! Sizing statistics, focus-word boost, sort and truncation.

use log::debug;

use crate::index::WordWeightTable;
use crate::types::{output_limit, CloudConfig, RankedWord, RankedWordList, WcError, WcResult};

/// Multiplier applied to the maximum weight for the focus word.
pub const FOCUS_WORD_SCALE: f64 = 1.3;

/// Parameters for ranking a finished table.
#[derive(Debug, Clone, Default)]
pub struct RankingParams {
    /// Word forced above every other word.
    pub focus_word: Option<String>,
    /// Maximum number of results; 0 means unbounded.
    pub max_rendered_words: u16,
}

impl From<&CloudConfig> for RankingParams {
    fn from(config: &CloudConfig) -> Self {
        Self {
            focus_word: config.focus_word.clone(),
            max_rendered_words: config.max_rendered_words,
        }
    }
}

/// Turns an aggregated table into the ordered list the renderer consumes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute statistics, apply the focus boost, then sort and truncate.
    pub fn rank(
        &self,
        mut table: WordWeightTable,
        params: &RankingParams,
    ) -> WcResult<RankedWordList> {
        let stats = table.stats().ok_or(WcError::EmptyInput)?;
        let mut max_weight = stats.max;

        if let Some(focus) = params.focus_word.as_deref() {
            max_weight = stats.max * FOCUS_WORD_SCALE;
            table.set(focus, max_weight);
            debug!("Focus word '{}' boosted to {}", focus, max_weight);
        }

        let mut words: Vec<RankedWord> = table
            .iter()
            .map(|(word, weight)| RankedWord {
                word: word.to_string(),
                weight,
            })
            .collect();

        words.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        words.truncate(output_limit(params.max_rendered_words));

        debug!(
            "Ranked {} of {} words (min {}, max {}, avg {})",
            words.len(),
            table.len(),
            stats.min,
            max_weight,
            stats.avg
        );

        Ok(RankedWordList {
            words,
            min_weight: stats.min,
            max_weight,
            avg_weight: stats.avg,
        })
    }
}
