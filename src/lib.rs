//! Word frequency and sizing engine for word-cloud rendering.
//!
//! Text lines are tokenized concurrently, stop words are removed, singular and
//! plural forms are coalesced into one weight, and the result is ranked and
//! truncated for an external layout/rendering step.
//!
//! ```no_run
//! use wordcloud_engine::{CloudConfig, WordCloudEngine};
//!
//! let engine = WordCloudEngine::new(CloudConfig::default().with_focus_word("rust"))?;
//! let ranked = engine.run(["the cat sat", "cats and cats run"])?;
//! for word in ranked.iter() {
//!     println!("{} {}", word.word, word.weight);
//! }
//! # Ok::<(), wordcloud_engine::WcError>(())
//! ```

pub mod engine;
pub mod index;
pub mod types;

pub use engine::{
    singular_of, CloudSession, FrequencyAggregator, LineDispatcher, RankingEngine, RankingParams,
    Tokenizer, WordCloudEngine, WorkerStats, FOCUS_WORD_SCALE,
};
pub use index::WordWeightTable;
pub use types::{
    CloudConfig, InvalidLinePolicy, LineId, LineResult, RankedWord, RankedWordList, RawLine,
    TextInput, UnitFailure, WcError, WcResult, WeightStats,
};
