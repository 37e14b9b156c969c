//! Engine stages: tokenize, dispatch, aggregate, rank.

pub mod aggregator;
pub mod dispatcher;
pub mod pipeline;
pub mod ranking;
pub mod tokenizer;

pub use aggregator::{singular_of, FrequencyAggregator};
pub use dispatcher::{LineDispatcher, WorkerStats};
pub use pipeline::{CloudSession, WordCloudEngine};
pub use ranking::{RankingEngine, RankingParams, FOCUS_WORD_SCALE};
pub use tokenizer::{Tokenizer, DELIMITERS, STOP_WORDS};
