//! Value types shared across the engine.

pub mod config;
pub mod error;
pub mod input;
pub mod ranked;

pub use config::{
    output_limit, CloudConfig, InvalidLinePolicy, DEFAULT_MAX_RENDERED_WORDS,
    DEFAULT_QUEUE_CAPACITY, MAX_RENDERED_WORDS_LIMIT,
};
pub use error::{UnitFailure, WcError, WcResult};
pub use input::{LineId, LineResult, RawLine, TextInput};
pub use ranked::{RankedWord, RankedWordList, WeightStats};
