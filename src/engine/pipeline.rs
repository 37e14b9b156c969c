//! Begin / process / finish facade over the four engine stages.

use log::debug;

use crate::engine::aggregator::FrequencyAggregator;
use crate::engine::dispatcher::LineDispatcher;
use crate::engine::ranking::{RankingEngine, RankingParams};
use crate::index::WordWeightTable;
use crate::types::{CloudConfig, LineResult, RankedWordList, TextInput, WcResult};

/// Entry point: owns a validated configuration and starts sessions.
#[derive(Debug, Clone)]
pub struct WordCloudEngine {
    config: CloudConfig,
}

impl WordCloudEngine {
    /// Validate `config` and build an engine around it.
    pub fn new(config: CloudConfig) -> WcResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Start a session: spins up the tokenizer workers.
    pub fn begin(&self) -> WcResult<CloudSession> {
        Ok(CloudSession {
            dispatcher: LineDispatcher::spawn(&self.config)?,
            params: RankingParams::from(&self.config),
        })
    }

    /// Run every input through a single session.
    pub fn run<I, T>(&self, inputs: I) -> WcResult<RankedWordList>
    where
        I: IntoIterator<Item = T>,
        T: Into<TextInput>,
    {
        let mut session = self.begin()?;
        for input in inputs {
            session.process(input)?;
        }
        session.finish()
    }

    /// Aggregate already-tokenized results into a table.
    pub fn aggregate(&self, results: &[LineResult]) -> WordWeightTable {
        FrequencyAggregator::new().aggregate(results)
    }

    /// Rank a finished table using this engine's focus word and bound.
    pub fn rank(&self, table: WordWeightTable) -> WcResult<RankedWordList> {
        RankingEngine::new().rank(table, &RankingParams::from(&self.config))
    }
}

/// One run of the engine. Lines arrive through [`CloudSession::process`];
/// [`CloudSession::finish`] joins, aggregates and ranks them.
pub struct CloudSession {
    dispatcher: LineDispatcher,
    params: RankingParams,
}

impl CloudSession {
    /// Dispatch every line of `input`. Returns the number of lines queued.
    pub fn process(&mut self, input: impl Into<TextInput>) -> WcResult<usize> {
        Ok(self.dispatcher.dispatch_input(input)?.len())
    }

    /// Number of lines dispatched so far.
    pub fn lines(&self) -> usize {
        self.dispatcher.dispatched()
    }

    /// Join all tokenization units, then aggregate and rank.
    pub fn finish(self) -> WcResult<RankedWordList> {
        let lines = self.dispatcher.dispatched();
        let results = self.dispatcher.join()?;
        let table = FrequencyAggregator::new().aggregate(&results);
        debug!("{} lines aggregated into {} words", lines, table.len());
        RankingEngine::new().rank(table, &self.params)
    }

    /// Drop the session without aggregating anything.
    pub fn abandon(self) {
        self.dispatcher.cancel();
    }
}
