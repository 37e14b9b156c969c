//! Line task dispatcher: a fixed pool of tokenizer threads fed through a
//! bounded crossbeam channel.
//!
//! ```text
//!   dispatch(line) ──► bounded job queue ──► worker 1..N (tokenize)
//!                                                 │
//!   join() ◄──────── unbounded result channel ◄───┘
//! ```
//!
//! Workers share nothing but the immutable stop-word set. Results are only
//! read at `join`, which sorts them back into arrival order.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, warn};

use crate::engine::tokenizer::Tokenizer;
use crate::types::{
    CloudConfig, InvalidLinePolicy, LineId, LineResult, RawLine, TextInput, UnitFailure, WcError,
    WcResult,
};

struct Job {
    line: LineId,
    raw: RawLine,
}

/// Per-line tokenization routine run inside each unit.
type TokenizeFn = fn(&Tokenizer, &str) -> Vec<String>;

enum UnitOutcome {
    Done(LineResult),
    Failed(UnitFailure),
}

/// Counters from a single worker thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkerStats {
    pub lines: usize,
    pub tokens: usize,
    pub failures: usize,
}

/// Fans input lines out to tokenizer threads and joins their results.
pub struct LineDispatcher {
    job_tx: Option<Sender<Job>>,
    result_rx: Receiver<UnitOutcome>,
    workers: Vec<JoinHandle<WorkerStats>>,
    cancelled: Arc<AtomicBool>,
    next_line: LineId,
    policy: InvalidLinePolicy,
}

impl LineDispatcher {
    /// Start the worker pool described by `config`.
    pub fn spawn(config: &CloudConfig) -> WcResult<Self> {
        Self::with_tokenizer(Tokenizer::new(), config)
    }

    pub fn with_tokenizer(tokenizer: Tokenizer, config: &CloudConfig) -> WcResult<Self> {
        Self::start(tokenizer, Tokenizer::tokenize, config)
    }

    fn start(
        tokenizer: Tokenizer,
        tokenize: TokenizeFn,
        config: &CloudConfig,
    ) -> WcResult<Self> {
        config.validate()?;

        let (job_tx, job_rx) = bounded::<Job>(config.queue_capacity);
        let (result_tx, result_rx) = unbounded::<UnitOutcome>();
        let cancelled = Arc::new(AtomicBool::new(false));

        let mut workers = Vec::with_capacity(config.workers);
        for i in 0..config.workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            let cancelled = Arc::clone(&cancelled);
            let handle = thread::Builder::new()
                .name(format!("wc-tokenize-{i}"))
                .spawn(move || {
                    run_worker(tokenizer, tokenize, job_rx, result_tx, cancelled)
                })?;
            workers.push(handle);
        }
        debug!("Started {} tokenizer workers", workers.len());

        Ok(Self {
            job_tx: Some(job_tx),
            result_rx,
            workers,
            cancelled,
            next_line: 0,
            policy: config.invalid_lines,
        })
    }

    /// Queue one line for tokenization and return its arrival index. Blocks
    /// while the job queue is full.
    pub fn dispatch(&mut self, line: impl Into<RawLine>) -> WcResult<LineId> {
        let tx = self.job_tx.as_ref().ok_or(WcError::Cancelled)?;
        let id = self.next_line;
        tx.send(Job {
            line: id,
            raw: line.into(),
        })
        .map_err(|_| WcError::Cancelled)?;
        self.next_line += 1;
        Ok(id)
    }

    /// Resolve `input` into lines and dispatch each of them.
    pub fn dispatch_input(&mut self, input: impl Into<TextInput>) -> WcResult<Vec<LineId>> {
        input
            .into()
            .into_lines()
            .into_iter()
            .map(|line| self.dispatch(line))
            .collect()
    }

    /// Number of lines dispatched so far.
    pub fn dispatched(&self) -> usize {
        self.next_line
    }

    /// Wait for every dispatched line and return the results in arrival
    /// order.
    pub fn join(mut self) -> WcResult<Vec<LineResult>> {
        drop(self.job_tx.take());

        let mut failures = Vec::new();
        let mut totals = WorkerStats::default();
        for (worker, handle) in self.workers.drain(..).enumerate() {
            match handle.join() {
                Ok(stats) => {
                    totals.lines += stats.lines;
                    totals.tokens += stats.tokens;
                    totals.failures += stats.failures;
                }
                Err(payload) => failures.push(UnitFailure::WorkerLost {
                    worker,
                    message: panic_message(payload.as_ref()),
                }),
            }
        }
        debug!(
            "Joined {} lines: {} tokens, {} failed units",
            totals.lines, totals.tokens, totals.failures
        );

        let mut results = Vec::with_capacity(self.next_line);
        for outcome in self.result_rx.iter() {
            match outcome {
                UnitOutcome::Done(result) => results.push(result),
                UnitOutcome::Failed(failure) => failures.push(failure),
            }
        }

        if self.policy == InvalidLinePolicy::Skip {
            failures.retain(|failure| match failure {
                UnitFailure::InvalidLine { .. } => {
                    warn!("Skipping {}", failure);
                    false
                }
                _ => true,
            });
        }

        if !failures.is_empty() {
            failures.sort_by_key(UnitFailure::line);
            return Err(WcError::AggregateFailure(failures));
        }

        results.sort_by_key(|r| r.line);
        Ok(results)
    }

    /// Abandon all outstanding work. Queued lines are dropped without being
    /// tokenized and no results are returned.
    pub fn cancel(mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        drop(self.job_tx.take());
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
        debug!("Dispatcher cancelled after {} lines", self.next_line);
    }
}

impl Drop for LineDispatcher {
    fn drop(&mut self) {
        if !self.workers.is_empty() {
            self.cancelled.store(true, Ordering::SeqCst);
            drop(self.job_tx.take());
        }
    }
}

fn run_worker(
    tokenizer: Tokenizer,
    tokenize: TokenizeFn,
    jobs: Receiver<Job>,
    results: Sender<UnitOutcome>,
    cancelled: Arc<AtomicBool>,
) -> WorkerStats {
    let mut stats = WorkerStats::default();
    for job in jobs.iter() {
        if cancelled.load(Ordering::SeqCst) {
            break;
        }
        let outcome = tokenize_unit(&tokenizer, tokenize, job);
        stats.lines += 1;
        match &outcome {
            UnitOutcome::Done(result) => stats.tokens += result.tokens.len(),
            UnitOutcome::Failed(_) => stats.failures += 1,
        }
        if results.send(outcome).is_err() {
            break;
        }
    }
    stats
}

fn tokenize_unit(tokenizer: &Tokenizer, tokenize: TokenizeFn, job: Job) -> UnitOutcome {
    let text = match job.raw.as_text() {
        Ok(text) => text,
        Err(e) => {
            return UnitOutcome::Failed(UnitFailure::InvalidLine {
                line: job.line,
                valid_up_to: e.valid_up_to(),
            })
        }
    };
    match panic::catch_unwind(AssertUnwindSafe(|| tokenize(tokenizer, text))) {
        Ok(tokens) => UnitOutcome::Done(LineResult::new(job.line, tokens)),
        Err(payload) => UnitOutcome::Failed(UnitFailure::Panicked {
            line: job.line,
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
