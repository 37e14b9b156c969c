//! Error types for the word frequency engine.

use std::fmt;

use thiserror::Error;

/// A fault captured inside a single tokenization unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitFailure {
    /// The line bytes were not valid UTF-8.
    InvalidLine { line: usize, valid_up_to: usize },
    /// The unit panicked while tokenizing.
    Panicked { line: usize, message: String },
    /// A worker thread died outside of any single line.
    WorkerLost { worker: usize, message: String },
}

impl UnitFailure {
    /// Arrival index of the line that failed, if the failure belongs to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            UnitFailure::InvalidLine { line, .. } | UnitFailure::Panicked { line, .. } => {
                Some(*line)
            }
            UnitFailure::WorkerLost { .. } => None,
        }
    }
}

impl fmt::Display for UnitFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitFailure::InvalidLine { line, valid_up_to } => write!(
                f,
                "line {line}: not valid UTF-8 (valid up to byte {valid_up_to})"
            ),
            UnitFailure::Panicked { line, message } => {
                write!(f, "line {line}: tokenizer panicked: {message}")
            }
            UnitFailure::WorkerLost { worker, message } => {
                write!(f, "worker {worker} died: {message}")
            }
        }
    }
}

/// All errors that can occur in the engine.
#[derive(Error, Debug)]
pub enum WcError {
    #[error("No words left after stop-word filtering")]
    EmptyInput,

    #[error("{} tokenization unit(s) failed: {}", .0.len(), join_failures(.0))]
    AggregateFailure(Vec<UnitFailure>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Dispatch was cancelled before join")]
    Cancelled,

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_failures(failures: &[UnitFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type WcResult<T> = Result<T, WcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_failure_lists_every_unit() {
        let err = WcError::AggregateFailure(vec![
            UnitFailure::InvalidLine {
                line: 2,
                valid_up_to: 4,
            },
            UnitFailure::Panicked {
                line: 7,
                message: "boom".to_string(),
            },
        ]);
        let text = err.to_string();
        assert!(text.starts_with("2 tokenization unit(s) failed"));
        assert!(text.contains("line 2: not valid UTF-8"));
        assert!(text.contains("line 7: tokenizer panicked: boom"));
    }

    #[test]
    fn worker_lost_has_no_line() {
        let failure = UnitFailure::WorkerLost {
            worker: 3,
            message: "stack overflow".to_string(),
        };
        assert_eq!(failure.line(), None);
        assert_eq!(failure.to_string(), "worker 3 died: stack overflow");
        assert_eq!(
            UnitFailure::Panicked {
                line: 4,
                message: String::new()
            }
            .line(),
            Some(4)
        );
    }
}
