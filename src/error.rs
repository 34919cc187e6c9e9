//! Error types for assessment runs and benchmark loading

use thiserror::Error;

/// Raised before any arithmetic when caller-supplied inputs break the engine's invariants
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssessmentError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl AssessmentError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AssessmentError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Failure modes of the strict benchmark read.
///
/// `Benchmarks::load_or_default` swallows all of these and falls back.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("failed to read benchmark file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed benchmark file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("benchmark {key} = {value} is outside [0, 1]")]
    OutOfRange { key: &'static str, value: f64 },
}
