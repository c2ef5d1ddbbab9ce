//! Failure signal for retried operations

use thiserror::Error;

/// The single error kind an operation can signal: it failed.
///
/// Carries a human-readable reason and, when built from another error type,
/// the original error as source. The retrier never inspects the contents;
/// only the presence of a `Failure` drives loop control.
#[derive(Error, Debug)]
#[error("operation failed: {reason}")]
pub struct Failure {
    reason: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Failure {
    /// Create a failure from a reason string
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a failure wrapping an underlying error
    pub fn with_source(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Human-readable reason for the failure
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type alias for operations run under a retrier
pub type OpResult<T> = Result<T, Failure>;

// Conversion implementations for common error types
impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        Failure::with_source("IO error", err)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::new(err.to_string())
    }
}
