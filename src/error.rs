//! Error type for the probe library
//!
//! There is exactly one failure kind: the deliberately-raised probe failure.
//! It simulates an exceptional control-flow event and never represents an
//! actual fault, so it is not classified further. We use `thiserror` for the
//! `Display` and `Error` trait implementations.

use std::error::Error as StdError;
use thiserror::Error;

/// Result type alias for probe operations
pub type Result<T> = std::result::Result<T, ProbeFailure>;

/// The single failure kind raised by probes
///
/// Carries a fixed message and, optionally, a nested cause. The unwind probe
/// raises it without a cause; the cause slot exists so diagnostic formatting
/// has a chain to walk when a caller supplies one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProbeFailure {
    message: String,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl ProbeFailure {
    /// Create a failure with no nested cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a failure wrapping a nested cause
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Format the nested-cause detail
    ///
    /// Returns the empty string when there is no cause, so callers can
    /// concatenate the result unconditionally.
    pub fn cause_detail(&self) -> String {
        match &self.cause {
            Some(cause) => format!("caused by: {cause}"),
            None => String::new(),
        }
    }
}
