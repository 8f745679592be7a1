//! Error types for algoviz-animation.

use thiserror::Error;

use crate::primitive::SequenceId;

/// Result type for animation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reported by a subscriber while handling a fired step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RenderError(pub String);

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors that can occur while executing an animation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A subscriber rejected a fired step. The sequence stops at that step.
    #[error("renderer failed on {sequence} step {step_index}: {source}")]
    Render {
        sequence: SequenceId,
        step_index: usize,
        source: RenderError,
    },
}
