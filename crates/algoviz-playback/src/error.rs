//! Error types for algoviz-playback.

use thiserror::Error;

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Errors surfaced by the playback coordinator and sessions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// Animating a step failed. Playback is paused at that step.
    #[error("animation failed at step {step}: {source}")]
    Animation {
        step: usize,
        #[source]
        source: algoviz_animation::Error,
    },

    /// The algorithm rejected its input before producing any step.
    #[error("invalid algorithm input: {0}")]
    Input(#[from] algoviz_steps::Error),
}
