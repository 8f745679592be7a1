//! Error types for algoviz-steps.

use thiserror::Error;

/// Result type for step-generating algorithms.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations detected before any step is recorded.
///
/// These are programming errors on the caller's side, not search outcomes:
/// a search that simply fails to find its target returns `Ok`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The search target is NaN or infinite.
    #[error("target must be a finite number, got {0}")]
    NonFiniteTarget(f64),

    /// An input element is NaN or infinite.
    #[error("element at index {index} must be a finite number, got {value}")]
    NonFiniteElement { index: usize, value: f64 },

    /// The input is not in non-decreasing order.
    #[error(
        "input must be sorted: found {current} < {previous} at indices {index} and {}",
        .index - 1
    )]
    Unsorted {
        index: usize,
        previous: f64,
        current: f64,
    },
}
