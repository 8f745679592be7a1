//! Common contract for step-recording search algorithms.

use serde::Serialize;

use crate::error::Result;
use crate::step::{StepKind, StepList};

/// Outcome of one search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchTrace {
    pub found: bool,
    /// Position of the match, if any.
    pub position: Option<usize>,
    pub steps: StepList,
    /// Number of compare steps recorded.
    pub comparisons: usize,
}

impl SearchTrace {
    /// Index of the match, or `-1` when the target is absent.
    pub fn index(&self) -> i64 {
        self.position.map_or(-1, |p| p as i64)
    }

    /// Kind of the final step, if any were recorded.
    pub fn last_kind(&self) -> Option<StepKind> {
        self.steps.last().map(|s| s.kind())
    }
}

/// Textbook complexity figures for an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityInfo {
    pub time_best: &'static str,
    pub time_average: &'static str,
    pub time_worst: &'static str,
    pub space: &'static str,
}

/// A search algorithm that records its steps for visualization.
pub trait SearchAlgorithm {
    /// Identifier understood by the complexity engine (e.g. `binary-search`).
    fn name(&self) -> &'static str;

    /// Textbook complexity of the algorithm.
    fn complexity(&self) -> ComplexityInfo;

    /// Run the search, recording every step.
    ///
    /// Precondition violations are reported before any step is recorded.
    fn execute(&self, data: &[f64], target: f64) -> Result<SearchTrace>;
}
