//! Recorded algorithm steps.
//!
//! A step is one logical event of an algorithm run, independent of how it is
//! later animated. Steps carry a typed [`StepDetail`]; the coarse
//! [`StepKind`] is derived from it so the two can never disagree.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// Coarse classification of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Init,
    Compare,
    Eliminate,
    Highlight,
    Found,
    NotFound,
    Swap,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Compare => "compare",
            Self::Eliminate => "eliminate",
            Self::Highlight => "highlight",
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::Swap => "swap",
        };
        f.write_str(name)
    }
}

/// Three-way result of comparing the target against a probed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOutcome {
    /// Target equals the probed value.
    Equal,
    /// Target is smaller than the probed value.
    Less,
    /// Target is larger than the probed value.
    Greater,
}

impl CompareOutcome {
    /// Compare `target` against `probe`.
    pub fn of(target: f64, probe: f64) -> Self {
        if target == probe {
            Self::Equal
        } else if target < probe {
            Self::Less
        } else {
            Self::Greater
        }
    }

    /// Operator used in step descriptions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }
}

/// Which half of the search range a step removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Why candidates were eliminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EliminationReason {
    /// The input had no elements.
    EmptyArray,
    /// Half of the range was discarded after a comparison.
    Narrowed,
    /// The range became empty without a match.
    SearchExhausted,
}

impl EliminationReason {
    /// Stable reason code shown to renderers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyArray => "empty-array",
            Self::Narrowed => "narrowed",
            Self::SearchExhausted => "search-exhausted",
        }
    }
}

/// Inclusive index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of indices covered.
    pub fn size(&self) -> usize {
        self.end + 1 - self.start
    }

    /// All indices in the range, ascending.
    pub fn indices(&self) -> Vec<usize> {
        (self.start..=self.end).collect()
    }
}

/// Kind-specific data attached to a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepDetail {
    /// Algorithm start.
    Init {
        algorithm: String,
        target: Option<f64>,
        array_length: usize,
    },

    /// The live search range `[left, right]`.
    RangeHighlight {
        left: usize,
        right: usize,
        mid: usize,
        range_size: usize,
    },

    /// The three binary search pointers and the values under them.
    PointerHighlight {
        left: usize,
        mid: usize,
        right: usize,
        left_value: f64,
        mid_value: f64,
        right_value: f64,
    },

    /// A single element under inspection.
    ElementHighlight { index: usize, value: f64 },

    /// Elements that reached their final sorted position.
    Settled { range: IndexRange },

    /// Target compared against the midpoint of a bounded range.
    Compare {
        left: usize,
        mid: usize,
        right: usize,
        target: f64,
        mid_value: f64,
        outcome: CompareOutcome,
        comparison_count: usize,
    },

    /// Target compared against a single probed element.
    Probe {
        index: usize,
        target: f64,
        value: f64,
        outcome: CompareOutcome,
        comparison_count: usize,
    },

    /// Two adjacent elements compared for ordering.
    PairCompare {
        first: usize,
        second: usize,
        first_value: f64,
        second_value: f64,
        out_of_order: bool,
        comparison_count: usize,
    },

    /// Half of the range discarded.
    Eliminate {
        mid: usize,
        side: Side,
        eliminated: IndexRange,
        remaining: Option<IndexRange>,
        remaining_size: usize,
        reason: String,
    },

    /// Nothing to search.
    EmptyArray,

    /// Range exhausted without a match.
    SearchExhausted {
        total_comparisons: usize,
        final_left: i64,
        final_right: i64,
    },

    Found {
        index: usize,
        target: f64,
        total_comparisons: usize,
    },

    NotFound {
        target: f64,
        total_comparisons: usize,
    },

    Swap {
        first: usize,
        second: usize,
        first_value: f64,
        second_value: f64,
        swap_count: usize,
    },
}

impl StepDetail {
    /// Coarse kind of this detail.
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Init { .. } => StepKind::Init,
            Self::RangeHighlight { .. }
            | Self::PointerHighlight { .. }
            | Self::ElementHighlight { .. }
            | Self::Settled { .. } => StepKind::Highlight,
            Self::Compare { .. } | Self::Probe { .. } | Self::PairCompare { .. } => {
                StepKind::Compare
            }
            Self::Eliminate { .. } | Self::EmptyArray | Self::SearchExhausted { .. } => {
                StepKind::Eliminate
            }
            Self::Found { .. } => StepKind::Found,
            Self::NotFound { .. } => StepKind::NotFound,
            Self::Swap { .. } => StepKind::Swap,
        }
    }

    /// Reason attached to eliminate steps.
    pub fn elimination_reason(&self) -> Option<EliminationReason> {
        match self {
            Self::EmptyArray => Some(EliminationReason::EmptyArray),
            Self::Eliminate { .. } => Some(EliminationReason::Narrowed),
            Self::SearchExhausted { .. } => Some(EliminationReason::SearchExhausted),
            _ => None,
        }
    }

    /// Comparison outcome, for any compare-kind detail that has one.
    pub fn compare_outcome(&self) -> Option<CompareOutcome> {
        match self {
            Self::Compare { outcome, .. } | Self::Probe { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}

/// One recorded event in an algorithm's execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmStep {
    /// 1-based position in the step list.
    pub sequence_number: usize,
    /// Positions referenced by this step.
    pub indices: Vec<usize>,
    pub detail: StepDetail,
    /// Human-readable summary.
    pub description: String,
}

impl AlgorithmStep {
    /// Coarse kind, derived from the detail.
    pub fn kind(&self) -> StepKind {
        self.detail.kind()
    }
}

/// Immutable, cheaply cloneable list of steps from one algorithm run.
#[derive(Debug, Clone, PartialEq)]
pub struct StepList(Arc<[AlgorithmStep]>);

impl StepList {
    pub fn as_slice(&self) -> &[AlgorithmStep] {
        &self.0
    }

    /// Number of steps of the given kind.
    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.0.iter().filter(|s| s.kind() == kind).count()
    }
}

impl Default for StepList {
    fn default() -> Self {
        Vec::new().into()
    }
}

impl Deref for StepList {
    type Target = [AlgorithmStep];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<AlgorithmStep>> for StepList {
    fn from(steps: Vec<AlgorithmStep>) -> Self {
        Self(steps.into())
    }
}

impl Serialize for StepList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

/// Appends steps with monotonically assigned sequence numbers.
#[derive(Debug, Default)]
pub(crate) struct StepRecorder {
    steps: Vec<AlgorithmStep>,
}

impl StepRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        indices: Vec<usize>,
        detail: StepDetail,
        description: impl Into<String>,
    ) {
        let sequence_number = self.steps.len() + 1;
        self.steps.push(AlgorithmStep {
            sequence_number,
            indices,
            detail,
            description: description.into(),
        });
    }

    pub(crate) fn finish(self) -> StepList {
        self.steps.into()
    }
}
