//! Animation primitives handed to the rendering layer.

use std::fmt;
use std::time::Duration;

use algoviz_steps::{CompareOutcome, StepKind};
use serde::{Deserialize, Serialize};

/// Identifier of an animation sequence, unique per service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SequenceId(pub u64);

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seq-{}", self.0)
    }
}

/// Scheduling priority of a sequence in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Priority of the sequence built for a step of `kind`.
    pub fn for_kind(kind: StepKind) -> Self {
        match kind {
            StepKind::Found => Self::High,
            StepKind::Compare | StepKind::Eliminate => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// Named binary search pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pointer {
    Left,
    Mid,
    Right,
}

/// Named status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Comparison,
    Result,
    Status,
}

/// Broad class of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Element,
    Pointer,
    Range,
    Indicator,
}

/// What an animation step acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum AnimationTarget {
    /// Array element at an index.
    Element(usize),
    Pointer(Pointer),
    /// The live search range.
    Range,
    Indicator(Indicator),
}

impl AnimationTarget {
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Element(_) => TargetKind::Element,
            Self::Pointer(_) => TargetKind::Pointer,
            Self::Range => TargetKind::Range,
            Self::Indicator(_) => TargetKind::Indicator,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Highlight,
    Dim,
    Move,
    Fade,
    Scale,
    Shake,
}

/// Action-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payload {
    None,
    /// Range bounds, inclusive.
    Range { start: usize, end: usize },
    /// Index a pointer moves to.
    PointerAt { index: usize },
    /// Element travelling between positions.
    Swap { from: usize, to: usize },
    Scale { factor: f64 },
    Comparison { outcome: Option<CompareOutcome> },
    Result { found: bool, index: Option<usize> },
    Status { text: String },
}

/// One primitive visual instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub target: AnimationTarget,
    pub action: Action,
    /// Offset from the start of the sequence.
    #[serde(with = "millis")]
    pub delay: Duration,
    #[serde(with = "millis")]
    pub duration: Duration,
    pub payload: Payload,
}

impl AnimationStep {
    pub fn new(
        target: AnimationTarget,
        action: Action,
        delay: Duration,
        duration: Duration,
    ) -> Self {
        Self {
            target,
            action,
            delay,
            duration,
            payload: Payload::None,
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    pub fn target_kind(&self) -> TargetKind {
        self.target.kind()
    }

    /// Time from sequence start until this step finishes.
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Animation steps derived from exactly one algorithm step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSequence {
    pub id: SequenceId,
    /// Position of the source step in its step list.
    pub step_index: usize,
    pub source_sequence_number: usize,
    pub priority: Priority,
    /// Listed in build order; execution order is by delay.
    pub steps: Vec<AnimationStep>,
}

impl AnimationSequence {
    /// Latest end time over all steps, or zero when empty.
    pub fn duration(&self) -> Duration {
        self.steps
            .iter()
            .map(AnimationStep::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

/// Durations as whole milliseconds on the wire.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
