//! Per-kind translation of algorithm steps into animation steps.
//!
//! Timings are fractions of `base`, the configured per-step duration.

use std::time::Duration;

use algoviz_steps::{AlgorithmStep, IndexRange, StepDetail, StepKind};

use crate::config::scale;
use crate::primitive::{Action, AnimationStep, AnimationTarget, Indicator, Payload, Pointer};

/// Build the animation steps for one algorithm step.
pub fn build_steps(step: &AlgorithmStep, base: Duration) -> Vec<AnimationStep> {
    match step.kind() {
        StepKind::Highlight => highlight(step, base),
        StepKind::Compare => compare(step, base),
        StepKind::Eliminate => eliminate(step, base),
        StepKind::Found => found(step, base),
        StepKind::Swap => swap(step, base),
        StepKind::Init | StepKind::NotFound => default(step, base),
    }
}

/// Offset of item `k` of `count` spread evenly across `window`.
fn stagger(k: usize, count: usize, window: Duration) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    scale(window, k as f64 / count as f64)
}

fn element_wave(
    indices: &[usize],
    action: Action,
    window: Duration,
    duration: Duration,
) -> Vec<AnimationStep> {
    indices
        .iter()
        .enumerate()
        .map(|(k, &index)| {
            AnimationStep::new(
                AnimationTarget::Element(index),
                action,
                stagger(k, indices.len(), window),
                duration,
            )
        })
        .collect()
}

/// The result indicator shaking for a search that came up empty.
fn result_shake(base: Duration) -> AnimationStep {
    AnimationStep::new(
        AnimationTarget::Indicator(Indicator::Result),
        Action::Shake,
        Duration::ZERO,
        base,
    )
    .with_payload(Payload::Result {
        found: false,
        index: None,
    })
}

fn highlight(step: &AlgorithmStep, base: Duration) -> Vec<AnimationStep> {
    let half = base / 2;
    match step.detail {
        StepDetail::RangeHighlight { left, right, .. } => {
            let range = AnimationStep::new(
                AnimationTarget::Range,
                Action::Highlight,
                Duration::ZERO,
                base,
            )
            .with_payload(Payload::Range {
                start: left,
                end: right,
            });
            let mut out = vec![range];
            out.extend(element_wave(&step.indices, Action::Highlight, half, half));
            out
        }
        StepDetail::PointerHighlight {
            left, mid, right, ..
        } => {
            let pointer = |p: Pointer, index: usize| {
                AnimationStep::new(AnimationTarget::Pointer(p), Action::Move, Duration::ZERO, half)
                    .with_payload(Payload::PointerAt { index })
            };
            vec![
                pointer(Pointer::Left, left),
                pointer(Pointer::Mid, mid),
                pointer(Pointer::Right, right),
                AnimationStep::new(AnimationTarget::Element(mid), Action::Highlight, half, half),
            ]
        }
        StepDetail::Settled {
            range: IndexRange { start, end },
        } => {
            let mut out = element_wave(&step.indices, Action::Highlight, half, half);
            out.push(
                AnimationStep::new(AnimationTarget::Range, Action::Fade, half, half)
                    .with_payload(Payload::Range { start, end }),
            );
            out
        }
        _ => element_wave(&step.indices, Action::Highlight, Duration::ZERO, base),
    }
}

fn compare(step: &AlgorithmStep, base: Duration) -> Vec<AnimationStep> {
    let lead = scale(base, 0.4);
    let mut out: Vec<AnimationStep> = step
        .indices
        .iter()
        .map(|&index| {
            AnimationStep::new(
                AnimationTarget::Element(index),
                Action::Scale,
                Duration::ZERO,
                lead,
            )
            .with_payload(Payload::Scale { factor: 1.15 })
        })
        .collect();

    let out_of_order = matches!(
        step.detail,
        StepDetail::PairCompare {
            out_of_order: true,
            ..
        }
    );
    let action = if out_of_order {
        Action::Shake
    } else {
        Action::Highlight
    };
    out.push(
        AnimationStep::new(
            AnimationTarget::Indicator(Indicator::Comparison),
            action,
            lead,
            base - lead,
        )
        .with_payload(Payload::Comparison {
            outcome: step.detail.compare_outcome(),
        }),
    );
    out
}

fn eliminate(step: &AlgorithmStep, base: Duration) -> Vec<AnimationStep> {
    let StepDetail::Eliminate { remaining, .. } = &step.detail else {
        return vec![result_shake(base)];
    };

    let fade = scale(base, 0.6);
    let spread = scale(base, 0.2);
    let mut out = element_wave(&step.indices, Action::Dim, spread, fade - spread);
    if let Some(range) = remaining {
        out.push(
            AnimationStep::new(AnimationTarget::Range, Action::Move, fade, base - fade)
                .with_payload(Payload::Range {
                    start: range.start,
                    end: range.end,
                }),
        );
    }
    out
}

fn found(step: &AlgorithmStep, base: Duration) -> Vec<AnimationStep> {
    let half = base / 2;
    let index = match step.detail {
        StepDetail::Found { index, .. } => Some(index),
        _ => step.indices.first().copied(),
    };

    let mut out = Vec::with_capacity(3);
    if let Some(i) = index {
        let element = AnimationTarget::Element(i);
        out.push(AnimationStep::new(element, Action::Highlight, Duration::ZERO, half));
        out.push(
            AnimationStep::new(element, Action::Scale, half, half)
                .with_payload(Payload::Scale { factor: 1.3 }),
        );
    }
    out.push(
        AnimationStep::new(
            AnimationTarget::Indicator(Indicator::Result),
            Action::Highlight,
            base,
            base,
        )
        .with_payload(Payload::Result { found: true, index }),
    );
    out
}

fn swap(step: &AlgorithmStep, base: Duration) -> Vec<AnimationStep> {
    let (first, second) = match step.detail {
        StepDetail::Swap { first, second, .. } => (first, second),
        _ => match step.indices.as_slice() {
            [a, b, ..] => (*a, *b),
            _ => return default(step, base),
        },
    };
    let settle = base / 4;
    let travel = |from: usize, to: usize| {
        AnimationStep::new(AnimationTarget::Element(from), Action::Move, Duration::ZERO, base)
            .with_payload(Payload::Swap { from, to })
    };

    vec![
        travel(first, second),
        travel(second, first),
        AnimationStep::new(AnimationTarget::Element(first), Action::Highlight, base, settle),
        AnimationStep::new(AnimationTarget::Element(second), Action::Highlight, base, settle),
    ]
}

fn default(step: &AlgorithmStep, base: Duration) -> Vec<AnimationStep> {
    if let StepDetail::NotFound { .. } = step.detail {
        return vec![result_shake(base)];
    }
    vec![AnimationStep::new(
        AnimationTarget::Indicator(Indicator::Status),
        Action::Highlight,
        Duration::ZERO,
        base / 2,
    )
    .with_payload(Payload::Status {
        text: step.description.clone(),
    })]
}
