//! Animation sequence service.
//!
//! Builds sequences from algorithm steps, keeps a priority queue drained by a
//! background task, and fires each animation step to subscribers when its
//! delay elapses.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use algoviz_steps::AlgorithmStep;
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace, warn};

use crate::builder::build_steps;
use crate::config::{clamp_speed, AnimationConfig};
use crate::error::{Error, RenderError, Result};
use crate::primitive::{AnimationSequence, Priority, SequenceId};
use crate::subscribers::{channel_callback, deliver, FiredStep, Subscribers, SubscriptionId};

/// How a sequence run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceOutcome {
    /// Every step fired.
    Completed,
    /// Cancelled before the last step fired.
    Cancelled,
    /// Reduced motion; nothing fired.
    Skipped,
}

/// Point-in-time view of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationStatus {
    pub is_processing: bool,
    pub queue_length: usize,
    pub active_count: usize,
    pub active_sequence_ids: Vec<SequenceId>,
}

struct ServiceState {
    config: AnimationConfig,
    /// Highest priority first; FIFO within a priority.
    queue: VecDeque<AnimationSequence>,
    /// Cancellation senders of running sequences.
    active: BTreeMap<SequenceId, watch::Sender<bool>>,
    processing: bool,
    /// Bumped by `cancel_all_animations` so a stale drain task exits.
    drain_generation: u64,
}

struct Shared {
    state: Mutex<ServiceState>,
    subscribers: Mutex<Subscribers>,
    next_id: AtomicU64,
}

/// Handle to the animation service. Clones share the same queue and
/// subscribers.
#[derive(Clone)]
pub struct AnimationService {
    shared: Arc<Shared>,
}

impl Default for AnimationService {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationService {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ServiceState {
                    config: config.validated(),
                    queue: VecDeque::new(),
                    active: BTreeMap::new(),
                    processing: false,
                    drain_generation: 0,
                }),
                subscribers: Mutex::new(Subscribers::default()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn config(&self) -> AnimationConfig {
        self.shared.state.lock().config
    }

    /// Replace the configuration. Applies to sequences built afterwards.
    pub fn set_config(&self, config: AnimationConfig) {
        let config = config.validated();
        debug!(
            speed = config.speed,
            reduced_motion = config.reduced_motion,
            low_performance = config.is_low_performance,
            "animation config updated"
        );
        self.shared.state.lock().config = config;
    }

    /// Set the playback speed, clamped. Returns the applied speed, or `None`
    /// (leaving the config untouched) for a non-finite value.
    pub fn set_speed(&self, speed: f64) -> Option<f64> {
        let applied = clamp_speed(speed)?;
        self.shared.state.lock().config.speed = applied;
        debug!(requested = speed, applied, "animation speed set");
        Some(applied)
    }

    /// Translate one algorithm step into an animation sequence.
    pub fn create_animation_sequence(
        &self,
        step: &AlgorithmStep,
        step_index: usize,
    ) -> AnimationSequence {
        let base = self.config().step_duration();
        let id = SequenceId(self.shared.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let sequence = AnimationSequence {
            id,
            step_index,
            source_sequence_number: step.sequence_number,
            priority: Priority::for_kind(step.kind()),
            steps: build_steps(step, base),
        };
        trace!(
            sequence = %id,
            kind = %step.kind(),
            steps = sequence.steps.len(),
            duration_ms = sequence.duration().as_millis() as u64,
            "built animation sequence"
        );
        sequence
    }

    /// Queue a sequence for serial playback and start draining if idle.
    ///
    /// Inserted ahead of every queued sequence with strictly lower priority.
    /// Must be called from within a Tokio runtime.
    pub fn queue_animation(&self, sequence: AnimationSequence) -> SequenceId {
        let id = sequence.id;
        let start_drain = {
            let mut state = self.shared.state.lock();
            let position = state
                .queue
                .iter()
                .position(|queued| queued.priority < sequence.priority)
                .unwrap_or(state.queue.len());
            debug!(sequence = %id, priority = ?sequence.priority, position, "queued animation");
            state.queue.insert(position, sequence);

            if state.processing {
                None
            } else {
                state.processing = true;
                Some(state.drain_generation)
            }
        };

        if let Some(generation) = start_drain {
            let service = self.clone();
            tokio::spawn(async move { service.drain(generation).await });
        }
        id
    }

    async fn drain(self, generation: u64) {
        loop {
            let (sequence, cancel) = {
                let mut state = self.shared.state.lock();
                if state.drain_generation != generation {
                    return;
                }
                let Some(sequence) = state.queue.pop_front() else {
                    state.processing = false;
                    return;
                };
                let (tx, rx) = watch::channel(false);
                state.active.insert(sequence.id, tx);
                (sequence, rx)
            };

            let id = sequence.id;
            match self.run(sequence, cancel).await {
                Ok(outcome) => trace!(sequence = %id, ?outcome, "queued animation finished"),
                Err(e) => debug!(sequence = %id, error = %e, "queued animation failed"),
            }
        }
    }

    /// Play a sequence now, bypassing the queue.
    ///
    /// Steps fire in ascending delay order. Resolves once the last step has
    /// fired, or immediately with [`SequenceOutcome::Skipped`] under reduced
    /// motion.
    pub async fn execute_sequence(&self, sequence: AnimationSequence) -> Result<SequenceOutcome> {
        if self.config().reduced_motion {
            trace!(sequence = %sequence.id, "reduced motion, skipping sequence");
            return Ok(SequenceOutcome::Skipped);
        }
        let (tx, rx) = watch::channel(false);
        self.shared.state.lock().active.insert(sequence.id, tx);
        self.run(sequence, rx).await
    }

    async fn run(
        &self,
        sequence: AnimationSequence,
        mut cancel: watch::Receiver<bool>,
    ) -> Result<SequenceOutcome> {
        let id = sequence.id;
        let result = self.fire_steps(sequence, &mut cancel).await;
        self.shared.state.lock().active.remove(&id);
        result
    }

    async fn fire_steps(
        &self,
        sequence: AnimationSequence,
        cancel: &mut watch::Receiver<bool>,
    ) -> Result<SequenceOutcome> {
        let id = sequence.id;
        if self.config().reduced_motion {
            return Ok(SequenceOutcome::Skipped);
        }

        let mut steps = sequence.steps;
        steps.sort_by_key(|step| step.delay);
        let start = Instant::now();

        for (step_index, step) in steps.into_iter().enumerate() {
            tokio::select! {
                biased;
                _ = cancelled(cancel) => {
                    debug!(sequence = %id, step_index, "animation cancelled");
                    return Ok(SequenceOutcome::Cancelled);
                }
                _ = sleep_until(start + step.delay) => {}
            }

            let fired = FiredStep {
                sequence_id: id,
                step_index,
                step,
            };
            let callbacks = self.shared.subscribers.lock().snapshot();
            if let Err(source) = deliver(&callbacks, &fired) {
                warn!(
                    sequence = %id,
                    step_index,
                    error = %source,
                    "renderer rejected animation step"
                );
                return Err(Error::Render {
                    sequence: id,
                    step_index,
                    source,
                });
            }
        }

        Ok(SequenceOutcome::Completed)
    }

    /// Cancel a running or queued sequence. Returns false for unknown ids.
    pub fn cancel_animation(&self, id: SequenceId) -> bool {
        let mut state = self.shared.state.lock();
        if let Some(tx) = state.active.remove(&id) {
            let _ = tx.send(true);
            debug!(sequence = %id, "cancelled active animation");
            return true;
        }
        if let Some(position) = state.queue.iter().position(|queued| queued.id == id) {
            state.queue.remove(position);
            debug!(sequence = %id, "removed queued animation");
            return true;
        }
        false
    }

    /// Cancel every running sequence and clear the queue. Returns how many
    /// sequences were dropped.
    pub fn cancel_all_animations(&self) -> usize {
        let mut state = self.shared.state.lock();
        let active = std::mem::take(&mut state.active);
        let dropped = active.len() + state.queue.len();
        for tx in active.into_values() {
            let _ = tx.send(true);
        }
        state.queue.clear();
        state.processing = false;
        state.drain_generation += 1;
        debug!(dropped, "cancelled all animations");
        dropped
    }

    pub fn animation_status(&self) -> AnimationStatus {
        let state = self.shared.state.lock();
        AnimationStatus {
            is_processing: state.processing,
            queue_length: state.queue.len(),
            active_count: state.active.len(),
            active_sequence_ids: state.active.keys().copied().collect(),
        }
    }

    /// Register a renderer callback. Callbacks run in registration order on
    /// the task firing the step and must not block.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&FiredStep) -> std::result::Result<(), RenderError> + Send + Sync + 'static,
    {
        self.shared.subscribers.lock().add(Arc::new(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.subscribers.lock().remove(id)
    }

    /// Subscribe through an unbounded channel instead of a callback.
    pub fn subscribe_channel(&self) -> (SubscriptionId, mpsc::UnboundedReceiver<FiredStep>) {
        let (callback, rx) = channel_callback();
        let id = self.shared.subscribers.lock().add(callback);
        (id, rx)
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().len()
    }
}

/// Resolves once the token flips to true or its sender is gone.
async fn cancelled(rx: &mut watch::Receiver<bool>) {
    let _ = rx.wait_for(|cancelled| *cancelled).await;
}
