//! Playback coordinator.
//!
//! Walks a step list one step at a time, animating each step through the
//! shared [`AnimationService`]. Only one animation is in flight per
//! coordinator; controls that move the index cancel it first.

use std::sync::Arc;

use algoviz_animation::{AnimationService, SequenceId, SequenceOutcome};
use algoviz_steps::{AlgorithmStep, StepList};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::PlaybackConfig;
use crate::error::{PlaybackError, Result};

/// Whether an animation is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    Idle,
    Animating,
}

/// How a `play` or `step` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Auto-advance reached the final step.
    Completed,
    /// A single step was animated.
    Stepped,
    /// Stopped by `pause`, or by an animation cancelled from outside.
    Paused,
    /// Superseded by `reset`, `skip_to_step`, `step_back` or `load_steps`.
    Interrupted,
    /// Precondition not met; nothing happened.
    Ignored,
}

type StepChangeFn = Arc<dyn Fn(usize, &AlgorithmStep) + Send + Sync>;
type CompleteFn = Arc<dyn Fn() + Send + Sync>;
type ErrorFn = Arc<dyn Fn(&PlaybackError) + Send + Sync>;

#[derive(Default)]
struct Callbacks {
    step_change: Option<StepChangeFn>,
    complete: Option<CompleteFn>,
    error: Option<ErrorFn>,
}

struct PlaybackState {
    steps: StepList,
    current_step: usize,
    is_running: bool,
    is_paused: bool,
    in_flight: Option<SequenceId>,
    animations_played: usize,
    /// Bumped whenever the index is moved from outside the play loop.
    generation: u64,
}

impl PlaybackState {
    fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    fn progress(&self) -> f64 {
        match self.steps.len() {
            0 => 0.0,
            1 => 1.0,
            total => self.current_step as f64 / (total - 1) as f64,
        }
    }

    /// Outcome for a loop started at `generation` that has stopped early.
    fn halted(&self, generation: u64) -> PlaybackOutcome {
        if self.generation != generation {
            PlaybackOutcome::Interrupted
        } else {
            PlaybackOutcome::Paused
        }
    }
}

struct Inner {
    service: AnimationService,
    config: PlaybackConfig,
    state: Mutex<PlaybackState>,
    callbacks: Mutex<Callbacks>,
}

/// Drives one step list through the animation service.
#[derive(Clone)]
pub struct PlaybackCoordinator {
    inner: Arc<Inner>,
}

impl PlaybackCoordinator {
    pub fn new(service: AnimationService, steps: StepList, config: PlaybackConfig) -> Self {
        if let Some(speed) = config.initial_speed {
            service.set_speed(speed);
        }
        Self {
            inner: Arc::new(Inner {
                service,
                config,
                state: Mutex::new(PlaybackState {
                    steps,
                    current_step: 0,
                    is_running: false,
                    is_paused: false,
                    in_flight: None,
                    animations_played: 0,
                    generation: 0,
                }),
                callbacks: Mutex::new(Callbacks::default()),
            }),
        }
    }

    /// Called with the index and step each time a step starts animating.
    pub fn on_step_change<F>(&self, callback: F)
    where
        F: Fn(usize, &AlgorithmStep) + Send + Sync + 'static,
    {
        self.inner.callbacks.lock().step_change = Some(Arc::new(callback));
    }

    /// Called once when auto-advance reaches the final step.
    pub fn on_complete<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.callbacks.lock().complete = Some(Arc::new(callback));
    }

    pub fn on_error<F>(&self, callback: F)
    where
        F: Fn(&PlaybackError) + Send + Sync + 'static,
    {
        self.inner.callbacks.lock().error = Some(Arc::new(callback));
    }

    pub fn service(&self) -> &AnimationService {
        &self.inner.service
    }

    pub fn steps(&self) -> StepList {
        self.inner.state.lock().steps.clone()
    }

    pub fn current_step(&self) -> usize {
        self.inner.state.lock().current_step
    }

    pub fn total_steps(&self) -> usize {
        self.inner.state.lock().steps.len()
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.inner.state.lock().in_flight.is_some() {
            PlaybackPhase::Animating
        } else {
            PlaybackPhase::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase() == PlaybackPhase::Animating
    }

    pub fn progress(&self) -> f64 {
        self.inner.state.lock().progress()
    }

    /// Auto-advance from the current step to the end.
    ///
    /// Ignored while animating or when already on the last step.
    pub async fn play(&self) -> Result<PlaybackOutcome> {
        let generation = {
            let mut state = self.inner.state.lock();
            if state.in_flight.is_some() || state.current_step >= state.last_index() {
                return Ok(PlaybackOutcome::Ignored);
            }
            state.generation += 1;
            state.is_running = true;
            state.is_paused = false;
            info!(from = state.current_step, total = state.steps.len(), "playback started");
            state.generation
        };

        loop {
            let index = self.current_step();
            if self.animate(index).await? == SequenceOutcome::Cancelled {
                return Ok(self.halted(generation));
            }

            let finished = {
                let state = self.inner.state.lock();
                if state.generation != generation || !state.is_running {
                    return Ok(state.halted(generation));
                }
                state.current_step >= state.last_index()
            };

            if finished {
                self.pause();
                info!(step = index, "playback completed");
                let complete = self.inner.callbacks.lock().complete.clone();
                if let Some(callback) = complete {
                    callback();
                }
                return Ok(PlaybackOutcome::Completed);
            }

            tokio::time::sleep(self.inner.config.inter_step_delay).await;

            let mut state = self.inner.state.lock();
            if state.generation != generation || !state.is_running {
                return Ok(state.halted(generation));
            }
            state.current_step += 1;
        }
    }

    /// Animate the current step once, then advance by one (never past the
    /// last step). Ignored while animating or while auto-advance runs,
    /// including its wait between steps.
    pub async fn step(&self) -> Result<PlaybackOutcome> {
        let (index, generation) = {
            let state = self.inner.state.lock();
            if state.in_flight.is_some() || state.is_running || state.steps.is_empty() {
                return Ok(PlaybackOutcome::Ignored);
            }
            (state.current_step, state.generation)
        };

        if self.animate(index).await? == SequenceOutcome::Cancelled {
            return Ok(self.halted(generation));
        }

        let mut state = self.inner.state.lock();
        if state.generation == generation && state.current_step < state.last_index() {
            state.current_step += 1;
        }
        Ok(PlaybackOutcome::Stepped)
    }

    /// Stop auto-advance and cancel the in-flight animation. The index is kept.
    pub fn pause(&self) {
        let in_flight = {
            let mut state = self.inner.state.lock();
            state.is_running = false;
            state.is_paused = true;
            debug!(step = state.current_step, "playback paused");
            state.in_flight.take()
        };
        if let Some(id) = in_flight {
            self.inner.service.cancel_animation(id);
        }
    }

    /// Cancel everything and return to the first step.
    pub fn reset(&self) {
        {
            let mut state = self.inner.state.lock();
            state.generation += 1;
            state.current_step = 0;
            state.animations_played = 0;
            state.is_running = false;
            state.is_paused = false;
            state.in_flight = None;
        }
        let dropped = self.inner.service.cancel_all_animations();
        debug!(dropped, "playback reset");
    }

    /// Jump to `index`, clamped to the last step, without animating.
    /// Returns the index actually applied.
    pub fn skip_to_step(&self, index: usize) -> usize {
        self.reposition(|state| index.min(state.last_index()))
    }

    /// Move back one step without animating. Returns the new index.
    pub fn step_back(&self) -> usize {
        self.reposition(|state| state.current_step.saturating_sub(1))
    }

    fn reposition(&self, target: impl FnOnce(&PlaybackState) -> usize) -> usize {
        let (applied, in_flight) = {
            let mut state = self.inner.state.lock();
            state.generation += 1;
            state.is_running = false;
            state.current_step = target(&state);
            debug!(step = state.current_step, "playback repositioned");
            (state.current_step, state.in_flight.take())
        };
        if let Some(id) = in_flight {
            self.inner.service.cancel_animation(id);
        }
        applied
    }

    /// Clamp and apply a playback speed. Non-finite values are ignored and
    /// return `None`.
    pub fn set_speed(&self, speed: f64) -> Option<f64> {
        self.inner.service.set_speed(speed)
    }

    /// Replace the step list and reset to its first step.
    pub fn load_steps(&self, steps: StepList) {
        self.reset();
        let total = steps.len();
        self.inner.state.lock().steps = steps;
        debug!(total, "steps loaded");
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot::from(self)
    }

    /// Animate step `index`, tracking it as the in-flight sequence.
    async fn animate(&self, index: usize) -> Result<SequenceOutcome> {
        let (sequence, step) = {
            let mut state = self.inner.state.lock();
            let Some(step) = state.steps.get(index).cloned() else {
                return Ok(SequenceOutcome::Skipped);
            };
            let sequence = self.inner.service.create_animation_sequence(&step, index);
            state.in_flight = Some(sequence.id);
            (sequence, step)
        };
        let id = sequence.id;

        let on_change = self.inner.callbacks.lock().step_change.clone();
        if let Some(callback) = on_change {
            callback(index, &step);
        }

        let result = self.inner.service.execute_sequence(sequence).await;

        {
            let mut state = self.inner.state.lock();
            if state.in_flight == Some(id) {
                state.in_flight = None;
            }
            if matches!(result, Ok(SequenceOutcome::Completed | SequenceOutcome::Skipped)) {
                state.animations_played += 1;
            }
        }

        result.map_err(|source| self.fail(index, source))
    }

    fn fail(&self, step: usize, source: algoviz_animation::Error) -> PlaybackError {
        {
            let mut state = self.inner.state.lock();
            state.is_running = false;
            state.is_paused = true;
            state.in_flight = None;
        }
        error!(step, error = %source, "step animation failed, playback paused");

        let err = PlaybackError::Animation { step, source };
        let on_error = self.inner.callbacks.lock().error.clone();
        if let Some(callback) = on_error {
            callback(&err);
        }
        err
    }

    /// Outcome after an animation was cancelled. A loop that still owns the
    /// coordinator stops running and counts as paused.
    fn halted(&self, generation: u64) -> PlaybackOutcome {
        let mut state = self.inner.state.lock();
        let outcome = state.halted(generation);
        if outcome == PlaybackOutcome::Paused {
            state.is_running = false;
            state.is_paused = true;
        }
        outcome
    }
}

/// Playback state for binding to a UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub current_step: usize,
    pub total_steps: usize,
    pub is_running: bool,
    pub is_paused: bool,
    pub is_animating: bool,
    /// `current_step / (total_steps - 1)`; 1.0 for a single step.
    pub progress: f64,
    pub speed: f64,
    pub animations_played: usize,
}

impl From<&PlaybackCoordinator> for PlaybackSnapshot {
    fn from(coordinator: &PlaybackCoordinator) -> Self {
        let speed = coordinator.inner.service.config().speed;
        let state = coordinator.inner.state.lock();
        Self {
            current_step: state.current_step,
            total_steps: state.steps.len(),
            is_running: state.is_running,
            is_paused: state.is_paused,
            is_animating: state.in_flight.is_some(),
            progress: state.progress(),
            speed,
            animations_played: state.animations_played,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_animation::{AnimationConfig, FiredStep, RenderError};
    use algoviz_steps::{BinarySearch, SearchAlgorithm, StepKind};
    use std::time::Duration;
    use tokio::time::sleep;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Init, range, pointers, compare, found.
    fn five_steps() -> StepList {
        let steps = BinarySearch.execute(&[1.0, 2.0, 3.0], 2.0).unwrap().steps;
        assert_eq!(steps.len(), 5);
        steps
    }

    fn coordinator(steps: StepList) -> PlaybackCoordinator {
        PlaybackCoordinator::new(AnimationService::default(), steps, PlaybackConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn play_runs_to_completion() {
        let playback = coordinator(five_steps());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let completions = Arc::new(Mutex::new(0));
        {
            let seen = Arc::clone(&seen);
            playback.on_step_change(move |index, step| seen.lock().push((index, step.kind())));
            let completions = Arc::clone(&completions);
            playback.on_complete(move || *completions.lock() += 1);
        }

        assert_eq!(playback.play().await, Ok(PlaybackOutcome::Completed));

        let indices: Vec<_> = seen.lock().iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(seen.lock().last().map(|(_, k)| *k), Some(StepKind::Found));
        assert_eq!(*completions.lock(), 1);

        let snap = playback.snapshot();
        assert_eq!(snap.current_step, 4);
        assert!(snap.is_paused);
        assert!(!snap.is_running);
        assert!(!snap.is_animating);
        assert_eq!(snap.progress, 1.0);
        assert_eq!(snap.animations_played, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn play_on_last_step_is_ignored() {
        let playback = coordinator(five_steps());
        playback.skip_to_step(4);
        assert_eq!(playback.play().await, Ok(PlaybackOutcome::Ignored));
        assert_eq!(playback.snapshot().animations_played, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_between_steps_keeps_index() {
        let playback = coordinator(five_steps());
        let handle = tokio::spawn({
            let playback = playback.clone();
            async move { playback.play().await }
        });

        // Init animates instantly, so this lands in the inter-step wait.
        sleep(ms(100)).await;
        playback.pause();
        assert_eq!(handle.await.unwrap(), Ok(PlaybackOutcome::Paused));

        let snap = playback.snapshot();
        assert_eq!(snap.current_step, 0);
        assert!(snap.is_paused);

        assert_eq!(playback.play().await, Ok(PlaybackOutcome::Completed));
        assert_eq!(playback.current_step(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_cancels_in_flight_animation() {
        let playback = coordinator(five_steps());
        playback.skip_to_step(3);
        let handle = tokio::spawn({
            let playback = playback.clone();
            async move { playback.play().await }
        });

        sleep(ms(100)).await;
        assert!(playback.is_animating());
        playback.pause();

        assert_eq!(handle.await.unwrap(), Ok(PlaybackOutcome::Paused));
        assert!(!playback.is_animating());
        assert_eq!(playback.service().animation_status().active_count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn step_advances_once_and_stops_at_end() {
        let playback = coordinator(five_steps());
        assert_eq!(playback.step().await, Ok(PlaybackOutcome::Stepped));
        assert_eq!(playback.current_step(), 1);

        playback.skip_to_step(3);
        let handle = tokio::spawn({
            let playback = playback.clone();
            async move { playback.step().await }
        });
        sleep(ms(10)).await;
        assert_eq!(playback.step().await, Ok(PlaybackOutcome::Ignored));
        assert_eq!(handle.await.unwrap(), Ok(PlaybackOutcome::Stepped));
        assert_eq!(playback.current_step(), 4);

        assert_eq!(playback.step().await, Ok(PlaybackOutcome::Stepped));
        assert_eq!(playback.current_step(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn step_during_auto_advance_gap_is_ignored() {
        let data: Vec<f64> = (0..16).map(f64::from).collect();
        let steps = BinarySearch.execute(&data, 11.0).unwrap().steps;
        let total = steps.len();
        let playback = coordinator(steps);

        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            playback.on_step_change(move |index, _| seen.lock().push(index));
        }
        let peak_active = Arc::new(Mutex::new(0));
        {
            let service = playback.service().clone();
            let peak_active = Arc::clone(&peak_active);
            playback.service().subscribe(move |_: &FiredStep| {
                let active = service.animation_status().active_count;
                let mut peak = peak_active.lock();
                *peak = (*peak).max(active);
                Ok(())
            });
        }

        playback.skip_to_step(1);
        let handle = tokio::spawn({
            let playback = playback.clone();
            async move { playback.play().await }
        });

        // The range highlight of step 1 ends at 375 ms; the next starts at 675 ms.
        sleep(ms(450)).await;
        assert!(!playback.is_animating());
        assert_eq!(playback.step().await, Ok(PlaybackOutcome::Ignored));

        assert_eq!(handle.await.unwrap(), Ok(PlaybackOutcome::Completed));
        assert_eq!(*seen.lock(), (1..total).collect::<Vec<_>>());
        assert_eq!(*peak_active.lock(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn outside_cancel_releases_auto_advance() {
        let playback = coordinator(five_steps());
        playback.skip_to_step(3);
        let handle = tokio::spawn({
            let playback = playback.clone();
            async move { playback.play().await }
        });

        sleep(ms(100)).await;
        playback.service().cancel_all_animations();
        assert_eq!(handle.await.unwrap(), Ok(PlaybackOutcome::Paused));

        let snap = playback.snapshot();
        assert!(!snap.is_running);
        assert!(snap.is_paused);
        assert_eq!(playback.step().await, Ok(PlaybackOutcome::Stepped));
    }

    #[test]
    fn skip_clamps_without_animating() {
        let playback = coordinator(five_steps());
        let changes = Arc::new(Mutex::new(0));
        {
            let changes = Arc::clone(&changes);
            playback.on_step_change(move |_, _| *changes.lock() += 1);
        }

        assert_eq!(playback.skip_to_step(99), 4);
        assert_eq!(playback.skip_to_step(2), 2);
        assert_eq!(*changes.lock(), 0);
        assert_eq!(playback.progress(), 0.5);
    }

    #[test]
    fn step_back_saturates() {
        let playback = coordinator(five_steps());
        playback.skip_to_step(2);
        assert_eq!(playback.step_back(), 1);
        assert_eq!(playback.step_back(), 0);
        assert_eq!(playback.step_back(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn skip_supersedes_running_loop() {
        let playback = coordinator(five_steps());
        let handle = tokio::spawn({
            let playback = playback.clone();
            async move { playback.play().await }
        });

        sleep(ms(100)).await;
        playback.skip_to_step(2);
        assert_eq!(handle.await.unwrap(), Ok(PlaybackOutcome::Interrupted));
        assert_eq!(playback.current_step(), 2);
        assert!(!playback.snapshot().is_running);

        assert_eq!(playback.play().await, Ok(PlaybackOutcome::Completed));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_returns_to_start() {
        let playback = coordinator(five_steps());
        let handle = tokio::spawn({
            let playback = playback.clone();
            async move { playback.play().await }
        });

        sleep(ms(1000)).await;
        playback.reset();
        assert_eq!(handle.await.unwrap(), Ok(PlaybackOutcome::Interrupted));

        let snap = playback.snapshot();
        assert_eq!(snap.current_step, 0);
        assert_eq!(snap.animations_played, 0);
        assert!(!snap.is_running && !snap.is_paused && !snap.is_animating);
    }

    #[tokio::test(start_paused = true)]
    async fn animation_error_pauses_and_reports() {
        let service = AnimationService::default();
        service.subscribe(|_: &FiredStep| Err(RenderError::new("no canvas")));
        let playback = PlaybackCoordinator::new(service, five_steps(), PlaybackConfig::default());

        let reported = Arc::new(Mutex::new(None));
        {
            let reported = Arc::clone(&reported);
            playback.on_error(move |e| *reported.lock() = Some(e.clone()));
        }

        let err = playback.play().await.unwrap_err();
        assert!(matches!(err, PlaybackError::Animation { step: 0, .. }));
        assert_eq!(reported.lock().as_ref(), Some(&err));

        let snap = playback.snapshot();
        assert!(snap.is_paused);
        assert!(!snap.is_running);
        assert!(!snap.is_animating);
    }

    #[tokio::test(start_paused = true)]
    async fn reduced_motion_still_walks_every_step() {
        let service = AnimationService::new(AnimationConfig::reduced_motion());
        let (_, mut rx) = service.subscribe_channel();
        let playback = PlaybackCoordinator::new(service, five_steps(), PlaybackConfig::default());

        assert_eq!(playback.play().await, Ok(PlaybackOutcome::Completed));
        assert_eq!(playback.current_step(), 4);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn progress_edge_cases() {
        let empty = coordinator(StepList::default());
        assert_eq!(empty.progress(), 0.0);

        let single = coordinator(BinarySearch.execute(&[], 5.0).unwrap().steps);
        assert_eq!(single.total_steps(), 1);
        assert_eq!(single.progress(), 1.0);
        assert_eq!(
            tokio_test::block_on(single.play()),
            Ok(PlaybackOutcome::Ignored)
        );
    }

    #[test]
    fn speed_reaches_service() {
        let playback = coordinator(five_steps());
        assert_eq!(playback.set_speed(10.0), Some(5.0));
        assert_eq!(playback.service().config().speed, 5.0);
        assert_eq!(playback.set_speed(f64::NAN), None);
        assert_eq!(playback.snapshot().speed, 5.0);

        let configured = PlaybackCoordinator::new(
            AnimationService::default(),
            five_steps(),
            PlaybackConfig::default().with_initial_speed(0.5),
        );
        assert_eq!(configured.snapshot().speed, 0.5);
    }

    #[test]
    fn load_steps_resets() {
        let playback = coordinator(five_steps());
        playback.skip_to_step(3);
        playback.load_steps(BinarySearch.execute(&[1.0], 1.0).unwrap().steps);

        assert_eq!(playback.current_step(), 0);
        assert_eq!(playback.total_steps(), 5);
    }

    #[test]
    fn snapshot_serializes() {
        let playback = coordinator(five_steps());
        playback.skip_to_step(1);
        let json = serde_json::to_string(&playback.snapshot()).unwrap();
        assert!(json.contains("\"current_step\":1"));
        assert!(json.contains("\"progress\":0.25"));
    }
}
