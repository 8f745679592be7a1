//! Playback configuration.

use std::time::Duration;

/// Pause between consecutive steps during auto-advance.
pub const DEFAULT_INTER_STEP_DELAY: Duration = Duration::from_millis(300);

/// Settings for a [`PlaybackCoordinator`](crate::PlaybackCoordinator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Wait after a step's animation before advancing.
    pub inter_step_delay: Duration,

    /// Speed pushed to the animation service on construction.
    /// `None` keeps whatever the service already uses.
    pub initial_speed: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            inter_step_delay: DEFAULT_INTER_STEP_DELAY,
            initial_speed: None,
        }
    }
}

impl PlaybackConfig {
    #[must_use]
    pub fn with_inter_step_delay(mut self, delay: Duration) -> Self {
        self.inter_step_delay = delay;
        self
    }

    #[must_use]
    pub fn with_initial_speed(mut self, speed: f64) -> Self {
        self.initial_speed = Some(speed);
        self
    }
}
