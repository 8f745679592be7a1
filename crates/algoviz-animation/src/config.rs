//! Animation timing configuration.
//!
//! Supplied by the host's performance/preference layer; field names match the
//! camelCase JSON that layer produces.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Nominal duration of one step's animation at speed 1.0.
pub const BASE_DURATION: Duration = Duration::from_millis(800);

/// Slowest allowed playback speed.
pub const MIN_SPEED: f64 = 0.1;

/// Fastest allowed playback speed.
pub const MAX_SPEED: f64 = 5.0;

/// Clamp a speed into `[MIN_SPEED, MAX_SPEED]`. Non-finite speeds yield `None`.
pub fn clamp_speed(speed: f64) -> Option<f64> {
    speed.is_finite().then(|| speed.clamp(MIN_SPEED, MAX_SPEED))
}

/// Timing and accessibility settings for the animation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    /// Playback speed; durations scale by `1 / speed`.
    pub speed: f64,
    /// Skip timing and visual effects entirely.
    pub reduced_motion: bool,
    /// Halve every duration on slow devices.
    pub is_low_performance: bool,
    /// User preference applied on top of `speed`.
    pub animation_speed_multiplier: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            reduced_motion: false,
            is_low_performance: false,
            animation_speed_multiplier: 1.0,
        }
    }
}

impl AnimationConfig {
    /// Configuration for users who prefer reduced motion.
    #[must_use]
    pub fn reduced_motion() -> Self {
        Self {
            reduced_motion: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    #[must_use]
    pub fn with_low_performance(mut self, enabled: bool) -> Self {
        self.is_low_performance = enabled;
        self
    }

    #[must_use]
    pub fn with_speed_multiplier(mut self, multiplier: f64) -> Self {
        self.animation_speed_multiplier = multiplier;
        self
    }

    /// Copy with speed clamped and a usable multiplier.
    ///
    /// Non-finite speeds reset to 1.0; non-positive or non-finite multipliers
    /// reset to 1.0.
    #[must_use]
    pub fn validated(self) -> Self {
        let multiplier = self.animation_speed_multiplier;
        Self {
            speed: clamp_speed(self.speed).unwrap_or(1.0),
            animation_speed_multiplier: if multiplier.is_finite() && multiplier > 0.0 {
                multiplier
            } else {
                1.0
            },
            ..self
        }
    }

    /// Duration a single step's animation is scaled from.
    pub fn step_duration(&self) -> Duration {
        let cfg = self.validated();
        let mut factor = cfg.animation_speed_multiplier / cfg.speed;
        if cfg.is_low_performance {
            factor *= 0.5;
        }
        scale(BASE_DURATION, factor)
    }
}

/// Scale `duration` by `factor`, rounding to the nearest nanosecond.
pub(crate) fn scale(duration: Duration, factor: f64) -> Duration {
    Duration::from_nanos((duration.as_nanos() as f64 * factor).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_is_base() {
        assert_eq!(AnimationConfig::default().step_duration(), BASE_DURATION);
    }

    #[test]
    fn duration_scaling() {
        let fast = AnimationConfig::default().with_speed(2.0);
        assert_eq!(fast.step_duration(), Duration::from_millis(400));

        let low = AnimationConfig::default().with_low_performance(true);
        assert_eq!(low.step_duration(), Duration::from_millis(400));

        let slow_pref = AnimationConfig::default().with_speed_multiplier(1.5);
        assert_eq!(slow_pref.step_duration(), Duration::from_millis(1200));
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(clamp_speed(0.01), Some(MIN_SPEED));
        assert_eq!(clamp_speed(9.0), Some(MAX_SPEED));
        assert_eq!(clamp_speed(f64::NAN), None);

        let cfg = AnimationConfig::default().with_speed(100.0).validated();
        assert_eq!(cfg.speed, MAX_SPEED);
    }

    #[test]
    fn bad_multiplier_resets() {
        let cfg = AnimationConfig::default().with_speed_multiplier(-2.0).validated();
        assert_eq!(cfg.animation_speed_multiplier, 1.0);
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "speed": 2.0,
            "reducedMotion": true,
            "isLowPerformance": false,
            "animationSpeedMultiplier": 1.0
        }"#;
        let cfg: AnimationConfig = serde_json::from_str(json).unwrap();
        assert!(cfg.reduced_motion);
        assert_eq!(cfg.speed, 2.0);

        let partial: AnimationConfig =
            serde_json::from_str(r#"{"isLowPerformance":true}"#).unwrap();
        assert_eq!(partial.speed, 1.0);
        assert!(partial.is_low_performance);
    }
}
