//! Shared fixtures for the end-to-end tests under `tests/`.

use algoviz_animation::{AnimationConfig, AnimationService};

/// `count` ascending multiples of three, starting at zero.
pub fn multiples_of_three(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64 * 3.0).collect()
}

/// Service that animates at normal speed.
pub fn animated_service() -> AnimationService {
    AnimationService::new(AnimationConfig::default())
}

/// Service that skips all animation timing.
pub fn instant_service() -> AnimationService {
    AnimationService::new(AnimationConfig::reduced_motion())
}
