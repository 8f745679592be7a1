//! Algoviz Playback
//!
//! Steps through a recorded algorithm run, animating one step at a time.
//!
//! - [`PlaybackCoordinator`]: play, pause, single-step, seek and reset over a
//!   [`StepList`](algoviz_steps::StepList), driving a shared
//!   [`AnimationService`](algoviz_animation::AnimationService).
//! - [`Session`]: a coordinator bundled with the run's complexity analysis
//!   and scaling projection.
//!
//! # Usage
//!
//! ```
//! use algoviz_animation::{AnimationConfig, AnimationService};
//! use algoviz_playback::{PlaybackConfig, PlaybackOutcome, Session};
//! use algoviz_steps::BinarySearch;
//!
//! # tokio_test::block_on(async {
//! let service = AnimationService::new(AnimationConfig::reduced_motion());
//! let config = PlaybackConfig::default().with_inter_step_delay(std::time::Duration::ZERO);
//! let (session, _trace) =
//!     Session::search(&BinarySearch, &[1.0, 2.0, 3.0], 3.0, service, config).unwrap();
//!
//! assert_eq!(session.analysis().notation(), "O(log n)");
//! let outcome = session.coordinator().play().await.unwrap();
//! assert_eq!(outcome, PlaybackOutcome::Completed);
//! # });
//! ```

pub mod config;
mod coordinator;
pub mod error;
mod session;

pub use config::{PlaybackConfig, DEFAULT_INTER_STEP_DELAY};
pub use coordinator::{PlaybackCoordinator, PlaybackOutcome, PlaybackPhase, PlaybackSnapshot};
pub use error::{PlaybackError, Result};
pub use session::{Session, SessionReport, SCALING_SIZES};
