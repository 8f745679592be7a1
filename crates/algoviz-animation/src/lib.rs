//! Algoviz Animation
//!
//! Converts recorded algorithm steps into timed visual primitives and plays
//! them back on Tokio timers.
//!
//! - [`build_steps`] maps one [`AlgorithmStep`](algoviz_steps::AlgorithmStep)
//!   to animation steps, with timing scaled from [`AnimationConfig`].
//! - [`AnimationService`] owns the priority queue, the active set and the
//!   subscriber registry. It is a cloneable handle, not a global.
//! - Renderers subscribe with a callback or a channel and receive every
//!   [`FiredStep`] in delay order.
//!
//! # Usage
//!
//! ```
//! use algoviz_animation::{AnimationConfig, AnimationService, SequenceOutcome};
//! use algoviz_steps::{BinarySearch, SearchAlgorithm};
//!
//! # tokio_test::block_on(async {
//! let service = AnimationService::new(AnimationConfig::reduced_motion());
//! let trace = BinarySearch.execute(&[1.0, 2.0, 3.0], 2.0).unwrap();
//! let sequence = service.create_animation_sequence(&trace.steps[0], 0);
//!
//! let outcome = service.execute_sequence(sequence).await.unwrap();
//! assert_eq!(outcome, SequenceOutcome::Skipped);
//! # });
//! ```

mod builder;
pub mod config;
pub mod error;
mod primitive;
mod service;
mod subscribers;

pub use builder::build_steps;
pub use config::{AnimationConfig, BASE_DURATION, MAX_SPEED, MIN_SPEED};
pub use error::{Error, RenderError, Result};
pub use primitive::{
    Action, AnimationSequence, AnimationStep, AnimationTarget, Indicator, Payload, Pointer,
    Priority, SequenceId, TargetKind,
};
pub use service::{AnimationService, AnimationStatus, SequenceOutcome};
pub use subscribers::{FiredStep, SubscriptionId};
