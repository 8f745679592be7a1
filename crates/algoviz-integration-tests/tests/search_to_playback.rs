//! Search, analyze, then replay the recorded steps.

use std::sync::Arc;

use algoviz_animation::{AnimationTarget, FiredStep, Indicator, Payload};
use algoviz_complexity::ComplexityClass;
use algoviz_integration_tests::{animated_service, instant_service, multiples_of_three};
use algoviz_playback::{PlaybackConfig, PlaybackOutcome, Session};
use algoviz_steps::{BinarySearch, EliminationReason, StepKind};
use parking_lot::Mutex;

#[tokio::test(start_paused = true)]
async fn found_search_replays_to_the_result() {
    let data = multiples_of_three(64);
    let service = animated_service();
    let fired = Arc::new(Mutex::new(Vec::<FiredStep>::new()));
    {
        let fired = Arc::clone(&fired);
        service.subscribe(move |step: &FiredStep| {
            fired.lock().push(step.clone());
            Ok(())
        });
    }

    let (session, trace) =
        Session::search(&BinarySearch, &data, 99.0, service, PlaybackConfig::default()).unwrap();
    assert!(trace.found);
    assert_eq!(trace.index(), 33);
    assert_eq!(session.analysis().complexity, ComplexityClass::Logarithmic);

    let outcome = session.coordinator().play().await.unwrap();
    assert_eq!(outcome, PlaybackOutcome::Completed);

    let fired = fired.lock();
    let last = fired.last().unwrap();
    assert_eq!(last.step.target, AnimationTarget::Indicator(Indicator::Result));
    assert_eq!(
        last.step.payload,
        Payload::Result {
            found: true,
            index: Some(33)
        }
    );

    let snapshot = session.coordinator().snapshot();
    assert_eq!(snapshot.current_step, trace.steps.len() - 1);
    assert_eq!(snapshot.animations_played, trace.steps.len());
}

#[tokio::test(start_paused = true)]
async fn missing_target_ends_exhausted() {
    let data = multiples_of_three(20);
    let (session, trace) = Session::search(
        &BinarySearch,
        &data,
        10.0,
        instant_service(),
        PlaybackConfig::default(),
    )
    .unwrap();

    assert_eq!(trace.index(), -1);
    let last = trace.steps.last().unwrap();
    assert_eq!(last.kind(), StepKind::Eliminate);
    assert_eq!(
        last.detail.elimination_reason(),
        Some(EliminationReason::SearchExhausted)
    );

    assert_eq!(
        session.coordinator().play().await.unwrap(),
        PlaybackOutcome::Completed
    );
}

#[test]
fn empty_input_is_a_single_step() {
    let (session, trace) = Session::search(
        &BinarySearch,
        &[],
        5.0,
        instant_service(),
        PlaybackConfig::default(),
    )
    .unwrap();

    assert_eq!(trace.steps.len(), 1);
    assert_eq!(
        trace.steps[0].detail.elimination_reason(),
        Some(EliminationReason::EmptyArray)
    );
    assert_eq!(session.coordinator().progress(), 1.0);
}

#[test]
fn report_serializes_for_the_ui() {
    let (session, _) = Session::search(
        &BinarySearch,
        &multiples_of_three(10),
        9.0,
        instant_service(),
        PlaybackConfig::default(),
    )
    .unwrap();

    let value = serde_json::to_value(session.report()).unwrap();
    assert_eq!(value["algorithm"], "binary-search");
    assert_eq!(value["analysis"]["complexity"], "logarithmic");
    assert_eq!(value["playback"]["total_steps"], session.coordinator().total_steps());
    assert_eq!(value["scaling"]["operation_counts"], serde_json::json!([4, 7, 10]));
}
