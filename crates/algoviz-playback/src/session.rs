//! A run of one algorithm bundled with its analysis and playback.

use algoviz_animation::AnimationService;
use algoviz_complexity::{
    analyze_complexity, generate_scaling_behavior, AlgorithmKind, BigOAnalysis, ScalingBehavior,
};
use algoviz_steps::{BubbleSort, SearchAlgorithm, SearchTrace, SortTrace, StepList};
use serde::Serialize;
use tracing::info;

use crate::config::PlaybackConfig;
use crate::coordinator::{PlaybackCoordinator, PlaybackSnapshot};
use crate::error::Result;

/// Input sizes the scaling chart is drawn for.
pub const SCALING_SIZES: [u64; 3] = [10, 100, 1_000];

/// Playback plus analysis for a single algorithm run.
#[derive(Clone)]
pub struct Session {
    algorithm: AlgorithmKind,
    coordinator: PlaybackCoordinator,
    analysis: BigOAnalysis,
    scaling: ScalingBehavior,
}

impl Session {
    pub fn new(
        steps: StepList,
        operation_count: u64,
        input_size: u64,
        algorithm: impl Into<AlgorithmKind>,
        service: AnimationService,
        config: PlaybackConfig,
    ) -> Self {
        let algorithm = algorithm.into();
        let analysis = analyze_complexity(algorithm.clone(), operation_count, input_size);
        let scaling = generate_scaling_behavior(algorithm.clone(), &SCALING_SIZES);
        info!(
            %algorithm,
            steps = steps.len(),
            operation_count,
            input_size,
            complexity = analysis.notation(),
            efficiency = analysis.efficiency,
            "session created"
        );

        Self {
            algorithm,
            coordinator: PlaybackCoordinator::new(service, steps, config),
            analysis,
            scaling,
        }
    }

    /// Run a search and wrap its trace. Comparisons count as operations.
    pub fn search(
        algorithm: &dyn SearchAlgorithm,
        data: &[f64],
        target: f64,
        service: AnimationService,
        config: PlaybackConfig,
    ) -> Result<(Self, SearchTrace)> {
        let trace = algorithm.execute(data, target)?;
        let session = Self::new(
            trace.steps.clone(),
            trace.comparisons as u64,
            data.len() as u64,
            algorithm.name(),
            service,
            config,
        );
        Ok((session, trace))
    }

    /// Bubble-sort `data` and wrap the trace. Comparisons count as operations.
    pub fn sort(
        data: &[f64],
        service: AnimationService,
        config: PlaybackConfig,
    ) -> Result<(Self, SortTrace)> {
        let trace = BubbleSort.execute(data)?;
        let session = Self::new(
            trace.steps.clone(),
            trace.comparisons as u64,
            data.len() as u64,
            BubbleSort::NAME,
            service,
            config,
        );
        Ok((session, trace))
    }

    pub fn algorithm(&self) -> &AlgorithmKind {
        &self.algorithm
    }

    pub fn coordinator(&self) -> &PlaybackCoordinator {
        &self.coordinator
    }

    pub fn analysis(&self) -> &BigOAnalysis {
        &self.analysis
    }

    pub fn scaling(&self) -> &ScalingBehavior {
        &self.scaling
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            algorithm: self.algorithm.clone(),
            analysis: self.analysis.clone(),
            scaling: self.scaling.clone(),
            playback: self.coordinator.snapshot(),
        }
    }
}

/// Everything a UI needs to render a session's side panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub algorithm: AlgorithmKind,
    pub analysis: BigOAnalysis,
    pub scaling: ScalingBehavior,
    pub playback: PlaybackSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;
    use crate::PlaybackOutcome;
    use algoviz_animation::AnimationConfig;
    use algoviz_complexity::ComplexityClass;
    use algoviz_steps::{BinarySearch, LinearSearch};

    fn service() -> AnimationService {
        AnimationService::new(AnimationConfig::reduced_motion())
    }

    #[test]
    fn binary_search_session_is_logarithmic() {
        let data: Vec<f64> = (0..100).map(f64::from).collect();
        let (session, trace) =
            Session::search(&BinarySearch, &data, 73.0, service(), PlaybackConfig::default())
                .unwrap();

        assert!(trace.found);
        assert_eq!(session.algorithm(), &AlgorithmKind::BinarySearch);
        assert_eq!(session.analysis().complexity, ComplexityClass::Logarithmic);
        assert_eq!(session.analysis().operation_count, trace.comparisons as u64);
        assert_eq!(session.scaling().operation_counts, vec![4, 7, 10]);
        assert_eq!(session.coordinator().total_steps(), trace.steps.len());
    }

    #[test]
    fn linear_search_session_is_linear() {
        let (session, _) = Session::search(
            &LinearSearch,
            &[4.0, 1.0, 9.0],
            9.0,
            service(),
            PlaybackConfig::default(),
        )
        .unwrap();
        assert_eq!(session.analysis().notation(), "O(n)");
    }

    #[test]
    fn invalid_input_is_reported_before_any_step() {
        let err = Session::search(
            &BinarySearch,
            &[3.0, 1.0],
            1.0,
            service(),
            PlaybackConfig::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, PlaybackError::Input(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn sort_session_plays_through() {
        let (session, trace) =
            Session::sort(&[3.0, 1.0, 2.0], service(), PlaybackConfig::default()).unwrap();
        assert_eq!(trace.sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(session.analysis().complexity, ComplexityClass::Quadratic);

        let outcome = session.coordinator().play().await.unwrap();
        assert_eq!(outcome, PlaybackOutcome::Completed);

        let report = session.report();
        assert_eq!(report.playback.progress, 1.0);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"algorithm\":\"bubble-sort\""));
    }
}
