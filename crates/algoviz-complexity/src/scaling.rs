//! Projected growth of an algorithm's operation count.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::analysis::theoretical_operations;
use crate::class::ComplexityClass;

/// Input sizes every projection covers.
pub const PROJECTION_SIZES: [u64; 3] = [10_000, 100_000, 1_000_000];

/// Theoretical operation counts for a set of sizes plus fixed projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingBehavior {
    pub input_sizes: Vec<u64>,
    pub operation_counts: Vec<u64>,
    pub complexity_class: ComplexityClass,
    pub projected_sizes: Vec<u64>,
    pub projected_counts: Vec<u64>,
    /// Growth in operations when the input doubles.
    pub scaling_factor: f64,
}

/// Project how `algorithm` scales across `sizes`.
///
/// Only the algorithm type matters here; unrecognized algorithms are treated
/// as linear.
pub fn generate_scaling_behavior(
    algorithm: impl Into<AlgorithmKind>,
    sizes: &[u64],
) -> ScalingBehavior {
    let class = algorithm
        .into()
        .known_class()
        .unwrap_or(ComplexityClass::Linear);
    let count = |n: &u64| theoretical_operations(*n, class);

    ScalingBehavior {
        input_sizes: sizes.to_vec(),
        operation_counts: sizes.iter().map(count).collect(),
        complexity_class: class,
        projected_sizes: PROJECTION_SIZES.to_vec(),
        projected_counts: PROJECTION_SIZES.iter().map(count).collect(),
        scaling_factor: class.scaling_factor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_search_scaling() {
        let scaling = generate_scaling_behavior("binary-search", &[10, 100, 1000]);

        assert_eq!(scaling.operation_counts, vec![4, 7, 10]);
        assert_eq!(scaling.scaling_factor, 2.0);
        assert_eq!(scaling.complexity_class, ComplexityClass::Logarithmic);
        assert_eq!(scaling.projected_counts, vec![14, 17, 20]);
    }

    #[test]
    fn unknown_algorithm_falls_back_to_linear() {
        let scaling = generate_scaling_behavior("mystery", &[5]);
        assert_eq!(scaling.complexity_class, ComplexityClass::Linear);
        assert_eq!(scaling.operation_counts, vec![5]);
        assert_eq!(scaling.projected_counts, PROJECTION_SIZES.to_vec());
    }

    #[test]
    fn factors_per_class() {
        let factor = |name: &str| generate_scaling_behavior(name, &[]).scaling_factor;
        assert_eq!(factor("constant-access"), 1.0);
        assert_eq!(factor("merge-sort"), 2.2);
        assert_eq!(factor("bubble-sort"), 4.0);
        assert_eq!(factor("subset-enumeration"), 2.0);
    }

    #[test]
    fn exponential_projection_saturates() {
        let scaling = generate_scaling_behavior("subset-enumeration", &[3]);
        assert_eq!(scaling.operation_counts, vec![8]);
        assert!(scaling.projected_counts.iter().all(|&c| c == u64::MAX));
    }
}
