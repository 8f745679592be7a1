//! Classification and efficiency scoring.
//!
//! Nothing here fails: unknown algorithms fall back to the ratio heuristic,
//! and degenerate sizes or counts map to fixed defaults.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::class::ComplexityClass;

/// Result of analyzing one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigOAnalysis {
    pub complexity: ComplexityClass,
    pub operation_count: u64,
    pub input_size: u64,
    /// Theoretical operations as a percentage of actual, clamped to 0..=100.
    pub efficiency: u8,
    pub description: String,
    pub plain_language_explanation: String,
}

impl BigOAnalysis {
    pub fn notation(&self) -> &'static str {
        self.complexity.notation()
    }
}

/// Analyze a run of `algorithm` that took `operation_count` operations on
/// `input_size` elements.
pub fn analyze_complexity(
    algorithm: impl Into<AlgorithmKind>,
    operation_count: u64,
    input_size: u64,
) -> BigOAnalysis {
    let algorithm = algorithm.into();
    let complexity = classify(&algorithm, operation_count, input_size);
    let efficiency = efficiency(complexity, operation_count, input_size);

    BigOAnalysis {
        complexity,
        operation_count,
        input_size,
        efficiency,
        description: format!(
            "{} ran in {} ({}): {} operations on {} elements, {}% efficient.",
            algorithm,
            complexity.notation(),
            complexity.name(),
            operation_count,
            input_size,
            efficiency
        ),
        plain_language_explanation: complexity.plain_language().to_string(),
    }
}

/// Class for `algorithm`: table lookup when known, ratio heuristic otherwise.
pub fn classify(
    algorithm: &AlgorithmKind,
    operation_count: u64,
    input_size: u64,
) -> ComplexityClass {
    algorithm
        .known_class()
        .unwrap_or_else(|| classify_by_ratio(operation_count, input_size))
}

/// Guess a class from how `operation_count` relates to `input_size`.
///
/// Checked in order; the first matching bound wins.
pub fn classify_by_ratio(operation_count: u64, input_size: u64) -> ComplexityClass {
    if input_size == 0 || operation_count <= 1 {
        return ComplexityClass::Constant;
    }

    let ops = operation_count as f64;
    let n = input_size as f64;
    let log_n = n.log2();

    // log2(1) == 0 makes the first ratio infinite, which correctly skips it.
    if ops / log_n <= 2.0 {
        ComplexityClass::Logarithmic
    } else if ops / n <= 2.0 {
        ComplexityClass::Linear
    } else if ops <= n * log_n * 2.0 {
        ComplexityClass::Linearithmic
    } else if ops <= n * n {
        ComplexityClass::Quadratic
    } else {
        ComplexityClass::Exponential
    }
}

/// Operations a textbook implementation of `class` performs on `input_size`
/// elements. Saturates at `u64::MAX`.
pub fn theoretical_operations(input_size: u64, class: ComplexityClass) -> u64 {
    let n = input_size;
    match class {
        ComplexityClass::Constant => 1,
        ComplexityClass::Logarithmic => ceil_log2(n),
        ComplexityClass::Linear => n,
        ComplexityClass::Linearithmic => n.saturating_mul(ceil_log2(n)),
        ComplexityClass::Quadratic => n.saturating_mul(n),
        ComplexityClass::Exponential => u32::try_from(n)
            .ok()
            .and_then(|shift| 1u64.checked_shl(shift))
            .unwrap_or(u64::MAX),
    }
}

/// `ceil(log2(n))`, with `n <= 1` giving 0.
fn ceil_log2(n: u64) -> u64 {
    if n <= 1 {
        0
    } else {
        u64::from(64 - (n - 1).leading_zeros())
    }
}

/// Efficiency score in `0..=100`.
///
/// An empty input or a run with no operations scores 100.
pub fn efficiency(class: ComplexityClass, operation_count: u64, input_size: u64) -> u8 {
    if input_size == 0 || operation_count == 0 {
        return 100;
    }
    let theoretical = theoretical_operations(input_size, class) as f64;
    let ratio = theoretical / operation_count as f64 * 100.0;
    ratio.round().clamp(0.0, 100.0) as u8
}
