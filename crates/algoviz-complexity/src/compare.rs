//! Side-by-side comparison of several algorithm runs.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::analysis::{analyze_complexity, BigOAnalysis};

/// One contestant in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmEntry {
    pub name: String,
    pub algorithm: AlgorithmKind,
    pub operation_count: u64,
}

impl AlgorithmEntry {
    pub fn new(
        name: impl Into<String>,
        algorithm: impl Into<AlgorithmKind>,
        operation_count: u64,
    ) -> Self {
        Self {
            name: name.into(),
            algorithm: algorithm.into(),
            operation_count,
        }
    }
}

/// An entry together with its analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub analysis: BigOAnalysis,
}

/// Outcome of [`compare_algorithms`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmComparison {
    /// Entries ranked by efficiency, best first; ties keep input order.
    pub ranking: Vec<RankedEntry>,
    /// Name of the most efficient entry, if there were any entries.
    pub winner: Option<String>,
    /// `worst_ops / best_ops`, when the two differ.
    pub speed_ratio: Option<f64>,
    pub explanation: String,
}

/// Analyze every entry against `input_size` and pick the most efficient.
pub fn compare_algorithms(entries: &[AlgorithmEntry], input_size: u64) -> AlgorithmComparison {
    let mut ranking: Vec<RankedEntry> = entries
        .iter()
        .map(|entry| RankedEntry {
            name: entry.name.clone(),
            analysis: analyze_complexity(&entry.algorithm, entry.operation_count, input_size),
        })
        .collect();
    // Stable: equal efficiency keeps the first-listed entry ahead.
    ranking.sort_by(|a, b| b.analysis.efficiency.cmp(&a.analysis.efficiency));

    let (best, worst) = match (ranking.first(), ranking.last()) {
        (Some(best), Some(worst)) => (best, worst),
        _ => {
            return AlgorithmComparison {
                ranking,
                winner: None,
                speed_ratio: None,
                explanation: "No algorithms to compare.".to_string(),
            }
        }
    };

    let best_ops = best.analysis.operation_count;
    let worst_ops = worst.analysis.operation_count;
    let winner = Some(best.name.clone());

    if best_ops == worst_ops {
        let explanation = format!(
            "All algorithms are equal: each performed {} operations on {} elements.",
            best_ops, input_size
        );
        return AlgorithmComparison {
            ranking,
            winner,
            speed_ratio: None,
            explanation,
        };
    }

    // Efficiency clamps at 100, so the top-ranked entry may have done more work.
    let ratio = worst_ops as f64 / best_ops.max(1) as f64;
    let explanation = format!(
        "{} ({}, {} operations) ranks ahead of {} ({}, {} operations), which did {:.1}x its work.",
        best.name,
        best.analysis.notation(),
        best_ops,
        worst.name,
        worst.analysis.notation(),
        worst_ops,
        ratio
    );

    AlgorithmComparison {
        ranking,
        winner,
        speed_ratio: Some(ratio),
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_beats_linear() {
        let entries = [
            AlgorithmEntry::new("A", "binary-search", 10),
            AlgorithmEntry::new("B", "linear-search", 1000),
        ];
        let result = compare_algorithms(&entries, 1000);

        assert_eq!(result.winner.as_deref(), Some("A"));
        assert!(result.explanation.contains("100.0x"));
        assert!(result.explanation.contains("O(log n)"));
        assert!(result.explanation.contains("O(n)"));
        assert_eq!(result.speed_ratio, Some(100.0));
    }

    #[test]
    fn higher_efficiency_wins_regardless_of_order() {
        let entries = [
            AlgorithmEntry::new("slow", "linear-search", 4000),
            AlgorithmEntry::new("fast", "linear-search", 1000),
        ];
        let result = compare_algorithms(&entries, 1000);

        assert_eq!(result.winner.as_deref(), Some("fast"));
        assert_eq!(result.ranking[1].name, "slow");
        assert!(result.explanation.contains("4.0x"));
    }

    #[test]
    fn clamped_tie_reports_ratio_below_one() {
        let entries = [
            AlgorithmEntry::new("first", "linear-search", 500),
            AlgorithmEntry::new("second", "linear-search", 400),
        ];
        let result = compare_algorithms(&entries, 1000);

        assert_eq!(result.ranking[0].analysis.efficiency, 100);
        assert_eq!(result.ranking[1].analysis.efficiency, 100);
        assert_eq!(result.winner.as_deref(), Some("first"));
        assert_eq!(result.speed_ratio, Some(0.8));
        assert!(result.explanation.contains("0.8x its work"));
        assert!(!result.explanation.contains("slower"));
    }

    #[test]
    fn equal_counts_say_all_equal() {
        let entries = [
            AlgorithmEntry::new("x", "merge-sort", 500),
            AlgorithmEntry::new("y", "quick-sort", 500),
        ];
        let result = compare_algorithms(&entries, 100);

        assert_eq!(result.winner.as_deref(), Some("x"));
        assert!(result.explanation.contains("All algorithms are equal"));
        assert_eq!(result.speed_ratio, None);
    }

    #[test]
    fn empty_comparison_has_no_winner() {
        let result = compare_algorithms(&[], 10);
        assert_eq!(result.winner, None);
        assert!(result.ranking.is_empty());
    }
}
