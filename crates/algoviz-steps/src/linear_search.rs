//! Linear search with step recording.

use crate::error::Result;
use crate::input::{ensure_finite, ensure_finite_target};
use crate::search::{ComplexityInfo, SearchAlgorithm, SearchTrace};
use crate::step::{CompareOutcome, StepDetail, StepRecorder};

/// Left-to-right scan; input need not be sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl LinearSearch {
    /// Algorithm identifier.
    pub const NAME: &'static str = "linear-search";

    pub fn new() -> Self {
        Self
    }
}

impl SearchAlgorithm for LinearSearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            time_best: "O(1)",
            time_average: "O(n)",
            time_worst: "O(n)",
            space: "O(1)",
        }
    }

    fn execute(&self, data: &[f64], target: f64) -> Result<SearchTrace> {
        ensure_finite_target(target)?;
        ensure_finite(data)?;

        let mut rec = StepRecorder::new();
        rec.record(
            Vec::new(),
            StepDetail::Init {
                algorithm: Self::NAME.to_string(),
                target: Some(target),
                array_length: data.len(),
            },
            format!(
                "Initialize linear search for target {} in array of {} elements",
                target,
                data.len()
            ),
        );

        let mut comparisons = 0usize;
        for (index, &value) in data.iter().enumerate() {
            rec.record(
                vec![index],
                StepDetail::ElementHighlight { index, value },
                format!("Inspect index {} ({})", index, value),
            );

            comparisons += 1;
            let outcome = CompareOutcome::of(target, value);
            rec.record(
                vec![index],
                StepDetail::Probe {
                    index,
                    target,
                    value,
                    outcome,
                    comparison_count: comparisons,
                },
                format!("Compare: target({}) {} {}", target, outcome.symbol(), value),
            );

            if outcome == CompareOutcome::Equal {
                rec.record(
                    vec![index],
                    StepDetail::Found {
                        index,
                        target,
                        total_comparisons: comparisons,
                    },
                    format!(
                        "Found target {} at index {} after {} comparisons",
                        target, index, comparisons
                    ),
                );
                return Ok(SearchTrace {
                    found: true,
                    position: Some(index),
                    steps: rec.finish(),
                    comparisons,
                });
            }
        }

        rec.record(
            Vec::new(),
            StepDetail::NotFound {
                target,
                total_comparisons: comparisons,
            },
            format!(
                "Target {} not found after {} comparisons",
                target, comparisons
            ),
        );

        Ok(SearchTrace {
            found: false,
            position: None,
            steps: rec.finish(),
            comparisons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    #[test]
    fn finds_first_occurrence_in_unsorted_input() {
        let trace = LinearSearch.execute(&[4.0, 9.0, 2.0, 9.0], 9.0).unwrap();

        assert_eq!(trace.position, Some(1));
        assert_eq!(trace.comparisons, 2);
        assert_eq!(trace.last_kind(), Some(StepKind::Found));
    }

    #[test]
    fn absent_target_scans_everything() {
        let data = [1.0, 2.0, 3.0];
        let trace = LinearSearch.execute(&data, 7.0).unwrap();

        assert_eq!(trace.index(), -1);
        assert_eq!(trace.comparisons, data.len());
        assert_eq!(trace.last_kind(), Some(StepKind::NotFound));
    }

    #[test]
    fn empty_input_is_not_found() {
        let trace = LinearSearch.execute(&[], 1.0).unwrap();
        assert_eq!(trace.steps.len(), 2);
        assert_eq!(trace.comparisons, 0);
    }
}
