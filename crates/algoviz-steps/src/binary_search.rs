//! Binary search with step recording.
//!
//! Every iteration records three steps (range highlight, pointer highlight,
//! compare) followed by either `found` or an `eliminate` step naming exactly
//! the indices dropped from consideration.

use crate::error::Result;
use crate::input::{ensure_finite, ensure_finite_target, ensure_sorted};
use crate::search::{ComplexityInfo, SearchAlgorithm, SearchTrace};
use crate::step::{CompareOutcome, IndexRange, Side, StepDetail, StepRecorder};

/// Binary search over a non-decreasing sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl BinarySearch {
    /// Algorithm identifier.
    pub const NAME: &'static str = "binary-search";

    pub fn new() -> Self {
        Self
    }

    /// Find `target` without recording steps.
    ///
    /// Returns the same position [`execute`](SearchAlgorithm::execute) would.
    pub fn search(data: &[f64], target: f64) -> Result<Option<usize>> {
        validate(data, target)?;

        let mut left = 0i64;
        let mut right = data.len() as i64 - 1;
        while left <= right {
            let mid = (left + right) / 2;
            let value = data[mid as usize];
            match CompareOutcome::of(target, value) {
                CompareOutcome::Equal => return Ok(Some(mid as usize)),
                CompareOutcome::Greater => left = mid + 1,
                CompareOutcome::Less => right = mid - 1,
            }
        }
        Ok(None)
    }
}

fn validate(data: &[f64], target: f64) -> Result<()> {
    ensure_finite_target(target)?;
    ensure_finite(data)?;
    ensure_sorted(data)
}

impl SearchAlgorithm for BinarySearch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            time_best: "O(1)",
            time_average: "O(log n)",
            time_worst: "O(log n)",
            space: "O(1)",
        }
    }

    fn execute(&self, data: &[f64], target: f64) -> Result<SearchTrace> {
        validate(data, target)?;

        let mut rec = StepRecorder::new();

        if data.is_empty() {
            rec.record(
                Vec::new(),
                StepDetail::EmptyArray,
                "Array is empty - target cannot be found",
            );
            return Ok(SearchTrace {
                found: false,
                position: None,
                steps: rec.finish(),
                comparisons: 0,
            });
        }

        rec.record(
            Vec::new(),
            StepDetail::Init {
                algorithm: Self::NAME.to_string(),
                target: Some(target),
                array_length: data.len(),
            },
            format!(
                "Initialize binary search for target {} in sorted array of {} elements",
                target,
                data.len()
            ),
        );

        let mut comparisons = 0usize;
        // Signed so `right` can step below zero when the target precedes data[0].
        let mut left = 0i64;
        let mut right = data.len() as i64 - 1;

        while left <= right {
            let mid = (left + right) / 2;
            let (l, m, r) = (left as usize, mid as usize, right as usize);
            let range = IndexRange::new(l, r);

            rec.record(
                range.indices(),
                StepDetail::RangeHighlight {
                    left: l,
                    right: r,
                    mid: m,
                    range_size: range.size(),
                },
                format!("Search range: [{}, {}] ({} elements)", l, r, range.size()),
            );

            rec.record(
                vec![l, m, r],
                StepDetail::PointerHighlight {
                    left: l,
                    mid: m,
                    right: r,
                    left_value: data[l],
                    mid_value: data[m],
                    right_value: data[r],
                },
                format!(
                    "Pointers: left={}({}), mid={}({}), right={}({})",
                    l, data[l], m, data[m], r, data[r]
                ),
            );

            comparisons += 1;
            let outcome = CompareOutcome::of(target, data[m]);
            rec.record(
                vec![m],
                StepDetail::Compare {
                    left: l,
                    mid: m,
                    right: r,
                    target,
                    mid_value: data[m],
                    outcome,
                    comparison_count: comparisons,
                },
                format!(
                    "Compare: target({}) {} mid({})",
                    target,
                    outcome.symbol(),
                    data[m]
                ),
            );

            match outcome {
                CompareOutcome::Equal => {
                    rec.record(
                        vec![m],
                        StepDetail::Found {
                            index: m,
                            target,
                            total_comparisons: comparisons,
                        },
                        format!(
                            "Found target {} at index {} after {} comparisons",
                            target, m, comparisons
                        ),
                    );
                    return Ok(SearchTrace {
                        found: true,
                        position: Some(m),
                        steps: rec.finish(),
                        comparisons,
                    });
                }
                CompareOutcome::Greater => {
                    let eliminated = IndexRange::new(l, m);
                    let remaining = (m < r).then(|| IndexRange::new(m + 1, r));
                    rec.record(
                        eliminated.indices(),
                        StepDetail::Eliminate {
                            mid: m,
                            side: Side::Left,
                            eliminated,
                            remaining,
                            remaining_size: r - m,
                            reason: format!("{} < {}", data[m], target),
                        },
                        format!(
                            "{} < {}: eliminate left half [{}, {}], search [{}, {}]",
                            data[m],
                            target,
                            l,
                            m,
                            m + 1,
                            r
                        ),
                    );
                    left = mid + 1;
                }
                CompareOutcome::Less => {
                    let eliminated = IndexRange::new(m, r);
                    let remaining = (m > l).then(|| IndexRange::new(l, m - 1));
                    rec.record(
                        eliminated.indices(),
                        StepDetail::Eliminate {
                            mid: m,
                            side: Side::Right,
                            eliminated,
                            remaining,
                            remaining_size: m - l,
                            reason: format!("{} > {}", data[m], target),
                        },
                        format!(
                            "{} > {}: eliminate right half [{}, {}], search [{}, {}]",
                            data[m],
                            target,
                            m,
                            r,
                            l,
                            mid - 1
                        ),
                    );
                    right = mid - 1;
                }
            }
        }

        rec.record(
            Vec::new(),
            StepDetail::SearchExhausted {
                total_comparisons: comparisons,
                final_left: left,
                final_right: right,
            },
            format!(
                "Target {} not found after {} comparisons (search space exhausted)",
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
