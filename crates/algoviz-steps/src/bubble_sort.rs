//! Bubble sort with step recording.
//!
//! Produces `compare` and `swap` steps; each pass ends with a `highlight`
//! of the element that settled into place.

use serde::Serialize;

use crate::error::Result;
use crate::input::ensure_finite;
use crate::search::ComplexityInfo;
use crate::step::{IndexRange, StepDetail, StepList, StepRecorder};

/// Outcome of one sort run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortTrace {
    pub sorted: Vec<f64>,
    pub steps: StepList,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Bubble sort with early exit on a swap-free pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl BubbleSort {
    /// Algorithm identifier.
    pub const NAME: &'static str = "bubble-sort";

    pub fn new() -> Self {
        Self
    }

    pub fn complexity(&self) -> ComplexityInfo {
        ComplexityInfo {
            time_best: "O(n)",
            time_average: "O(n²)",
            time_worst: "O(n²)",
            space: "O(1)",
        }
    }

    /// Sort a copy of `data`, recording every comparison and swap.
    pub fn execute(&self, data: &[f64]) -> Result<SortTrace> {
        ensure_finite(data)?;

        let mut values = data.to_vec();
        let mut rec = StepRecorder::new();
        rec.record(
            Vec::new(),
            StepDetail::Init {
                algorithm: Self::NAME.to_string(),
                target: None,
                array_length: values.len(),
            },
            format!("Initialize bubble sort of {} elements", values.len()),
        );

        let n = values.len();
        let mut comparisons = 0usize;
        let mut swaps = 0usize;

        for pass in 0..n.saturating_sub(1) {
            let end = n - 1 - pass;
            let mut swapped = false;

            for i in 0..end {
                comparisons += 1;
                let out_of_order = values[i] > values[i + 1];
                rec.record(
                    vec![i, i + 1],
                    StepDetail::PairCompare {
                        first: i,
                        second: i + 1,
                        first_value: values[i],
                        second_value: values[i + 1],
                        out_of_order,
                        comparison_count: comparisons,
                    },
                    format!(
                        "Compare {} and {}{}",
                        values[i],
                        values[i + 1],
                        if out_of_order { ": out of order" } else { "" }
                    ),
                );

                if out_of_order {
                    values.swap(i, i + 1);
                    swaps += 1;
                    swapped = true;
                    rec.record(
                        vec![i, i + 1],
                        StepDetail::Swap {
                            first: i,
                            second: i + 1,
                            first_value: values[i],
                            second_value: values[i + 1],
                            swap_count: swaps,
                        },
                        format!("Swap positions {} and {}", i, i + 1),
                    );
                }
            }

            if !swapped {
                let range = IndexRange::new(0, end);
                rec.record(
                    range.indices(),
                    StepDetail::Settled { range },
                    format!("No swaps in pass {}: positions 0..={} are sorted", pass + 1, end),
                );
                break;
            }

            rec.record(
                vec![end],
                StepDetail::Settled {
                    range: IndexRange::new(end, end),
                },
                format!("Position {} holds its final value {}", end, values[end]),
            );
        }

        Ok(SortTrace {
            sorted: values,
            steps: rec.finish(),
            comparisons,
            swaps,
        })
    }
}
