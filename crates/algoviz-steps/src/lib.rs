//! Algoviz Steps
//!
//! Pure algorithms that record every logical event of a run as an ordered,
//! immutable list of [`AlgorithmStep`]s. The step list is the single source
//! of truth for both animation and complexity analysis downstream.
//!
//! # Algorithms
//!
//! - [`BinarySearch`]: the exemplar; range, pointer, compare, eliminate steps
//! - [`LinearSearch`]: probe-per-element scan
//! - [`BubbleSort`]: compare and swap steps
//!
//! # Usage
//!
//! ```
//! use algoviz_steps::{BinarySearch, SearchAlgorithm, StepKind};
//!
//! let trace = BinarySearch.execute(&[1.0, 3.0, 5.0, 7.0], 5.0).unwrap();
//! assert!(trace.found);
//! assert_eq!(trace.index(), 2);
//! assert_eq!(trace.last_kind(), Some(StepKind::Found));
//! ```

mod binary_search;
mod bubble_sort;
pub mod error;
pub mod input;
mod linear_search;
mod search;
mod step;

pub use binary_search::BinarySearch;
pub use bubble_sort::{BubbleSort, SortTrace};
pub use error::{Error, Result};
pub use linear_search::LinearSearch;
pub use search::{ComplexityInfo, SearchAlgorithm, SearchTrace};
pub use step::{
    AlgorithmStep, CompareOutcome, EliminationReason, IndexRange, Side, StepDetail, StepKind,
    StepList,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithms_report_their_names() {
        let algorithms: [&dyn SearchAlgorithm; 2] = [&BinarySearch, &LinearSearch];
        let names: Vec<_> = algorithms.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["binary-search", "linear-search"]);
    }

    #[test]
    fn searches_agree_on_sorted_input() {
        let data: Vec<f64> = (0..32).map(|i| (i * 3) as f64).collect();
        for target in [0.0, 45.0, 93.0, 94.0, -1.0] {
            let binary = BinarySearch.execute(&data, target).unwrap();
            let linear = LinearSearch.execute(&data, target).unwrap();
            assert_eq!(binary.found, linear.found);
            assert_eq!(binary.position, linear.position);
        }
    }

    #[test]
    fn complexity_info_matches_textbook() {
        assert_eq!(BinarySearch.complexity().time_worst, "O(log n)");
        assert_eq!(LinearSearch.complexity().time_worst, "O(n)");
        assert_eq!(BubbleSort.complexity().time_worst, "O(n²)");
    }
}
