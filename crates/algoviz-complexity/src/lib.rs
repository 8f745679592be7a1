//! Algoviz Complexity Analysis
//!
//! Turns `(algorithm type, operation count, input size)` into a Big-O class,
//! an efficiency score and a scaling projection.
//!
//! - Known algorithm types are classified by table lookup.
//! - Unknown types are classified by how the operation count relates to the
//!   input size.
//! - Nothing here returns an error: degenerate input yields documented
//!   defaults so the UI always has something to show.
//!
//! # Usage
//!
//! ```
//! use algoviz_complexity::{analyze_complexity, generate_scaling_behavior};
//!
//! let analysis = analyze_complexity("linear-search", 500, 1000);
//! assert_eq!(analysis.notation(), "O(n)");
//! assert_eq!(analysis.efficiency, 100);
//!
//! let scaling = generate_scaling_behavior("binary-search", &[10, 100, 1000]);
//! assert_eq!(scaling.operation_counts, vec![4, 7, 10]);
//! ```

mod algorithm;
mod analysis;
mod class;
mod compare;
mod scaling;

pub use algorithm::AlgorithmKind;
pub use analysis::{
    analyze_complexity, classify, classify_by_ratio, efficiency, theoretical_operations,
    BigOAnalysis,
};
pub use class::{Category, ComplexityClass};
pub use compare::{compare_algorithms, AlgorithmComparison, AlgorithmEntry, RankedEntry};
pub use scaling::{generate_scaling_behavior, ScalingBehavior, PROJECTION_SIZES};
