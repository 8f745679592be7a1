//! Algorithm identifiers and their known complexity classes.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::class::ComplexityClass;

/// An algorithm type as named by the step generators (`binary-search`, ...).
///
/// Unrecognized names parse to [`AlgorithmKind::Other`] and are classified
/// heuristically from operation counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    ConstantAccess,
    BinarySearch,
    LinearSearch,
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    SubsetEnumeration,
    #[serde(untagged)]
    Other(String),
}

impl AlgorithmKind {
    /// Identifier as used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::ConstantAccess => "constant-access",
            Self::BinarySearch => "binary-search",
            Self::LinearSearch => "linear-search",
            Self::BubbleSort => "bubble-sort",
            Self::SelectionSort => "selection-sort",
            Self::InsertionSort => "insertion-sort",
            Self::MergeSort => "merge-sort",
            Self::QuickSort => "quick-sort",
            Self::HeapSort => "heap-sort",
            Self::SubsetEnumeration => "subset-enumeration",
            Self::Other(name) => name,
        }
    }

    /// Class from the lookup table, or `None` for unrecognized algorithms.
    pub fn known_class(&self) -> Option<ComplexityClass> {
        let class = match self {
            Self::ConstantAccess => ComplexityClass::Constant,
            Self::BinarySearch => ComplexityClass::Logarithmic,
            Self::LinearSearch => ComplexityClass::Linear,
            Self::BubbleSort | Self::SelectionSort | Self::InsertionSort => {
                ComplexityClass::Quadratic
            }
            Self::MergeSort | Self::QuickSort | Self::HeapSort => ComplexityClass::Linearithmic,
            Self::SubsetEnumeration => ComplexityClass::Exponential,
            Self::Other(_) => return None,
        };
        Some(class)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for AlgorithmKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "constant-access" => Self::ConstantAccess,
            "binary-search" => Self::BinarySearch,
            "linear-search" => Self::LinearSearch,
            "bubble-sort" => Self::BubbleSort,
            "selection-sort" => Self::SelectionSort,
            "insertion-sort" => Self::InsertionSort,
            "merge-sort" => Self::MergeSort,
            "quick-sort" => Self::QuickSort,
            "heap-sort" => Self::HeapSort,
            "subset-enumeration" => Self::SubsetEnumeration,
            _ => Self::Other(s.to_string()),
        };
        Ok(kind)
    }
}

impl From<&str> for AlgorithmKind {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<&AlgorithmKind> for AlgorithmKind {
    fn from(kind: &AlgorithmKind) -> Self {
        kind.clone()
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
