//! The fixed table of complexity classes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative rating of a complexity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Excellent,
    Good,
    Fair,
    Poor,
    Terrible,
}

/// Asymptotic growth class, ordered from slowest- to fastest-growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Exponential,
}

impl ComplexityClass {
    /// Every class, slowest-growing first.
    pub const ALL: [ComplexityClass; 6] = [
        Self::Constant,
        Self::Logarithmic,
        Self::Linear,
        Self::Linearithmic,
        Self::Quadratic,
        Self::Exponential,
    ];

    /// Big-O notation, e.g. `O(log n)`.
    pub const fn notation(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n²)",
            Self::Exponential => "O(2^n)",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Logarithmic => "Logarithmic",
            Self::Linear => "Linear",
            Self::Linearithmic => "Linearithmic",
            Self::Quadratic => "Quadratic",
            Self::Exponential => "Exponential",
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Self::Constant | Self::Logarithmic => Category::Excellent,
            Self::Linear => Category::Good,
            Self::Linearithmic => Category::Fair,
            Self::Quadratic => Category::Poor,
            Self::Exponential => Category::Terrible,
        }
    }

    /// Multiplicative growth in operations when the input size doubles.
    pub const fn scaling_factor(&self) -> f64 {
        match self {
            Self::Constant => 1.0,
            Self::Logarithmic => 2.0,
            Self::Linear => 2.0,
            Self::Linearithmic => 2.2,
            Self::Quadratic => 4.0,
            Self::Exponential => 2.0,
        }
    }

    /// Look up a class by its notation. Accepts `O(n^2)` for `O(n²)`.
    pub fn from_notation(notation: &str) -> Option<Self> {
        match notation.trim() {
            "O(n^2)" => Some(Self::Quadratic),
            other => Self::ALL.into_iter().find(|c| c.notation() == other),
        }
    }

    /// One-line summary of the class.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Constant => "Constant time: the work does not depend on the input size.",
            Self::Logarithmic => {
                "Logarithmic time: the work grows by one step each time the input doubles."
            }
            Self::Linear => "Linear time: the work grows in direct proportion to the input.",
            Self::Linearithmic => {
                "Linearithmic time: slightly worse than linear, typical of efficient sorting."
            }
            Self::Quadratic => {
                "Quadratic time: the work grows with the square of the input size."
            }
            Self::Exponential => "Exponential time: the work doubles with every extra element.",
        }
    }

    /// Everyday-language explanation of the class.
    pub fn plain_language(&self) -> &'static str {
        match self {
            Self::Constant => {
                "Like looking up a word when you already know its page number: always one step."
            }
            Self::Logarithmic => {
                "Like finding a name in a phone book by opening it in the middle and \
                 discarding half each time: even a million entries take about 20 looks."
            }
            Self::Linear => {
                "Like checking every seat in a row for your keys: twice the seats, twice the time."
            }
            Self::Linearithmic => {
                "Like sorting a deck by splitting it into piles and merging them back: \
                 a little more than one pass per level of splitting."
            }
            Self::Quadratic => {
                "Like everyone in a room shaking hands with everyone else: \
                 twice the people, four times the handshakes."
            }
            Self::Exponential => {
                "Like trying every combination on a lock: each extra digit doubles the work."
            }
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_six_members() {
        assert_eq!(ComplexityClass::ALL.len(), 6);
        assert_eq!(ComplexityClass::Logarithmic.notation(), "O(log n)");
        assert_eq!(ComplexityClass::Exponential.category(), Category::Terrible);
    }

    #[test]
    fn notation_round_trips() {
        for class in ComplexityClass::ALL {
            assert_eq!(ComplexityClass::from_notation(class.notation()), Some(class));
        }
        assert_eq!(
            ComplexityClass::from_notation("O(n^2)"),
            Some(ComplexityClass::Quadratic)
        );
        assert_eq!(ComplexityClass::from_notation("O(n!)"), None);
    }

    #[test]
    fn classes_are_ordered_by_growth() {
        assert!(ComplexityClass::Constant < ComplexityClass::Logarithmic);
        assert!(ComplexityClass::Quadratic < ComplexityClass::Exponential);
    }
}
