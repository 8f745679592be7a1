//! Input preconditions shared by the step-generating algorithms.

use crate::error::{Error, Result};

/// Reject a non-finite target.
pub fn ensure_finite_target(target: f64) -> Result<()> {
    if target.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteTarget(target))
    }
}

/// Reject any NaN or infinite element.
pub fn ensure_finite(data: &[f64]) -> Result<()> {
    match data.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteElement {
            index,
            value: data[index],
        }),
        None => Ok(()),
    }
}

/// Reject input that is not in non-decreasing order.
///
/// Assumes `data` is already known to be finite.
pub fn ensure_sorted(data: &[f64]) -> Result<()> {
    match data.windows(2).position(|w| w[1] < w[0]) {
        Some(i) => Err(Error::Unsorted {
            index: i + 1,
            previous: data[i],
            current: data[i + 1],
        }),
        None => Ok(()),
    }
}
