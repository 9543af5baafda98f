//! Accuracy metrics of an estimate against a reference value.

mod absolute_error;
mod relative_error;

pub use absolute_error::absolute_error;
pub use relative_error::relative_error;

use num_traits::Float;

/// Absolute and relative error of one estimate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorMetrics<F: Float> {
    pub absolute: F,
    /// `None` when the reference value is too close to zero to divide by
    pub relative: Option<F>,
}
impl<F: Float> ErrorMetrics<F> {
    pub fn new(estimate: F, exact: F) -> Self {
        Self {
            absolute: absolute_error(estimate, exact),
            relative: relative_error(estimate, exact),
        }
    }
}
