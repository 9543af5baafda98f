use num_traits::Float;

use super::absolute_error;

/// `|estimate - exact| / |exact|`, or `None` if `exact` is below machine
/// epsilon in magnitude or not finite.
pub fn relative_error<F: Float>(estimate: F, exact: F) -> Option<F> {
    if !exact.is_finite() || exact.abs() < F::epsilon() {
        return None;
    }
    let err = absolute_error(estimate, exact) / exact.abs();
    err.is_finite().then_some(err)
}
