use num_traits::Float;

/// `|estimate - exact|`
pub fn absolute_error<F: Float>(estimate: F, exact: F) -> F {
    (estimate - exact).abs()
}
