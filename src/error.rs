use thiserror::Error;

use crate::utils::Axis;

/// Result type used throughout mcarea
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    /// Circle radius must be finite and strictly positive
    #[error("invalid circle radius {radius}, expected a finite value > 0")]
    InvalidRadius { radius: f64 },

    /// Region bounds must satisfy min < max on both axes
    #[error("degenerate region along {axis:?}: min = {min}, max = {max}")]
    DegenerateRegion { axis: Axis, min: f64, max: f64 },

    /// The estimator needs at least one sample
    #[error("sample count must be positive")]
    ZeroSamples,

    #[error("invalid sweep: start = {start}, step = {step}, end = {end}")]
    InvalidSweep { start: usize, step: usize, end: usize },

    #[error("number of repetitions must be positive")]
    ZeroRepetitions,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
