//! Monte Carlo estimation of the area of a circle intersection, and the
//! sweep that measures its accuracy against a closed-form reference.

pub mod compute;
pub mod error;
pub mod estimator;
pub mod experiment;
pub mod geometry;
pub mod output;
pub mod prelude;
pub mod reference;
pub mod region;
pub mod sampler;
pub mod utils;

pub use error::{Error, Result};
pub use estimator::{estimate, estimate_area, Estimate};
pub use experiment::{ExperimentConfig, Sweep};
pub use geometry::{point_in_circle, point_in_intersection, Circle, Intersection, Point};
pub use output::{CsvWriter, EstimateRecord};
pub use region::{Rect, Region};
pub use sampler::{Sampler, SeedPolicy};
