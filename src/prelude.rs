pub use super::compute::{absolute_error, relative_error, ErrorMetrics};
pub use super::estimator::{estimate, estimate_area, Estimate};
pub use super::experiment::{run, run_with, ExperimentConfig, LogObserver, Observer, Sweep};
pub use super::geometry::{point_in_circle, point_in_intersection, Circle, Intersection, Point};
pub use super::output::{CsvWriter, EstimateRecord};
pub use super::reference::exact_intersection_area;
pub use super::region::{Rect, Region};
pub use super::sampler::{Sampler, SeedPolicy};
pub use super::{Error, Result};
