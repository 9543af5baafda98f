mod circle;
mod point;

pub use circle::{Circle, Intersection};
pub use point::Point;

use crate::utils::distance_squared;

/// Closed-disk containment: points exactly on the boundary are inside.
pub fn point_in_circle(p: &Point, c: &Circle) -> bool {
    distance_squared(p, c.center()) <= c.radius_squared()
}

/// Checks that a point lies in every circle of the set.
///
/// An empty set contains every point.
pub fn point_in_intersection(p: &Point, circles: &[Circle]) -> bool {
    circles.iter().all(|c| point_in_circle(p, c))
}
