//! The fixed three-circle configuration and its closed-form area.
//!
//! The configuration is a unit circle centered at (1, 1) and two circles of
//! radius √5/2 centered at (1.5, 2) and (2, 1.5). The two larger circles are
//! the circles with diameters (1, 1)-(2, 3) and (1, 1)-(3, 2), so all three
//! pass through (1, 1).
//!
//! [`exact_intersection_area`] is valid for this configuration only. It is
//! not a general circle-intersection routine.

use num_traits::FloatConst;

use crate::{
    geometry::{Circle, Point},
    region::Rect,
    Result,
};

/// Center and radius of every reference circle
pub const CIRCLES: [([f64; 2], f64); 3] = [
    ([1.0, 1.0], 1.0),
    ([1.5, 2.0], SQRT_5_HALF),
    ([2.0, 1.5], SQRT_5_HALF),
];

const SQRT_5_HALF: f64 = 1.118_033_988_749_895;

/// Bounds (xlo, xhi, ylo, yhi) of the region loosely containing all circles
pub const WIDE_BOUNDS: [f64; 4] = [0.0, 3.0, 0.0, 3.0];
/// Bounds (xlo, xhi, ylo, yhi) of the unit square next to the shared point
pub const NARROW_BOUNDS: [f64; 4] = [1.0, 2.0, 1.0, 2.0];

/// The three circles of the reference configuration, in order
pub fn reference_circles() -> Result<Vec<Circle>> {
    CIRCLES
        .iter()
        .map(|&(center, radius)| Circle::new(Point::from(center), radius))
        .collect()
}

pub fn wide_region() -> Result<Rect> {
    let [xlo, xhi, ylo, yhi] = WIDE_BOUNDS;
    Rect::new(xlo, xhi, ylo, yhi)
}

/// Narrow sampling region.
///
/// Only the quarter of the unit disk inside this square is covered, so an
/// estimate over it converges to π/4 rather than to the full intersection.
pub fn narrow_region() -> Result<Rect> {
    let [xlo, xhi, ylo, yhi] = NARROW_BOUNDS;
    Rect::new(xlo, xhi, ylo, yhi)
}

/// Closed-form area of the reference intersection: π/4 + (5/4)·asin(4/5) − 1
pub fn exact_intersection_area() -> f64 {
    0.25 * f64::PI() + 1.25 * 0.8_f64.asin() - 1.0
}
