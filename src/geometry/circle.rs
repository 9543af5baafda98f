use std::f64::consts::PI;

use super::{point_in_circle, point_in_intersection, Point};
use crate::{region::Region, Error, Result};

/// A closed disk, given by its center and a positive radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}
impl Circle {
    /// Create a new circle, rejecting radii that are not finite and positive
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius { radius });
        }
        Ok(Self { center, radius })
    }

    // Getters
    pub fn center(&self) -> &Point {
        &self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }
    pub fn area(&self) -> f64 {
        PI * self.radius_squared()
    }
}
impl Region for Circle {
    fn contains(&self, point: &Point) -> bool {
        point_in_circle(point, self)
    }
}

/// Ordered set of circles whose common area is the estimation target
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intersection {
    circles: Vec<Circle>,
}
impl Intersection {
    pub fn new(circles: Vec<Circle>) -> Self {
        Self { circles }
    }
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
    pub fn len(&self) -> usize {
        self.circles.len()
    }
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
impl Region for Intersection {
    fn contains(&self, point: &Point) -> bool {
        point_in_intersection(point, &self.circles)
    }
}
impl From<Vec<Circle>> for Intersection {
    fn from(value: Vec<Circle>) -> Self {
        Self::new(value)
    }
}
