use super::Region;
use crate::{geometry::Point, utils::Axis, Error, Result};

/// Axis-aligned rectangle, used as the sampling domain of the estimator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xlo: f64,
    xhi: f64,
    ylo: f64,
    yhi: f64,
}
impl Rect {
    /// Create a new rectangle, rejecting empty or non-finite extents
    pub fn new(xlo: f64, xhi: f64, ylo: f64, yhi: f64) -> Result<Self> {
        check_bounds(Axis::X, xlo, xhi)?;
        check_bounds(Axis::Y, ylo, yhi)?;
        Ok(Self { xlo, xhi, ylo, yhi })
    }
    /// Square with corners (lo, lo) and (hi, hi)
    pub fn square(lo: f64, hi: f64) -> Result<Self> {
        Self::new(lo, hi, lo, hi)
    }

    // Getters
    pub fn xlo(&self) -> f64 {
        self.xlo
    }
    pub fn xhi(&self) -> f64 {
        self.xhi
    }
    pub fn ylo(&self) -> f64 {
        self.ylo
    }
    pub fn yhi(&self) -> f64 {
        self.yhi
    }
    pub fn lo(&self, axis: Axis) -> f64 {
        [self.xlo, self.ylo][axis.index()]
    }
    pub fn hi(&self, axis: Axis) -> f64 {
        [self.xhi, self.yhi][axis.index()]
    }
    pub fn lx(&self) -> f64 {
        self.xhi - self.xlo
    }
    pub fn ly(&self) -> f64 {
        self.yhi - self.ylo
    }
    pub fn area(&self) -> f64 {
        self.lx() * self.ly()
    }
}
impl Region for Rect {
    fn contains(&self, point: &Point) -> bool {
        self.xlo <= point.x && point.x <= self.xhi && self.ylo <= point.y && point.y <= self.yhi
    }
}

fn check_bounds(axis: Axis, min: f64, max: f64) -> Result<()> {
    if min.is_finite() && max.is_finite() && min < max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(Error::DegenerateRegion { axis, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_area_exact() {
        assert_eq!(Rect::square(0.0, 3.0).unwrap().area(), 9.0);
        assert_eq!(Rect::square(1.0, 2.0).unwrap().area(), 1.0);
        assert_eq!(Rect::new(-1.0, 1.0, 0.0, 0.5).unwrap().area(), 1.0);
    }

    #[test]
    fn test_rect_rejects_degenerate() {
        assert!(matches!(
            Rect::new(1.0, 1.0, 0.0, 1.0),
            Err(Error::DegenerateRegion { axis: Axis::X, .. })
        ));
        assert!(matches!(
            Rect::new(0.0, 1.0, 2.0, -2.0),
            Err(Error::DegenerateRegion { axis: Axis::Y, .. })
        ));
        assert!(Rect::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
        assert!(Rect::new(0.0, 1.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_rect_contains_closed() {
        let rect = Rect::square(1.0, 2.0).unwrap();
        assert!(rect.contains(&Point::new(1.0, 2.0)));
        assert!(rect.contains(&Point::new(1.5, 1.5)));
        assert!(!rect.contains(&Point::new(0.999, 1.5)));
        assert_eq!(rect.lo(Axis::Y), 1.0);
        assert_eq!(rect.hi(Axis::X), 2.0);
    }
}
