//! Hit-or-miss Monte Carlo area estimation.

use crate::{
    geometry::{point_in_intersection, Circle},
    region::{Rect, Region},
    sampler::sample_points,
    Error, Result,
};

/// Outcome of a single estimation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub inside: usize,
    pub samples: usize,
    pub rect_area: f64,
}
impl Estimate {
    /// Estimated area: hit fraction scaled by the sampling rectangle's area
    pub fn area(&self) -> f64 {
        self.hit_fraction() * self.rect_area
    }
    /// Fraction of samples that landed inside the target
    pub fn hit_fraction(&self) -> f64 {
        self.inside as f64 / self.samples as f64
    }
    /// Binomial standard error of the area estimate
    pub fn std_error(&self) -> f64 {
        let p = self.hit_fraction();
        self.rect_area * (p * (1.0 - p) / self.samples as f64).sqrt()
    }
}

/// Counts how many of the `num_points` seeded samples fall inside `target`.
pub fn count_inside<R: Region + ?Sized>(
    target: &R,
    rect: &Rect,
    num_points: usize,
    seed: u64,
) -> usize {
    sample_points(rect, num_points, seed)
        .filter(|p| target.contains(p))
        .count()
}

/// Samples `num_points` points in `rect` and counts hits in the target region.
///
/// The target must lie entirely inside `rect`; any part of it outside the
/// rectangle is never sampled and the estimate is biased low.
pub fn estimate<R: Region + ?Sized>(
    target: &R,
    rect: &Rect,
    num_points: usize,
    seed: u64,
) -> Result<Estimate> {
    if num_points == 0 {
        return Err(Error::ZeroSamples);
    }
    Ok(Estimate {
        inside: count_inside(target, rect, num_points, seed),
        samples: num_points,
        rect_area: rect.area(),
    })
}

/// Estimates the area of the intersection of `circles`.
///
/// The result lies in `[0, rect.area()]` and is fully determined by
/// `(circles, rect, num_points, seed)`.
pub fn estimate_area(circles: &[Circle], rect: &Rect, num_points: usize, seed: u64) -> Result<f64> {
    if num_points == 0 {
        return Err(Error::ZeroSamples);
    }
    let inside = sample_points(rect, num_points, seed)
        .filter(|p| point_in_intersection(p, circles))
        .count();
    Ok(inside as f64 / num_points as f64 * rect.area())
}
