//! Seeded uniform point generation over a rectangle.
//!
//! Points are produced by a [`Pcg64`] generator, so the same seed, rectangle
//! and count always give a bit-identical sequence, on every platform.

use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use rand_pcg::Pcg64;

use crate::{geometry::Point, region::Rect};

/// Infinite stream of uniformly distributed points inside a [`Rect`]
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: Pcg64,
    x: Uniform<f64>,
    y: Uniform<f64>,
}
impl Sampler {
    pub fn new(rect: &Rect, seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
            x: Uniform::new(rect.xlo(), rect.xhi()),
            y: Uniform::new(rect.ylo(), rect.yhi()),
        }
    }
    /// Draws one point, x before y
    pub fn sample(&mut self) -> Point {
        let x = self.x.sample(&mut self.rng);
        let y = self.y.sample(&mut self.rng);
        Point::new(x, y)
    }
}
impl Iterator for Sampler {
    type Item = Point;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sample())
    }
}

/// The first `num_points` points of the stream seeded with `seed`
pub fn sample_points(rect: &Rect, num_points: usize, seed: u64) -> impl Iterator<Item = Point> {
    Sampler::new(rect, seed).take(num_points)
}

/// How the experiment picks the seed of each estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// The sample count doubles as the seed. Repetitions at the same N
    /// therefore share a stream.
    #[default]
    SweepIndex,
    /// Seeds mixed from a base seed, the sample count and the repetition
    Derived { base: u64 },
}
impl SeedPolicy {
    pub fn seed(&self, num_points: usize, repetition: usize) -> u64 {
        match self {
            SeedPolicy::SweepIndex => num_points as u64,
            SeedPolicy::Derived { base } => mix_seed(*base, num_points as u64, repetition as u64),
        }
    }
}

/// SplitMix64-style combination of three words into one seed
pub fn mix_seed(base: u64, index: u64, repetition: u64) -> u64 {
    let mut z = base
        .wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(repetition.wrapping_mul(0xD1B5_4A32_D192_ED03));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
