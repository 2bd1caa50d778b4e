//! Sources of Gaussian noise for simulated measurements. Sensors draw their noise through the
//! `GaussianNoise` trait so that tests can swap in a seeded or fully deterministic source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

pub trait GaussianNoise {
    /// Draw a single sample from a normal distribution with the given mean and standard deviation
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// A noise source which always returns the mean, for noise-free simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl GaussianNoise for NoNoise {
    fn sample(&mut self, mean: f64, _std_dev: f64) -> f64 {
        mean
    }
}

/// A noise source backed by a `rand` random number generator. Every call to `sample` consumes
/// exactly one standard normal draw from the generator, including when the standard deviation
/// is zero, so the sequence of draws only depends on the number of calls.
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<StdRng> {
    /// Create a reproducible noise source from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngNoise<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> GaussianNoise for RngNoise<R> {
    fn sample(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        mean + std_dev * z
    }
}
