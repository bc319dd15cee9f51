//! Gaussian shock source backed by `rand`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::ports::ShockSource;

/// Draws shocks from `N(0, std_dev)` using any `rand` generator.
#[derive(Debug, Clone)]
pub struct GaussianShocks<R> {
    rng: R,
}

impl GaussianShocks<StdRng> {
    /// Creates a reproducible source from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> GaussianShocks<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn draw(&mut self, std_dev: f64) -> f64 {
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return 0.0;
        }
        match Normal::new(0.0, std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => 0.0,
        }
    }
}

impl<R: Rng> ShockSource for GaussianShocks<R> {
    fn shared_shift(&mut self, std_dev: f64) -> f64 {
        self.draw(std_dev)
    }

    fn individual_noise(&mut self, std_dev: f64) -> f64 {
        self.draw(std_dev)
    }
}
