//! Scripted shock source for deterministic simulations.
//!
//! Replays fixed sequences instead of sampling, so tests can assert exact
//! confidence outputs.
//!
//! # Example
//!
//! ```ignore
//! let mut shocks = ScriptedShocks::new()
//!     .with_shared_shifts(vec![3.0, -3.0])
//!     .with_noise(vec![0.0]);
//!
//! let outcome = simulator.simulate(&matrix, 4, &mut shocks);
//! assert_eq!(shocks.shared_draws(), 4);
//! ```

use crate::ports::ShockSource;

/// Replays scripted shocks, cycling through each sequence.
///
/// The requested standard deviation is ignored; values are returned as-is.
/// An empty sequence always yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedShocks {
    shared: Vec<f64>,
    noise: Vec<f64>,
    shared_draws: usize,
    noise_draws: usize,
}

impl ScriptedShocks {
    /// Creates a source that only yields zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared shift sequence.
    pub fn with_shared_shifts(mut self, shifts: Vec<f64>) -> Self {
        self.shared = shifts;
        self
    }

    /// Sets the individual noise sequence.
    pub fn with_noise(mut self, noise: Vec<f64>) -> Self {
        self.noise = noise;
        self
    }

    /// Number of shared shifts drawn so far.
    pub fn shared_draws(&self) -> usize {
        self.shared_draws
    }

    /// Number of noise terms drawn so far.
    pub fn noise_draws(&self) -> usize {
        self.noise_draws
    }

    fn next(sequence: &[f64], cursor: usize) -> f64 {
        if sequence.is_empty() {
            0.0
        } else {
            sequence[cursor % sequence.len()]
        }
    }
}

impl ShockSource for ScriptedShocks {
    fn shared_shift(&mut self, _std_dev: f64) -> f64 {
        let value = Self::next(&self.shared, self.shared_draws);
        self.shared_draws += 1;
        value
    }

    fn individual_noise(&mut self, _std_dev: f64) -> f64 {
        let value = Self::next(&self.noise, self.noise_draws);
        self.noise_draws += 1;
        value
    }
}
