//! Simulator - Monte Carlo robustness of the TOPSIS winner.
//!
//! Each trial perturbs the dynamic criteria of an immutable base matrix and
//! re-runs TOPSIS. The perturbation has two layers:
//!
//! - a shared shift per dynamic criterion, applied to every alternative
//!   (correlated volatility: the whole market for "cost" moves together)
//! - independent noise per alternative on top of it
//!
//! Perturbed values are clamped to the 1-9 scale. Static criteria never move.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, Topsis};
use crate::domain::foundation::{Percentage, SCALE_MAX, SCALE_MIN};
use crate::ports::ShockSource;

/// Trials run when the caller does not say otherwise.
pub const DEFAULT_ITERATIONS: u32 = 1_000;

/// Hard upper bound on trials per evaluation.
pub const MAX_ITERATIONS: u32 = 10_000;

/// Standard deviations of the two perturbation layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerturbationConfig {
    /// Std dev of the shared per-criterion shift.
    pub shared_std_dev: f64,
    /// Std dev of the per-alternative noise.
    pub noise_std_dev: f64,
}

impl Default for PerturbationConfig {
    fn default() -> Self {
        Self {
            shared_std_dev: 1.2,
            noise_std_dev: 0.3,
        }
    }
}

/// How often one alternative won across the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    /// Position of the alternative in the input matrix.
    pub index: usize,
    pub name: String,
    pub wins: u32,
    /// Share of trials won, as a percentage rounded to one decimal.
    pub confidence: f64,
}

/// Win distribution over all trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub iterations: u32,
    /// Descending by wins; input order on ties.
    pub results: Vec<Confidence>,
}

impl SimulationOutcome {
    /// Returns the most frequent winner, if any.
    pub fn winner(&self) -> Option<&Confidence> {
        self.results.first()
    }

    /// Returns the confidence of the alternative at `index`.
    pub fn confidence_of(&self, index: usize) -> Option<f64> {
        self.results
            .iter()
            .find(|c| c.index == index)
            .map(|c| c.confidence)
    }

    /// Returns the 1-based rank of the alternative at `index`.
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.results.iter().position(|c| c.index == index).map(|p| p + 1)
    }

    /// Sum of all confidences (100 within rounding when iterations > 0).
    pub fn total_confidence(&self) -> f64 {
        self.results.iter().map(|c| c.confidence).sum()
    }
}

/// Monte Carlo robustness simulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    config: PerturbationConfig,
}

impl Simulator {
    /// Creates a simulator with the given perturbation settings.
    pub fn new(config: PerturbationConfig) -> Self {
        Self { config }
    }

    /// Runs `iterations` perturbed TOPSIS trials and tallies first places.
    ///
    /// # Edge Cases
    /// - iterations above `MAX_ITERATIONS`: Clamped
    /// - Zero iterations: Every confidence is 0.0
    /// - No alternatives: Empty results
    pub fn simulate<S: ShockSource + ?Sized>(
        &self,
        base: &DecisionMatrix,
        iterations: u32,
        source: &mut S,
    ) -> SimulationOutcome {
        let iterations = iterations.min(MAX_ITERATIONS);
        let mut wins = vec![0u32; base.alternative_count()];

        for _ in 0..iterations {
            let snapshot = self.perturb(base, source);
            if let Some(winner) = Topsis::rank(&snapshot).winner() {
                wins[winner.index] += 1;
            }
        }

        let mut results: Vec<Confidence> = base
            .alternatives
            .iter()
            .enumerate()
            .map(|(index, alt)| Confidence {
                index,
                name: alt.name.clone(),
                wins: wins[index],
                confidence: Self::confidence(wins[index], iterations),
            })
            .collect();
        results.sort_by(|a, b| b.wins.cmp(&a.wins));

        SimulationOutcome {
            iterations,
            results,
        }
    }

    /// Returns one perturbed snapshot of `base`; `base` is not modified.
    pub fn perturb<S: ShockSource + ?Sized>(&self, base: &DecisionMatrix, source: &mut S) -> DecisionMatrix {
        let shifts: Vec<Option<f64>> = base
            .criteria
            .iter()
            .map(|c| c.dynamic.then(|| source.shared_shift(self.config.shared_std_dev)))
            .collect();

        let rows = base
            .alternatives
            .iter()
            .map(|alt| {
                alt.values
                    .iter()
                    .zip(&shifts)
                    .map(|(&value, shift)| match shift {
                        Some(shift) => {
                            let noise = source.individual_noise(self.config.noise_std_dev);
                            (value + shift + noise).clamp(SCALE_MIN, SCALE_MAX)
                        }
                        None => value,
                    })
                    .collect()
            })
            .collect();

        base.with_values(rows)
    }

    fn confidence(wins: u32, iterations: u32) -> f64 {
        if iterations == 0 {
            return 0.0;
        }
        Percentage::from_fraction(f64::from(wins) / f64::from(iterations))
            .rounded(1)
            .value()
    }
}
