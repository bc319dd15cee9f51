//! Analysis engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{PerturbationConfig, DEFAULT_ITERATIONS, MAX_ITERATIONS};

/// Monte Carlo simulation settings
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Simulation trials per evaluation
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Std dev of the shared per-criterion shift
    #[serde(default = "default_shared_std_dev")]
    pub shared_std_dev: f64,

    /// Std dev of the per-option noise
    #[serde(default = "default_noise_std_dev")]
    pub noise_std_dev: f64,

    /// Fixed RNG seed; every evaluation replays the same draws when set
    pub seed: Option<u64>,
}

impl AnalysisConfig {
    /// Perturbation settings for the simulator
    pub fn perturbation(&self) -> PerturbationConfig {
        PerturbationConfig {
            shared_std_dev: self.shared_std_dev,
            noise_std_dev: self.noise_std_dev,
        }
    }

    /// Iterations clamped to the engine's hard bound
    pub fn bounded_iterations(&self) -> u32 {
        self.iterations.min(MAX_ITERATIONS)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ValidationError::InvalidIterations {
                max: MAX_ITERATIONS,
                actual: self.iterations,
            });
        }
        if !is_valid_std_dev(self.shared_std_dev) {
            return Err(ValidationError::InvalidStdDev("shared_std_dev"));
        }
        if !is_valid_std_dev(self.noise_std_dev) {
            return Err(ValidationError::InvalidStdDev("noise_std_dev"));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            shared_std_dev: default_shared_std_dev(),
            noise_std_dev: default_noise_std_dev(),
            seed: None,
        }
    }
}

fn is_valid_std_dev(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_shared_std_dev() -> f64 {
    PerturbationConfig::default().shared_std_dev
}

fn default_noise_std_dev() -> f64 {
    PerturbationConfig::default().noise_std_dev
}
