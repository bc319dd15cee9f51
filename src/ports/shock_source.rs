//! ShockSource port - Randomness for robustness simulation.
//!
//! The simulator never reaches for a global generator. Each evaluation owns
//! a source, so tests can inject scripted or seeded draws and concurrent
//! evaluations share no state.
//!
//! ## Draws per iteration
//!
//! - one `shared_shift` per dynamic criterion (applied to every alternative)
//! - one `individual_noise` per (alternative, dynamic criterion)

/// Source of zero-mean perturbations.
pub trait ShockSource {
    /// Draws the market-wide shift for one dynamic criterion.
    fn shared_shift(&mut self, std_dev: f64) -> f64;

    /// Draws the idiosyncratic noise for one alternative on one criterion.
    fn individual_noise(&mut self, std_dev: f64) -> f64;
}

impl<S: ShockSource + ?Sized> ShockSource for &mut S {
    fn shared_shift(&mut self, std_dev: f64) -> f64 {
        (**self).shared_shift(std_dev)
    }

    fn individual_noise(&mut self, std_dev: f64) -> f64 {
        (**self).individual_noise(std_dev)
    }
}

impl<S: ShockSource + ?Sized> ShockSource for Box<S> {
    fn shared_shift(&mut self, std_dev: f64) -> f64 {
        (**self).shared_shift(std_dev)
    }

    fn individual_noise(&mut self, std_dev: f64) -> f64 {
        (**self).individual_noise(std_dev)
    }
}
