//! Randomness adapters - ShockSource implementations.
//!
//! - `GaussianShocks` - Normal draws from a `rand` generator (seedable)
//! - `ScriptedShocks` - Replayed sequences for deterministic tests

mod gaussian_shocks;
mod scripted_shocks;

pub use gaussian_shocks::GaussianShocks;
pub use scripted_shocks::ScriptedShocks;
