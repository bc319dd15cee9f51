//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `random` - ShockSource implementations (seeded RNG, scripted draws)
//! - `http` - axum routes exposing the analysis engine

pub mod http;
pub mod random;

pub use random::{GaussianShocks, ScriptedShocks};
