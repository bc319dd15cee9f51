//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Simulation Ports
//!
//! - `ShockSource` - Random perturbations for the Monte Carlo simulator

mod shock_source;

pub use shock_source::ShockSource;
