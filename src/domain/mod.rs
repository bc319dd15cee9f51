//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `analysis` - Pure domain services for decision analysis (weights, TOPSIS,
//!   simulation, explanations)

pub mod analysis;
pub mod foundation;
