//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{AlternativeInput, AnalyzeDecisionCommand, AnalyzeDecisionHandler};
