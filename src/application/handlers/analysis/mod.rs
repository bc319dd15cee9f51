//! Analysis command handlers.
//!
//! Handlers that run the decision analysis engine for a caller's request.

mod analyze_decision;

pub use analyze_decision::{AlternativeInput, AnalyzeDecisionCommand, AnalyzeDecisionHandler};
