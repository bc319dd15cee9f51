//! Analysis Module - Pure domain services for decision analysis.
//!
//! This module contains stateless functions that operate on domain objects
//! to weight criteria, score alternatives and explain the result.
//!
//! # Components
//!
//! - `WeightCalculator` - Rank-order-centroid weights with tie averaging
//! - `DecisionMatrix` - Ordered criteria x alternatives with coerced values
//! - `Topsis` - Ideal-point distance scoring
//! - `Simulator` - Monte Carlo robustness over dynamic criteria
//! - `Explainer` - Gap-from-ideal breakdown and differentiating criteria
//! - `DecisionReport` - Rounded, caller-facing summary
//!
//! # Design Philosophy
//!
//! Everything here is pure except the simulator, whose only side effect is
//! drawing from the `ShockSource` it is handed. No other ports or adapters
//! are involved.

mod decision_matrix;
mod errors;
mod explainer;
mod report;
mod simulator;
mod topsis;
mod weights;

// Re-export all public types
pub use decision_matrix::{
    Alternative, Criterion, CriterionSpec, DecisionMatrix, DecisionMatrixBuilder,
};
pub use errors::AnalysisError;
pub use explainer::{Explainer, Explanation, ExplanationEntry, STRENGTH_GAP_THRESHOLD};
pub use report::{
    ConfidenceSummary, CriterionSummary, DecisionReport, ExplanationSummary, GapSummary,
    OptionBreakdown, ScoreSummary, RECOMMENDED_NOTE,
};
pub use simulator::{
    Confidence, PerturbationConfig, SimulationOutcome, Simulator, DEFAULT_ITERATIONS,
    MAX_ITERATIONS,
};
pub use topsis::{RankedAlternative, Topsis, TopsisOutcome, DEGENERATE_SCORE};
pub use weights::WeightCalculator;
