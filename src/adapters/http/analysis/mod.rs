//! Analysis HTTP adapter module.
//!
//! Provides the REST endpoint for decision evaluations.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{AnalyzeRequest, ErrorResponse};
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::analysis_routes;
