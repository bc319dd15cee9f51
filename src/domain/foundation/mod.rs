//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the decision analysis domain.

mod criterion_kind;
mod errors;
mod ids;
mod percentage;
mod rating;
mod scale;
mod timestamp;

pub use criterion_kind::CriterionKind;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::EvaluationId;
pub use percentage::{round_to, Percentage};
pub use rating::{Rating, SCALE_MAX, SCALE_MIN, SCALE_NEUTRAL};
pub use scale::{format_number, ScaleInput};
pub use timestamp::Timestamp;
