//! Criterion direction: whether more or less is better.

use serde::{Deserialize, Serialize};

/// Direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Higher raw value is better (e.g. quality).
    Benefit,
    /// Lower raw value is better (e.g. price).
    Cost,
}

impl CriterionKind {
    /// Picks the (best, worst) pair out of a column's (max, min).
    pub fn ideal_pair(&self, max: f64, min: f64) -> (f64, f64) {
        match self {
            CriterionKind::Benefit => (max, min),
            CriterionKind::Cost => (min, max),
        }
    }
}
