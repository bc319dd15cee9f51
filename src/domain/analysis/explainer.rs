//! Explainer - Gap-from-ideal breakdown and differentiating criteria.
//!
//! Works on the raw (coerced, unperturbed) scale values rather than the
//! TOPSIS-normalized ones, so gaps read in the units the caller entered.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;
use crate::domain::foundation::{CriterionKind, Percentage};

/// Gap at or below which a criterion counts as a strength.
pub const STRENGTH_GAP_THRESHOLD: f64 = 40.0;

/// How far one alternative sits from the ideal on one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationEntry {
    /// Position of the criterion in the matrix.
    pub criterion: usize,
    pub name: String,
    pub kind: CriterionKind,
    pub weight: f64,
    pub actual: f64,
    pub ideal: f64,
    pub anti_ideal: f64,
    /// |actual - ideal| as a percentage of the criterion's range, in [0, 100].
    pub gap_pct: f64,
}

impl ExplanationEntry {
    /// Returns true if the gap is within the strength threshold.
    pub fn is_strength(&self) -> bool {
        self.gap_pct <= STRENGTH_GAP_THRESHOLD
    }
}

/// All entries for one alternative, closest-to-ideal first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Position of the alternative in the matrix.
    pub index: usize,
    pub name: String,
    pub entries: Vec<ExplanationEntry>,
}

impl Explanation {
    /// Returns the entry for a criterion.
    pub fn entry(&self, criterion: usize) -> Option<&ExplanationEntry> {
        self.entries.iter().find(|e| e.criterion == criterion)
    }

    /// Names of criteria with gap <= threshold, closest first.
    pub fn strengths(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.is_strength())
            .map(|e| e.name.clone())
            .collect()
    }

    /// Names of criteria with gap > threshold, closest first.
    pub fn weaknesses(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| !e.is_strength())
            .map(|e| e.name.clone())
            .collect()
    }
}

/// Explanation functions.
pub struct Explainer;

impl Explainer {
    /// Computes gap-from-ideal entries for every alternative.
    ///
    /// # Algorithm
    /// Per criterion: ideal = max (benefit) or min (cost) of the raw column,
    /// anti-ideal the opposite. gap = |actual - ideal| / |ideal - anti| * 100.
    ///
    /// # Edge Cases
    /// - Zero range (all alternatives equal): gap is 0
    /// - No alternatives: Returns empty Vec
    pub fn explain(matrix: &DecisionMatrix) -> Vec<Explanation> {
        let anchors: Vec<(f64, f64)> = matrix
            .criteria
            .iter()
            .map(|c| {
                let max = matrix.column(c.index).fold(f64::NEG_INFINITY, f64::max);
                let min = matrix.column(c.index).fold(f64::INFINITY, f64::min);
                c.kind.ideal_pair(max, min)
            })
            .collect();

        matrix
            .alternatives
            .iter()
            .enumerate()
            .map(|(index, alt)| {
                let mut entries: Vec<ExplanationEntry> = matrix
                    .criteria
                    .iter()
                    .map(|c| {
                        let (ideal, anti_ideal) = anchors[c.index];
                        let actual = alt.values[c.index];
                        ExplanationEntry {
                            criterion: c.index,
                            name: c.name.clone(),
                            kind: c.kind,
                            weight: c.weight,
                            actual,
                            ideal,
                            anti_ideal,
                            gap_pct: Self::gap_pct(actual, ideal, anti_ideal),
                        }
                    })
                    .collect();
                entries.sort_by(|a, b| a.gap_pct.total_cmp(&b.gap_pct));

                Explanation {
                    index,
                    name: alt.name.clone(),
                    entries,
                }
            })
            .collect()
    }

    /// Picks the criterion that best explains `target`'s standing.
    ///
    /// A criterion differentiates the target when its gap is strictly smaller
    /// than every other alternative's gap on it. The heaviest differentiating
    /// criterion wins. Without one, falls back to the target's lowest-gap
    /// criterion, then heaviest weight. Remaining ties go to criterion order.
    ///
    /// Returns None if `target` is unknown or has no criteria.
    pub fn differentiating_criterion(
        explanations: &[Explanation],
        target: usize,
    ) -> Option<&ExplanationEntry> {
        let own = explanations.iter().find(|e| e.index == target)?;

        let dominant = own.entries.iter().filter(|entry| {
            explanations
                .iter()
                .filter(|other| other.index != target)
                .all(|other| {
                    other
                        .entry(entry.criterion)
                        .map_or(true, |theirs| entry.gap_pct < theirs.gap_pct)
                })
        });

        let mut best: Option<&ExplanationEntry> = None;
        for entry in dominant {
            best = match best {
                Some(current) if !Self::outranks_by_weight(entry, current) => Some(current),
                _ => Some(entry),
            };
        }
        if best.is_some() {
            return best;
        }

        for entry in &own.entries {
            best = match best {
                Some(current) if !Self::outranks_by_gap(entry, current) => Some(current),
                _ => Some(entry),
            };
        }
        best
    }

    fn gap_pct(actual: f64, ideal: f64, anti_ideal: f64) -> f64 {
        let range = (ideal - anti_ideal).abs();
        if range > 0.0 {
            Percentage::from_fraction((actual - ideal).abs() / range).value()
        } else {
            0.0
        }
    }

    fn outranks_by_weight(candidate: &ExplanationEntry, current: &ExplanationEntry) -> bool {
        candidate.weight > current.weight
            || (candidate.weight == current.weight && candidate.criterion < current.criterion)
    }

    fn outranks_by_gap(candidate: &ExplanationEntry, current: &ExplanationEntry) -> bool {
        if candidate.gap_pct != current.gap_pct {
            return candidate.gap_pct < current.gap_pct;
        }
        Self::outranks_by_weight(candidate, current)
    }
}
