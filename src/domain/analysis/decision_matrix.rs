//! Decision Matrix - Ordered criteria and alternatives for one evaluation.

use serde::Serialize;

use super::{AnalysisError, WeightCalculator};
use crate::domain::foundation::{CriterionKind, ScaleInput};

/// A weighted criterion in an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    /// Stable slot: position in the matrix.
    pub index: usize,
    pub name: String,
    pub kind: CriterionKind,
    /// Subject to perturbation during simulation.
    pub dynamic: bool,
    /// Lower is more important; ties allowed.
    pub priority: i64,
    /// Derived from priorities; all weights in a matrix sum to 1.
    pub weight: f64,
    /// True when another criterion shares this priority.
    pub tied: bool,
}

/// Caller-side description of a criterion, before weights are derived.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionSpec {
    pub name: String,
    pub kind: CriterionKind,
    pub dynamic: bool,
    pub priority: Option<i64>,
}

impl CriterionSpec {
    /// Creates a static criterion whose priority defaults to its position.
    pub fn new(name: impl Into<String>, kind: CriterionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            dynamic: false,
            priority: None,
        }
    }

    /// Creates a benefit criterion.
    pub fn benefit(name: impl Into<String>) -> Self {
        Self::new(name, CriterionKind::Benefit)
    }

    /// Creates a cost criterion.
    pub fn cost(name: impl Into<String>) -> Self {
        Self::new(name, CriterionKind::Cost)
    }

    /// Marks the criterion as volatile.
    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    /// Sets the volatility flag.
    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// Sets an explicit priority.
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets an optional priority.
    pub fn with_priority(mut self, priority: Option<i64>) -> Self {
        self.priority = priority;
        self
    }
}

/// An option being decided between.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub name: String,
    /// Scale values aligned to the matrix criteria.
    pub values: Vec<f64>,
    /// Caller input aligned to the matrix criteria, kept for display.
    pub raw_values: Vec<ScaleInput>,
}

impl Alternative {
    /// Creates an alternative, coercing inputs and aligning them to
    /// `criteria_count` slots. Missing slots are neutral; extras are dropped.
    pub fn from_inputs(name: impl Into<String>, inputs: Vec<ScaleInput>, criteria_count: usize) -> Self {
        let mut raw_values = inputs;
        raw_values.resize(criteria_count, ScaleInput::Missing);
        let values = raw_values.iter().map(ScaleInput::to_scale).collect();

        Self {
            name: name.into(),
            values,
            raw_values,
        }
    }

    /// Returns the raw input on a criterion.
    pub fn raw_value(&self, criterion: usize) -> &ScaleInput {
        &self.raw_values[criterion]
    }
}

/// Criteria x alternatives for a single evaluation.
///
/// Every alternative carries exactly one value and one raw input per
/// criterion, in criterion order. The builder is the only constructor that
/// enforces this; analyzers index rows by `Criterion::index` and assume it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecisionMatrix {
    pub criteria: Vec<Criterion>,
    pub alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates an empty decision matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Checks that the matrix has something to evaluate.
    pub fn ensure_analyzable(&self) -> Result<(), AnalysisError> {
        if self.criteria.is_empty() {
            return Err(AnalysisError::EmptyCriteria);
        }
        if self.alternatives.is_empty() {
            return Err(AnalysisError::EmptyOptions);
        }
        Ok(())
    }

    /// Iterates a criterion's column of scale values.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.alternatives.iter().map(move |alt| alt.values[criterion])
    }

    /// Returns a snapshot sharing names and inputs but carrying new values.
    ///
    /// Rows missing from `rows` keep their current values.
    pub fn with_values(&self, rows: Vec<Vec<f64>>) -> Self {
        let mut rows = rows.into_iter();
        let alternatives = self
            .alternatives
            .iter()
            .map(|alt| Alternative {
                name: alt.name.clone(),
                values: rows.next().unwrap_or_else(|| alt.values.clone()),
                raw_values: alt.raw_values.clone(),
            })
            .collect();

        Self {
            criteria: self.criteria.clone(),
            alternatives,
        }
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    criteria: Vec<CriterionSpec>,
    alternatives: Vec<(String, Vec<ScaleInput>)>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion.
    pub fn criterion(mut self, spec: CriterionSpec) -> Self {
        self.criteria.push(spec);
        self
    }

    /// Adds several criteria in order.
    pub fn criteria(mut self, specs: impl IntoIterator<Item = CriterionSpec>) -> Self {
        self.criteria.extend(specs);
        self
    }

    /// Adds an alternative with values aligned positionally to criteria.
    pub fn alternative<V: Into<ScaleInput>>(mut self, name: impl Into<String>, values: Vec<V>) -> Self {
        self.alternatives
            .push((name.into(), values.into_iter().map(Into::into).collect()));
        self
    }

    /// Builds the matrix: resolves default priorities (1-based position),
    /// derives weights and coerces every value.
    pub fn build(self) -> DecisionMatrix {
        let priorities: Vec<i64> = self
            .criteria
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.priority.unwrap_or(i as i64 + 1))
            .collect();
        let weights = WeightCalculator::roc_weights(&priorities);
        let tied = WeightCalculator::tied_flags(&priorities);

        let criteria: Vec<Criterion> = self
            .criteria
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Criterion {
                index,
                name: spec.name,
                kind: spec.kind,
                dynamic: spec.dynamic,
                priority: priorities[index],
                weight: weights[index],
                tied: tied[index],
            })
            .collect();

        let alternatives = self
            .alternatives
            .into_iter()
            .map(|(name, inputs)| Alternative::from_inputs(name, inputs, criteria.len()))
            .collect();

        DecisionMatrix {
            criteria,
            alternatives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_quality() -> DecisionMatrix {
        DecisionMatrix::builder()
            .criterion(CriterionSpec::cost("Price").priority(1))
            .criterion(CriterionSpec::benefit("Quality").priority(2).dynamic())
            .alternative("A", vec![100.0, 8.0])
            .alternative("B", vec![200.0, 5.0])
            .build()
    }

    #[test]
    fn empty_matrix() {
        let matrix = DecisionMatrix::empty();
        assert!(matrix.is_empty());
        assert_eq!(matrix.criterion_count(), 0);
    }

    #[test]
    fn ensure_analyzable_rejects_missing_lists() {
        assert_eq!(
            DecisionMatrix::empty().ensure_analyzable(),
            Err(AnalysisError::EmptyCriteria)
        );

        let no_options = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Quality"))
            .build();
        assert_eq!(no_options.ensure_analyzable(), Err(AnalysisError::EmptyOptions));

        assert!(price_quality().ensure_analyzable().is_ok());
    }

    #[test]
    fn build_assigns_indices_and_weights() {
        let matrix = price_quality();

        assert_eq!(matrix.criteria[0].index, 0);
        assert_eq!(matrix.criteria[1].index, 1);
        assert!(matrix.criteria[0].weight > matrix.criteria[1].weight);
        let total: f64 = matrix.criteria.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(matrix.criteria[1].dynamic);
        assert!(!matrix.criteria[0].tied);
    }

    #[test]
    fn default_priority_is_position() {
        let matrix = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("First"))
            .criterion(CriterionSpec::benefit("Second"))
            .criterion(CriterionSpec::benefit("Third"))
            .build();

        let priorities: Vec<i64> = matrix.criteria.iter().map(|c| c.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
        assert!(matrix.criteria[0].weight > matrix.criteria[2].weight);
    }

    #[test]
    fn tied_priorities_are_flagged() {
        let matrix = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Comfort").priority(1))
            .criterion(CriterionSpec::benefit("Range").priority(1))
            .criterion(CriterionSpec::cost("Price").priority(2))
            .build();

        assert!(matrix.criteria[0].tied && matrix.criteria[1].tied);
        assert!(!matrix.criteria[2].tied);
        assert_eq!(matrix.criteria[0].weight, matrix.criteria[1].weight);
    }

    #[test]
    fn values_are_coerced_and_aligned() {
        let matrix = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Quality"))
            .criterion(CriterionSpec::benefit("Support"))
            .criterion(CriterionSpec::cost("Price"))
            .alternative("Short", vec![ScaleInput::from("high")])
            .alternative(
                "Long",
                vec![
                    ScaleInput::from("very low"),
                    ScaleInput::Number(2.0),
                    ScaleInput::from("12"),
                    ScaleInput::Number(99.0),
                ],
            )
            .build();

        assert_eq!(matrix.alternatives[0].values, vec![7.0, 5.0, 5.0]);
        assert_eq!(matrix.alternatives[0].raw_value(1), &ScaleInput::Missing);
        assert_eq!(matrix.alternatives[1].values, vec![1.0, 2.0, 12.0]);
        assert_eq!(matrix.alternatives[1].raw_values.len(), 3);
    }

    #[test]
    fn column_reads_criterion_values() {
        let matrix = price_quality();
        let prices: Vec<f64> = matrix.column(0).collect();
        assert_eq!(prices, vec![100.0, 200.0]);
    }

    #[test]
    fn with_values_leaves_base_untouched() {
        let base = price_quality();
        let snapshot = base.with_values(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        assert_eq!(snapshot.alternatives[1].values, vec![3.0, 4.0]);
        assert_eq!(snapshot.alternatives[1].name, "B");
        assert_eq!(base.alternatives[1].values, vec![200.0, 5.0]);
    }
}
