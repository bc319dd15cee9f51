//! Decision Report - Caller-facing summary of one evaluation.
//!
//! Combines the criteria weights, the simulation's confidence distribution,
//! the unperturbed TOPSIS scores and the gap explanations into one value with
//! output rounding applied.

use serde::{Deserialize, Serialize};

use super::{
    AnalysisError, DecisionMatrix, Explainer, Explanation, SimulationOutcome, TopsisOutcome,
};
use crate::domain::foundation::{
    round_to, CriterionKind, EvaluationId, Percentage, Rating, ScaleInput, Timestamp,
};

/// Note attached to the top alternative in the breakdown.
pub const RECOMMENDED_NOTE: &str = "Recommended";

/// Echo of one criterion with its derived weight.
///
/// Serialised with the request's field names (`type`), so a caller can
/// match the echo against what it sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CriterionKind,
    pub dynamic: bool,
    pub priority: i64,
    /// Weight as a percentage, 2 decimals.
    pub weight: Percentage,
    pub tied: bool,
}

/// Simulated win share of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSummary {
    pub name: String,
    pub confidence: f64,
}

/// Unperturbed TOPSIS score of one alternative, 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub name: String,
    pub score: f64,
}

/// Per-alternative verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionBreakdown {
    pub name: String,
    /// 1-based position in the simulation results.
    pub rank: usize,
    pub confidence: f64,
    pub selection_note: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// One criterion's gap for one alternative, gap rounded to 1 decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    pub criterion: String,
    #[serde(rename = "type")]
    pub kind: CriterionKind,
    pub actual: f64,
    pub ideal: f64,
    pub anti_ideal: f64,
    pub gap_pct: f64,
    pub weight: f64,
}

/// All gaps for one alternative, closest-to-ideal first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationSummary {
    pub name: String,
    pub gaps: Vec<GapSummary>,
}

/// Final result of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub evaluation_id: EvaluationId,
    pub evaluated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub criteria: Vec<CriterionSummary>,
    pub simulation_results: Vec<ConfidenceSummary>,
    pub topsis_results: Vec<ScoreSummary>,
    pub reasoning: String,
    pub option_breakdown: Vec<OptionBreakdown>,
    pub explanations: Vec<ExplanationSummary>,
}

impl DecisionReport {
    /// Builds the report from the outputs of one evaluation.
    ///
    /// `explanations` must come from `Explainer::explain` on the same
    /// unperturbed `matrix`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` when the matrix has no criteria or no
    /// alternatives.
    pub fn assemble(
        matrix: &DecisionMatrix,
        topsis: &TopsisOutcome,
        simulation: &SimulationOutcome,
        explanations: &[Explanation],
    ) -> Result<Self, AnalysisError> {
        matrix.ensure_analyzable()?;
        let winner = simulation.winner().ok_or(AnalysisError::EmptyOptions)?;

        let criteria = matrix
            .criteria
            .iter()
            .map(|c| CriterionSummary {
                name: c.name.clone(),
                kind: c.kind,
                dynamic: c.dynamic,
                priority: c.priority,
                weight: Percentage::from_fraction(c.weight).rounded(2),
                tied: c.tied,
            })
            .collect();

        let simulation_results = simulation
            .results
            .iter()
            .map(|c| ConfidenceSummary {
                name: c.name.clone(),
                confidence: c.confidence,
            })
            .collect();

        let topsis_results = topsis
            .ranking
            .iter()
            .map(|r| ScoreSummary {
                name: r.name.clone(),
                score: round_to(r.score, 4),
            })
            .collect();

        let option_breakdown = simulation
            .results
            .iter()
            .enumerate()
            .map(|(position, result)| {
                let explanation = explanations.iter().find(|e| e.index == result.index);
                let selection_note = if result.index == winner.index {
                    RECOMMENDED_NOTE.to_string()
                } else {
                    let lead = Explainer::differentiating_criterion(explanations, result.index)
                        .map(|entry| format!("Strongest on {}; ", entry.name))
                        .unwrap_or_default();
                    format!(
                        "{}{:.1}% confidence vs {:.1}% for {}",
                        lead, result.confidence, winner.confidence, winner.name
                    )
                };

                OptionBreakdown {
                    name: result.name.clone(),
                    rank: position + 1,
                    confidence: result.confidence,
                    selection_note,
                    strengths: explanation.map(Explanation::strengths).unwrap_or_default(),
                    weaknesses: explanation.map(Explanation::weaknesses).unwrap_or_default(),
                }
            })
            .collect();

        let explanations_out = explanations
            .iter()
            .map(|e| ExplanationSummary {
                name: e.name.clone(),
                gaps: e
                    .entries
                    .iter()
                    .map(|entry| GapSummary {
                        criterion: entry.name.clone(),
                        kind: entry.kind,
                        actual: entry.actual,
                        ideal: entry.ideal,
                        anti_ideal: entry.anti_ideal,
                        gap_pct: round_to(entry.gap_pct, 1),
                        weight: entry.weight,
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            evaluation_id: EvaluationId::new(),
            evaluated_at: Timestamp::now(),
            goal: None,
            criteria,
            simulation_results,
            topsis_results,
            reasoning: Self::reasoning(matrix, simulation, explanations),
            option_breakdown,
            explanations: explanations_out,
        })
    }

    /// Attaches the caller's goal statement; blank goals are dropped.
    pub fn with_goal(mut self, goal: Option<String>) -> Self {
        self.goal = goal
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());
        self
    }

    /// Replaces the generated evaluation id.
    pub fn with_evaluation_id(mut self, id: EvaluationId) -> Self {
        self.evaluation_id = id;
        self
    }

    /// Returns the breakdown entry of the top alternative.
    pub fn recommended(&self) -> Option<&OptionBreakdown> {
        self.option_breakdown.first()
    }

    /// One sentence on why the top alternative leads.
    fn reasoning(
        matrix: &DecisionMatrix,
        simulation: &SimulationOutcome,
        explanations: &[Explanation],
    ) -> String {
        let Some(winner) = simulation.winner() else {
            return String::new();
        };
        let headline = format!(
            "{} is recommended with {:.1}% confidence",
            winner.name, winner.confidence
        );

        match Explainer::differentiating_criterion(explanations, winner.index) {
            Some(entry) => {
                let alternative = &matrix.alternatives[winner.index];
                format!(
                    "{}, driven mainly by {} ({}).",
                    headline,
                    entry.name,
                    describe_value(alternative.raw_value(entry.criterion), entry.actual)
                )
            }
            None => format!("{}.", headline),
        }
    }
}

/// Raw input as entered, plus its qualitative band for plain numbers on the 1-9 scale.
fn describe_value(raw: &ScaleInput, value: f64) -> String {
    if raw.is_label() || !Rating::is_on_scale(value) {
        raw.to_string()
    } else {
        format!("{}, {}", raw, Rating::from_scale(value).label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::random::ScriptedShocks;
    use crate::domain::analysis::{CriterionSpec, Simulator, Topsis};

    fn evaluate(matrix: &DecisionMatrix) -> Result<DecisionReport, AnalysisError> {
        let topsis = Topsis::rank(matrix);
        let simulation = Simulator::default().simulate(matrix, 10, &mut ScriptedShocks::default());
        let explanations = Explainer::explain(matrix);
        DecisionReport::assemble(matrix, &topsis, &simulation, &explanations)
    }

    fn price_quality() -> DecisionMatrix {
        DecisionMatrix::builder()
            .criterion(CriterionSpec::cost("Price").priority(1))
            .criterion(CriterionSpec::benefit("Quality").priority(2))
            .alternative("A", vec![100.0, 8.0])
            .alternative("B", vec![200.0, 5.0])
            .build()
    }

    #[test]
    fn rejects_empty_inputs() {
        assert_eq!(
            evaluate(&DecisionMatrix::empty()),
            Err(AnalysisError::EmptyCriteria)
        );

        let no_options = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Quality"))
            .build();
        assert_eq!(evaluate(&no_options), Err(AnalysisError::EmptyOptions));
    }

    #[test]
    fn price_quality_scenario() {
        let report = evaluate(&price_quality()).unwrap();

        assert_eq!(report.criteria[0].weight.value(), 75.0);
        assert_eq!(report.criteria[1].weight.value(), 25.0);
        assert_eq!(report.simulation_results[0].name, "A");
        assert_eq!(report.simulation_results[0].confidence, 100.0);
        assert_eq!(report.topsis_results[0].name, "A");
        assert_eq!(report.topsis_results[0].score, 1.0);
        assert_eq!(
            report.reasoning,
            "A is recommended with 100.0% confidence, driven mainly by Price (100)."
        );
    }

    #[test]
    fn breakdown_follows_simulation_order() {
        let report = evaluate(&price_quality()).unwrap();
        let winner = report.recommended().unwrap();
        let runner_up = &report.option_breakdown[1];

        assert_eq!(winner.name, "A");
        assert_eq!(winner.rank, 1);
        assert_eq!(winner.selection_note, RECOMMENDED_NOTE);
        assert_eq!(winner.strengths, vec!["Price", "Quality"]);
        assert!(winner.weaknesses.is_empty());

        assert_eq!(runner_up.rank, 2);
        assert_eq!(runner_up.confidence, 0.0);
        assert!(runner_up.strengths.is_empty());
        assert_eq!(runner_up.weaknesses, vec!["Price", "Quality"]);
        assert!(runner_up.selection_note.contains("0.0% confidence vs 100.0% for A"));
    }

    #[test]
    fn reasoning_echoes_labels_as_entered() {
        let matrix = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Quality").priority(1))
            .criterion(CriterionSpec::cost("Price").priority(2))
            .alternative("A", vec![ScaleInput::from("High"), ScaleInput::Number(4.0)])
            .alternative("B", vec![ScaleInput::from("low"), ScaleInput::Number(6.0)])
            .build();

        let report = evaluate(&matrix).unwrap();
        assert!(report.reasoning.ends_with("driven mainly by Quality (High)."));
    }

    #[test]
    fn reasoning_adds_band_for_numbers_on_scale() {
        let matrix = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Quality").priority(1))
            .alternative("A", vec![8.0])
            .alternative("B", vec![3.0])
            .build();

        let report = evaluate(&matrix).unwrap();
        assert!(report.reasoning.ends_with("driven mainly by Quality (8, high)."));
    }

    #[test]
    fn gaps_are_rounded_for_output() {
        let matrix = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Quality"))
            .alternative("A", vec![9.0])
            .alternative("B", vec![7.0])
            .alternative("C", vec![3.0])
            .build();

        let report = evaluate(&matrix).unwrap();
        // B: |7 - 9| / 6 = 33.33..%
        let b = report.explanations.iter().find(|e| e.name == "B").unwrap();
        assert_eq!(b.gaps[0].gap_pct, 33.3);
    }

    #[test]
    fn tied_criteria_are_echoed() {
        let matrix = DecisionMatrix::builder()
            .criterion(CriterionSpec::benefit("Comfort").priority(1))
            .criterion(CriterionSpec::benefit("Range").priority(1))
            .criterion(CriterionSpec::cost("Price").priority(2))
            .alternative("A", vec![5.0, 5.0, 5.0])
            .build();

        let report = evaluate(&matrix).unwrap();
        assert!(report.criteria[0].tied && report.criteria[1].tied);
        assert_eq!(report.criteria[0].weight.value(), 44.44);
        assert_eq!(report.criteria[2].weight.value(), 11.11);
    }

    #[test]
    fn serialises_with_request_field_names() {
        let report = evaluate(&price_quality()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json["criteria"][0],
            serde_json::json!({
                "name": "Price",
                "type": "cost",
                "dynamic": false,
                "priority": 1,
                "weight": 75.0,
                "tied": false
            })
        );

        let gap = &json["explanations"][0]["gaps"][0];
        assert_eq!(gap["criterion"], "Price");
        assert_eq!(gap["type"], "cost");
        assert_eq!(gap["weight"], 0.75);
        assert!(gap.get("kind").is_none());
    }

    #[test]
    fn goal_is_trimmed_and_blank_dropped() {
        let report = evaluate(&price_quality()).unwrap();

        let with_goal = report.clone().with_goal(Some("  Pick a laptop ".to_string()));
        assert_eq!(with_goal.goal.as_deref(), Some("Pick a laptop"));

        let blank = report.with_goal(Some("   ".to_string()));
        assert!(blank.goal.is_none());
    }
}
