//! AnalyzeDecisionHandler - Command handler for one decision evaluation.
//!
//! Builds the decision matrix, runs the robustness simulation, explains the
//! unperturbed ranking and assembles the report. Synchronous and CPU-bound:
//! async callers should run it on a blocking thread.

use tracing::{debug, info, instrument};

use crate::adapters::random::GaussianShocks;
use crate::config::AnalysisConfig;
use crate::domain::analysis::{
    CriterionSpec, DecisionMatrix, DecisionReport, Explainer, Simulator, Topsis,
};
use crate::domain::foundation::{DomainError, EvaluationId, ScaleInput};
use crate::ports::ShockSource;

/// One option with its raw values, aligned positionally to the criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeInput {
    pub name: String,
    pub values: Vec<ScaleInput>,
}

impl AlternativeInput {
    pub fn new(name: impl Into<String>, values: Vec<ScaleInput>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Command to evaluate a decision.
#[derive(Debug, Clone)]
pub struct AnalyzeDecisionCommand {
    pub evaluation_id: EvaluationId,
    pub goal: Option<String>,
    pub criteria: Vec<CriterionSpec>,
    pub options: Vec<AlternativeInput>,
}

impl AnalyzeDecisionCommand {
    /// Creates a command with a fresh evaluation id.
    pub fn new(criteria: Vec<CriterionSpec>, options: Vec<AlternativeInput>) -> Self {
        Self {
            evaluation_id: EvaluationId::new(),
            goal: None,
            criteria,
            options,
        }
    }

    /// Sets the goal statement.
    pub fn with_goal(mut self, goal: Option<String>) -> Self {
        self.goal = goal;
        self
    }
}

/// Handler for decision evaluations.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeDecisionHandler {
    config: AnalysisConfig,
}

impl AnalyzeDecisionHandler {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Evaluates with Gaussian shocks, seeded from config when a seed is set.
    pub fn handle(&self, cmd: AnalyzeDecisionCommand) -> Result<DecisionReport, DomainError> {
        match self.config.seed {
            Some(seed) => self.handle_with_source(cmd, &mut GaussianShocks::seeded(seed)),
            None => self.handle_with_source(cmd, &mut GaussianShocks::from_entropy()),
        }
    }

    /// Evaluates drawing perturbations from `source`.
    #[instrument(
        skip_all,
        fields(
            evaluation_id = %cmd.evaluation_id,
            criteria = cmd.criteria.len(),
            options = cmd.options.len(),
        )
    )]
    pub fn handle_with_source<S: ShockSource + ?Sized>(
        &self,
        cmd: AnalyzeDecisionCommand,
        source: &mut S,
    ) -> Result<DecisionReport, DomainError> {
        // 1. Build and validate the matrix
        let matrix = cmd
            .options
            .into_iter()
            .fold(DecisionMatrix::builder().criteria(cmd.criteria), |builder, option| {
                builder.alternative(option.name, option.values)
            })
            .build();
        matrix.ensure_analyzable()?;

        // 2. Score the unperturbed matrix
        let topsis = Topsis::rank(&matrix);

        // 3. Simulate
        let iterations = self.config.bounded_iterations();
        let simulation =
            Simulator::new(self.config.perturbation()).simulate(&matrix, iterations, source);
        debug!(iterations, "Simulation complete");

        // 4. Explain and assemble
        let explanations = Explainer::explain(&matrix);
        let report = DecisionReport::assemble(&matrix, &topsis, &simulation, &explanations)?
            .with_goal(cmd.goal)
            .with_evaluation_id(cmd.evaluation_id);

        if let Some(winner) = report.recommended() {
            info!(
                winner = %winner.name,
                confidence = winner.confidence,
                "Evaluation complete"
            );
        }

        Ok(report)
    }
}
