//! TOPSIS Scorer - Ideal-point distance ranking.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;

/// Score used when an alternative is equally far from both ideal points.
pub const DEGENERATE_SCORE: f64 = 0.5;

/// One alternative's position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// Position of the alternative in the input matrix.
    pub index: usize,
    pub name: String,
    /// Relative closeness to the ideal, in [0, 1].
    pub score: f64,
}

/// Full result of one TOPSIS pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisOutcome {
    /// Descending by score; input order on exact ties.
    pub ranking: Vec<RankedAlternative>,
    /// Per-criterion best weighted-normalized value.
    pub ideal_best: Vec<f64>,
    /// Per-criterion worst weighted-normalized value.
    pub ideal_worst: Vec<f64>,
    /// Weighted-normalized matrix, alternatives x criteria.
    pub weighted: Vec<Vec<f64>>,
}

impl TopsisOutcome {
    /// Returns the top-ranked alternative, if any.
    pub fn winner(&self) -> Option<&RankedAlternative> {
        self.ranking.first()
    }

    /// Returns the score of the alternative at `index`.
    pub fn score_of(&self, index: usize) -> Option<f64> {
        self.ranking.iter().find(|r| r.index == index).map(|r| r.score)
    }
}

/// TOPSIS scoring functions.
pub struct Topsis;

impl Topsis {
    /// Ranks alternatives by relative closeness to the ideal solution.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm, then scale by weight
    /// 2. Ideal best/worst per column: max/min for benefit, min/max for cost
    /// 3. score = d_worst / (d_best + d_worst)
    ///
    /// # Edge Cases
    /// - Zero column norm: Divides by 1 instead
    /// - d_best + d_worst == 0: Score is 0.5
    /// - No alternatives: Returns empty ranking
    pub fn rank(matrix: &DecisionMatrix) -> TopsisOutcome {
        let weighted = Self::weighted_normalized(matrix);
        let (ideal_best, ideal_worst) = Self::ideal_points(matrix, &weighted);

        let mut ranking: Vec<RankedAlternative> = matrix
            .alternatives
            .iter()
            .enumerate()
            .map(|(index, alt)| {
                let d_best = Self::distance(&weighted[index], &ideal_best);
                let d_worst = Self::distance(&weighted[index], &ideal_worst);
                RankedAlternative {
                    index,
                    name: alt.name.clone(),
                    score: Self::closeness(d_best, d_worst),
                }
            })
            .collect();

        // sort_by is stable, so exact ties keep input order
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        TopsisOutcome {
            ranking,
            ideal_best,
            ideal_worst,
            weighted,
        }
    }

    /// Builds the weighted-normalized matrix (alternatives x criteria).
    pub fn weighted_normalized(matrix: &DecisionMatrix) -> Vec<Vec<f64>> {
        let norms: Vec<f64> = matrix
            .criteria
            .iter()
            .map(|c| {
                let norm = matrix.column(c.index).map(|v| v * v).sum::<f64>().sqrt();
                if norm > 0.0 {
                    norm
                } else {
                    1.0
                }
            })
            .collect();

        matrix
            .alternatives
            .iter()
            .map(|alt| {
                matrix
                    .criteria
                    .iter()
                    .map(|c| alt.values[c.index] / norms[c.index] * c.weight)
                    .collect()
            })
            .collect()
    }

    fn ideal_points(matrix: &DecisionMatrix, weighted: &[Vec<f64>]) -> (Vec<f64>, Vec<f64>) {
        let mut best = Vec::with_capacity(matrix.criterion_count());
        let mut worst = Vec::with_capacity(matrix.criterion_count());

        for criterion in &matrix.criteria {
            let column = weighted.iter().map(|row| row[criterion.index]);
            let max = column.clone().fold(f64::NEG_INFINITY, f64::max);
            let min = column.fold(f64::INFINITY, f64::min);
            let (b, w) = criterion.kind.ideal_pair(max, min);
            best.push(b);
            worst.push(w);
        }

        (best, worst)
    }

    fn distance(row: &[f64], point: &[f64]) -> f64 {
        row.iter()
            .zip(point)
            .map(|(v, p)| (v - p).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    fn closeness(d_best: f64, d_worst: f64) -> f64 {
        let total = d_best + d_worst;
        if total > 0.0 {
            d_worst / total
        } else {
            DEGENERATE_SCORE
        }
    }
}
