//! Weight Calculator - Rank-order-centroid weights from criterion priorities.

use std::collections::BTreeMap;

/// Derives criterion weights from an ordinal priority ranking.
pub struct WeightCalculator;

impl WeightCalculator {
    /// Rank-order-centroid weights for `n` fully ordered positions.
    ///
    /// Position `i` (1-based) gets `(1/i + 1/(i+1) + ... + 1/n) / n`.
    /// The sequence is strictly decreasing and sums to 1.
    pub fn base_weights(n: usize) -> Vec<f64> {
        let mut weights = vec![0.0; n];
        let mut tail = 0.0;

        for position in (1..=n).rev() {
            tail += 1.0 / position as f64;
            weights[position - 1] = tail / n as f64;
        }

        weights
    }

    /// Computes one weight per priority entry, aligned to the input order.
    ///
    /// # Algorithm
    /// Distinct priority values are taken in ascending order (lower = more
    /// important). Each claims a contiguous block of base positions, one per
    /// criterion sharing it, and every member receives the block's mean.
    ///
    /// # Edge Cases
    /// - Empty input: Returns empty Vec
    /// - Single criterion: Returns `[1.0]`
    /// - All tied: Every criterion gets `1/n`
    pub fn roc_weights(priorities: &[i64]) -> Vec<f64> {
        if priorities.is_empty() {
            return Vec::new();
        }

        let base = Self::base_weights(priorities.len());
        let group_sizes = Self::group_sizes(priorities);

        let mut group_weight = BTreeMap::new();
        let mut cursor = 0;
        for (&priority, &size) in &group_sizes {
            let block = &base[cursor..cursor + size];
            group_weight.insert(priority, block.iter().sum::<f64>() / size as f64);
            cursor += size;
        }

        priorities
            .iter()
            .map(|p| group_weight.get(p).copied().unwrap_or(0.0))
            .collect()
    }

    /// Flags each entry whose priority is shared with another entry.
    pub fn tied_flags(priorities: &[i64]) -> Vec<bool> {
        let group_sizes = Self::group_sizes(priorities);
        priorities
            .iter()
            .map(|p| group_sizes.get(p).is_some_and(|&size| size > 1))
            .collect()
    }

    fn group_sizes(priorities: &[i64]) -> BTreeMap<i64, usize> {
        let mut sizes = BTreeMap::new();
        for &priority in priorities {
            *sizes.entry(priority).or_insert(0) += 1;
        }
        sizes
    }
}
