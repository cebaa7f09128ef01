use crate::graph::builder::Relations;
use crate::graph::matrix::RelationMatrix;
use serde::Serialize;

/// Number of relation categories the distribution is taken over.
pub const CATEGORY_COUNT: usize = 5;

/// Maximum attainable entropy over five categories: log₂(5).
pub fn max_entropy_bits() -> f64 {
    (CATEGORY_COUNT as f64).log2()
}

/// Per-relation true-cell counts and the entropy of their distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyReport {
    pub counts: [usize; CATEGORY_COUNT],
    pub total: usize,
    pub probabilities: [f64; CATEGORY_COUNT],
    pub entropy_bits: f64,
    pub normalized_entropy: f64,
}

impl EntropyReport {
    pub fn from_relations(relations: &Relations) -> Self {
        let [(_, r1), (_, r2), (_, r3), (_, r4), (_, r5)] = relations.matrices();
        analyze_entropy([r1, r2, r3, r4, r5])
    }
}

/// Count true cells in each of r1..r5 and compute the raw and normalized
/// Shannon entropy of the resulting distribution.
pub fn analyze_entropy(matrices: [&RelationMatrix; CATEGORY_COUNT]) -> EntropyReport {
    let counts = matrices.map(RelationMatrix::count_true);
    let total: usize = counts.iter().sum();
    let probabilities = probabilities(&counts);
    let entropy_bits = shannon_entropy(&counts);
    let normalized_entropy = entropy_bits / max_entropy_bits();

    tracing::debug!(
        ?counts,
        total,
        entropy_bits,
        normalized_entropy,
        "Computed relation entropy"
    );

    EntropyReport {
        counts,
        total,
        probabilities,
        entropy_bits,
        normalized_entropy,
    }
}

/// p_i = c_i / Σc, or all zeros when Σc = 0.
pub fn probabilities<const N: usize>(counts: &[usize; N]) -> [f64; N] {
    let total = counts.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return [0.0; N];
    }
    counts.map(|c| c as f64 / total)
}

/// Compute Shannon entropy of a weight distribution.
///
/// H = -Σ p_i log₂(p_i) where p_i = w_i / Σw
pub fn shannon_entropy(weights: &[usize]) -> f64 {
    let total: f64 = weights.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }
    weights
        .iter()
        .filter(|&&w| w > 0)
        .map(|&w| {
            let p = w as f64 / total;
            -p * p.log2()
        })
        .sum()
}
