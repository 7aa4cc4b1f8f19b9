// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Categorical estimator module: groups the co-occurrence pipeline stages and
// exposes them to the parent approaches module.

pub mod cooccurrence;
pub mod distribution;
pub mod vocabulary;

use ndarray::{Array1, Array2};

use crate::errors::{CoinfoError, Result, VariableRole};
use crate::estimators::approaches::categorical::cooccurrence::CooccurrenceCounts;
use crate::estimators::approaches::categorical::distribution::{JointDistribution, entropy_bits};
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Categorical Mutual Information estimator over an empirical joint
/// distribution.
///
/// Built from co-occurrence counts, it derives the PMI matrix once and serves
/// the scalar measures from it: `I(X; Y)` as the joint-weighted sum of PMI
/// values, and the entropies `H(X)`, `H(Y)`, `H(X, Y)` by guarded accumulation
/// over the distribution. All values are in bits.
///
/// Cells with zero joint probability hold an explicit 0 in the PMI matrix and
/// are excluded from every accumulated quantity; no `NaN` or infinity can
/// reach a result.
#[derive(Debug)]
pub struct CategoricalMutualInformation {
    distribution: JointDistribution,
    pmi: Array2<f64>,
    observations: Vec<(usize, usize)>,
}

impl CategoricalMutualInformation {
    /// Build the estimator from counted pairs.
    ///
    /// Normalizes the counts and precomputes the PMI matrix, validating every
    /// populated cell's marginals along the way.
    pub fn from_counts(counts: CooccurrenceCounts) -> Result<Self> {
        let distribution = JointDistribution::from_counts(&counts)?;
        let pmi = pmi_matrix(&distribution)?;
        let (_, observations) = counts.into_parts();
        Ok(Self {
            distribution,
            pmi,
            observations,
        })
    }

    /// The underlying joint distribution and marginals.
    pub fn distribution(&self) -> &JointDistribution {
        &self.distribution
    }

    /// Pointwise mutual information per cell, in bits.
    ///
    /// Cells with zero joint probability hold 0, the value of their
    /// contribution to any expectation.
    pub fn pmi_matrix(&self) -> &Array2<f64> {
        &self.pmi
    }

    /// Number of observed pairs, N.
    pub fn n_observations(&self) -> usize {
        self.observations.len()
    }

    /// Marginal entropy H(X) in bits.
    pub fn entropy_x(&self) -> f64 {
        entropy_bits(self.distribution.px().iter())
    }

    /// Marginal entropy H(Y) in bits.
    pub fn entropy_y(&self) -> f64 {
        entropy_bits(self.distribution.py().iter())
    }

    /// Joint entropy H(X, Y) in bits.
    pub fn joint_entropy(&self) -> f64 {
        entropy_bits(self.distribution.joint().iter())
    }

    /// I(X; Y) via the entropy identity, as an independent cross-check on the
    /// expectation form computed by `global_value`.
    pub fn mutual_information_from_entropies(&self) -> f64 {
        // I(X; Y) = H(X) + H(Y) - H(X, Y)
        self.entropy_x() + self.entropy_y() - self.joint_entropy()
    }
}

impl GlobalValue for CategoricalMutualInformation {
    /// I(X; Y) = sum over populated cells of p(x, y) * pmi(x, y), in bits.
    fn global_value(&self) -> f64 {
        self.distribution
            .joint()
            .iter()
            .zip(self.pmi.iter())
            .filter(|&(&p, _)| p > 0.0)
            .map(|(&p, &pmi)| p * pmi)
            .sum()
    }
}

impl LocalValues for CategoricalMutualInformation {
    /// pmi(x, y) of each observed pair, in input order.
    ///
    /// Observed pairs always land in populated cells, so local values are
    /// finite; their mean equals `global_value`.
    fn local_values(&self) -> Array1<f64> {
        self.observations
            .iter()
            .map(|&(i, j)| self.pmi[[i, j]])
            .collect()
    }
}

/// PMI matrix of a joint distribution, with an explicit zero for empty cells.
///
/// A populated cell with a massless marginal cannot arise from counting, but
/// the marginals are checked before being used as logarithm arguments and
/// reported as [`CoinfoError::DegenerateMarginal`].
fn pmi_matrix(distribution: &JointDistribution) -> Result<Array2<f64>> {
    let joint = distribution.joint();
    let px = distribution.px();
    let py = distribution.py();
    let mut pmi = Array2::<f64>::zeros(joint.raw_dim());
    for ((i, j), &p) in joint.indexed_iter() {
        if p <= 0.0 {
            // Empty cell: zero contribution by the p log p -> 0 limit.
            continue;
        }
        if px[i] <= 0.0 {
            return Err(CoinfoError::DegenerateMarginal {
                role: VariableRole::X,
                index: i,
            });
        }
        if py[j] <= 0.0 {
            return Err(CoinfoError::DegenerateMarginal {
                role: VariableRole::Y,
                index: j,
            });
        }
        // pmi = log2 p(x,y) - log2 p(x) - log2 p(y)
        pmi[[i, j]] = p.log2() - px[i].log2() - py[j].log2();
    }
    Ok(pmi)
}
