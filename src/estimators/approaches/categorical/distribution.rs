use ndarray::{Array1, Array2, Axis};

use crate::errors::{CoinfoError, Result};
use crate::estimators::approaches::categorical::cooccurrence::CooccurrenceCounts;

/// Empirical joint distribution over two categorical variables, with both
/// marginals.
///
/// `P[i, j] = C[i, j] / N`; marginals are row and column sums of the joint.
/// The joint and both marginals each sum to 1 within floating-point tolerance.
/// Immutable once built.
#[derive(Debug)]
pub struct JointDistribution {
    joint: Array2<f64>,
    px: Array1<f64>,
    py: Array1<f64>,
}

impl JointDistribution {
    /// Normalize a count matrix into a joint distribution and derive the
    /// marginals by axis summation.
    ///
    /// Rejects a zero total count; with `N = 0` the normalization is
    /// undefined. [`CooccurrenceCounts`] never produces such counts.
    pub fn from_counts(counts: &CooccurrenceCounts) -> Result<Self> {
        let n = counts.n();
        if n == 0 {
            return Err(CoinfoError::EmptyCorpus);
        }
        let n_f = n as f64;
        let joint = counts.counts().mapv(|c| c as f64 / n_f);
        // Px sums over Y (columns), Py over X (rows).
        let px = joint.sum_axis(Axis(1));
        let py = joint.sum_axis(Axis(0));
        Ok(Self { joint, px, py })
    }

    /// Joint probability matrix P(x, y).
    pub fn joint(&self) -> &Array2<f64> {
        &self.joint
    }

    /// Marginal distribution P(x), the row sums.
    pub fn px(&self) -> &Array1<f64> {
        &self.px
    }

    /// Marginal distribution P(y), the column sums.
    pub fn py(&self) -> &Array1<f64> {
        &self.py
    }

    /// Shape as `(|X|, |Y|)`.
    pub fn shape(&self) -> (usize, usize) {
        self.joint.dim()
    }
}

/// Shannon entropy in bits of a sequence of probabilities.
///
/// Entries without mass are skipped before the logarithm is taken; the sum
/// realizes the `p log p -> 0` limit without non-finite intermediates.
pub fn entropy_bits<'a, I>(probs: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut h = 0.0_f64;
    for &p in probs {
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    h
}
