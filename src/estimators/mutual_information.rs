use log::debug;
use ndarray::{Array1, Array2};

use crate::errors::Result;
use crate::estimators::approaches::categorical::CategoricalMutualInformation;
use crate::estimators::approaches::categorical::cooccurrence::CooccurrenceCounts;
use crate::estimators::approaches::categorical::vocabulary::{Symbol, VocabularyIndexer};
use crate::estimators::traits::GlobalValue;

/// Mutual information estimation methods for categorical data
///
/// This struct provides static methods for creating mutual information
/// estimators from co-occurring symbol pairs.
pub struct MutualInformation;

impl MutualInformation {
    /// Creates a categorical MI estimator, discovering both vocabularies from
    /// the pairs in first-occurrence order.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Observed `(x, y)` co-occurrences
    ///
    /// # Errors
    ///
    /// [`crate::errors::CoinfoError::EmptyCorpus`] if `pairs` is empty.
    pub fn new_categorical<S: Symbol>(pairs: &[(S, S)]) -> Result<CategoricalMutualInformation> {
        let (counts, _x_vocab, _y_vocab) = CooccurrenceCounts::from_pairs(pairs)?;
        CategoricalMutualInformation::from_counts(counts)
    }

    /// Creates a categorical MI estimator over caller-supplied canonical
    /// vocabularies. This is the primary mode: index order is exactly the
    /// supplied order, and pairs referencing symbols outside a vocabulary are
    /// rejected.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Observed `(x, y)` co-occurrences
    /// * `x_vocab` - Canonical vocabulary for the first variable
    /// * `y_vocab` - Canonical vocabulary for the second variable
    ///
    /// # Errors
    ///
    /// [`crate::errors::CoinfoError::EmptyCorpus`] if `pairs` is empty,
    /// [`crate::errors::CoinfoError::UnknownSymbol`] if a pair references an
    /// unregistered symbol.
    pub fn new_categorical_with_vocabularies<S: Symbol>(
        pairs: &[(S, S)],
        x_vocab: &VocabularyIndexer<S>,
        y_vocab: &VocabularyIndexer<S>,
    ) -> Result<CategoricalMutualInformation> {
        let counts = CooccurrenceCounts::with_vocabularies(pairs, x_vocab, y_vocab)?;
        CategoricalMutualInformation::from_counts(counts)
    }
}

/// Full output of one mutual-information computation.
///
/// Owned snapshot of everything the pipeline derives from one pair sequence.
#[derive(Debug, Clone)]
pub struct MutualInformationSummary {
    /// Joint distribution P(x, y).
    pub joint: Array2<f64>,
    /// Marginal distribution P(x).
    pub px: Array1<f64>,
    /// Marginal distribution P(y).
    pub py: Array1<f64>,
    /// Pointwise mutual information per cell in bits; empty cells hold 0.
    pub pmi: Array2<f64>,
    /// Mutual information I(X; Y) in bits.
    pub i_xy: f64,
    /// Marginal entropy H(X) in bits.
    pub hx: f64,
    /// Marginal entropy H(Y) in bits.
    pub hy: f64,
    /// Joint entropy H(X, Y) in bits.
    pub hxy: f64,
    /// Number of observed pairs.
    pub n_observations: usize,
}

/// Estimate PMI, mutual information and entropies from a sequence of
/// co-occurring symbol pairs.
///
/// Single-pass functional pipeline: vocabularies are discovered in
/// first-occurrence order, counts are normalized into the joint distribution,
/// and all measures are derived from it in bits. For a caller-supplied
/// canonical vocabulary use
/// [`MutualInformation::new_categorical_with_vocabularies`].
///
/// # Errors
///
/// [`crate::errors::CoinfoError::EmptyCorpus`] if `pairs` is empty.
pub fn compute_mutual_information<S: Symbol>(
    pairs: &[(S, S)],
) -> Result<MutualInformationSummary> {
    let estimator = MutualInformation::new_categorical(pairs)?;
    let i_xy = estimator.global_value();
    debug!(
        "I(X;Y) = {i_xy} bits over {} observations",
        estimator.n_observations()
    );
    let distribution = estimator.distribution();
    Ok(MutualInformationSummary {
        joint: distribution.joint().clone(),
        px: distribution.px().clone(),
        py: distribution.py().clone(),
        pmi: estimator.pmi_matrix().clone(),
        i_xy,
        hx: estimator.entropy_x(),
        hy: estimator.entropy_y(),
        hxy: estimator.joint_entropy(),
        n_observations: estimator.n_observations(),
    })
}
