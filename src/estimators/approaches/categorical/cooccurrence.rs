use log::debug;
use ndarray::Array2;

use crate::errors::{CoinfoError, Result, VariableRole};
use crate::estimators::approaches::categorical::vocabulary::{Symbol, VocabularyIndexer};

/// Co-occurrence counts for one corpus of `(x, y)` symbol pairs.
///
/// Holds the `|X| × |Y|` count matrix together with the resolved index pair of
/// every observation, in input order. The observation list is what allows the
/// mutual-information estimator to report local (per-pair) values later on.
#[derive(Debug)]
pub struct CooccurrenceCounts {
    counts: Array2<u64>,
    observations: Vec<(usize, usize)>,
}

impl CooccurrenceCounts {
    /// Count pairs against two pre-built vocabularies.
    ///
    /// This is the strict policy: every symbol must already be registered, and
    /// a pair referencing an unknown symbol aborts the whole computation with
    /// [`CoinfoError::UnknownSymbol`]. Vocabulary entries that never occur in
    /// `pairs` simply keep an all-zero row or column.
    pub fn with_vocabularies<S: Symbol>(
        pairs: &[(S, S)],
        x_vocab: &VocabularyIndexer<S>,
        y_vocab: &VocabularyIndexer<S>,
    ) -> Result<Self> {
        if pairs.is_empty() {
            return Err(CoinfoError::EmptyCorpus);
        }
        let mut counts = Array2::<u64>::zeros((x_vocab.len(), y_vocab.len()));
        let mut observations = Vec::with_capacity(pairs.len());
        for (x, y) in pairs {
            let i = x_vocab.index_of(x)?;
            let j = y_vocab.index_of(y)?;
            counts[[i, j]] += 1;
            observations.push((i, j));
        }
        debug!(
            "counted {} pairs into a {}x{} co-occurrence matrix",
            observations.len(),
            x_vocab.len(),
            y_vocab.len()
        );
        Ok(Self {
            counts,
            observations,
        })
    }

    /// Count pairs while discovering both vocabularies in first-occurrence
    /// order.
    ///
    /// Convenience fallback for callers without a canonical vocabulary. Both
    /// indexers are fully populated before counting starts, so every pair is
    /// guaranteed to resolve.
    pub fn from_pairs<S: Symbol>(
        pairs: &[(S, S)],
    ) -> Result<(Self, VocabularyIndexer<S>, VocabularyIndexer<S>)> {
        if pairs.is_empty() {
            return Err(CoinfoError::EmptyCorpus);
        }
        let mut x_vocab = VocabularyIndexer::new(VariableRole::X);
        let mut y_vocab = VocabularyIndexer::new(VariableRole::Y);
        for (x, y) in pairs {
            x_vocab.get_or_insert(x);
            y_vocab.get_or_insert(y);
        }
        let counts = Self::with_vocabularies(pairs, &x_vocab, &y_vocab)?;
        Ok((counts, x_vocab, y_vocab))
    }

    /// The `|X| × |Y|` count matrix.
    pub fn counts(&self) -> &Array2<u64> {
        &self.counts
    }

    /// Total number of observed pairs, N.
    pub fn n(&self) -> u64 {
        self.observations.len() as u64
    }

    /// Resolved `(x_index, y_index)` of each observation, in input order.
    pub fn observations(&self) -> &[(usize, usize)] {
        &self.observations
    }

    /// Matrix shape as `(|X|, |Y|)`.
    pub fn shape(&self) -> (usize, usize) {
        self.counts.dim()
    }

    pub(crate) fn into_parts(self) -> (Array2<u64>, Vec<(usize, usize)>) {
        (self.counts, self.observations)
    }
}
