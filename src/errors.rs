//! Error types for coinfo.

use std::fmt;

use thiserror::Error;

/// Which of the two categorical variables a symbol or index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableRole {
    /// The first variable (matrix rows).
    X,
    /// The second variable (matrix columns).
    Y,
}

impl fmt::Display for VariableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableRole::X => write!(f, "X"),
            VariableRole::Y => write!(f, "Y"),
        }
    }
}

/// Top-level error type for co-occurrence information measures.
///
/// All variants are fatal for the computation that raised them; the pipeline
/// never returns partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinfoError {
    /// The input pair sequence was empty. With a total count of zero the
    /// joint distribution is undefined, so the request is rejected before
    /// normalization.
    #[error("empty corpus: no co-occurrence pairs to estimate from")]
    EmptyCorpus,

    /// A symbol was looked up that was never registered in the vocabulary.
    /// Under the pre-built-vocabulary policy this indicates a contract
    /// violation by the upstream pair extractor.
    #[error("unknown symbol {symbol} for variable {role}")]
    UnknownSymbol {
        /// Variable whose vocabulary was queried.
        role: VariableRole,
        /// Debug rendering of the offending symbol.
        symbol: String,
    },

    /// A populated joint cell had a marginal without mass. Every populated
    /// cell implies positive marginals, so this is structurally impossible
    /// for counts produced by this crate, but it is checked before any
    /// marginal is used as a logarithm argument.
    #[error("degenerate marginal: variable {role} index {index} has zero mass under a populated joint cell")]
    DegenerateMarginal {
        /// Variable whose marginal is degenerate.
        role: VariableRole,
        /// Index of the massless marginal entry.
        index: usize,
    },
}

/// Result type for coinfo operations.
pub type Result<T> = std::result::Result<T, CoinfoError>;
