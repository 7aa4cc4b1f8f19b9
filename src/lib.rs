// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # coinfo
//!
//! Information-theoretic association statistics for categorical co-occurrence
//! data: pointwise mutual information (PMI), mutual information, and entropies,
//! estimated from an empirical joint distribution over paired discrete symbols.
//!
//! ## Quick Start
//!
//! ```rust
//! use coinfo::estimators::mutual_information::compute_mutual_information;
//!
//! // Each pair is one observed co-occurrence of the two variables.
//! let pairs = [
//!     ("dog", "Chloe"),
//!     ("dog", "Ozzie"),
//!     ("cat", "Jinx"),
//!     ("cat", "Fritz"),
//!     ("cat", "Chloe"),
//!     ("gecko", "Remy"),
//! ];
//!
//! let summary = compute_mutual_information(&pairs).unwrap();
//! assert!(summary.i_xy >= 0.0);
//! assert!((summary.i_xy - (summary.hx + summary.hy - summary.hxy)).abs() < 1e-9);
//! ```
//!
//! ## Pipeline
//!
//! 1. **Vocabulary indexing**: each variable's distinct symbols are mapped to
//!    dense zero-based indices, either from a caller-supplied canonical
//!    vocabulary or discovered in order of first occurrence.
//! 2. **Co-occurrence counting**: the pair sequence becomes a `|X| × |Y|`
//!    integer count matrix.
//! 3. **Distribution estimation**: counts are normalized into the joint
//!    distribution `P(x, y)` with marginals `P(x)` and `P(y)` by axis summation.
//! 4. **Information measures**: PMI matrix, scalar `I(X; Y)`, and the entropies
//!    `H(X)`, `H(Y)`, `H(X, Y)`, all in bits.
//!
//! Cells with zero joint probability are skipped before any logarithm is taken
//! and contribute exactly zero to every accumulated quantity, so no `NaN` or
//! infinity can reach a final result.
//!
//! ## Errors
//!
//! The pipeline rejects invalid inputs with typed errors rather than returning
//! partial results: an empty pair sequence ([`errors::CoinfoError::EmptyCorpus`]),
//! a symbol missing from a pre-built vocabulary
//! ([`errors::CoinfoError::UnknownSymbol`]), or a populated joint cell with a
//! massless marginal ([`errors::CoinfoError::DegenerateMarginal`]).

pub mod errors;
pub mod estimators;
