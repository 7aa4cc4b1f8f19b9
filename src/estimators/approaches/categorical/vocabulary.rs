use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::{CoinfoError, Result, VariableRole};

/// Category label usable as a vocabulary symbol.
///
/// Blanket-implemented for any hashable, cloneable, debug-printable type;
/// string labels and small integers are the common cases.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

/// Bijective map between the distinct symbols of one variable and dense
/// zero-based indices.
///
/// Index assignment follows registration order: an indexer built with
/// [`VocabularyIndexer::from_symbols`] keeps the caller-supplied canonical
/// order, while one populated through [`VocabularyIndexer::get_or_insert`]
/// assigns indices in order of first occurrence. Either way the assignment is
/// deterministic, and the downstream measures are invariant to relabeling.
#[derive(Debug)]
pub struct VocabularyIndexer<S> {
    role: VariableRole,
    index_of: HashMap<S, usize>,
    symbols: Vec<S>,
}

impl<S: Symbol> VocabularyIndexer<S> {
    /// Empty indexer for the given variable, to be populated during counting.
    pub fn new(role: VariableRole) -> Self {
        Self {
            role,
            index_of: HashMap::new(),
            symbols: Vec::new(),
        }
    }

    /// Pre-built indexer over a caller-supplied canonical vocabulary.
    ///
    /// Duplicates in the input keep their first position.
    pub fn from_symbols<I>(role: VariableRole, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut indexer = Self::new(role);
        for symbol in symbols {
            indexer.get_or_insert(&symbol);
        }
        indexer
    }

    /// Index of a registered symbol.
    ///
    /// Looking up a symbol that was never registered is a contract violation
    /// and yields [`CoinfoError::UnknownSymbol`].
    pub fn index_of(&self, symbol: &S) -> Result<usize> {
        self.index_of
            .get(symbol)
            .copied()
            .ok_or_else(|| CoinfoError::UnknownSymbol {
                role: self.role,
                symbol: format!("{symbol:?}"),
            })
    }

    /// Index of `symbol`, registering it at the next free index if unseen.
    pub fn get_or_insert(&mut self, symbol: &S) -> usize {
        if let Some(&index) = self.index_of.get(symbol) {
            return index;
        }
        let index = self.symbols.len();
        self.index_of.insert(symbol.clone(), index);
        self.symbols.push(symbol.clone());
        index
    }

    /// Number of distinct registered symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Registered symbols in index order.
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Variable this indexer belongs to.
    pub fn role(&self) -> VariableRole {
        self.role
    }
}
