pub mod categorical;

// Unified re-exports for the categorical estimator stack so tests and users
// can import coinfo::estimators::approaches::* ergonomically.
pub use categorical::CategoricalMutualInformation;
pub use categorical::cooccurrence::CooccurrenceCounts;
pub use categorical::distribution::JointDistribution;
pub use categorical::vocabulary::{Symbol, VocabularyIndexer};
