use coinfo::errors::{CoinfoError, VariableRole};
use coinfo::estimators::approaches::categorical::vocabulary::VocabularyIndexer;

#[test]
fn canonical_order_is_kept() {
    let vocab =
        VocabularyIndexer::from_symbols(VariableRole::X, ["gecko", "cat", "dog"].into_iter());

    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.index_of(&"gecko").unwrap(), 0);
    assert_eq!(vocab.index_of(&"cat").unwrap(), 1);
    assert_eq!(vocab.index_of(&"dog").unwrap(), 2);
    assert_eq!(vocab.symbols(), &["gecko", "cat", "dog"]);
}

#[test]
fn duplicates_keep_first_position() {
    let vocab = VocabularyIndexer::from_symbols(VariableRole::Y, ["a", "b", "a", "c", "b"]);

    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.index_of(&"a").unwrap(), 0);
    assert_eq!(vocab.index_of(&"b").unwrap(), 1);
    assert_eq!(vocab.index_of(&"c").unwrap(), 2);
}

#[test]
fn discovery_order_is_first_occurrence() {
    let mut vocab = VocabularyIndexer::new(VariableRole::X);
    assert!(vocab.is_empty());

    assert_eq!(vocab.get_or_insert(&"cat"), 0);
    assert_eq!(vocab.get_or_insert(&"dog"), 1);
    // Re-registering keeps the original index.
    assert_eq!(vocab.get_or_insert(&"cat"), 0);
    assert_eq!(vocab.get_or_insert(&"gecko"), 2);

    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.symbols(), &["cat", "dog", "gecko"]);
}

#[test]
fn unknown_symbol_is_an_error() {
    let vocab = VocabularyIndexer::from_symbols(VariableRole::Y, ["Chloe", "Ozzie"]);

    let err = vocab.index_of(&"Remy").unwrap_err();
    assert_eq!(
        err,
        CoinfoError::UnknownSymbol {
            role: VariableRole::Y,
            symbol: String::from("\"Remy\""),
        }
    );
}

#[test]
fn integer_symbols_work() {
    let vocab = VocabularyIndexer::from_symbols(VariableRole::X, [7i32, 3, 11]);
    assert_eq!(vocab.index_of(&3).unwrap(), 1);
    assert!(vocab.index_of(&42).is_err());
    assert_eq!(vocab.role(), VariableRole::X);
}
