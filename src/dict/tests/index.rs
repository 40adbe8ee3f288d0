use std::collections::HashMap;

use proptest::prelude::*;

use crate::dict::{IndexStats, NodeId, WordIndex, WordIndexBuilder};

fn sample_index() -> WordIndex {
    WordIndex::from_entries([
        ("cat", 10),
        ("cats", 4),
        ("car", 7),
        ("act", 3),
        ("a", 50),
    ])
}

#[test]
fn test_contains_inserted_words() {
    let index = sample_index();
    for word in ["cat", "cats", "car", "act", "a"] {
        assert!(index.contains(word), "{word} should be present");
    }
}

#[test]
fn test_prefix_is_not_a_word() {
    let index = sample_index();
    // "ca" is on the path to "cat" and "car" but was never inserted.
    assert!(index.find("ca").is_some());
    assert!(!index.contains("ca"));
}

#[test]
fn test_missing_path() {
    let index = sample_index();
    assert!(!index.contains("dog"));
    assert!(!index.contains("catsup"));
    assert!(index.find("dog").is_none());
}

#[test]
fn test_empty_string_is_not_a_word() {
    let index = sample_index();
    assert!(!index.contains(""));
    assert_eq!(index.find(""), Some(NodeId::ROOT));
}

#[test]
fn test_score_lookup() {
    let index = sample_index();
    assert_eq!(index.score("cat"), Some(10));
    assert_eq!(index.score("a"), Some(50));
    assert_eq!(index.score("ca"), None);
}

#[test]
fn test_last_insert_wins() {
    let index = WordIndex::from_entries([("home", 3), ("home", 7)]);
    assert_eq!(index.score("home"), Some(7));
    assert_eq!(index.stats().words, 1);
}

#[test]
fn test_zero_score_overwrites() {
    let index = WordIndex::from_entries([("home", 3), ("home", 0)]);
    assert!(!index.contains("home"));
    // The path stays in place.
    assert!(index.find("home").is_some());
}

#[test]
fn test_insert_empty_word_rejected() {
    let mut builder = WordIndexBuilder::new();
    assert!(!builder.insert("", 5));
    assert!(builder.insert("x", 5));
    let index = builder.build();
    assert_eq!(index.score_at(index.root()), 0);
}

#[test]
fn test_reconstruct_word() {
    let index = sample_index();
    let node = index.find("cats").unwrap();
    assert_eq!(index.reconstruct_word(node), "cats");
    assert_eq!(index.reconstruct_word(index.root()), "");
}

#[test]
fn test_reconstruct_non_ascii() {
    let index = WordIndex::from_entries([("café", 2), ("naïve", 1)]);
    let node = index.find("café").unwrap();
    assert_eq!(index.reconstruct_word(node), "café");
    assert!(index.contains("naïve"));
}

#[test]
fn test_shared_prefix_nodes() {
    let index = sample_index();
    // root, c, ca, cat, cats, car, a, ac, act
    assert_eq!(
        index.stats(),
        IndexStats {
            nodes: 9,
            words: 5
        }
    );
}

#[test]
fn test_empty_index() {
    let index = WordIndexBuilder::new().build();
    assert_eq!(index.stats(), IndexStats { nodes: 1, words: 0 });
    assert!(!index.contains("a"));
}

#[test]
fn test_index_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WordIndex>();
}

proptest! {
    #[test]
    fn prop_inserted_words_round_trip(
        entries in prop::collection::vec(("[a-z]{1,10}", 1u64..100_000), 1..40)
    ) {
        let index = WordIndex::from_entries(entries.iter().map(|(w, s)| (w.as_str(), *s)));

        let mut expected: HashMap<&str, u64> = HashMap::new();
        for (word, score) in &entries {
            expected.insert(word.as_str(), *score);
        }

        for (word, score) in &expected {
            prop_assert!(index.contains(word));
            prop_assert_eq!(index.score(word), Some(*score));
            let node = index.find(word).unwrap();
            prop_assert_eq!(index.reconstruct_word(node), *word);
        }
        prop_assert_eq!(index.stats().words, expected.len());
    }
}
