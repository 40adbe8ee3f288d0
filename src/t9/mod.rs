//! Digit-sequence lookup over a frozen [`WordIndex`].
//!
//! `search` finds every word whose letters sit on the typed keys, `rank`
//! orders them by score, and `T9Engine` bundles both behind a shared index.

pub mod keymap;
mod search;

use std::fmt::Write as _;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::WordIndex;

/// A matching word and its popularity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub score: u64,
    pub word: String,
}

/// Unranked matches for `digits`.
///
/// Characters outside `2`–`9` have no letters, so any digit string containing
/// one yields nothing.
pub fn search(index: &WordIndex, digits: &str) -> Vec<QueryResult> {
    let mut out = Vec::new();
    search::collect_matches(index, index.root(), digits, &mut out);
    out
}

/// Sort by score, highest first. Equal scores keep their relative order.
pub fn rank(results: &mut [QueryResult]) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Render results one per line as `<digits>: <word> - <score>`.
pub fn format_results(digits: &str, results: &[QueryResult]) -> String {
    let mut out = String::new();
    for r in results {
        let _ = writeln!(out, "{digits}: {} - {}", r.word, r.score);
    }
    out
}

/// Query front end over a shared, immutable index.
///
/// Cloning is cheap; clones share the same index.
#[derive(Debug, Clone)]
pub struct T9Engine {
    index: Arc<WordIndex>,
}

impl T9Engine {
    pub fn new(index: Arc<WordIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// All words typed by `digits`, ranked by score.
    pub fn query(&self, digits: &str) -> Vec<QueryResult> {
        let _span = debug_span!("t9_query", digits).entered();
        let mut results = search(&self.index, digits);
        rank(&mut results);
        debug!(matches = results.len(), "query complete");
        results
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }
}
