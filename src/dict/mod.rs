//! Word index built from a frequency list.
//!
//! `WordIndexBuilder` inserts words into an arena-backed character trie;
//! `WordIndex` is the frozen result, shared read-only by the query engine.

mod index;
mod source;
#[cfg(test)]
mod tests;

pub use index::{IndexStats, NodeId, WordIndex, WordIndexBuilder};
pub use source::{BuildOptions, BuildStats};

use std::io;

/// Errors raised while building a `WordIndex` from a text source.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed entry on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
