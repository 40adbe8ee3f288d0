//! T9 predictive text lookup.
//!
//! Build a [`dict::WordIndex`] once from a word frequency list, share it via
//! `Arc`, and answer digit queries with [`t9::T9Engine`]:
//!
//! ```
//! use std::sync::Arc;
//! use t9_engine::dict::WordIndex;
//! use t9_engine::t9::T9Engine;
//!
//! let index = WordIndex::from_entries([("an", 4), ("bo", 9)]);
//! let engine = T9Engine::new(Arc::new(index));
//! let words: Vec<_> = engine.query("26").into_iter().map(|r| r.word).collect();
//! assert_eq!(words, ["bo", "an"]);
//! ```

pub mod dict;
pub mod settings;
pub mod t9;
pub mod trace_init;
