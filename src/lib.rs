//! # memsearch - In-Memory Text Search
//!
//! memsearch ranks the documents of an in-memory `id -> text` corpus against
//! a free-text query. Nothing is persisted; an index, when used, lives inside
//! the runtime that built it.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Corpus snapshot with word and trigram indexes, staleness policies
//! - [`query`] - Scratch contexts, candidate discovery, scoring, ranking
//! - [`engine`] - Convenience entry points choosing between direct and cached search
//! - [`output`] - Result formatting for the command line
//! - [`utils`] - Rune codec, tokenizer, trigrams, configuration
//!
//! ## Quick Start
//!
//! ```
//! use memsearch::engine::SearchEngine;
//! use memsearch::index::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus.insert("user1".into(), "Zephen Blakewood fictional software architect".into());
//! corpus.insert("user2".into(), "Zeph Blake fictional engineer".into());
//!
//! let engine = SearchEngine::new();
//! let results = engine.search(&corpus, "Zeph", 2);
//!
//! assert_eq!(results[0].id, "user2"); // exact word match
//! assert_eq!(results[1].id, "user1"); // prefix match
//! ```
//!
//! ## Search Pipeline
//!
//! 1. **Normalize** - ASCII is lowercased, other text passes through unchanged
//! 2. **Discover** - scan every document, or look candidates up in the index
//! 3. **Score** - exact, prefix, substring and cross-word heuristics
//! 4. **Rank** - score descending, id ascending
//! 5. **Materialize** - into a new vector or a caller-supplied buffer
//!
//! Every search borrows fixed-capacity scratch buffers from a pool, so the
//! hot path does not allocate beyond the returned results.

pub mod engine;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use engine::{quick_search, quick_search_into, SearchEngine};
pub use query::{SearchMode, SearchResult, SearchRuntime};
