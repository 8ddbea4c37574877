//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration and corpus file loading
//! - [`byteset`] - Byte-presence bitmap for fast negative checks
//! - [`runes`] - UTF-8 code point decoding/encoding with ASCII case folding
//! - [`tokenizer`] - Normalization and word splitting over fixed buffers
//! - [`trigram`] - 3-byte sequence sampling for indexing and scoring
//!
//! ## Key Functions
//!
//! ```
//! use memsearch::utils::{normalize_to_vec, split_words, Span};
//!
//! let normalized = normalize_to_vec("Hello, World!");
//! assert_eq!(normalized, b"hello, world!");
//!
//! let mut spans = [Span::default(); 8];
//! let count = split_words(&normalized, &mut spans);
//! assert_eq!(count, 2);
//! ```

pub mod app_data;
pub mod byteset;
pub mod runes;
pub mod tokenizer;
pub mod trigram;

pub use app_data::*;
pub use byteset::*;
pub use runes::*;
pub use tokenizer::*;
pub use trigram::*;
