use std::collections::HashMap;

/// The searched corpus: document id to document text.
pub type Corpus = HashMap<String, String>;

/// Position of a document in the index store's id-sorted document table.
///
/// Ordinal order matches id order, so sorting ordinals sorts ids.
pub type DocOrdinal = u32;

/// A trigram is a 3-byte sequence stored as u32 (only lower 24 bits used)
pub type Trigram = u32;

/// Document retained by the index store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedDoc {
    pub id: String,
    pub text: String,
}

impl CachedDoc {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Ordered list of documents associated with one word or trigram.
pub type PostingList = Vec<DocOrdinal>;

/// Convert 3 bytes to a trigram
#[inline]
pub fn bytes_to_trigram(b0: u8, b1: u8, b2: u8) -> Trigram {
    ((b0 as u32) << 16) | ((b1 as u32) << 8) | (b2 as u32)
}

/// Convert trigram back to bytes
#[inline]
pub fn trigram_to_bytes(t: Trigram) -> [u8; 3] {
    [
        ((t >> 16) & 0xFF) as u8,
        ((t >> 8) & 0xFF) as u8,
        (t & 0xFF) as u8,
    ]
}
