//! Per-call scratch memory for one search.
//!
//! A [`ScratchContext`] bundles every buffer a search touches: the
//! normalized query and its word spans, the normalized text of the document
//! being scored, the candidate records, and the sorted candidate set used by
//! index lookups. All of it is sized up front and reused through
//! [`crate::query::pool::ContextPool`]; nothing grows during a search.
//! Whatever does not fit is dropped silently.

use crate::index::types::DocOrdinal;
use crate::utils::{ByteSet, NormalizedText};
use std::mem;

/// Normalized query bytes
pub const QUERY_BYTES: usize = 2048;
/// Normalized bytes kept per scored document
pub const DOC_BYTES: usize = 8192;
/// Words kept from the query
pub const QUERY_WORDS: usize = 128;
/// Words kept per scored document
pub const DOC_WORDS: usize = 256;
/// Candidate records and candidate-set entries per search
pub const MAX_CANDIDATES: usize = 1024;

impl NormalizedText {
    /// Buffer sized for a search query
    pub fn query() -> Self {
        Self::with_capacity(QUERY_BYTES, QUERY_WORDS)
    }

    /// Buffer sized for a document being scored or indexed
    pub fn document() -> Self {
        Self::with_capacity(DOC_BYTES, DOC_WORDS)
    }
}

/// A scored document borrowed from the corpus or the index store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub id: &'a str,
    pub text: &'a str,
    pub score: f32,
}

impl<'a> Candidate<'a> {
    pub fn new(id: &'a str, text: &'a str, score: f32) -> Self {
        Self { id, text, score }
    }
}

/// Bounded list of candidate records.
#[derive(Debug)]
pub struct CandidateList<'a> {
    items: Vec<Candidate<'a>>,
}

impl<'a> CandidateList<'a> {
    fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_CANDIDATES),
        }
    }

    /// Append a candidate; returns false (and drops it) once full.
    #[inline]
    pub fn push(&mut self, candidate: Candidate<'a>) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(candidate);
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_CANDIDATES
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Candidate<'a>] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [Candidate<'a>] {
        &mut self.items
    }

    /// Empty the list and release its borrows.
    ///
    /// The allocation is kept on a best-effort basis: collecting an emptied
    /// `vec::IntoIter` into a same-layout `Vec` currently reuses its buffer,
    /// but std does not promise it. Either way the list stays bounded by
    /// [`MAX_CANDIDATES`].
    fn recycle<'b>(mut self) -> CandidateList<'b> {
        self.items.clear();
        CandidateList {
            items: self.items.into_iter().filter_map(|_| None).collect(),
        }
    }
}

/// Sorted, duplicate-free set of document ordinals with fixed capacity.
#[derive(Debug)]
pub struct CandidateSet {
    slots: Box<[DocOrdinal]>,
    len: usize,
}

impl CandidateSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Insert `ordinal` in sorted position.
    ///
    /// Returns false if it was already present or the set is full.
    pub fn insert(&mut self, ordinal: DocOrdinal) -> bool {
        if self.is_full() {
            return false;
        }
        match self.slots[..self.len].binary_search(&ordinal) {
            Ok(_) => false,
            Err(pos) => {
                self.slots.copy_within(pos..self.len, pos + 1);
                self.slots[pos] = ordinal;
                self.len += 1;
                true
            }
        }
    }

    /// Insert every ordinal of a posting list, stopping once full.
    pub fn extend(&mut self, postings: &[DocOrdinal]) {
        for &ordinal in postings {
            if self.is_full() {
                break;
            }
            self.insert(ordinal);
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[DocOrdinal] {
        &self.slots[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

/// Working memory for one search call.
///
/// `'a` is the lifetime of the documents candidates borrow from.
#[derive(Debug)]
pub struct ScratchContext<'a> {
    pub query: NormalizedText,
    /// Every byte value present in the normalized query
    pub query_bytes: ByteSet,
    pub doc: NormalizedText,
    pub candidates: CandidateList<'a>,
    pub candidate_set: CandidateSet,
}

impl ScratchContext<'static> {
    pub fn new() -> Self {
        Self {
            query: NormalizedText::query(),
            query_bytes: ByteSet::new(),
            doc: NormalizedText::document(),
            candidates: CandidateList::new(),
            candidate_set: CandidateSet::with_capacity(MAX_CANDIDATES),
        }
    }
}

impl Default for ScratchContext<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ScratchContext<'a> {
    /// Normalize and split the query. Returns false if it has no words.
    pub fn load_query(&mut self, query: &str) -> bool {
        self.query.fill(query.as_bytes());
        self.query_bytes = ByteSet::from_bytes(self.query.as_bytes());
        self.query.word_count() > 0
    }

    /// Clear all counters so no data survives into the next call.
    pub fn reset(&mut self) {
        self.query.clear();
        self.query_bytes.clear();
        self.doc.clear();
        self.candidates.items.clear();
        self.candidate_set.clear();
    }

    /// Reset and move the buffers out, free of document borrows, so they
    /// can be pooled. `self` keeps only zero-capacity placeholders.
    pub(crate) fn detach(&mut self) -> ScratchContext<'static> {
        self.reset();
        let candidates = mem::replace(&mut self.candidates, CandidateList { items: Vec::new() });
        ScratchContext {
            query: mem::replace(&mut self.query, NormalizedText::with_capacity(0, 0)),
            query_bytes: ByteSet::new(),
            doc: mem::replace(&mut self.doc, NormalizedText::with_capacity(0, 0)),
            candidates: candidates.recycle(),
            candidate_set: mem::replace(&mut self.candidate_set, CandidateSet::with_capacity(0)),
        }
    }
}
