//! In-memory index over a corpus snapshot.
//!
//! The store keeps its own copy of every document, sorted by id, and two
//! inverted indexes keyed by normalized word and by sampled trigram. Posting
//! lists hold [`DocOrdinal`]s into the sorted document table. They are
//! sorted and free of duplicates.

use crate::index::stats::IndexStats;
use crate::index::types::{CachedDoc, Corpus, DocOrdinal, PostingList, Trigram};
use crate::utils::{extract_trigrams, NormalizedText};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::debug;

/// Words and trigrams found in one document
struct DocTerms {
    words: Vec<Box<[u8]>>,
    trigrams: Vec<Trigram>,
}

impl DocTerms {
    fn extract(scratch: &mut NormalizedText, text: &str) -> Self {
        scratch.fill(text.as_bytes());

        let mut words: Vec<Box<[u8]>> = scratch.words().map(Box::from).collect();
        words.sort_unstable();
        words.dedup();

        Self {
            words,
            trigrams: extract_trigrams(scratch.as_bytes()),
        }
    }
}

#[derive(Debug, Default)]
pub struct IndexStore {
    docs: Vec<CachedDoc>,
    words: FxHashMap<Box<[u8]>, PostingList>,
    trigrams: FxHashMap<Trigram, PostingList>,
}

impl IndexStore {
    /// Create an empty store. Every non-empty corpus is stale against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot and both indexes with the contents of `corpus`.
    pub fn rebuild(&mut self, corpus: &Corpus) {
        let start = Instant::now();

        let mut docs: Vec<CachedDoc> = corpus
            .iter()
            .map(|(id, text)| CachedDoc::new(id.as_str(), text.as_str()))
            .collect();
        docs.par_sort_unstable_by(|a, b| a.id.cmp(&b.id));

        // Documents are tokenized in parallel, then merged in ordinal order
        // so every posting list comes out sorted.
        let terms: Vec<DocTerms> = docs
            .par_iter()
            .map_init(NormalizedText::document, |scratch, doc| {
                DocTerms::extract(scratch, &doc.text)
            })
            .collect();

        let mut words: FxHashMap<Box<[u8]>, PostingList> = FxHashMap::default();
        let mut trigrams: FxHashMap<Trigram, PostingList> = FxHashMap::default();

        for (ordinal, doc_terms) in terms.into_iter().enumerate() {
            let ordinal = ordinal as DocOrdinal;
            for word in doc_terms.words {
                words.entry(word).or_default().push(ordinal);
            }
            for trigram in doc_terms.trigrams {
                trigrams.entry(trigram).or_default().push(ordinal);
            }
        }

        self.docs = docs;
        self.words = words;
        self.trigrams = trigrams;

        debug!(
            target: "memsearch::index",
            docs = self.docs.len(),
            words = self.words.len(),
            trigrams = self.trigrams.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Rebuilt index"
        );
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Cached text of the document with this id
    pub fn get(&self, id: &str) -> Option<&str> {
        self.docs
            .binary_search_by(|doc| doc.id.as_str().cmp(id))
            .ok()
            .map(|i| self.docs[i].text.as_str())
    }

    #[inline]
    pub fn doc(&self, ordinal: DocOrdinal) -> Option<&CachedDoc> {
        self.docs.get(ordinal as usize)
    }

    /// All cached documents, sorted by id
    pub fn docs(&self) -> &[CachedDoc] {
        &self.docs
    }

    /// Documents containing exactly this normalized word
    pub fn word_postings(&self, word: &[u8]) -> &[DocOrdinal] {
        self.words.get(word).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn trigram_postings(&self, trigram: Trigram) -> &[DocOrdinal] {
        self.trigrams.get(&trigram).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every indexed word with its posting list, in no particular order
    pub fn words(&self) -> impl Iterator<Item = (&[u8], &[DocOrdinal])> + '_ {
        self.words
            .iter()
            .map(|(word, postings)| (&**word, postings.as_slice()))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.docs.len(),
            words: self.words.len(),
            trigrams: self.trigrams.len(),
            word_postings: self.words.values().map(Vec::len).sum(),
            trigram_postings: self.trigrams.values().map(Vec::len).sum(),
        }
    }
}
