//! Relevance scoring for one document against a loaded query.
//!
//! Each query word takes its best match among the document's words:
//! - exact word match: [`EXACT_MATCH`]
//! - either word a prefix of the other: [`PREFIX_MATCH`]
//!
//! Every exact match beyond the first adds [`EXTRA_EXACT_BONUS`]. Documents
//! with no word-level hit may still score through trigram overlap with the
//! whole query, and multi-word queries get a bonus when their words appear
//! inside similarly sized document words.

use crate::index::types::trigram_to_bytes;
use crate::utils::{contains_bytes, sampled_trigrams, ByteSet, NormalizedText};

pub const EXACT_MATCH: f32 = 2.0;
pub const PREFIX_MATCH: f32 = 1.0;
pub const EXTRA_EXACT_BONUS: f32 = 0.5;
/// Weight of the fraction of sampled query trigrams found in the document
pub const SUBSTRING_WEIGHT: f32 = 0.3;
/// Weight of the fraction of query words found inside document words
pub const CROSS_WORD_WEIGHT: f32 = 0.8;
/// Shortest query (in bytes) or query word considered for substring scoring
pub const MIN_SUBSTRING_LEN: usize = 3;

/// Scores documents against a normalized query.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'q> {
    query: &'q NormalizedText,
    query_bytes: &'q ByteSet,
}

impl<'q> Scorer<'q> {
    pub fn new(query: &'q NormalizedText, query_bytes: &'q ByteSet) -> Self {
        Self { query, query_bytes }
    }

    /// Score `text`, using `doc` as its normalization buffer. Zero means no
    /// match.
    pub fn score(&self, text: &str, doc: &mut NormalizedText) -> f32 {
        let word_count = self.query.word_count();
        if text.is_empty() || word_count == 0 {
            return 0.0;
        }

        doc.normalize(text.as_bytes());
        if !self.query_bytes.intersects(doc.as_bytes()) {
            return 0.0;
        }
        doc.split();

        let mut total = 0.0;
        let mut exact = 0;
        for query_word in self.query.words() {
            let best = best_word_match(query_word, doc);
            if best == EXACT_MATCH {
                exact += 1;
            }
            total += best;
        }

        if exact == word_count {
            return total + (exact - 1) as f32 * EXTRA_EXACT_BONUS;
        }
        if exact > 1 {
            total += (exact - 1) as f32 * EXTRA_EXACT_BONUS;
        }

        if exact == 0 && total == 0.0 && self.query.len() >= MIN_SUBSTRING_LEN {
            total += self.substring_affinity(doc.as_bytes());
        }

        if word_count >= 2 && total < word_count as f32 {
            total += self.cross_word_bonus(doc);
        }

        total
    }

    /// Sampled query trigrams present anywhere in the document, as a
    /// fraction of `(len - 2) / stride + 1`.
    ///
    /// That denominator can exceed the number of sampled offsets by one, so
    /// a full match at stride > 1 may score just under the weight.
    fn substring_affinity(&self, doc: &[u8]) -> f32 {
        let query = self.query.as_bytes();
        if query.len() < MIN_SUBSTRING_LEN {
            return 0.0;
        }
        let stride = (query.len() / 10).max(1);

        let found = sampled_trigrams(query, stride)
            .filter(|&trigram| contains_bytes(doc, &trigram_to_bytes(trigram)))
            .count();
        if found == 0 {
            return 0.0;
        }

        let max_matches = (query.len() - 2) / stride + 1;
        found as f32 / max_matches as f32 * SUBSTRING_WEIGHT
    }

    /// Bonus for query words contained in (or containing) a document word
    /// of similar length. Needs at least two such words.
    fn cross_word_bonus(&self, doc: &NormalizedText) -> f32 {
        let matched = self
            .query
            .words()
            .filter(|q| q.len() >= MIN_SUBSTRING_LEN)
            .filter(|q| {
                doc.words().any(|d| {
                    similar_length(q.len(), d.len()) && (contains_bytes(d, q) || contains_bytes(q, d))
                })
            })
            .count();

        if matched < 2 {
            return 0.0;
        }
        matched as f32 / self.query.word_count() as f32 * CROSS_WORD_WEIGHT
    }
}

/// Best score any document word earns for `query_word`
fn best_word_match(query_word: &[u8], doc: &NormalizedText) -> f32 {
    let mut best = 0.0;
    for doc_word in doc.words() {
        // Exact and prefix matches both need the same first byte
        if doc_word[0] != query_word[0] {
            continue;
        }
        if doc_word.len() == query_word.len() {
            if doc_word == query_word {
                return EXACT_MATCH;
            }
        } else if doc_word.starts_with(query_word) || query_word.starts_with(doc_word) {
            best = PREFIX_MATCH;
        }
    }
    best
}

/// Length difference at most half the shorter length
#[inline]
fn similar_length(a: usize, b: usize) -> bool {
    a.abs_diff(b) as f32 <= a.min(b) as f32 / 2.0
}
