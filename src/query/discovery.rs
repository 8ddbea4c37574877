//! Candidate discovery: which documents get scored.
//!
//! Direct mode scores every document of the corpus. Cached mode narrows the
//! field through the index store first:
//! 1. postings of the query word with the fewest documents
//! 2. postings of every other query word
//! 3. postings of indexed words that extend, or are extended by, a query word
//! 4. if nothing matched, postings of sampled query trigrams
//!
//! Only candidates with a positive score are kept.

use crate::index::store::IndexStore;
use crate::index::types::Corpus;
use crate::query::context::{Candidate, CandidateSet, ScratchContext};
use crate::query::scorer::Scorer;
use crate::utils::{sampled_trigrams, NormalizedText};

/// Query words longer than this enable the short-document skip
const LONG_WORD: usize = 10;
/// Largest length difference between a query word and a prefix-matched
/// indexed word
const PREFIX_WINDOW: usize = 10;
/// Query lengths eligible for the trigram fallback
const TRIGRAM_FALLBACK_LEN: std::ops::RangeInclusive<usize> = 3..=100;
const TRIGRAM_FALLBACK_STRIDE: usize = 2;
/// The trigram fallback stops once the set grows past this
const TRIGRAM_FALLBACK_LIMIT: usize = 100;

/// Score every corpus document directly, keeping positive scores.
///
/// If the query holds a word longer than ten bytes, documents shorter than
/// half the normalized query are skipped without scoring. This may drop a
/// document that would have matched.
pub fn scan_corpus<'c>(corpus: &'c Corpus, ctx: &mut ScratchContext<'c>) {
    let ScratchContext {
        query,
        query_bytes,
        doc,
        candidates,
        ..
    } = ctx;

    let min_len = if query.words().any(|w| w.len() > LONG_WORD) {
        query.len() / 2
    } else {
        0
    };

    let scorer = Scorer::new(query, query_bytes);
    for (id, text) in corpus {
        if candidates.is_full() {
            break;
        }
        if text.len() < min_len {
            continue;
        }

        let score = scorer.score(text, doc);
        if score > 0.0 {
            candidates.push(Candidate::new(id, text, score));
        }
    }
}

/// Collect candidates from `store`, then score each against its cached text.
pub fn lookup_index<'s>(store: &'s IndexStore, ctx: &mut ScratchContext<'s>) {
    let ScratchContext {
        query,
        query_bytes,
        doc,
        candidates,
        candidate_set,
    } = ctx;

    collect_candidates(store, query, candidate_set);

    let scorer = Scorer::new(query, query_bytes);
    for &ordinal in candidate_set.as_slice() {
        if candidates.is_full() {
            break;
        }
        let Some(cached) = store.doc(ordinal) else {
            continue;
        };

        let score = scorer.score(&cached.text, doc);
        if score > 0.0 {
            candidates.push(Candidate::new(&cached.id, &cached.text, score));
        }
    }
}

/// Fill `set` with the ordinals of every document worth scoring.
pub fn collect_candidates(store: &IndexStore, query: &NormalizedText, set: &mut CandidateSet) {
    set.clear();

    let rarest = query
        .words()
        .map(|word| (word, store.word_postings(word)))
        .filter(|(_, postings)| !postings.is_empty())
        .min_by_key(|(_, postings)| postings.len());

    if let Some((_, postings)) = rarest {
        set.extend(postings);
    }

    for word in query.words() {
        if rarest.is_none_or(|(rarest, _)| rarest != word) {
            set.extend(store.word_postings(word));
        }
        add_prefix_matches(store, word, set);
    }

    if set.is_empty() && TRIGRAM_FALLBACK_LEN.contains(&query.len()) {
        for trigram in sampled_trigrams(query.as_bytes(), TRIGRAM_FALLBACK_STRIDE) {
            set.extend(store.trigram_postings(trigram));
            if set.len() > TRIGRAM_FALLBACK_LIMIT {
                break;
            }
        }
    }
}

/// Add postings of indexed words where one of the pair is a strict prefix of
/// the other, at most [`PREFIX_WINDOW`] bytes apart.
fn add_prefix_matches(store: &IndexStore, word: &[u8], set: &mut CandidateSet) {
    for (indexed, postings) in store.words() {
        if set.is_full() {
            return;
        }
        if is_near_prefix(word, indexed) {
            set.extend(postings);
        }
    }
}

#[inline]
fn is_near_prefix(a: &[u8], b: &[u8]) -> bool {
    let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };
    short.len() < long.len() && long.len() - short.len() <= PREFIX_WINDOW && long.starts_with(short)
}
