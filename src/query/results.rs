//! Copying ranked candidates out of the scratch context.

use crate::query::context::Candidate;
use serde::{Deserialize, Serialize};

/// A ranked match, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub text: String,
    /// Positive; higher is more relevant
    pub score: f32,
}

impl From<&Candidate<'_>> for SearchResult {
    fn from(candidate: &Candidate<'_>) -> Self {
        Self {
            id: candidate.id.to_owned(),
            text: candidate.text.to_owned(),
            score: candidate.score,
        }
    }
}

impl SearchResult {
    /// Overwrite this result with `candidate`, reusing the string buffers.
    pub fn assign(&mut self, candidate: &Candidate<'_>) {
        candidate.id.clone_into(&mut self.id);
        candidate.text.clone_into(&mut self.text);
        self.score = candidate.score;
    }
}

/// New vector with the first `max_results` ranked candidates.
pub fn collect_results(ranked: &[Candidate<'_>], max_results: usize) -> Vec<SearchResult> {
    ranked
        .iter()
        .take(max_results)
        .map(SearchResult::from)
        .collect()
}

/// Copy the first `min(ranked, max_results, buffer)` candidates into
/// `buffer` and return that prefix. Entries past it are left untouched.
pub fn copy_into<'b>(
    ranked: &[Candidate<'_>],
    max_results: usize,
    buffer: &'b mut [SearchResult],
) -> &'b [SearchResult] {
    let limit = ranked.len().min(max_results).min(buffer.len());
    for (slot, candidate) in buffer.iter_mut().zip(&ranked[..limit]) {
        slot.assign(candidate);
    }
    &buffer[..limit]
}
