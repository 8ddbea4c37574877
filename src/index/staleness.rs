//! Policies deciding whether a cached index still reflects a corpus.

use crate::index::store::IndexStore;
use crate::index::types::Corpus;
use serde::{Deserialize, Serialize};

/// Decides whether `cached` must be rebuilt before serving `corpus`.
pub trait StalenessPolicy: Send + Sync {
    fn is_stale(&self, cached: &IndexStore, corpus: &Corpus) -> bool;
}

/// Size comparison plus a spot check of a few entries.
///
/// Equal-sized corpora that differ only outside the sampled entries go
/// undetected. The sample is taken in the corpus's iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampledStaleness;

/// Most entries inspected by [`SampledStaleness`]
const MAX_SAMPLES: usize = 5;

impl StalenessPolicy for SampledStaleness {
    fn is_stale(&self, cached: &IndexStore, corpus: &Corpus) -> bool {
        if cached.len() != corpus.len() {
            return true;
        }

        let samples = (corpus.len() / 10).clamp(1, MAX_SAMPLES);
        corpus
            .iter()
            .take(samples)
            .any(|(id, text)| cached.get(id) != Some(text.as_str()))
    }
}

/// Compares every entry. Never misses a change.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullDiffStaleness;

impl StalenessPolicy for FullDiffStaleness {
    fn is_stale(&self, cached: &IndexStore, corpus: &Corpus) -> bool {
        cached.len() != corpus.len()
            || corpus
                .iter()
                .any(|(id, text)| cached.get(id) != Some(text.as_str()))
    }
}

/// Configurable choice of staleness policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalenessMode {
    #[default]
    Sampled,
    Full,
}

impl StalenessMode {
    pub fn policy(self) -> Box<dyn StalenessPolicy> {
        match self {
            StalenessMode::Sampled => Box::new(SampledStaleness),
            StalenessMode::Full => Box::new(FullDiffStaleness),
        }
    }
}
