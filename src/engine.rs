//! Convenience entry points over [`SearchRuntime`].
//!
//! [`SearchEngine`] picks the search mode from the corpus size: small corpora
//! are scanned directly, larger ones go through the engine's index. The free
//! functions run a direct scan on a process-wide runtime and never build an
//! index.

use crate::index::types::Corpus;
use crate::query::executor::{SearchMode, SearchRuntime};
use crate::query::results::SearchResult;
use crate::utils::AppConfig;
use std::sync::OnceLock;

#[derive(Debug)]
pub struct SearchEngine {
    runtime: SearchRuntime,
    cache_threshold: usize,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            runtime: SearchRuntime::with_config(config),
            cache_threshold: config.cache_threshold,
        }
    }

    /// Search `corpus`, returning at most `max_results` owned results.
    pub fn search(&self, corpus: &Corpus, query: &str, max_results: usize) -> Vec<SearchResult> {
        self.runtime
            .search(corpus, query, max_results, self.mode_for(corpus))
    }

    /// Search into `buffer`, returning the filled prefix. The buffer length
    /// is the result cap.
    pub fn search_into<'b>(
        &self,
        corpus: &Corpus,
        query: &str,
        buffer: &'b mut [SearchResult],
    ) -> &'b [SearchResult] {
        let use_cache = self.mode_for(corpus) == SearchMode::Cached;
        self.runtime.search_into(corpus, query, use_cache, buffer)
    }

    pub fn runtime(&self) -> &SearchRuntime {
        &self.runtime
    }

    fn mode_for(&self, corpus: &Corpus) -> SearchMode {
        SearchMode::from_cached(corpus.len() > self.cache_threshold)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn shared_runtime() -> &'static SearchRuntime {
    static SHARED: OnceLock<SearchRuntime> = OnceLock::new();
    SHARED.get_or_init(SearchRuntime::new)
}

/// One-off direct search.
pub fn quick_search(corpus: &Corpus, query: &str, max_results: usize) -> Vec<SearchResult> {
    shared_runtime().search_once(corpus, query, max_results)
}

/// One-off direct search into `buffer`.
pub fn quick_search_into<'b>(
    corpus: &Corpus,
    query: &str,
    buffer: &'b mut [SearchResult],
) -> &'b [SearchResult] {
    shared_runtime().search_into(corpus, query, false, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(entries: &[(&str, &str)]) -> Corpus {
        entries
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn test_small_corpus_skips_index() {
        let engine = SearchEngine::new();
        let data = corpus(&[("a", "apple"), ("b", "banana")]);
        assert_eq!(engine.search(&data, "apple", 5).len(), 1);
        assert_eq!(engine.runtime().index_stats().documents, 0);
    }

    #[test]
    fn test_large_corpus_uses_index() {
        let config = AppConfig {
            cache_threshold: 3,
            ..AppConfig::default()
        };
        let engine = SearchEngine::with_config(&config);
        let data: Corpus = (0..4).map(|i| (format!("d{i}"), format!("mango {i}"))).collect();

        let mut buffer = vec![SearchResult::default(); 2];
        let results = engine.search_into(&data, "mango", &mut buffer);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "d0");
        assert_eq!(engine.runtime().index_stats().documents, 4);
    }

    #[test]
    fn test_quick_search() {
        let data = corpus(&[("doc1", "Hello World"), ("doc2", "Goodbye")]);
        let results = quick_search(&data, "hello", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "doc1");

        let mut buffer = vec![SearchResult::default(); 4];
        assert_eq!(quick_search_into(&data, "goodbye", &mut buffer)[0].id, "doc2");
        assert!(quick_search(&data, "", 10).is_empty());
        assert!(quick_search(&data, "hello", 0).is_empty());
        assert!(quick_search_into(&data, "hello", &mut []).is_empty());
    }
}
