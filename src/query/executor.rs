use crate::index::staleness::{SampledStaleness, StalenessPolicy};
use crate::index::stats::IndexStats;
use crate::index::store::IndexStore;
use crate::index::types::Corpus;
use crate::query::context::{Candidate, ScratchContext};
use crate::query::discovery;
use crate::query::pool::ContextPool;
use crate::query::ranker::rank;
use crate::query::results::{collect_results, copy_into, SearchResult};
use crate::utils::{is_word_boundary, AppConfig};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use tracing::{debug, trace};

/// How candidates are found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Score every document of the corpus
    Direct,
    /// Look candidates up in the runtime's index, rebuilding it when stale
    Cached,
}

impl SearchMode {
    pub fn from_cached(use_cache: bool) -> Self {
        if use_cache {
            SearchMode::Cached
        } else {
            SearchMode::Direct
        }
    }
}

/// Search runtime: a context pool plus an index store, owned together.
///
/// Runtimes share nothing with each other. One runtime may serve many
/// threads at once; the index is rebuilt under an exclusive lock and read
/// under a shared one.
pub struct SearchRuntime {
    store: RwLock<IndexStore>,
    policy: Box<dyn StalenessPolicy>,
    pool: ContextPool,
}

impl SearchRuntime {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self::with_parts(config.staleness.policy(), config.effective_pool_max_idle())
    }

    /// Runtime with a custom staleness policy and the default pool size
    pub fn with_policy(policy: Box<dyn StalenessPolicy>) -> Self {
        Self::with_parts(policy, AppConfig::default().effective_pool_max_idle())
    }

    fn with_parts(policy: Box<dyn StalenessPolicy>, max_idle: usize) -> Self {
        Self {
            store: RwLock::new(IndexStore::new()),
            policy,
            pool: ContextPool::new(max_idle),
        }
    }

    /// Uncached search returning a new vector
    pub fn search_once(&self, corpus: &Corpus, query: &str, max_results: usize) -> Vec<SearchResult> {
        self.search(corpus, query, max_results, SearchMode::Direct)
    }

    /// Search through this runtime's index, rebuilding it if the corpus changed
    pub fn search_cached(&self, corpus: &Corpus, query: &str, max_results: usize) -> Vec<SearchResult> {
        self.search(corpus, query, max_results, SearchMode::Cached)
    }

    pub fn search(
        &self,
        corpus: &Corpus,
        query: &str,
        max_results: usize,
        mode: SearchMode,
    ) -> Vec<SearchResult> {
        if max_results == 0 {
            return Vec::new();
        }
        self.execute(corpus, query, mode, |ranked| collect_results(ranked, max_results))
    }

    /// Search into `buffer`, returning the filled prefix.
    ///
    /// At most `buffer.len()` results are written. The returned slice is
    /// overwritten by the next search that reuses the buffer.
    pub fn search_into<'b>(
        &self,
        corpus: &Corpus,
        query: &str,
        use_cache: bool,
        buffer: &'b mut [SearchResult],
    ) -> &'b [SearchResult] {
        if buffer.is_empty() {
            return &[];
        }
        let cap = buffer.len();
        self.execute(corpus, query, SearchMode::from_cached(use_cache), move |ranked| {
            copy_into(ranked, cap, buffer)
        })
    }

    /// Bring the index up to date with `corpus` and report its size.
    pub fn index_corpus(&self, corpus: &Corpus) -> IndexStats {
        self.fresh_store(corpus).stats()
    }

    /// Size of the index as last built
    pub fn index_stats(&self) -> IndexStats {
        self.store.read().stats()
    }

    /// Scratch contexts waiting in this runtime's pool
    pub fn idle_contexts(&self) -> usize {
        self.pool.idle_count()
    }

    /// Run one search and hand the ranked candidates to `emit`.
    ///
    /// Degenerate input (no documents, no query words) yields `R::default()`
    /// without touching the index.
    fn execute<R: Default>(
        &self,
        corpus: &Corpus,
        query: &str,
        mode: SearchMode,
        emit: impl FnOnce(&[Candidate<'_>]) -> R,
    ) -> R {
        if corpus.is_empty() || query.bytes().all(is_word_boundary) {
            return R::default();
        }

        match mode {
            SearchMode::Direct => {
                let mut ctx = self.pool.checkout();
                if !ctx.load_query(query) {
                    return R::default();
                }
                discovery::scan_corpus(corpus, &mut ctx);
                finish(&mut ctx, mode, emit)
            }
            SearchMode::Cached => {
                // Declared first so the context, which borrows from it, drops first
                let store = self.fresh_store(corpus);
                let mut ctx = self.pool.checkout();
                if !ctx.load_query(query) {
                    return R::default();
                }
                discovery::lookup_index(&store, &mut ctx);
                finish(&mut ctx, mode, emit)
            }
        }
    }

    /// Shared access to an index that matches `corpus` under the policy.
    fn fresh_store(&self, corpus: &Corpus) -> RwLockReadGuard<'_, IndexStore> {
        let store = self.store.read();
        if !self.policy.is_stale(&store, corpus) {
            return store;
        }
        drop(store);

        let mut store = self.store.write();
        // Another thread may have rebuilt while we waited
        if self.policy.is_stale(&store, corpus) {
            debug!(
                target: "memsearch::index",
                cached = store.len(),
                documents = corpus.len(),
                "Index is stale"
            );
            store.rebuild(corpus);
        }
        RwLockWriteGuard::downgrade(store)
    }
}

fn finish<R>(
    ctx: &mut ScratchContext<'_>,
    mode: SearchMode,
    emit: impl FnOnce(&[Candidate<'_>]) -> R,
) -> R {
    rank(ctx.candidates.as_mut_slice());
    trace!(?mode, candidates = ctx.candidates.len(), "Search finished");
    emit(ctx.candidates.as_slice())
}

impl Default for SearchRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SearchRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRuntime")
            .field("indexed", &self.store.read().len())
            .field("pool", &self.pool)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::staleness::FullDiffStaleness;

    fn corpus(entries: &[(&str, &str)]) -> Corpus {
        entries
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    fn zeph() -> Corpus {
        corpus(&[
            ("user1", "Zephen Blakewood fictional software architect"),
            ("user2", "Zeph Blake fictional engineer"),
        ])
    }

    #[test]
    fn test_zeph_ranking_both_modes() {
        let runtime = SearchRuntime::new();
        let data = zeph();
        for mode in [SearchMode::Direct, SearchMode::Cached] {
            let results = runtime.search(&data, "Zeph", 2, mode);
            assert_eq!(results.len(), 2, "{mode:?}");
            assert_eq!(results[0].id, "user2");
            assert_eq!(results[0].score, 2.0);
            assert_eq!(results[1].id, "user1");
            assert_eq!(results[1].score, 1.0);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let runtime = SearchRuntime::new();
        let data = zeph();
        assert!(runtime.search_once(&Corpus::new(), "Zeph", 5).is_empty());
        assert!(runtime.search_once(&data, "", 5).is_empty());
        assert!(runtime.search_once(&data, " ,;\t", 5).is_empty());
        assert!(runtime.search_once(&data, "Zeph", 0).is_empty());
        assert!(runtime.search_cached(&data, "", 5).is_empty());
        assert!(runtime.search_into(&data, "Zeph", true, &mut []).is_empty());
        // Nothing above needed an index
        assert_eq!(runtime.index_stats().documents, 0);
    }

    #[test]
    fn test_search_into_caps_at_buffer() {
        let runtime = SearchRuntime::new();
        let data = corpus(&[
            ("doc1", "Hello World"),
            ("doc2", "Goodbye World"),
            ("doc3", "Hello Goodbye"),
        ]);
        let mut buffer = vec![SearchResult::default(); 2];
        for use_cache in [false, true] {
            let results = runtime.search_into(&data, "Hello", use_cache, &mut buffer);
            let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["doc1", "doc3"]);
        }

        let mut one = vec![SearchResult::default(); 1];
        assert_eq!(runtime.search_into(&data, "world", false, &mut one).len(), 1);
    }

    #[test]
    fn test_cached_rebuilds_on_change() {
        let runtime = SearchRuntime::new();
        let first = corpus(&[("a", "apple pie")]);
        assert_eq!(runtime.search_cached(&first, "apple", 5).len(), 1);
        assert_eq!(runtime.index_stats().documents, 1);

        let second = corpus(&[("a", "apple pie"), ("b", "apple tart")]);
        assert_eq!(runtime.search_cached(&second, "apple", 5).len(), 2);
        assert_eq!(runtime.index_stats().documents, 2);

        let replaced = corpus(&[("c", "cherry")]);
        assert!(runtime.search_cached(&replaced, "apple", 5).is_empty());
        assert_eq!(runtime.search_cached(&replaced, "cherry", 5)[0].id, "c");
    }

    #[test]
    fn test_full_diff_policy() {
        let runtime = SearchRuntime::with_policy(Box::new(FullDiffStaleness));
        let mut data: Corpus = (0..30).map(|i| (format!("d{i:02}"), format!("filler {i}"))).collect();
        runtime.search_cached(&data, "filler", 1);

        // Same size, one changed entry; only a full diff is sure to see it
        data.insert("d17".to_string(), "kiwi".to_string());
        let results = runtime.search_cached(&data, "kiwi", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "d17");
    }

    #[test]
    fn test_index_corpus() {
        let runtime = SearchRuntime::new();
        let stats = runtime.index_corpus(&zeph());
        assert_eq!(stats.documents, 2);
        assert_eq!(runtime.index_stats(), stats);
    }

    #[test]
    fn test_contexts_return_to_pool() {
        let runtime = SearchRuntime::new();
        let data = zeph();
        runtime.search_once(&data, "zeph", 5);
        runtime.search_cached(&data, "zeph", 5);
        assert_eq!(runtime.idle_contexts(), 1);
    }

    #[test]
    fn test_runtimes_are_independent() {
        let a = SearchRuntime::new();
        let b = SearchRuntime::new();
        a.search_cached(&zeph(), "zeph", 5);
        assert_eq!(a.index_stats().documents, 2);
        assert_eq!(b.index_stats().documents, 0);
    }

    #[test]
    fn test_search_mode_from_cached() {
        assert_eq!(SearchMode::from_cached(true), SearchMode::Cached);
        assert_eq!(SearchMode::from_cached(false), SearchMode::Direct);
    }
}
