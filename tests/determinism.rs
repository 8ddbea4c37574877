//! Cached and direct search must agree wherever the index can see every
//! match, and buffered search must stay inside its buffer.

mod fixtures;

use fixtures::{fruit_corpus, FRUIT};
use memsearch::index::Corpus;
use memsearch::{SearchResult, SearchRuntime};
use proptest::prelude::*;

fn fruit_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(FRUIT.to_vec())
}

/// A fruit word or one of its prefixes of at least three characters
fn query_term() -> impl Strategy<Value = String> {
    (fruit_word(), 3usize..=6).prop_map(|(word, len)| word[..len.min(word.len())].to_string())
}

fn fruit_docs() -> impl Strategy<Value = Corpus> {
    prop::collection::vec(prop::collection::vec(fruit_word(), 1..6), 1..40).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, words)| (format!("doc{i:03}"), words.join(" ")))
            .collect()
    })
}

fn fruit_query() -> impl Strategy<Value = String> {
    (prop::collection::vec(query_term(), 1..4), any::<bool>()).prop_map(|(terms, upper)| {
        let query = terms.join(" ");
        if upper { query.to_ascii_uppercase() } else { query }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cached_matches_direct(corpus in fruit_docs(), query in fruit_query()) {
        let runtime = SearchRuntime::new();
        let direct = runtime.search_once(&corpus, &query, 1000);
        let cached = runtime.search_cached(&corpus, &query, 1000);
        prop_assert_eq!(direct, cached);
    }

    #[test]
    fn prop_results_sorted(corpus in fruit_docs(), query in fruit_query()) {
        let runtime = SearchRuntime::new();
        let results = runtime.search_once(&corpus, &query, 1000);
        for pair in results.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].id < pair[1].id)
            );
        }
        for result in &results {
            prop_assert!(result.score > 0.0);
            prop_assert_eq!(&corpus[&result.id], &result.text);
        }
    }

    #[test]
    fn prop_search_into_stays_in_bounds(
        corpus in fruit_docs(),
        query in fruit_query(),
        cap in 0usize..8,
        use_cache in any::<bool>(),
    ) {
        let runtime = SearchRuntime::new();
        let sentinel = SearchResult {
            id: "sentinel".into(),
            text: "untouched".into(),
            score: -1.0,
        };
        let mut buffer = vec![sentinel.clone(); cap + 4];

        let filled = runtime.search_into(&corpus, &query, use_cache, &mut buffer[..cap]).len();
        prop_assert!(filled <= cap);

        let expected = runtime.search_once(&corpus, &query, cap);
        prop_assert_eq!(&buffer[..filled], expected.as_slice());
        prop_assert!(buffer[cap..].iter().all(|slot| *slot == sentinel));
    }
}

#[test]
fn cached_matches_direct_on_larger_corpus() {
    let corpus = fruit_corpus(500);
    let runtime = SearchRuntime::new();
    for query in ["apple", "ban", "kiwi mango", "PEACH grape lemon", "che"] {
        assert_eq!(
            runtime.search_once(&corpus, query, 2000),
            runtime.search_cached(&corpus, query, 2000),
            "{query}"
        );
    }
}

#[test]
fn repeated_searches_are_stable() {
    let corpus = fruit_corpus(120);
    let runtime = SearchRuntime::new();
    let first = runtime.search_cached(&corpus, "mango lemon", 50);
    for _ in 0..5 {
        runtime.search_once(&corpus, "cherry", 10);
        assert_eq!(runtime.search_cached(&corpus, "mango lemon", 50), first);
    }
}
