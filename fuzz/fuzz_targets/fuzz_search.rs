#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use memsearch::index::Corpus;
use memsearch::{SearchResult, SearchRuntime};

#[derive(Debug, Arbitrary)]
struct Input {
    docs: Vec<(String, String)>,
    query: String,
    max_results: u8,
    buffer_len: u8,
}

fuzz_target!(|input: Input| {
    let corpus: Corpus = input.docs.into_iter().take(64).collect();
    let runtime = SearchRuntime::new();
    let max = input.max_results as usize;

    let direct = runtime.search_once(&corpus, &input.query, max);
    let cached = runtime.search_cached(&corpus, &input.query, max);
    assert!(direct.len() <= max && cached.len() <= max);
    for result in direct.iter().chain(&cached) {
        assert!(result.score > 0.0);
        assert_eq!(corpus.get(&result.id), Some(&result.text));
    }

    let mut buffer = vec![SearchResult::default(); input.buffer_len as usize % 32];
    let cap = buffer.len();
    let filled = runtime.search_into(&corpus, &input.query, true, &mut buffer);
    assert!(filled.len() <= cap);
});
