//! Shared corpora for integration tests.
#![allow(dead_code)]

use memsearch::index::Corpus;

/// Words that never share a trigram or a two-byte start or end, so every
/// positive score comes from a word-level match.
pub const FRUIT: [&str; 8] = [
    "apple", "banana", "cherry", "kiwi", "mango", "lemon", "peach", "grape",
];

pub fn corpus(entries: &[(&str, &str)]) -> Corpus {
    entries
        .iter()
        .map(|(id, text)| (id.to_string(), text.to_string()))
        .collect()
}

pub fn people() -> Corpus {
    corpus(&[
        ("user1", "Zephen Blakewood fictional software architect"),
        ("user2", "Zeph Blake fictional engineer"),
    ])
}

pub fn greetings() -> Corpus {
    corpus(&[
        ("doc1", "Hello World"),
        ("doc2", "Goodbye World"),
        ("doc3", "Hello Goodbye"),
    ])
}

pub fn cjk() -> Corpus {
    corpus(&[
        ("p1", "石田花子"),
        ("p2", "李测试"),
        ("p3", "Ünïcödé ТЕКСТ mixed"),
    ])
}

/// `count` documents of fruit words, deterministic for a given count
pub fn fruit_corpus(count: usize) -> Corpus {
    (0..count)
        .map(|i| {
            let words: Vec<&str> = (0..1 + i % 5)
                .map(|j| FRUIT[(i * 7 + j * 3) % FRUIT.len()])
                .collect();
            (format!("doc{i:05}"), words.join(" "))
        })
        .collect()
}
