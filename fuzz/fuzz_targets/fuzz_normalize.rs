#![no_main]

use libfuzzer_sys::fuzz_target;
use memsearch::utils::{decode_rune, normalize_into, split_words, Span};

fuzz_target!(|data: &[u8]| {
    // Decoding must always make progress on non-empty input
    let mut rest = data;
    while !rest.is_empty() {
        let (_, consumed) = decode_rune(rest);
        assert!(consumed >= 1 && consumed <= rest.len());
        rest = &rest[consumed..];
    }

    let mut buffer = [0u8; 256];
    let len = normalize_into(data, &mut buffer);
    assert!(len <= buffer.len());

    let mut spans = [Span::default(); 16];
    let count = split_words(&buffer[..len], &mut spans);
    for span in &spans[..count] {
        assert!(!span.is_empty() && span.end <= len);
    }
});
