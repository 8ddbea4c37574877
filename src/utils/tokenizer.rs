use crate::utils::runes::{decode_rune, encode_rune, MAX_RUNE_LEN};

/// Byte values that end a word.
pub static WORD_BOUNDARY: [bool; 256] = build_boundary_table();

const BOUNDARY_BYTES: &[u8] = b" \t\n\r.,;:!?-_/\\()[]{}\"'";

const fn build_boundary_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < BOUNDARY_BYTES.len() {
        table[BOUNDARY_BYTES[i] as usize] = true;
        i += 1;
    }
    table
}

#[inline]
pub fn is_word_boundary(byte: u8) -> bool {
    WORD_BOUNDARY[byte as usize]
}

/// Half-open byte range of one word inside a normalized buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    #[inline]
    pub fn slice<'b>(&self, bytes: &'b [u8]) -> &'b [u8] {
        &bytes[self.start..self.end]
    }
}

/// Lowercase `text` into `buffer`, returning the number of bytes written.
///
/// ASCII bytes are folded inline. Anything else goes through the rune codec,
/// so malformed sequences come out as U+FFFD. Writing stops once fewer than
/// four bytes of headroom remain; the rest of the input is dropped.
pub fn normalize_into(text: &[u8], buffer: &mut [u8]) -> usize {
    let limit = buffer.len().saturating_sub(MAX_RUNE_LEN);
    let mut len = 0;
    let mut i = 0;

    while i < text.len() && len < limit {
        let byte = text[i];
        if byte < 0x80 {
            buffer[len] = byte.to_ascii_lowercase();
            len += 1;
            i += 1;
        } else {
            if len + MAX_RUNE_LEN > limit {
                break;
            }
            let (cp, size) = decode_rune(&text[i..]);
            len += encode_rune(cp, &mut buffer[len..]);
            i += size;
        }
    }

    len
}

/// Split normalized bytes into word spans, returning how many were written.
///
/// Stops silently once `spans` is full.
pub fn split_words(normalized: &[u8], spans: &mut [Span]) -> usize {
    let mut count = 0;
    let mut start = 0;

    for (i, &byte) in normalized.iter().enumerate() {
        if count >= spans.len() {
            return count;
        }
        if is_word_boundary(byte) {
            if i > start {
                spans[count] = Span::new(start, i);
                count += 1;
            }
            start = i + 1;
        }
    }

    if start < normalized.len() && count < spans.len() {
        spans[count] = Span::new(start, normalized.len());
        count += 1;
    }

    count
}

/// Fixed-capacity normalized text plus the word spans found in it.
///
/// Buffers are allocated once and reused; refilling never reallocates.
#[derive(Debug, Clone)]
pub struct NormalizedText {
    bytes: Box<[u8]>,
    len: usize,
    spans: Box<[Span]>,
    words: usize,
}

impl NormalizedText {
    pub fn with_capacity(max_bytes: usize, max_words: usize) -> Self {
        Self {
            bytes: vec![0u8; max_bytes].into_boxed_slice(),
            len: 0,
            spans: vec![Span::default(); max_words].into_boxed_slice(),
            words: 0,
        }
    }

    /// Normalize `text` and split it into words.
    pub fn fill(&mut self, text: &[u8]) {
        self.normalize(text);
        self.split();
    }

    /// Normalize `text`, discarding any previous words.
    pub fn normalize(&mut self, text: &[u8]) {
        self.len = normalize_into(text, &mut self.bytes);
        self.words = 0;
    }

    /// Split the current normalized bytes into words.
    pub fn split(&mut self) {
        self.words = split_words(&self.bytes[..self.len], &mut self.spans);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.words
    }

    #[inline]
    pub fn word(&self, index: usize) -> &[u8] {
        self.spans[index].slice(&self.bytes)
    }

    pub fn words(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.spans[..self.words].iter().map(|span| span.slice(&self.bytes))
    }

    pub fn byte_capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn word_capacity(&self) -> usize {
        self.spans.len()
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.words = 0;
    }
}

/// Owned copy of `text` as the engine sees it, without a capacity limit.
pub fn normalize_to_vec(text: &str) -> Vec<u8> {
    let mut buffer = vec![0u8; text.len() * MAX_RUNE_LEN + MAX_RUNE_LEN * 2];
    let len = normalize_into(text.as_bytes(), &mut buffer);
    buffer.truncate(len);
    buffer
}
