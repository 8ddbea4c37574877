use crate::index::types::{bytes_to_trigram, Trigram};
use memchr::memmem;

/// Trigrams starting at every `stride`-th offset of `bytes`.
///
/// Yields nothing for inputs shorter than three bytes. A stride of zero is
/// treated as one.
pub fn sampled_trigrams(bytes: &[u8], stride: usize) -> impl Iterator<Item = Trigram> + '_ {
    let last = bytes.len().checked_sub(3);
    last.into_iter()
        .flat_map(move |last| (0..=last).step_by(stride.max(1)))
        .map(move |i| bytes_to_trigram(bytes[i], bytes[i + 1], bytes[i + 2]))
}

/// Stride used when indexing a document: at most ~100 samples per document.
#[inline]
pub fn index_stride(len: usize) -> usize {
    (len / 100).max(1)
}

/// Unique sampled trigrams of a document, sorted ascending.
pub fn extract_trigrams(content: &[u8]) -> Vec<Trigram> {
    let mut trigrams: Vec<Trigram> = sampled_trigrams(content, index_stride(content.len())).collect();
    trigrams.sort_unstable();
    trigrams.dedup();
    trigrams
}

/// Whether `needle` occurs anywhere in `haystack`.
#[inline]
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.len() < needle.len() {
        return false;
    }
    memmem::find(haystack, needle).is_some()
}
