//! Byte-presence bitmap for cheap negative checks.
//!
//! Before a document is split and compared word by word, the scorer checks
//! whether it shares at least one byte value with the query. A miss means no
//! word can match.

/// Set of byte values, one bit per value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteSet {
    bits: [u64; 4],
}

impl ByteSet {
    pub const fn new() -> Self {
        Self { bits: [0; 4] }
    }

    /// Set containing every byte of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::new();
        set.extend(bytes);
        set
    }

    #[inline]
    pub fn insert(&mut self, byte: u8) {
        self.bits[(byte >> 6) as usize] |= 1u64 << (byte & 63);
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.insert(b);
        }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    /// Whether any byte of `bytes` is in the set.
    #[inline]
    pub fn intersects(&self, bytes: &[u8]) -> bool {
        bytes.iter().any(|&b| self.contains(b))
    }

    pub fn clear(&mut self) {
        self.bits = [0; 4];
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }
}
