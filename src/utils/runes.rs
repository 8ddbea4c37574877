//! UTF-8 rune decoding and encoding for the normalizer.
//!
//! Decoding never stalls: a truncated sequence or an unknown leading byte
//! yields [`REPLACEMENT`] with a consumed length of 1. Encoding folds ASCII
//! uppercase to lowercase and leaves every other code point untouched.

/// U+FFFD, substituted for malformed input.
pub const REPLACEMENT: u32 = 0xFFFD;

/// Longest encoding [`encode_rune`] can emit.
pub const MAX_RUNE_LEN: usize = 4;

/// Decode the first code point of `bytes`.
///
/// Returns `(code_point, consumed)`. `consumed` is 0 only for empty input.
#[inline]
pub fn decode_rune(bytes: &[u8]) -> (u32, usize) {
    let Some(&b0) = bytes.first() else {
        return (0, 0);
    };

    match b0 {
        0x00..=0x7F => (b0 as u32, 1),
        0xC0..=0xDF if bytes.len() >= 2 => {
            let cp = ((b0 & 0x1F) as u32) << 6 | (bytes[1] & 0x3F) as u32;
            (cp, 2)
        }
        0xE0..=0xEF if bytes.len() >= 3 => {
            let cp = ((b0 & 0x0F) as u32) << 12
                | ((bytes[1] & 0x3F) as u32) << 6
                | (bytes[2] & 0x3F) as u32;
            (cp, 3)
        }
        0xF0..=0xF7 if bytes.len() >= 4 => {
            let cp = ((b0 & 0x07) as u32) << 18
                | ((bytes[1] & 0x3F) as u32) << 12
                | ((bytes[2] & 0x3F) as u32) << 6
                | (bytes[3] & 0x3F) as u32;
            (cp, 4)
        }
        // Stray continuation byte, invalid lead, or short buffer
        _ => (REPLACEMENT, 1),
    }
}

/// Encode `cp` into `out`, returning the number of bytes written.
///
/// `out` must hold at least [`MAX_RUNE_LEN`] bytes for non-ASCII input.
#[inline]
pub fn encode_rune(cp: u32, out: &mut [u8]) -> usize {
    if cp < 0x80 {
        out[0] = (cp as u8).to_ascii_lowercase();
        return 1;
    }

    if cp < 0x800 {
        out[0] = 0xC0 | (cp >> 6) as u8;
        out[1] = 0x80 | (cp & 0x3F) as u8;
        return 2;
    }

    if cp < 0x10000 {
        out[0] = 0xE0 | (cp >> 12) as u8;
        out[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        out[2] = 0x80 | (cp & 0x3F) as u8;
        return 3;
    }

    out[0] = 0xF0 | ((cp >> 18) & 0x07) as u8;
    out[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
    out[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
    out[3] = 0x80 | (cp & 0x3F) as u8;
    4
}
