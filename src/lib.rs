//! Binary-to-text encoding over a fixed 62-symbol alphabet.
//!
//! Encodes arbitrary bytes as ASCII text using only `A-Z`, `a-z`, and `0-9`:
//! denser than hex and URL-safe without the `+`, `/`, and `=` of base64.
//! Decoding inverts the transform exactly for every input, including empty
//! and multi-megabyte buffers.
//!
//! The exact format is as follows:
//!
//! - The input is consumed as a bit stream, most significant bit first.
//! - While at least 6 bits remain, the next 6 bits select one output symbol:
//!   a value below 60 is emitted as that digit and consumes all 6 bits; a
//!   value of 60 or above cannot be a digit, so only the leading 5 bits are
//!   consumed and emitted as an escape digit: `11110` as digit 60, `11111`
//!   as digit 61.
//! - If 1 to 5 bits are left at the very end, one final symbol carries their
//!   value, right-aligned. An empty input encodes to an empty string.
//!
//! Digit values map to `A-Z`, `a-z`, `0-9` in order, the base64 digit order
//! with `+` and `/` removed, so most inputs encode to the same text as
//! base64, diverging only around escape digits and at the end:
//!
//! ```
//! assert_eq!(base62::encode_to_string(b"simple"), "c2ltcGxl");
//! assert_eq!(base62::encode_to_string(b"hello, world"), "aGVsbG8WEDu3uTYyA");
//! ```
//!
//! Because of the escape digits, the output length depends on the byte
//! *values*, not just the byte count. [`encoded_len`] and [`decoded_len`]
//! give upper bounds for sizing buffers ahead of a call.
//!
//! Decoding validates every byte against the alphabet and reports the
//! offset of the first byte that is not a symbol; an all-valid input whose
//! length cannot result from any encoding (such as a lone symbol, which is
//! too short to carry a whole byte) is reported as truncated instead.

// for benchmarks
#[cfg(test)]
use criterion as _;

mod alphabet;


/// Error produced when decoding malformed input.
///
/// Decoding is the only fallible operation; encoding accepts every byte
/// sequence. On error the destination buffer contents are unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input contained a byte outside the 62-symbol alphabet.
    #[error("invalid symbol at input offset {offset}")]
    InvalidSymbol {
        /// Index of the first byte that is not an alphabet symbol.
        offset: usize,
    },
    /// The input length cannot correspond to any complete encoding.
    #[error("input truncated: length matches no complete encoding")]
    Truncated,
}

/// Returns an upper bound on the encoded length of `n` input bytes.
///
/// The bound is reached when every symbol is an escape digit covering 5
/// bits. The actual length also depends on the input byte values and may be
/// smaller; [`encode`] returns the exact count.
#[inline]
#[must_use]
pub const fn encoded_len(n: usize) -> usize {
    (n * 8).div_ceil(5)
}

/// Returns an upper bound on the decoded length of `n` encoded bytes.
///
/// The bound assumes every symbol covers 6 bits. The actual length may be
/// smaller; [`decode`] returns the exact count.
#[inline]
#[must_use]
pub const fn decoded_len(n: usize) -> usize {
    n * 6 / 8
}

/// Encodes `src` into `dst`, returning the number of bytes written.
///
/// Writes only ASCII alphabet symbols. The written length is at most
/// [`encoded_len`]`(src.len())` and depends on the input byte values.
/// Encoding never fails and performs no allocation.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`encoded_len`]`(src.len())`.
#[must_use = "the number of bytes written is needed to slice the output"]
#[expect(clippy::cast_possible_truncation)]
pub fn encode(dst: &mut [u8], src: &[u8]) -> usize {
    assert!(
        dst.len() >= encoded_len(src.len()),
        "destination buffer too small for encoded output"
    );

    let mut acc = 0u32;
    let mut bits = 0u32; // bits buffered in `acc`, at most 13
    let mut written = 0;

    for &byte in src {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 6 {
            let group = (acc >> (bits - 6)) & 0x3F;
            let (digit, used) = match group {
                0..=59 => (group as u8, 6),
                60 | 61 => (60, 5),
                _ => (61, 5),
            };
            bits -= used;
            acc &= (1 << bits) - 1;
            dst[written] = alphabet::symbol(digit);
            written += 1;
        }
    }

    // 1 to 5 leftover bits become one right-aligned final symbol
    if bits > 0 {
        dst[written] = alphabet::symbol(acc as u8);
        written += 1;
    }

    written
}

/// Decodes `src` into `dst`, returning the number of bytes written.
///
/// The written length is at most [`decoded_len`]`(src.len())`.
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`] with the offset of the first byte that
/// is not an alphabet symbol, or [`Error::Truncated`] if all bytes are
/// valid but the input length cannot result from any encoding. On error
/// the contents of `dst` are unspecified.
///
/// # Panics
///
/// Panics if `dst` is shorter than [`decoded_len`]`(src.len())`.
#[expect(clippy::cast_possible_truncation)]
pub fn decode(dst: &mut [u8], src: &[u8]) -> Result<usize, Error> {
    assert!(
        dst.len() >= decoded_len(src.len()),
        "destination buffer too small for decoded output"
    );

    let Some((&last, head)) = src.split_last() else {
        return Ok(0);
    };

    let mut acc = 0u32;
    let mut bits = 0u32; // pending bits in `acc`, at most 7 after draining
    let mut written = 0;

    for (offset, &byte) in head.iter().enumerate() {
        let Some(digit) = alphabet::digit(byte) else {
            return Err(Error::InvalidSymbol { offset });
        };
        match digit {
            60 => {
                acc = (acc << 5) | 0b11110;
                bits += 5;
            }
            61 => {
                acc = (acc << 5) | 0b11111;
                bits += 5;
            }
            _ => {
                acc = (acc << 6) | u32::from(digit);
                bits += 6;
            }
        }
        while bits >= 8 {
            bits -= 8;
            dst[written] = (acc >> bits) as u8;
            written += 1;
            acc &= (1 << bits) - 1;
        }
    }

    let Some(digit) = alphabet::digit(last) else {
        return Err(Error::InvalidSymbol {
            offset: src.len() - 1,
        });
    };

    // The final symbol carries exactly the bits that complete the pending
    // byte. No pending bits means no byte sequence encodes to this length.
    if bits == 0 {
        return Err(Error::Truncated);
    }
    let need = 8 - bits;
    let mask = (1u8 << need) - 1;
    dst[written] = ((acc << need) as u8) | (digit & mask);
    Ok(written + 1)
}

/// Encodes `src`, returning the result as an owned [`String`].
///
/// Equivalent to [`encode`] with a buffer sized via [`encoded_len`].
#[must_use]
pub fn encode_to_string(src: &[u8]) -> String {
    let mut buf = vec![0u8; encoded_len(src.len())];
    let len = encode(&mut buf, src);
    buf.truncate(len);

    debug_assert!(buf.is_ascii(), "encoded output must be ascii");
    // SAFETY: `encode` writes only alphabet symbols, all of which are ASCII.
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Decodes `src`, returning the reconstructed bytes as an owned [`Vec`].
///
/// Equivalent to [`decode`] with a buffer sized via [`decoded_len`].
///
/// # Errors
///
/// Returns the same errors as [`decode`].
pub fn decode_string(src: &str) -> Result<Vec<u8>, Error> {
    let src = src.as_bytes();
    let mut buf = vec![0u8; decoded_len(src.len())];
    let len = decode(&mut buf, src)?;
    buf.truncate(len);
    Ok(buf)
}
