//! The fixed 62-symbol alphabet and its inverse lookup table.
//!
//! Digit values 0 to 61 map to `A-Z`, `a-z`, and `0-9` in that order, the
//! base64 digit order with `+` and `/` removed. The inverse table is total
//! over all 256 byte values: every byte outside the alphabet, including
//! whitespace, the `=` padding of other encodings, and bytes with the high
//! bit set, maps to [`INVALID`].
//!
//! Both tables are built at compile time and never mutated, so they can be
//! read from any number of threads without synchronization.

/// Number of symbols in the alphabet.
pub const BASE: usize = 62;

/// Digit-value-to-symbol table. A digit's numeric value is its index.
pub const ENCODE: &[u8; BASE] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Marker in [`DECODE`] for bytes that are not alphabet symbols.
pub const INVALID: u8 = 0xFF;

/// Symbol-to-digit-value table, total over all 256 byte values.
pub const DECODE: [u8; 256] = build_decode_table();

#[expect(clippy::cast_possible_truncation)]
const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut digit = 0;
    while digit < BASE {
        let symbol = ENCODE[digit];
        assert!(
            table[symbol as usize] == INVALID,
            "alphabet must not contain duplicate symbols"
        );
        table[symbol as usize] = digit as u8;
        digit += 1;
    }
    table
}

/// Returns the symbol byte for a digit value.
///
/// # Panics
///
/// Panics if `digit` is 62 or greater. The codec only ever produces digits
/// in range.
#[inline]
#[must_use]
pub const fn symbol(digit: u8) -> u8 {
    ENCODE[digit as usize]
}

/// Returns the digit value for a symbol byte, or [`None`] if the byte is
/// not part of the alphabet.
#[inline]
#[must_use]
pub const fn digit(symbol: u8) -> Option<u8> {
    match DECODE[symbol as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_inverse() {
        for value in 0..62u8 {
            assert_eq!(digit(symbol(value)), Some(value), "digit {value}");
        }
    }

    #[test]
    fn lookup_is_total() {
        for byte in 0..=u8::MAX {
            let expected = ENCODE.iter().position(|&s| s == byte);
            assert_eq!(
                digit(byte).map(usize::from),
                expected,
                "mismatch for byte {byte:#04x}"
            );
        }
    }

    #[test]
    fn symbols_are_printable_ascii() {
        assert!(ENCODE.iter().all(|s| s.is_ascii_alphanumeric()));
    }

    #[test]
    fn rejects_other_base_encoding_bytes() {
        for byte in [b'+', b'/', b'=', b'-', b'_', b' ', b'\n', 0x80, 0xFF] {
            assert_eq!(digit(byte), None, "byte {byte:#04x} must be invalid");
        }
    }
}
