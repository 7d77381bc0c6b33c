//! Utility macros and functions for the packet crate.
//!
//! Besides the `ensure!` macro this module holds the single-byte text helpers
//! shared by the request encoder and the response decoder. Text is mapped to
//! bytes one UTF-16 code unit at a time, keeping only the low byte, and bytes
//! are mapped back to the `char` with the same value. The mapping is lossless
//! for Latin-1 text only; anything outside that range is truncated on the way
//! out and cannot be recovered on the way back.

use bytes::{BufMut, BytesMut};

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
///
/// # Example
///
/// ```ignore
/// ensure!(!words.is_empty(), BuildError::header_name_conversion(name));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

/// Number of UTF-16 code units in `text`, the unit `Content-Length` is counted in.
pub(crate) fn code_unit_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Writes the low byte of every UTF-16 code unit of `text` into `dst`.
pub(crate) fn put_code_units(text: &str, dst: &mut BytesMut) {
    dst.reserve(text.len());
    for unit in text.encode_utf16() {
        dst.put_u8(unit.to_le_bytes()[0]);
    }
}

/// Maps every byte to the `char` with the same code point.
pub(crate) fn decode_latin1(src: &[u8]) -> String {
    src.iter().copied().map(char::from).collect()
}
