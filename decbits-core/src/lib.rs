#![cfg_attr(not(test), no_std)]

//! decbits core - bit-exact binary codecs
//!
//! Pure conversions between numeric words, bit vectors and
//! byte sequences, plus the legacy DEC formats still found in old data
//! files: PDP-11 middle-endian integers, VAX D_floating doubles and
//! Radix-50 text.
//!
//! Everything here is a stateless function over value types. Functions that
//! return a `Vec` or `String` need the `alloc` feature.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bits;
pub mod constants;
pub mod error;
pub mod legacy;
pub mod traits;
pub mod validation;

pub use bits::*;
pub use error::*;
pub use legacy::*;
pub use traits::*;

/// Encode a single word into a fresh big-endian byte array
pub fn encode_be<W: BigEndianWord>(word: W) -> W::Bytes {
    word.to_be_array()
}

/// Decode a single big-endian word at `offset`
pub fn decode_be<W: BigEndianWord>(bytes: &[u8], offset: usize) -> Result<W> {
    W::read_be(bytes, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_helpers() {
        assert_eq!(encode_be(0x0102_0304_0506_0708u64), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(decode_be::<i16>(&[0xff, 0xfe], 0), Ok(-2));
        assert_eq!(decode_be::<f32>(&encode_be(0.1f32), 0), Ok(0.1));
        assert!(decode_be::<u64>(&[0; 7], 0).unwrap_err().is_out_of_range());
    }
}
