//! decbits - binary codecs for arrays, text and legacy DEC data
//!
//! Builds the multi-value and text conversions on top of the single-word
//! codecs in `decbits-core`.
//!
//! ## Architecture
//!
//! - **decbits-core**: `no_std` single-word codecs, bit vectors, the VAX /
//!   PDP-11 / Radix-50 formats and their validation
//! - **decbits**: whole-array conversion, '0'/'1' text, multi-word legacy
//!   buffers and optional rayon parallelism
//!
//! ## Quick Start
//!
//! ```rust
//! use decbits::{decode_i32s, encode_i32s, ieee_to_vax, radix50_encode_text, vax_to_ieee};
//!
//! let bytes = encode_i32s(&[1, -1]);
//! assert_eq!(bytes, [0u8, 0, 0, 1, 0xff, 0xff, 0xff, 0xff]);
//! assert_eq!(decode_i32s(&bytes), [1, -1]);
//!
//! let vax = ieee_to_vax(1.0);
//! assert_eq!(vax_to_ieee(&vax, 0), Ok(1.0));
//!
//! assert_eq!(radix50_encode_text("SY:").len(), 1);
//! ```
//!
//! ## Features
//!
//! - **parallel** (default): `encode_words_par` / `decode_words_par` on rayon
//! - **serde** (default): `Serialize`/`Deserialize` on `BitOrder`,
//!   `LegacyFormat` and `WordKind`

// Re-export the core codecs
pub use decbits_core::{
    // Single words
    decode_be, encode_be, BigEndianWord, BitWord, WordKind,
    // Bit vectors
    bits_to_byte, bits_to_word, byte_to_bits, byte_to_bits_msb, from_bits, to_bits,
    word_to_bits, BitOrder,
    // Legacy formats
    decode_middle_endian, decode_middle_endian_i32, encode_middle_endian,
    encode_middle_endian_i32, ieee_to_vax, radix50_decode, radix50_decode_str, radix50_encode,
    radix50_from_le_bytes, radix50_to_le_bytes, vax_to_ieee, write_middle_endian, LegacyFormat,
    VAX_MAX_NEGATIVE, VAX_MAX_POSITIVE, VAX_ZERO,
    // Error handling
    CodecError, Result,
};

pub mod fixed_width;
pub mod legacy;
pub mod textual;

pub use fixed_width::*;
pub use legacy::*;
pub use textual::*;
