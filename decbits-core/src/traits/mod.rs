//! Word abstractions shared by the codecs
//!
//! Implemented for the primitive integer and float types only.

pub mod bit_word;
pub mod word;

pub use bit_word::BitWord;
pub use word::{BigEndianWord, WordKind};
