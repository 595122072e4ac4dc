//! Word to bit-vector conversion
//!
//! A bit vector is a `Vec<bool>` read together with a [`BitOrder`]. With
//! `MsbFirst` the vector reads left to right from the most to the least
//! significant of the requested bits; with `LsbFirst` index `k` holds bit `k`.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::traits::BitWord;
use crate::validation::check_bit_width;
use crate::Result;

/// Mapping between bit significance and vector index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    /// Index 0 holds the most significant requested bit
    #[default]
    MsbFirst,
    /// Index 0 holds the least significant bit
    LsbFirst,
}

impl BitOrder {
    /// Vector index of bit `k` in a vector of `len` bits
    #[inline]
    pub const fn index_of(self, k: usize, len: usize) -> usize {
        match self {
            BitOrder::MsbFirst => len - 1 - k,
            BitOrder::LsbFirst => k,
        }
    }
}

impl core::fmt::Display for BitOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitOrder::MsbFirst => write!(f, "MSB-first"),
            BitOrder::LsbFirst => write!(f, "LSB-first"),
        }
    }
}

/// Expand the low `n` bits of `value` into a bit vector
///
/// Fails with `BitWidth` when `n` exceeds the width of `W`.
#[cfg(feature = "alloc")]
pub fn to_bits<W: BitWord>(value: W, n: usize, order: BitOrder) -> Result<Vec<bool>> {
    check_bit_width(n, W::BITS)?;

    let value = value.to_u32();
    let mut out = vec![false; n];
    for k in 0..n {
        out[order.index_of(k, n)] = (value >> k) & 1 == 1;
    }
    Ok(out)
}

/// Fold a bit vector back into a word
///
/// Inverse of [`to_bits`] for the same order. Fails with `BitWidth` when the
/// vector is longer than `W`.
pub fn from_bits<W: BitWord>(bits: &[bool], order: BitOrder) -> Result<W> {
    check_bit_width(bits.len(), W::BITS)?;

    let len = bits.len();
    let value = bits
        .iter()
        .enumerate()
        .filter(|(_, set)| **set)
        .fold(0u32, |acc, (i, _)| acc | (1 << order.index_of(i, len)));

    Ok(W::from_u32(value))
}

#[cfg(feature = "alloc")]
pub fn byte_to_bits(value: u8, n: usize, order: BitOrder) -> Result<Vec<bool>> {
    to_bits(value, n, order)
}

/// MSB-first expansion, the customary way a byte is written out
#[cfg(feature = "alloc")]
pub fn byte_to_bits_msb(value: u8, n: usize) -> Result<Vec<bool>> {
    to_bits(value, n, BitOrder::MsbFirst)
}

pub fn bits_to_byte(bits: &[bool], order: BitOrder) -> Result<u8> {
    from_bits(bits, order)
}

#[cfg(feature = "alloc")]
pub fn word_to_bits(value: u32, n: usize, order: BitOrder) -> Result<Vec<bool>> {
    to_bits(value, n, order)
}

pub fn bits_to_word(bits: &[bool], order: BitOrder) -> Result<u32> {
    from_bits(bits, order)
}
