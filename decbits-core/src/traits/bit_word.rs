//! Words that can be viewed as a sequence of bits

/// An unsigned word of at most 32 bits
pub trait BitWord: Copy + PartialEq {
    /// Number of bits in the word
    const BITS: usize;

    /// Widen to `u32` without changing the bit pattern
    fn to_u32(self) -> u32;

    /// Narrow from `u32`; callers guarantee the value fits in `BITS`
    fn from_u32(value: u32) -> Self;
}

macro_rules! impl_bit_word {
    ($type:ty) => {
        impl BitWord for $type {
            const BITS: usize = <$type>::BITS as usize;

            fn to_u32(self) -> u32 {
                self as u32
            }

            fn from_u32(value: u32) -> Self {
                value as $type
            }
        }
    };
}

impl_bit_word!(u8);
impl_bit_word!(u16);
impl_bit_word!(u32);
