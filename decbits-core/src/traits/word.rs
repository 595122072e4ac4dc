//! Fixed-width numeric words and their big-endian byte layout
//!
//! Byte order is always explicit: every word is serialized most significant
//! byte first, independent of the host. Floats use their IEEE-754 bit
//! pattern.

use crate::validation::{check_window, window};
use crate::Result;

/// Numeric kinds understood by the fixed-width codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum WordKind {
    I16 = 0,
    U16 = 1,
    I32 = 2,
    U32 = 3,
    I64 = 4,
    U64 = 5,
    F32 = 6,
    F64 = 7,
}

impl WordKind {
    /// Size in bytes of one encoded word
    pub const fn size_bytes(self) -> usize {
        match self {
            WordKind::I16 | WordKind::U16 => 2,
            WordKind::I32 | WordKind::U32 | WordKind::F32 => 4,
            WordKind::I64 | WordKind::U64 | WordKind::F64 => 8,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, WordKind::F32 | WordKind::F64)
    }
}

impl core::fmt::Display for WordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            WordKind::I16 => "i16",
            WordKind::U16 => "u16",
            WordKind::I32 => "i32",
            WordKind::U32 => "u32",
            WordKind::I64 => "i64",
            WordKind::U64 => "u64",
            WordKind::F32 => "f32",
            WordKind::F64 => "f64",
        };
        write!(f, "{name}")
    }
}

/// A numeric word with a big-endian wire form
///
/// `Copy + Send + Sync` so slices of words can be split across threads by
/// the bulk converters.
pub trait BigEndianWord: Copy + PartialEq + Send + Sync + 'static {
    /// Encoded size in bytes
    const WIDTH: usize;

    /// Fixed-size byte array holding one encoded word
    type Bytes: AsRef<[u8]> + Copy;

    /// Kind tag for this word type
    fn kind() -> WordKind;

    /// Serialize into a fresh big-endian byte array
    fn to_be_array(self) -> Self::Bytes;

    /// Read one word at `offset`, failing with `OutOfRange` on a short buffer
    fn read_be(bytes: &[u8], offset: usize) -> Result<Self>;

    /// Write one word at `offset` of a caller-provided buffer
    fn write_be(self, out: &mut [u8], offset: usize) -> Result<()> {
        check_window(out.len(), offset, Self::WIDTH)?;
        out[offset..offset + Self::WIDTH].copy_from_slice(self.to_be_array().as_ref());
        Ok(())
    }
}

macro_rules! impl_big_endian_word {
    ($type:ty, $kind:ident) => {
        impl BigEndianWord for $type {
            const WIDTH: usize = core::mem::size_of::<$type>();

            type Bytes = [u8; core::mem::size_of::<$type>()];

            fn kind() -> WordKind {
                WordKind::$kind
            }

            fn to_be_array(self) -> Self::Bytes {
                self.to_be_bytes()
            }

            fn read_be(bytes: &[u8], offset: usize) -> Result<Self> {
                window::<{ core::mem::size_of::<$type>() }>(bytes, offset).map(<$type>::from_be_bytes)
            }
        }
    };
}

impl_big_endian_word!(i16, I16);
impl_big_endian_word!(u16, U16);
impl_big_endian_word!(i32, I32);
impl_big_endian_word!(u32, U32);
impl_big_endian_word!(i64, I64);
impl_big_endian_word!(u64, U64);
impl_big_endian_word!(f32, F32);
impl_big_endian_word!(f64, F64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecError;

    #[test]
    fn test_big_endian_layout() {
        assert_eq!(0x1234i16.to_be_array(), [0x12, 0x34]);
        assert_eq!(0xdead_beefu32.to_be_array(), [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!((-1i64).to_be_array(), [0xff; 8]);
        assert_eq!(1.0f32.to_be_array(), [0x3f, 0x80, 0x00, 0x00]);
        assert_eq!(
            (-2.5f64).to_be_array(),
            [0xc0, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_read_be_at_offset() {
        let data = [0x00, 0x01, 0x02, 0x03, 0x04];
        assert_eq!(u16::read_be(&data, 1), Ok(0x0102));
        assert_eq!(i32::read_be(&data, 1), Ok(0x0102_0304));
        assert_eq!(
            u32::read_be(&data, 2),
            Err(CodecError::OutOfRange {
                offset: 2,
                needed: 4,
                available: 5
            })
        );
        assert!(f64::read_be(&data, 0).is_err());
    }

    #[test]
    fn test_write_be() {
        let mut buf = [0u8; 6];
        0x0a0bu16.write_be(&mut buf, 4).unwrap();
        assert_eq!(buf, [0, 0, 0, 0, 0x0a, 0x0b]);
        assert!(0u32.write_be(&mut buf, 3).is_err());
        // failed write leaves the buffer untouched
        assert_eq!(buf, [0, 0, 0, 0, 0x0a, 0x0b]);
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(<i16 as BigEndianWord>::kind(), WordKind::I16);
        assert_eq!(<f64 as BigEndianWord>::kind().size_bytes(), 8);
        assert_eq!(<f32 as BigEndianWord>::WIDTH, 4);
        assert!(WordKind::F32.is_float());
        assert!(!WordKind::U64.is_float());
        assert_eq!(WordKind::U16.to_string(), "u16");
    }
}
