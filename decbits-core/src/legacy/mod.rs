//! Legacy DEC storage formats
//!
//! Three unrelated encodings that show up in PDP-11 and VAX era files:
//! word-swapped 32-bit integers, D_floating doubles and Radix-50 text.
//! Each codec is an independent set of pure functions; [`LegacyFormat`]
//! only names them and their storage width.

pub mod middle_endian;
pub mod radix50;
pub mod vax;

pub use middle_endian::*;
pub use radix50::*;
pub use vax::*;

use crate::constants::width;

/// Legacy encodings understood by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegacyFormat {
    /// PDP-11 32-bit integer, high 16-bit word first
    MiddleEndian32,
    /// VAX D_floating double
    VaxDouble,
    /// One Radix-50 word holding three characters
    Radix50,
}

impl LegacyFormat {
    /// Storage width in bytes of one value
    pub const fn width(self) -> usize {
        match self {
            LegacyFormat::MiddleEndian32 => width::MIDDLE_ENDIAN_32,
            LegacyFormat::VaxDouble => width::VAX_DOUBLE,
            LegacyFormat::Radix50 => width::RADIX50_WORD,
        }
    }

    /// Number of whole values held by `byte_len` bytes
    pub const fn count_in(self, byte_len: usize) -> usize {
        byte_len / self.width()
    }
}

impl core::fmt::Display for LegacyFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LegacyFormat::MiddleEndian32 => write!(f, "PDP-11 middle-endian int32"),
            LegacyFormat::VaxDouble => write!(f, "VAX D_floating"),
            LegacyFormat::Radix50 => write!(f, "Radix-50"),
        }
    }
}
