//! PDP-11 middle-endian 32-bit integers
//!
//! Each 16-bit half is little-endian, but the high half is stored first:
//! the value `0x1234_5678` is laid out as `34 12 78 56`.

use crate::constants::width::MIDDLE_ENDIAN_32;
use crate::validation::{check_window, window};
use crate::Result;

/// Read a middle-endian integer from four bytes at `offset`
pub fn decode_middle_endian(bytes: &[u8], offset: usize) -> Result<u32> {
    let [b0, b1, b2, b3] = window::<MIDDLE_ENDIAN_32>(bytes, offset)?;
    Ok(u32::from_le_bytes([b2, b3, b0, b1]))
}

/// Serialize `value` into a fresh middle-endian byte array
pub const fn encode_middle_endian(value: u32) -> [u8; MIDDLE_ENDIAN_32] {
    let [lo0, lo1, hi0, hi1] = value.to_le_bytes();
    [hi0, hi1, lo0, lo1]
}

/// Write `value` in middle-endian order into `buf` at `offset`
pub fn write_middle_endian(value: u32, buf: &mut [u8], offset: usize) -> Result<()> {
    check_window(buf.len(), offset, MIDDLE_ENDIAN_32)?;
    buf[offset..offset + MIDDLE_ENDIAN_32].copy_from_slice(&encode_middle_endian(value));
    Ok(())
}

pub fn decode_middle_endian_i32(bytes: &[u8], offset: usize) -> Result<i32> {
    decode_middle_endian(bytes, offset).map(|v| v as i32)
}

pub const fn encode_middle_endian_i32(value: i32) -> [u8; MIDDLE_ENDIAN_32] {
    encode_middle_endian(value as u32)
}
