//! Byte-window and bit-width validation
//!
//! Overflow-safe arithmetic on offsets and lengths, mapped onto
//! [`CodecError`] variants.

use crate::CodecError;

/// Validate that `needed` bytes are available at `offset` in a buffer of `len` bytes
pub const fn check_window(len: usize, offset: usize, needed: usize) -> Result<(), CodecError> {
    let fits = match offset.checked_add(needed) {
        Some(end) => end <= len,
        None => false,
    };

    if !fits {
        return Err(CodecError::OutOfRange {
            offset,
            needed,
            available: len,
        });
    }

    Ok(())
}

/// Borrow exactly `N` bytes starting at `offset`
///
/// Used by every fixed-width reader so a short buffer is reported as
/// `OutOfRange` instead of panicking on a slice index.
pub fn window<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N], CodecError> {
    check_window(bytes.len(), offset, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..offset + N]);
    Ok(out)
}

/// Validate a bit count against the width of the target word
pub const fn check_bit_width(requested: usize, max: usize) -> Result<(), CodecError> {
    if requested > max {
        return Err(CodecError::BitWidth { requested, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_window() {
        assert_eq!(check_window(8, 0, 8), Ok(()));
        assert_eq!(check_window(8, 4, 4), Ok(()));
        assert_eq!(check_window(0, 0, 0), Ok(()));

        assert_eq!(
            check_window(8, 5, 4),
            Err(CodecError::OutOfRange {
                offset: 5,
                needed: 4,
                available: 8
            })
        );
        assert_eq!(
            check_window(3, 0, 4),
            Err(CodecError::OutOfRange {
                offset: 0,
                needed: 4,
                available: 3
            })
        );

        // offset + needed overflows usize
        assert!(check_window(8, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_window() {
        let data = [1u8, 2, 3, 4, 5, 6];
        assert_eq!(window::<2>(&data, 0), Ok([1, 2]));
        assert_eq!(window::<4>(&data, 2), Ok([3, 4, 5, 6]));
        assert!(window::<4>(&data, 3).is_err());
        assert!(window::<1>(&[], 0).is_err());
    }

    #[test]
    fn test_check_bit_width() {
        assert_eq!(check_bit_width(0, 8), Ok(()));
        assert_eq!(check_bit_width(8, 8), Ok(()));
        assert_eq!(
            check_bit_width(9, 8),
            Err(CodecError::BitWidth {
                requested: 9,
                max: 8
            })
        );
        assert_eq!(check_bit_width(32, 32), Ok(()));
    }
}
