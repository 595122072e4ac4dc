//! Error types for decbits codec operations

/// Errors that can occur while decoding or encoding a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Fewer bytes remain at `offset` than one word needs
    OutOfRange {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Bit vector or bit count wider than the target word
    BitWidth { requested: usize, max: usize },
    /// Radix-50 code that no three-character group can produce
    InvalidRadix50(u16),
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::OutOfRange {
                offset,
                needed,
                available,
            } => write!(
                f,
                "Out of range: {needed} bytes needed at offset {offset}, buffer holds {available}"
            ),
            CodecError::BitWidth { requested, max } => {
                write!(f, "Bit width {requested} exceeds word width {max}")
            }
            CodecError::InvalidRadix50(code) => {
                write!(f, "Radix-50 code {code} is outside 0..=63999")
            }
        }
    }
}

impl core::error::Error for CodecError {}

impl CodecError {
    /// True for every error raised by a short input buffer
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, CodecError::OutOfRange { .. })
    }
}

/// Result type for decbits operations
pub type Result<T> = core::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CodecError::OutOfRange {
            offset: 2,
            needed: 4,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "Out of range: 4 bytes needed at offset 2, buffer holds 5"
        );
        assert!(err.is_out_of_range());

        let err = CodecError::BitWidth {
            requested: 9,
            max: 8,
        };
        assert_eq!(err.to_string(), "Bit width 9 exceeds word width 8");
        assert!(!err.is_out_of_range());

        assert_eq!(
            CodecError::InvalidRadix50(65535).to_string(),
            "Radix-50 code 65535 is outside 0..=63999"
        );
    }
}
