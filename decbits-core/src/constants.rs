//! Constants shared by the legacy DEC codecs

/// Radix-50 format constants
pub mod radix50 {
    /// Positional divisors, most significant character first
    pub const DIVISORS: [u16; 3] = [1600, 40, 1];

    /// Number of symbols in the alphabet
    pub const RADIX: u16 = 40;

    /// Characters packed into one code
    pub const CHARS_PER_WORD: usize = 3;

    /// Largest code reachable from three valid symbols (39*1600 + 39*40 + 39)
    pub const MAX_CODE: u16 = 63999;

    /// Character for each symbol value; 29 is unused and prints as a space
    pub const ALPHABET: &[u8; 40] = b" ABCDEFGHIJKLMNOPQRSTUVWXYZ$. 0123456789";

    /// Symbol values with a special meaning
    pub const SPACE: u16 = 0;
    pub const DOLLAR: u16 = 27;
    pub const PERIOD: u16 = 28;
    pub const UNUSED: u16 = 29;
    pub const FIRST_DIGIT: u16 = 30;
}

/// VAX D_floating constants
pub mod vax {
    /// Exponent offset applied when moving from VAX to IEEE-754 (1023 - 129)
    pub const VAX_TO_IEEE_BIAS: i32 = 1023 - 129;

    /// Fraction bits VAX carries beyond IEEE-754 double precision
    pub const EXTRA_FRACTION_BITS: u32 = 3;

    /// Largest VAX exponent field value
    pub const MAX_EXPONENT: i32 = 0xff;

    /// Sign bit of the high 32-bit half
    pub const SIGN_MASK: u32 = 0x8000_0000;
}

/// Byte widths of the fixed-size encodings
pub mod width {
    pub const MIDDLE_ENDIAN_32: usize = 4;
    pub const VAX_DOUBLE: usize = 8;
    pub const RADIX50_WORD: usize = 2;
}
