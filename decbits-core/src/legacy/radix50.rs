//! DEC Radix-50 text packing
//!
//! Three characters from a 40-symbol alphabet packed into one 16-bit word:
//! `code = c0 * 1600 + c1 * 40 + c2`.
//!
//! | value | symbol |
//! |-------|--------|
//! | 0     | space  |
//! | 1-26  | A-Z    |
//! | 27    | `$`    |
//! | 28    | `.`    |
//! | 29    | unused, decodes to space |
//! | 30-39 | 0-9    |

#[cfg(feature = "alloc")]
use alloc::string::String;

use log::trace;

use crate::constants::radix50::{
    ALPHABET, CHARS_PER_WORD, DIVISORS, DOLLAR, FIRST_DIGIT, MAX_CODE, PERIOD, RADIX, SPACE,
};
use crate::constants::width::RADIX50_WORD;
use crate::validation::window;
use crate::{CodecError, Result};

/// Symbol value for one character
///
/// Letters are case-insensitive. Space and any character outside the
/// alphabet map to 0.
pub const fn symbol_value(c: char) -> u16 {
    match c {
        '$' => DOLLAR,
        '.' => PERIOD,
        '0'..='9' => c as u16 - '0' as u16 + FIRST_DIGIT,
        'A'..='Z' => c as u16 - 'A' as u16 + 1,
        'a'..='z' => c as u16 - 'a' as u16 + 1,
        _ => SPACE,
    }
}

/// Pack up to three characters into a Radix-50 word
///
/// Missing characters are padded with spaces; characters past the third
/// are ignored.
pub fn radix50_encode(text: &str) -> u16 {
    let mut chars = text.chars();
    (0..CHARS_PER_WORD).fold(0u16, |acc, _| {
        let value = chars.next().map_or(SPACE, symbol_value);
        acc * RADIX + value
    })
}

/// Unpack a Radix-50 word into its three characters
///
/// Codes above 63999 cannot come from three valid symbols and are rejected
/// with `InvalidRadix50`.
pub fn radix50_decode(code: u16) -> Result<[char; CHARS_PER_WORD]> {
    if code > MAX_CODE {
        trace!("rejecting Radix-50 code {code}");
        return Err(CodecError::InvalidRadix50(code));
    }

    let mut rest = code;
    let mut out = [' '; CHARS_PER_WORD];
    for (slot, &divisor) in out.iter_mut().zip(DIVISORS.iter()) {
        let value = rest / divisor;
        *slot = ALPHABET[value as usize] as char;
        rest -= value * divisor;
    }

    Ok(out)
}

#[cfg(feature = "alloc")]
pub fn radix50_decode_str(code: u16) -> Result<String> {
    radix50_decode(code).map(|chars| chars.iter().collect())
}

/// Encode to the two-byte little-endian storage form
pub fn radix50_to_le_bytes(text: &str) -> [u8; RADIX50_WORD] {
    radix50_encode(text).to_le_bytes()
}

/// Read a little-endian Radix-50 word at `offset`
pub fn radix50_from_le_bytes(bytes: &[u8], offset: usize) -> Result<u16> {
    window::<RADIX50_WORD>(bytes, offset).map(u16::from_le_bytes)
}
