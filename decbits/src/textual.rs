//! '0'/'1' text to and from bit vectors and packed bytes
//!
//! Text is always written most significant bit first. Packed byte arrays
//! are little-endian at the byte level: byte 0 holds the lowest 8 bits of
//! the numeral.

/// One bit per character, `true` for '1'
///
/// Any other character reads as `false`.
pub fn string_to_bits(text: &str) -> Vec<bool> {
    text.chars().map(|c| c == '1').collect()
}

/// One '0'/'1' character per bit, in vector order
pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&set| if set { '1' } else { '0' }).collect()
}

/// Pack a binary numeral into `ceil(len / 8)` bytes, least significant byte first
///
/// Spaces are removed before packing, so grouped input like `"1010 0101"`
/// is accepted. Bit `k` of the numeral, counted from the rightmost digit,
/// lands in bit `k % 8` of byte `k / 8`.
pub fn string_to_packed_bytes(text: &str) -> Vec<u8> {
    let digits: Vec<char> = text.chars().filter(|&c| c != ' ').collect();

    let mut out = vec![0u8; digits.len().div_ceil(8)];
    for (k, &digit) in digits.iter().rev().enumerate() {
        if digit == '1' {
            out[k / 8] |= 1 << (k % 8);
        }
    }
    out
}

/// Readable form of a packed byte array
///
/// Bytes are printed from the highest index down, each MSB-first, so the
/// result reads as one binary numeral and feeds straight back into
/// [`string_to_packed_bytes`].
pub fn packed_bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().rev().map(|byte| format!("{byte:08b}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_bits() {
        assert_eq!(string_to_bits("1011"), vec![true, false, true, true]);
        assert_eq!(string_to_bits(""), Vec::<bool>::new());
        assert_eq!(string_to_bits("1x1"), vec![true, false, true]);
    }

    #[test]
    fn test_bits_to_string() {
        assert_eq!(bits_to_string(&[true, false, true, true]), "1011");
        assert_eq!(bits_to_string(&[]), "");
        let text = "0010110111";
        assert_eq!(bits_to_string(&string_to_bits(text)), text);
    }

    #[test]
    fn test_packed_bytes() {
        assert_eq!(string_to_packed_bytes("10000000"), vec![0x80]);
        assert_eq!(string_to_packed_bytes("00000001"), vec![0x01]);
        assert_eq!(string_to_packed_bytes("1"), vec![0x01]);
        assert_eq!(string_to_packed_bytes("100000000"), vec![0x00, 0x01]);
        assert_eq!(string_to_packed_bytes("1010 0101"), vec![0xa5]);
        assert_eq!(string_to_packed_bytes("0000 0001 1111 1110"), vec![0xfe, 0x01]);
        assert!(string_to_packed_bytes("   ").is_empty());
    }

    #[test]
    fn test_readable_form() {
        assert_eq!(packed_bytes_to_string(&[0xfe, 0x01]), "0000000111111110");
        assert_eq!(packed_bytes_to_string(&[]), "");

        let bytes = [0x00, 0x80, 0x7f, 0x01];
        assert_eq!(string_to_packed_bytes(&packed_bytes_to_string(&bytes)), bytes);
    }
}
