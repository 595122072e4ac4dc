//! Multi-value helpers over the single-word legacy codecs
//!
//! Buffers are read like the fixed-width arrays: as many whole values as
//! fit, a trailing partial value is dropped.

use decbits_core::{
    decode_middle_endian, encode_middle_endian, ieee_to_vax, radix50_decode, radix50_encode, radix50_from_le_bytes,
    vax_to_ieee, LegacyFormat, Result,
};
use log::trace;

fn whole_values(bytes: &[u8], format: LegacyFormat) -> std::slice::ChunksExact<'_, u8> {
    let chunks = bytes.chunks_exact(format.width());
    if !chunks.remainder().is_empty() {
        trace!(
            "dropping {} trailing bytes of {format}",
            chunks.remainder().len()
        );
    }
    chunks
}

/// Decode every whole PDP-11 middle-endian integer in `bytes`
pub fn decode_middle_endian_all(bytes: &[u8]) -> Vec<u32> {
    whole_values(bytes, LegacyFormat::MiddleEndian32)
        .filter_map(|chunk| decode_middle_endian(chunk, 0).ok())
        .collect()
}

pub fn encode_middle_endian_all(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|&v| encode_middle_endian(v)).collect()
}

/// Decode every whole VAX D_floating value in `bytes`
pub fn decode_vax_doubles(bytes: &[u8]) -> Vec<f64> {
    whole_values(bytes, LegacyFormat::VaxDouble)
        .filter_map(|chunk| vax_to_ieee(chunk, 0).ok())
        .collect()
}

/// Encode doubles as VAX D_floating, saturating out-of-range values
pub fn encode_vax_doubles(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|&v| ieee_to_vax(v)).collect()
}

/// Pack text of any length into Radix-50 words, three characters per word
///
/// The last word is space padded.
pub fn radix50_encode_text(text: &str) -> Vec<u16> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(3)
        .map(|group| radix50_encode(&group.iter().collect::<String>()))
        .collect()
}

/// Unpack a run of Radix-50 words into one string
pub fn radix50_decode_words(words: &[u16]) -> Result<String> {
    let mut out = String::with_capacity(words.len() * 3);
    for &word in words {
        out.extend(radix50_decode(word)?);
    }
    Ok(out)
}

/// Decode little-endian Radix-50 words straight from a byte buffer
pub fn radix50_decode_le_bytes(bytes: &[u8]) -> Result<String> {
    let words = whole_values(bytes, LegacyFormat::Radix50)
        .map(|chunk| radix50_from_le_bytes(chunk, 0))
        .collect::<Result<Vec<u16>>>()?;
    radix50_decode_words(&words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use decbits_core::{CodecError, VAX_MAX_POSITIVE};

    #[test]
    fn test_middle_endian_buffers() {
        let values = [0u32, 1, 0x1234_5678, u32::MAX];
        let bytes = encode_middle_endian_all(&values);
        assert_eq!(&bytes[8..12], &[0x34, 0x12, 0x78, 0x56]);
        assert_eq!(decode_middle_endian_all(&bytes), values);

        let mut short = bytes.clone();
        short.truncate(15);
        assert_eq!(decode_middle_endian_all(&short), &values[..3]);
    }

    #[test]
    fn test_vax_buffers() {
        let values = [1.0, -0.5, 1e10, 0.0];
        let bytes = encode_vax_doubles(&values);
        assert_eq!(bytes.len(), 32);
        assert_eq!(decode_vax_doubles(&bytes), values);
        assert!(decode_vax_doubles(&bytes[..7]).is_empty());

        let saturated = encode_vax_doubles(&[f64::MAX]);
        assert_eq!(saturated, VAX_MAX_POSITIVE);
    }

    #[test]
    fn test_radix50_text() {
        let words = radix50_encode_text("SWAP.SYS");
        assert_eq!(words.len(), 3);
        assert_eq!(radix50_decode_words(&words).as_deref(), Ok("SWAP.SYS "));

        assert!(radix50_encode_text("").is_empty());
        assert_eq!(
            radix50_decode_words(&[radix50_encode("OK"), 65000]),
            Err(CodecError::InvalidRadix50(65000))
        );
    }

    #[test]
    fn test_radix50_le_bytes() {
        let mut bytes = Vec::new();
        for word in radix50_encode_text("DK0") {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes.push(0x42);
        assert_eq!(radix50_decode_le_bytes(&bytes).as_deref(), Ok("DK0"));
    }
}
