//! Arrays of fixed-width words to and from big-endian byte sequences
//!
//! Encoding always produces `len * W::WIDTH` bytes. Decoding reads
//! `floor(len / W::WIDTH)` words and silently drops a trailing partial word.

use decbits_core::BigEndianWord;
use log::trace;

/// Encode every word big-endian, back to back
pub fn encode_words<W: BigEndianWord>(words: &[W]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * W::WIDTH);
    for &word in words {
        out.extend_from_slice(word.to_be_array().as_ref());
    }
    out
}

/// Decode as many whole words as `bytes` holds
pub fn decode_words<W: BigEndianWord>(bytes: &[u8]) -> Vec<W> {
    let chunks = bytes.chunks_exact(W::WIDTH);
    if !chunks.remainder().is_empty() {
        trace!(
            "dropping {} trailing bytes while decoding {}",
            chunks.remainder().len(),
            W::kind()
        );
    }

    // chunks_exact never yields a short chunk, so read_be cannot fail here
    chunks.filter_map(|chunk| W::read_be(chunk, 0).ok()).collect()
}

/// Decode an optional buffer; a missing buffer decodes to no words
pub fn decode_words_opt<W: BigEndianWord>(bytes: Option<&[u8]>) -> Vec<W> {
    bytes.map_or_else(Vec::new, decode_words::<W>)
}

macro_rules! fixed_width_codec {
    ($type:ty, $encode:ident, $decode:ident) => {
        #[doc = concat!("Encode `", stringify!($type), "` words big-endian")]
        pub fn $encode(words: &[$type]) -> Vec<u8> {
            encode_words(words)
        }

        #[doc = concat!("Decode big-endian `", stringify!($type), "` words, dropping a partial tail")]
        pub fn $decode(bytes: &[u8]) -> Vec<$type> {
            decode_words(bytes)
        }
    };
}

fixed_width_codec!(i16, encode_i16s, decode_i16s);
fixed_width_codec!(u16, encode_u16s, decode_u16s);
fixed_width_codec!(i32, encode_i32s, decode_i32s);
fixed_width_codec!(u32, encode_u32s, decode_u32s);
fixed_width_codec!(i64, encode_i64s, decode_i64s);
fixed_width_codec!(u64, encode_u64s, decode_u64s);
fixed_width_codec!(f32, encode_f32s, decode_f32s);
fixed_width_codec!(f64, encode_f64s, decode_f64s);

#[cfg(feature = "parallel")]
pub use parallel::{decode_words_par, encode_words_par, PARALLEL_THRESHOLD_WORDS};

#[cfg(feature = "parallel")]
mod parallel {
    use super::{decode_words, encode_words};
    use decbits_core::BigEndianWord;
    use log::debug;
    use rayon::prelude::*;

    /// Inputs shorter than this many words are converted on the calling thread
    pub const PARALLEL_THRESHOLD_WORDS: usize = 64 * 1024;

    /// Words handled per rayon task
    const BLOCK_WORDS: usize = 8 * 1024;

    /// Parallel [`encode_words`]; output is identical to the serial version
    pub fn encode_words_par<W: BigEndianWord>(words: &[W]) -> Vec<u8> {
        if words.len() < PARALLEL_THRESHOLD_WORDS {
            return encode_words(words);
        }

        debug!(
            "encoding {} {} words across {} threads",
            words.len(),
            W::kind(),
            rayon::current_num_threads()
        );

        let mut out = vec![0u8; words.len() * W::WIDTH];
        out.par_chunks_mut(BLOCK_WORDS * W::WIDTH)
            .zip(words.par_chunks(BLOCK_WORDS))
            .for_each(|(dst, block)| {
                for (slot, word) in dst.chunks_exact_mut(W::WIDTH).zip(block) {
                    slot.copy_from_slice(word.to_be_array().as_ref());
                }
            });
        out
    }

    /// Parallel [`decode_words`]; output is identical to the serial version
    pub fn decode_words_par<W: BigEndianWord>(bytes: &[u8]) -> Vec<W> {
        if bytes.len() / W::WIDTH < PARALLEL_THRESHOLD_WORDS {
            return decode_words(bytes);
        }

        debug!(
            "decoding {} bytes of {} across {} threads",
            bytes.len(),
            W::kind(),
            rayon::current_num_threads()
        );

        // block size is a whole number of words, so only the last block can
        // carry a partial word and decode_words drops it
        let blocks: Vec<Vec<W>> = bytes
            .par_chunks(BLOCK_WORDS * W::WIDTH)
            .map(decode_words::<W>)
            .collect();
        blocks.concat()
    }
}
