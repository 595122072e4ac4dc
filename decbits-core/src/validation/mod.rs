//! Buffer and width validation for the decbits codecs
//!
//! Pure checks with no I/O. Every single-word read goes through these
//! before touching the buffer.

pub mod bounds;

pub use bounds::{check_bit_width, check_window, window};
