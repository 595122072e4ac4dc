//! VAX D_floating to IEEE-754 double conversion
//!
//! A D_floating value has a sign bit, an 8-bit exponent biased by 128 and a
//! 55-bit fraction with a hidden leading bit. On disk it is two 32-bit halves,
//! high half first, each half stored as two little-endian 16-bit words:
//!
//! ```text
//! byte:   0    1    2    3    4    5    6    7
//! half:   hi[16..32]  hi[0..16]  lo[16..32]  lo[0..16]
//! ```
//!
//! IEEE-754 keeps 52 fraction bits, so decoding drops three bits and sets a
//! sticky LSB when any of them were non-zero. Encoding cannot represent
//! infinity or NaN: out-of-range exponents saturate to the largest VAX
//! magnitude and tiny values flush to zero.

use log::trace;

use crate::constants::vax::{EXTRA_FRACTION_BITS, MAX_EXPONENT, SIGN_MASK, VAX_TO_IEEE_BIAS};
use crate::constants::width::VAX_DOUBLE;
use crate::validation::window;
use crate::Result;

/// Largest-magnitude positive D_floating pattern
pub const VAX_MAX_POSITIVE: [u8; VAX_DOUBLE] = [0xff, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];

/// Largest-magnitude negative D_floating pattern
pub const VAX_MAX_NEGATIVE: [u8; VAX_DOUBLE] = [0xff; VAX_DOUBLE];

/// D_floating zero; VAX has no negative zero
pub const VAX_ZERO: [u8; VAX_DOUBLE] = [0; VAX_DOUBLE];

/// Convert the D_floating value at `offset` to an IEEE-754 double
///
/// Lossy: the three lowest fraction bits are folded into a sticky bit.
/// Fails with `OutOfRange` when fewer than eight bytes remain.
pub fn vax_to_ieee(bytes: &[u8], offset: usize) -> Result<f64> {
    let d = window::<VAX_DOUBLE>(bytes, offset)?;

    let mut lo = u32::from_le_bytes([d[6], d[7], d[4], d[5]]);
    let mut hi = u32::from_le_bytes([d[2], d[3], d[0], d[1]]);

    let sign = hi & SIGN_MASK;
    let mut exponent = (hi >> 23) & 0xff;
    if exponent != 0 {
        exponent = (exponent as i32 + VAX_TO_IEEE_BIAS) as u32;
    }

    let sticky = lo & 0x7 != 0;

    lo = (lo >> EXTRA_FRACTION_BITS) | (hi << (32 - EXTRA_FRACTION_BITS));
    if sticky {
        lo |= 1;
    }

    hi = ((hi >> EXTRA_FRACTION_BITS) & 0x000f_ffff) | (exponent << 20) | sign;

    Ok(f64::from_bits((u64::from(hi) << 32) | u64::from(lo)))
}

/// Convert an IEEE-754 double to D_floating bytes
///
/// Never fails. Exponents above the VAX range (including infinity and NaN)
/// saturate to [`VAX_MAX_POSITIVE`] / [`VAX_MAX_NEGATIVE`]; exponents below it,
/// and both signed zeros, become [`VAX_ZERO`].
pub fn ieee_to_vax(value: f64) -> [u8; VAX_DOUBLE] {
    let bits = value.to_bits();
    let mut hi = (bits >> 32) as u32;
    let mut lo = bits as u32;

    let sign = hi & SIGN_MASK;
    let mut exponent = ((hi >> 20) & 0x7ff) as i32;
    if exponent != 0 {
        exponent -= VAX_TO_IEEE_BIAS;
    }

    if exponent > MAX_EXPONENT {
        trace!("{value:e} exceeds the VAX exponent range, saturating");
        return if sign == 0 {
            VAX_MAX_POSITIVE
        } else {
            VAX_MAX_NEGATIVE
        };
    }

    if exponent <= 0 {
        if value != 0.0 {
            trace!("{value:e} is below the VAX exponent range, flushing to zero");
        }
        return VAX_ZERO;
    }

    hi = (((hi << EXTRA_FRACTION_BITS) | (lo >> (32 - EXTRA_FRACTION_BITS))) & 0x007f_ffff)
        | ((exponent as u32) << 23)
        | sign;
    lo <<= EXTRA_FRACTION_BITS;

    let h = hi.to_le_bytes();
    let l = lo.to_le_bytes();
    [h[2], h[3], h[0], h[1], l[2], l[3], l[0], l[1]]
}
