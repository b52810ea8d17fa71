//! Informational difficulty display, supplemented from the original
//! Python reference's `HeaderData.bits_to_difficulty`/`compact_to_big`.
//!
//! Not part of the pass/fail verification contract — this core never
//! validates proof-of-work targets (spec Non-goal). It is reported
//! alongside the genesis header's `bits` field purely for human context.
//!
//! The reference computes this with Python's arbitrary-precision integers;
//! real mainnet `bits` exponents (up to 0x1e) shift the mantissa far past
//! what any fixed-width integer holds, so this is done in `f64` throughout
//! rather than via a bignum type — acceptable since the result is a
//! display-only approximation, never compared for equality.

/// Decode a compact ("bits") target into its signed magnitude as an `f64`,
/// matching Bitcoin/Kaspa's compact encoding: a 1-byte exponent and 23-bit
/// mantissa with a sign bit.
fn compact_to_big(compact: u32) -> f64 {
    let mantissa = (compact & 0x007f_ffff) as f64;
    let exponent = (compact >> 24) as i32;
    let magnitude = if exponent <= 3 {
        mantissa / 256f64.powi(3 - exponent)
    } else {
        mantissa * 256f64.powi(exponent - 3)
    };
    if compact & 0x0080_0000 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Compute the display difficulty for a `bits` field: `(2^255 - 1) / target`,
/// rounded to two decimal places. Returns `0.0` for a zero or non-positive target.
pub fn bits_to_difficulty(bits: u32) -> f64 {
    if bits == 0 {
        return 0.0;
    }
    let target = compact_to_big(bits);
    if target <= 0.0 {
        return 0.0;
    }
    let pow_max = (2f64).powi(255) - 1.0;
    let difficulty = pow_max / target;
    (difficulty * 100.0).round() / 100.0
}
