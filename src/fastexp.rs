//! Fast `exp` approximations for `f32`.
//!
//! Both functions build the result directly in the IEEE-754 bit pattern:
//! `x / ln 2` scaled by `2^23` lands the integer part in the exponent field
//! and the fraction in the mantissa, so reinterpreting the bits gives a
//! piecewise-linear `2^(x / ln 2)`. The `K` constant shifts that line to
//! minimize a chosen error norm.
//!
//! - `very_fast_exp`: the bit trick alone (max relative error ~3%)
//! - `fast_exp`: the bit trick times a quadratic correction evaluated on the
//!   mantissa (max relative error ~0.7%)

/// Minimizes the maximum relative error (~2.98%).
pub const K_TUNED_MINIMAX: i32 = 366_393;
/// Minimizes the mean relative error (~1.48%).
pub const K_TUNED_L1: i32 = 545_948;
/// Minimizes the RMS relative error (~1.77%).
pub const K_TUNED_L2: i32 = 486_412;

/// `2^23 / ln 2`, rounded to the nearest integer.
const SCALE: f32 = 12_102_203.0;
/// Exponent bias shifted into the exponent field.
const EXP_BIAS: i32 = 127 << 23;
const MANTISSA_MASK: i32 = 0x7f_ffff;

const P0: f32 = 1.469_318_866_729_736_328_125;
const P1: f32 = -0.671_999_752_521_514_892_578_125;
const P2: f32 = 0.226_705_178_618_431_091_308_593_75;

/// First-order `exp(x)` with the minimax constant.
pub fn very_fast_exp(x: f32) -> f32 {
    very_fast_exp_with(x, K_TUNED_MINIMAX)
}

/// First-order `exp(x)` with an explicit tuning constant.
pub fn very_fast_exp_with(x: f32, k: i32) -> f32 {
    f32::from_bits(first_order_bits(x, k) as u32)
}

/// Corrected `exp(x)` with the minimax constant.
pub fn fast_exp(x: f32) -> f32 {
    fast_exp_with(x, K_TUNED_MINIMAX)
}

/// Corrected `exp(x)` with an explicit tuning constant.
pub fn fast_exp_with(x: f32, k: i32) -> f32 {
    let bits = first_order_bits(x, k);
    let first_order = f32::from_bits(bits as u32);

    // Mantissa of the first-order result as a value in [1, 2).
    let m = f32::from_bits(((bits & MANTISSA_MASK) | EXP_BIAS) as u32);
    let correction = m.mul_add(P2, P1).mul_add(m, P0);
    first_order * correction
}

fn first_order_bits(x: f32, k: i32) -> i32 {
    // Float-to-int `as` truncates toward zero and saturates out of range.
    let base = (x * SCALE) as i32;
    base.wrapping_add(EXP_BIAS).wrapping_sub(k)
}
