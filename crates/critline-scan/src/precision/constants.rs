//! π and ln 2 at a given binary precision.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::Fixed;

/// Extra bits carried while summing a constant, dropped at the end.
const CONSTANT_GUARD_BITS: u32 = 16;

/// π via Machin's formula: `π = 16·atan(1/5) − 4·atan(1/239)`.
pub(super) fn pi(bits: u32) -> Fixed {
    let work = bits + CONSTANT_GUARD_BITS;
    let raw = atan_inv(5, work) * 16u32 - atan_inv(239, work) * 4u32;
    Fixed::from_raw(raw >> (CONSTANT_GUARD_BITS as usize))
}

/// ln 2 via `2·atanh(1/3)`.
pub(super) fn ln2(bits: u32) -> Fixed {
    let work = bits + CONSTANT_GUARD_BITS;
    let raw = atanh_inv(3, work) * 2u32;
    Fixed::from_raw(raw >> (CONSTANT_GUARD_BITS as usize))
}

/// `atan(1/x)` scaled by `2^bits`, for integer `x > 1`.
fn atan_inv(x: u64, bits: u32) -> BigInt {
    inverse_series(x, bits, true)
}

/// `atanh(1/x)` scaled by `2^bits`, for integer `x > 1`.
fn atanh_inv(x: u64, bits: u32) -> BigInt {
    inverse_series(x, bits, false)
}

/// `Σ (±1)^k / ((2k+1)·x^(2k+1))` in integer arithmetic.
fn inverse_series(x: u64, bits: u32, alternating: bool) -> BigInt {
    let x_squared = x * x;
    let mut power = (BigInt::one() << (bits as usize)) / x;
    let mut sum = power.clone();
    let mut k: u64 = 1;
    loop {
        power = power / x_squared;
        if power.is_zero() {
            break;
        }
        let term = &power / (2 * k + 1);
        if alternating && k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
        k += 1;
    }
    sum
}
