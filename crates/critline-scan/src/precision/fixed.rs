use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Binary fixed-point number `raw / 2^bits`.
///
/// The scale is not stored; it belongs to the [`WorkingPrecision`](super::WorkingPrecision)
/// that produced the value. Addition and subtraction are exact and need no
/// context. Mixing values of different precisions is a logic error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fixed {
    raw: BigInt,
}

impl Fixed {
    pub fn from_raw(raw: BigInt) -> Self {
        Self { raw }
    }

    pub fn zero() -> Self {
        Self {
            raw: BigInt::zero(),
        }
    }

    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    pub fn into_raw(self) -> BigInt {
        self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self::from_raw(self.raw.abs())
    }

    /// Multiply by `2^n`.
    pub fn shl(&self, n: u32) -> Self {
        Self::from_raw(&self.raw << (n as usize))
    }

    /// Divide by `2^n`, rounding toward negative infinity.
    pub fn shr(&self, n: u32) -> Self {
        Self::from_raw(&self.raw >> (n as usize))
    }

    pub fn mul_int(&self, k: i64) -> Self {
        Self::from_raw(&self.raw * k)
    }

    /// Divide by a positive integer, truncating toward zero. `k` must be non-zero.
    pub fn div_u64(&self, k: u64) -> Self {
        debug_assert!(k != 0);
        Self::from_raw(&self.raw / k)
    }

    /// Divide by a non-zero signed integer, truncating toward zero.
    pub fn div_int(&self, k: i64) -> Self {
        debug_assert!(k != 0);
        Self::from_raw(&self.raw / k)
    }
}

impl Add<&Fixed> for &Fixed {
    type Output = Fixed;

    fn add(self, rhs: &Fixed) -> Fixed {
        Fixed::from_raw(&self.raw + &rhs.raw)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(self.raw + rhs.raw)
    }
}

impl Sub<&Fixed> for &Fixed {
    type Output = Fixed;

    fn sub(self, rhs: &Fixed) -> Fixed {
        Fixed::from_raw(&self.raw - &rhs.raw)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed::from_raw(self.raw - rhs.raw)
    }
}

impl Neg for &Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed::from_raw(-&self.raw)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed::from_raw(-self.raw)
    }
}

impl AddAssign<&Fixed> for Fixed {
    fn add_assign(&mut self, rhs: &Fixed) {
        self.raw += &rhs.raw;
    }
}

impl SubAssign<&Fixed> for Fixed {
    fn sub_assign(&mut self, rhs: &Fixed) {
        self.raw -= &rhs.raw;
    }
}
