use std::f64::consts::{LN_2, TAU};

use critline_core::constants::{MAX_SUPPORTED_DIGITS, MIN_SUPPORTED_DIGITS};
use critline_core::errors::NumericError;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::{constants, ComplexFixed, Fixed};

/// Bits carried beyond the requested decimal digits. Covers argument
/// reduction, the squaring steps of `exp`, and accumulation over a few
/// hundred summed terms.
pub const GUARD_BITS: u32 = 40;

/// Arguments are divided by `2^HALVINGS` before a Taylor series and the
/// result squared back up.
const HALVINGS: u32 = 8;

/// Upper bound on terms in any Taylor or atanh series.
const MAX_SERIES_TERMS: u64 = 100_000;

/// Largest binary exponent `exp` will produce.
const MAX_EXP_SHIFT: f64 = (1u64 << 20) as f64;

/// Bits of the raw value kept when converting to `f64`.
const F64_KEEP_BITS: u32 = 64;

/// `ceil(digits · log2 10)`.
pub fn digits_to_bits(digits: u32) -> u32 {
    (digits as f64 * std::f64::consts::LOG2_10).ceil() as u32
}

/// Working precision of one scan: the bit count plus the constants every
/// evaluation needs at that precision.
///
/// Created per call and passed explicitly, so two scans at different
/// precisions never share state.
#[derive(Debug, Clone)]
pub struct WorkingPrecision {
    digits: u32,
    bits: u32,
    pi: Fixed,
    two_pi: Fixed,
    ln2: Fixed,
}

impl WorkingPrecision {
    /// Precision for `digits` decimal digits plus [`GUARD_BITS`].
    pub fn from_digits(digits: u32) -> Result<Self, NumericError> {
        if !(MIN_SUPPORTED_DIGITS..=MAX_SUPPORTED_DIGITS).contains(&digits) {
            return Err(NumericError::UnsupportedPrecision {
                digits,
                min: MIN_SUPPORTED_DIGITS,
                max: MAX_SUPPORTED_DIGITS,
            });
        }
        let bits = digits_to_bits(digits) + GUARD_BITS;
        let pi = constants::pi(bits);
        let two_pi = pi.shl(1);
        let ln2 = constants::ln2(bits);
        Ok(Self {
            digits,
            bits,
            pi,
            two_pi,
            ln2,
        })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Fractional bits of every value produced under this precision.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn pi(&self) -> &Fixed {
        &self.pi
    }

    pub fn ln2(&self) -> &Fixed {
        &self.ln2
    }

    pub fn one(&self) -> Fixed {
        Fixed::from_raw(BigInt::one() << (self.bits as usize))
    }

    pub fn from_int(&self, v: i64) -> Fixed {
        Fixed::from_raw(BigInt::from(v) << (self.bits as usize))
    }

    /// Exact conversion of a finite `f64` (truncated below `2^-bits`).
    pub fn from_f64(&self, x: f64) -> Result<Fixed, NumericError> {
        if !x.is_finite() {
            return Err(NumericError::NonFinite { value: x });
        }
        if x == 0.0 {
            return Ok(Fixed::zero());
        }
        let repr = x.to_bits();
        let negative = repr >> 63 == 1;
        let biased = ((repr >> 52) & 0x7ff) as i64;
        let fraction = repr & 0x000f_ffff_ffff_ffff;
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };

        let shift = exponent + self.bits as i64;
        let magnitude = BigInt::from(mantissa);
        let raw = if shift >= 0 {
            magnitude << (shift as usize)
        } else {
            magnitude >> ((-shift) as usize)
        };
        Ok(Fixed::from_raw(if negative { -raw } else { raw }))
    }

    /// Nearest `f64` (to within rounding of the top 64 bits).
    pub fn to_f64(&self, x: &Fixed) -> f64 {
        let dropped = self.bits.saturating_sub(F64_KEEP_BITS);
        let top = x.raw() >> (dropped as usize);
        let scale = 2f64.powi(-((self.bits - dropped) as i32));
        top.to_f64().unwrap_or(f64::NAN) * scale
    }

    pub fn mul(&self, a: &Fixed, b: &Fixed) -> Fixed {
        Fixed::from_raw((a.raw() * b.raw()) >> (self.bits as usize))
    }

    pub fn sqr(&self, a: &Fixed) -> Fixed {
        self.mul(a, a)
    }

    pub fn div(&self, a: &Fixed, b: &Fixed) -> Result<Fixed, NumericError> {
        if b.is_zero() {
            return Err(NumericError::DivisionByZero { context: "fixed" });
        }
        Ok(Fixed::from_raw((a.raw() << (self.bits as usize)) / b.raw()))
    }

    /// `a · numer / denom` for an exact rational. `denom` must be non-zero.
    pub fn mul_ratio(&self, a: &Fixed, numer: &BigInt, denom: &BigInt) -> Fixed {
        Fixed::from_raw(a.raw() * numer / denom)
    }

    /// `e^x` for real `x`.
    pub fn exp(&self, x: &Fixed) -> Result<Fixed, NumericError> {
        let approx = self.to_f64(x);
        let k = (approx / LN_2).round();
        if !k.is_finite() || k.abs() > MAX_EXP_SHIFT {
            return Err(NumericError::Overflow { context: "exp" });
        }
        let k = k as i64;

        // x = k·ln2 + r with |r| ≲ ln2/2
        let r = x - &self.ln2.mul_int(k);
        let y = r.shr(HALVINGS);

        let mut sum = self.one();
        let mut term = self.one();
        let mut i: u64 = 1;
        loop {
            term = self.mul(&term, &y).div_u64(i);
            if term.is_zero() {
                break;
            }
            sum += &term;
            i += 1;
            if i > MAX_SERIES_TERMS {
                return Err(NumericError::NoConvergence {
                    context: "exp",
                    iterations: i as usize,
                });
            }
        }
        for _ in 0..HALVINGS {
            sum = self.sqr(&sum);
        }

        Ok(if k >= 0 {
            sum.shl(k as u32)
        } else {
            sum.shr((-k) as u32)
        })
    }

    /// `e^{iθ} = cos θ + i·sin θ`.
    pub fn exp_i(&self, theta: &Fixed) -> Result<ComplexFixed, NumericError> {
        let approx = self.to_f64(theta);
        let q = (approx / TAU).round();
        // Beyond 2^53 the quotient is no longer an exact integer in f64.
        if !q.is_finite() || q.abs() > 9.0e15 {
            return Err(NumericError::Overflow { context: "exp_i" });
        }
        let r = theta - &self.two_pi.mul_int(q as i64);
        let y = r.shr(HALVINGS);

        let mut cos = self.one();
        let mut sin = Fixed::zero();
        let mut term = self.one();
        let mut i: u64 = 1;
        loop {
            term = self.mul(&term, &y).div_u64(i);
            if term.is_zero() {
                break;
            }
            // i^k cycles through i, -1, -i, 1
            match i % 4 {
                1 => sin += &term,
                2 => cos -= &term,
                3 => sin -= &term,
                _ => cos += &term,
            }
            i += 1;
            if i > MAX_SERIES_TERMS {
                return Err(NumericError::NoConvergence {
                    context: "exp_i",
                    iterations: i as usize,
                });
            }
        }

        let mut z = ComplexFixed::new(cos, sin);
        for _ in 0..HALVINGS {
            z = self.csqr(&z);
        }
        Ok(z)
    }

    /// Natural logarithm of a positive integer.
    pub fn ln_u64(&self, n: u64) -> Result<Fixed, NumericError> {
        if n == 0 {
            return Err(NumericError::Domain { context: "ln" });
        }
        if n == 1 {
            return Ok(Fixed::zero());
        }
        // n = 2^k · m with m in [1, 2)
        let k = 63 - n.leading_zeros();
        let m = Fixed::from_raw((BigInt::from(n) << (self.bits as usize)) >> (k as usize));

        // ln m = 2·atanh(z), z = (m-1)/(m+1) in [0, 1/3)
        let one = self.one();
        let z = self.div(&(&m - &one), &(&m + &one))?;
        let z_squared = self.sqr(&z);
        let mut sum = z.clone();
        let mut power = z;
        let mut j: u64 = 1;
        loop {
            power = self.mul(&power, &z_squared);
            let term = power.div_u64(2 * j + 1);
            if term.is_zero() {
                break;
            }
            sum += &term;
            j += 1;
            if j > MAX_SERIES_TERMS {
                return Err(NumericError::NoConvergence {
                    context: "ln",
                    iterations: j as usize,
                });
            }
        }

        Ok(sum.shl(1) + self.ln2.mul_int(k as i64))
    }

    pub fn cmul(&self, a: &ComplexFixed, b: &ComplexFixed) -> ComplexFixed {
        let re = self.mul(&a.re, &b.re) - self.mul(&a.im, &b.im);
        let im = self.mul(&a.re, &b.im) + self.mul(&a.im, &b.re);
        ComplexFixed::new(re, im)
    }

    pub fn csqr(&self, a: &ComplexFixed) -> ComplexFixed {
        let re = self.sqr(&a.re) - self.sqr(&a.im);
        let im = self.mul(&a.re, &a.im).shl(1);
        ComplexFixed::new(re, im)
    }

    pub fn cdiv(&self, a: &ComplexFixed, b: &ComplexFixed) -> Result<ComplexFixed, NumericError> {
        let norm = self.sqr(&b.re) + self.sqr(&b.im);
        if norm.is_zero() {
            return Err(NumericError::DivisionByZero { context: "complex" });
        }
        let re = self.mul(&a.re, &b.re) + self.mul(&a.im, &b.im);
        let im = self.mul(&a.im, &b.re) - self.mul(&a.re, &b.im);
        Ok(ComplexFixed::new(self.div(&re, &norm)?, self.div(&im, &norm)?))
    }

    /// Both parts of `a` multiplied by the real `x`.
    pub fn cscale(&self, a: &ComplexFixed, x: &Fixed) -> ComplexFixed {
        ComplexFixed::new(self.mul(&a.re, x), self.mul(&a.im, x))
    }

    pub fn cmul_ratio(&self, a: &ComplexFixed, numer: &BigInt, denom: &BigInt) -> ComplexFixed {
        ComplexFixed::new(
            self.mul_ratio(&a.re, numer, denom),
            self.mul_ratio(&a.im, numer, denom),
        )
    }

    /// `|a|` as `f64`.
    pub fn abs_f64(&self, a: &ComplexFixed) -> f64 {
        self.to_f64(&a.re).hypot(self.to_f64(&a.im))
    }
}
