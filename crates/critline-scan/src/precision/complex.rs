use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::Fixed;

/// Complex fixed-point number. Multiplication and division go through
/// [`WorkingPrecision`](super::WorkingPrecision).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComplexFixed {
    pub re: Fixed,
    pub im: Fixed,
}

impl ComplexFixed {
    pub fn new(re: Fixed, im: Fixed) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self::new(Fixed::zero(), Fixed::zero())
    }

    pub fn from_real(re: Fixed) -> Self {
        Self::new(re, Fixed::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    pub fn conj(&self) -> Self {
        Self::new(self.re.clone(), -&self.im)
    }

    /// `self + x` for real `x`.
    pub fn add_real(&self, x: &Fixed) -> Self {
        Self::new(&self.re + x, self.im.clone())
    }

    pub fn mul_int(&self, k: i64) -> Self {
        Self::new(self.re.mul_int(k), self.im.mul_int(k))
    }

    pub fn div_int(&self, k: i64) -> Self {
        Self::new(self.re.div_int(k), self.im.div_int(k))
    }

    pub fn half(&self) -> Self {
        Self::new(self.re.shr(1), self.im.shr(1))
    }
}

impl Add<&ComplexFixed> for &ComplexFixed {
    type Output = ComplexFixed;

    fn add(self, rhs: &ComplexFixed) -> ComplexFixed {
        ComplexFixed::new(&self.re + &rhs.re, &self.im + &rhs.im)
    }
}

impl Sub<&ComplexFixed> for &ComplexFixed {
    type Output = ComplexFixed;

    fn sub(self, rhs: &ComplexFixed) -> ComplexFixed {
        ComplexFixed::new(&self.re - &rhs.re, &self.im - &rhs.im)
    }
}

impl Neg for &ComplexFixed {
    type Output = ComplexFixed;

    fn neg(self) -> ComplexFixed {
        ComplexFixed::new(-&self.re, -&self.im)
    }
}

impl AddAssign<&ComplexFixed> for ComplexFixed {
    fn add_assign(&mut self, rhs: &ComplexFixed) {
        self.re += &rhs.re;
        self.im += &rhs.im;
    }
}

impl SubAssign<&ComplexFixed> for ComplexFixed {
    fn sub_assign(&mut self, rhs: &ComplexFixed) {
        self.re -= &rhs.re;
        self.im -= &rhs.im;
    }
}
