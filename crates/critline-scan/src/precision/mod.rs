//! Call-scoped arbitrary-precision arithmetic.
//!
//! Values are binary fixed-point numbers `raw / 2^bits` over `BigInt`. The
//! bit count lives in [`WorkingPrecision`], which every multiplying or
//! transcendental operation goes through.

mod complex;
mod constants;
mod fixed;
mod working;

pub use complex::ComplexFixed;
pub use fixed::Fixed;
pub use working::{digits_to_bits, WorkingPrecision, GUARD_BITS};
