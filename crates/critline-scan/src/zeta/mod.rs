//! Riemann zeta evaluation by Euler–Maclaurin summation.

mod bernoulli;
mod euler_maclaurin;

pub use bernoulli::scaled_even_bernoulli;
pub use euler_maclaurin::{zeta, LineEvaluator, MAX_EULER_MACLAURIN_TERMS};
