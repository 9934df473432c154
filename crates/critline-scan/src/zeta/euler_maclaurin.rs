use std::f64::consts::PI;

use critline_core::errors::NumericError;
use num_bigint::BigInt;
use tracing::debug;

use super::bernoulli::scaled_even_bernoulli;
use crate::precision::{ComplexFixed, Fixed, WorkingPrecision};

/// Largest head-sum length the evaluator will set up.
pub const MAX_EULER_MACLAURIN_TERMS: u64 = 1_000_000;

/// Slack bits added when sizing the Bernoulli tail.
const TAIL_SLACK_BITS: u32 = 16;

/// Evaluates `ζ(σ + it)` for a fixed `σ` and any `|t| ≤ t_bound`.
///
/// ```text
/// ζ(s) = Σ_{n<N} n^{-s} + N^{1-s}/(s-1) + N^{-s}/2
///      + Σ_{k=1..M} B_{2k}/(2k)! · s(s+1)…(s+2k-2) · N^{1-s-2k}
/// ```
///
/// `M = ceil((bits+16)/4) + 1` and `N ≥ (|s|_max + 2M + 1)·2/π` keep the
/// ratio between consecutive tail terms at or below 1/16, so the truncated
/// tail is below the working precision. `ln n` and `n^{-σ}` depend only on
/// `n` and are computed once.
#[derive(Debug)]
pub struct LineEvaluator {
    wp: WorkingPrecision,
    sigma: Fixed,
    t_bound: f64,
    head_terms: u64,
    ln_n: Vec<Fixed>,
    pow_sigma: Vec<Fixed>,
    tail: Vec<(BigInt, BigInt)>,
}

impl LineEvaluator {
    pub fn new(wp: WorkingPrecision, sigma: f64, t_bound: f64) -> Result<Self, NumericError> {
        if !t_bound.is_finite() {
            return Err(NumericError::NonFinite { value: t_bound });
        }
        let sigma_fixed = wp.from_f64(sigma)?;
        let t_bound = t_bound.abs();

        let tail_terms = ((wp.bits() + TAIL_SLACK_BITS).div_ceil(4) + 1) as usize;
        let modulus = sigma.hypot(t_bound);
        let required = ((modulus + 2.0 * tail_terms as f64 + 1.0) * 2.0 / PI)
            .ceil()
            .max(2.0);
        if required > MAX_EULER_MACLAURIN_TERMS as f64 {
            return Err(NumericError::TooManyTerms {
                required: required as u64,
                limit: MAX_EULER_MACLAURIN_TERMS,
            });
        }
        let head_terms = required as u64;

        let mut ln_n = Vec::with_capacity(head_terms as usize);
        let mut pow_sigma = Vec::with_capacity(head_terms as usize);
        for n in 1..=head_terms {
            let ln = wp.ln_u64(n)?;
            pow_sigma.push(wp.exp(&-wp.mul(&sigma_fixed, &ln))?);
            ln_n.push(ln);
        }

        let tail = scaled_even_bernoulli(tail_terms)
            .into_iter()
            .map(|c| (c.numer().clone(), c.denom().clone()))
            .collect();

        debug!(
            digits = wp.digits(),
            bits = wp.bits(),
            head_terms,
            tail_terms,
            sigma,
            t_bound,
            "line evaluator ready"
        );

        Ok(Self {
            wp,
            sigma: sigma_fixed,
            t_bound,
            head_terms,
            ln_n,
            pow_sigma,
            tail,
        })
    }

    pub fn precision(&self) -> &WorkingPrecision {
        &self.wp
    }

    pub fn t_bound(&self) -> f64 {
        self.t_bound
    }

    /// `N`, the number of explicitly summed terms (the last one included).
    pub fn head_terms(&self) -> u64 {
        self.head_terms
    }

    /// `M`, the number of Bernoulli correction terms.
    pub fn tail_terms(&self) -> usize {
        self.tail.len()
    }

    /// `ζ(σ + it)` at the working precision.
    pub fn evaluate(&self, t: f64) -> Result<ComplexFixed, NumericError> {
        if !t.is_finite() {
            return Err(NumericError::NonFinite { value: t });
        }
        if t.abs() > self.t_bound {
            return Err(NumericError::Domain {
                context: "line evaluator (|t| above bound)",
            });
        }
        let wp = &self.wp;
        let t_fixed = wp.from_f64(t)?;
        let s = ComplexFixed::new(self.sigma.clone(), t_fixed.clone());
        let s_minus_one = ComplexFixed::new(&self.sigma - &wp.one(), t_fixed.clone());
        if s_minus_one.is_zero() {
            return Err(NumericError::Pole);
        }

        let mut sum = ComplexFixed::zero();
        for n in 1..self.head_terms {
            sum += &self.inverse_power(n, &t_fixed)?;
        }

        let n = self.head_terms as i64;
        let n_pow = self.inverse_power(self.head_terms, &t_fixed)?;
        sum += &wp.cdiv(&n_pow.mul_int(n), &s_minus_one)?;
        sum += &n_pow.half();

        // rising_k = s(s+1)…(s+2k-2) / N^{2k-1}
        let n_squared = n * n;
        let mut rising = s.div_int(n);
        for (k, (numer, denom)) in self.tail.iter().enumerate() {
            let term = wp.cmul(&rising, &n_pow);
            sum += &wp.cmul_ratio(&term, numer, denom);

            let j = 2 * (k as i64 + 1);
            let a = s.add_real(&wp.from_int(j - 1));
            let b = s.add_real(&wp.from_int(j));
            rising = wp.cmul(&wp.cmul(&rising, &a), &b).div_int(n_squared);
        }

        Ok(sum)
    }

    /// `|ζ(σ + it)|`.
    pub fn magnitude(&self, t: f64) -> Result<f64, NumericError> {
        let value = self.evaluate(t)?;
        let magnitude = self.wp.abs_f64(&value);
        if !magnitude.is_finite() {
            return Err(NumericError::Overflow {
                context: "magnitude",
            });
        }
        Ok(magnitude)
    }

    /// `n^{-s} = n^{-σ} · e^{-i t ln n}`.
    fn inverse_power(&self, n: u64, t: &Fixed) -> Result<ComplexFixed, NumericError> {
        let idx = (n - 1) as usize;
        let theta = self.wp.mul(t, &self.ln_n[idx]);
        let rotation = self.wp.exp_i(&-theta)?;
        Ok(self.wp.cscale(&rotation, &self.pow_sigma[idx]))
    }
}

/// One-shot `ζ(re + i·im)` at `digits` decimal digits, returned as `f64` parts.
pub fn zeta(re: f64, im: f64, digits: u32) -> Result<(f64, f64), NumericError> {
    let wp = WorkingPrecision::from_digits(digits)?;
    let evaluator = LineEvaluator::new(wp, re, im)?;
    let value = evaluator.evaluate(im)?;
    let wp = evaluator.precision();
    Ok((wp.to_f64(&value.re), wp.to_f64(&value.im)))
}
