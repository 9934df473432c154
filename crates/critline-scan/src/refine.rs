//! Bracketed scalar minimization for the refined detection mode.

/// 1/φ, the golden-section shrink factor.
const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Options for the golden-section search.
#[derive(Debug, Clone)]
pub struct GoldenOptions {
    /// Maximum number of bracket reductions.
    pub max_iter: usize,
    /// Stop once the bracket is narrower than this.
    pub tol: f64,
}

impl Default for GoldenOptions {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tol: 1e-12,
        }
    }
}

/// Result from a minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeResult {
    /// The minimum point found.
    pub x: f64,
    /// Function value at `x`.
    pub f_min: f64,
    /// Number of bracket reductions used.
    pub iterations: usize,
    /// Final bracket width.
    pub bracket_width: f64,
}

/// Golden-section search for a minimum of `f` on `[a, b]`.
///
/// Assumes `f` is unimodal on the bracket. Every evaluated point lies in
/// `[a, b]`. Errors from `f` abort the search.
pub fn minimize_golden<F, E>(
    mut f: F,
    a: f64,
    b: f64,
    options: &GoldenOptions,
) -> Result<MinimizeResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
    let mut c = b - INV_PHI * (b - a);
    let mut d = a + INV_PHI * (b - a);
    let mut fc = f(c)?;
    let mut fd = f(d)?;

    let mut iterations = 0;
    while iterations < options.max_iter && (b - a) > options.tol {
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = b - INV_PHI * (b - a);
            fc = f(c)?;
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + INV_PHI * (b - a);
            fd = f(d)?;
        }
        iterations += 1;
    }

    let (x, f_min) = if fc < fd { (c, fc) } else { (d, fd) };
    Ok(MinimizeResult {
        x,
        f_min,
        iterations,
        bracket_width: b - a,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_parabola_minimum() {
        let r = minimize_golden(
            |x| Ok::<_, ()>((x - 1.3) * (x - 1.3)),
            0.0,
            3.0,
            &GoldenOptions::default(),
        )
        .unwrap();
        assert!((r.x - 1.3).abs() < 1e-6);
        assert!(r.bracket_width <= 1e-12 || r.iterations == 100);
    }

    #[test]
    fn finds_v_shaped_minimum() {
        let r = minimize_golden(
            |x| Ok::<_, ()>((x - 14.134_725).abs() * 0.79),
            14.12,
            14.15,
            &GoldenOptions { max_iter: 200, tol: 1e-10 },
        )
        .unwrap();
        assert!((r.x - 14.134_725).abs() < 1e-9);
        assert!(r.f_min < 1e-9);
    }

    #[test]
    fn stays_inside_bracket() {
        let mut seen = Vec::new();
        let _ = minimize_golden(
            |x| {
                seen.push(x);
                Ok::<_, ()>(-x)
            },
            2.0,
            5.0,
            &GoldenOptions::default(),
        );
        assert!(seen.iter().all(|&x| (2.0..=5.0).contains(&x)));
    }

    #[test]
    fn propagates_errors() {
        let r = minimize_golden(|_| Err::<f64, _>("boom"), 0.0, 1.0, &GoldenOptions::default());
        assert_eq!(r.unwrap_err(), "boom");
    }
}
