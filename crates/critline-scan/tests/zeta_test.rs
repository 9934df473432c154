use critline_core::errors::NumericError;
use critline_scan::precision::WorkingPrecision;
use critline_scan::zeta::{zeta, LineEvaluator, MAX_EULER_MACLAURIN_TERMS};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

// ── Real axis ───────────────────────────────────────────────────────────

#[test]
fn zeta_of_two_is_pi_squared_over_six() {
    let (re, im) = zeta(2.0, 0.0, 30).unwrap();
    assert_close(re, std::f64::consts::PI.powi(2) / 6.0, 1e-14);
    assert!(im.abs() < 1e-20);
}

#[test]
fn zeta_of_three_is_aperys_constant() {
    let (re, _) = zeta(3.0, 0.0, 30).unwrap();
    assert_close(re, 1.202_056_903_159_594_2, 1e-14);
}

#[test]
fn zeta_at_one_half() {
    let (re, _) = zeta(0.5, 0.0, 20).unwrap();
    assert_close(re, -1.460_354_508_809_586_8, 1e-14);
}

#[test]
fn zeta_at_zero_and_minus_one() {
    let (re, _) = zeta(0.0, 0.0, 20).unwrap();
    assert_close(re, -0.5, 1e-15);
    let (re, _) = zeta(-1.0, 0.0, 20).unwrap();
    assert_close(re, -1.0 / 12.0, 1e-15);
}

// ── Critical line ───────────────────────────────────────────────────────

#[test]
fn first_zero_vanishes() {
    let (re, im) = zeta(0.5, 14.134_725_141_734_693, 20).unwrap();
    assert!(re.hypot(im) < 1e-9, "|ζ| = {}", re.hypot(im));
}

#[test]
fn conjugate_symmetry() {
    let (re_pos, im_pos) = zeta(0.5, 7.25, 20).unwrap();
    let (re_neg, im_neg) = zeta(0.5, -7.25, 20).unwrap();
    assert_close(re_neg, re_pos, 1e-13);
    assert_close(im_neg, -im_pos, 1e-13);
}

#[test]
fn evaluator_agrees_with_one_shot() {
    let wp = WorkingPrecision::from_digits(20).unwrap();
    let evaluator = LineEvaluator::new(wp, 0.5, 30.0).unwrap();
    for t in [0.0, 3.5, 21.022_039_638_771_555, 30.0] {
        let expected = zeta(0.5, t, 20).unwrap();
        let magnitude = evaluator.magnitude(t).unwrap();
        assert_close(magnitude, expected.0.hypot(expected.1), 1e-12);
    }
}

#[test]
fn higher_precision_agrees() {
    let low = zeta(0.5, 25.0, 10).unwrap();
    let high = zeta(0.5, 25.0, 50).unwrap();
    assert_close(low.0, high.0, 1e-9);
    assert_close(low.1, high.1, 1e-9);
}

// ── Failures ────────────────────────────────────────────────────────────

#[test]
fn pole_is_an_error() {
    assert_eq!(zeta(1.0, 0.0, 15), Err(NumericError::Pole));
}

#[test]
fn unsupported_precision_is_an_error() {
    assert!(matches!(
        zeta(0.5, 1.0, 0),
        Err(NumericError::UnsupportedPrecision { .. })
    ));
    assert!(matches!(
        zeta(0.5, 1.0, 1001),
        Err(NumericError::UnsupportedPrecision { .. })
    ));
}

#[test]
fn non_finite_input_is_an_error() {
    assert!(zeta(0.5, f64::NAN, 15).is_err());
    assert!(zeta(f64::INFINITY, 0.0, 15).is_err());
}

#[test]
fn evaluator_rejects_t_outside_bound() {
    let wp = WorkingPrecision::from_digits(10).unwrap();
    let evaluator = LineEvaluator::new(wp, 0.5, 5.0).unwrap();
    assert!(matches!(
        evaluator.evaluate(5.5),
        Err(NumericError::Domain { .. })
    ));
}

#[test]
fn extreme_height_needs_too_many_terms() {
    let wp = WorkingPrecision::from_digits(10).unwrap();
    let result = LineEvaluator::new(wp, 0.5, 1e7);
    assert!(matches!(
        result,
        Err(NumericError::TooManyTerms { limit, .. }) if limit == MAX_EULER_MACLAURIN_TERMS
    ));
}
