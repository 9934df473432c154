use critline_core::config::CritlineConfig;
use critline_core::models::{DetectionMode, ScanRequest};
use critline_scan::{sample_grid, ZeroScanner};
use proptest::prelude::*;

fn scanner() -> ZeroScanner {
    let mut config = CritlineConfig::default();
    config.cache.capacity = Some(0);
    ZeroScanner::new(config).unwrap()
}

fn arb_mode() -> impl Strategy<Value = DetectionMode> {
    prop_oneof![Just(DetectionMode::Threshold), Just(DetectionMode::Refined)]
}

fn arb_request() -> impl Strategy<Value = ScanRequest> {
    (0.5f64..45.0, 5u32..=20, 2usize..80, -4i32..0, arb_mode()).prop_map(
        |(max, digits, samples, exponent, mode)| {
            ScanRequest::new(max, digits)
                .with_sample_count(samples)
                .with_threshold(10f64.powi(exponent) * 5.0)
                .with_mode(mode)
        },
    )
}

// ── Shape of every result ───────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn ordered_on_line_and_contained(request in arb_request()) {
        let result = scanner().scan_request(&request).unwrap();
        prop_assert_eq!(result.samples_evaluated, request.sample_count.unwrap());
        for candidate in &result {
            prop_assert_eq!(candidate.re, 0.5);
            prop_assert!(candidate.im >= 0.0 && candidate.im <= request.max_imaginary);
        }
        let parts = result.imaginary_parts();
        prop_assert!(parts.windows(2).all(|w| w[0] <= w[1]), "unordered: {:?}", parts);
    }
}

// ── Threshold sensitivity ───────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn tighter_threshold_reports_subset(
        request in arb_request(),
        factor in 1e-3f64..1.0,
    ) {
        let scanner = scanner();
        let loose = scanner.scan_request(&request).unwrap();
        let tight_threshold = request.threshold.unwrap() * factor;
        let tight = scanner
            .scan_request(&request.with_threshold(tight_threshold))
            .unwrap();
        prop_assert!(tight.len() <= loose.len());
        for candidate in &tight {
            prop_assert!(loose.candidates.contains(candidate));
        }
    }
}

// ── Determinism and grid independence ───────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn repeated_scan_is_identical(request in arb_request()) {
        let first = scanner().scan_request(&request).unwrap();
        let second = scanner().scan_request(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn threshold_candidates_are_grid_points(
        max in 0.5f64..45.0,
        digits in 5u32..=30,
        samples in 1usize..120,
    ) {
        let request = ScanRequest::new(max, digits)
            .with_sample_count(samples)
            .with_threshold(0.3);
        let result = scanner().scan_request(&request).unwrap();
        let grid = sample_grid(max, samples);
        for candidate in &result {
            prop_assert!(grid.contains(&candidate.im));
        }
    }
}
