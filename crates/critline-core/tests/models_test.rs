use critline_core::models::{
    nearest_known_zero, DetectionMode, ScanRequest, ScanResult, ZeroCandidate, KNOWN_ZEROS,
};

#[test]
fn known_zeros_are_ordered_on_the_critical_line() {
    assert_eq!(KNOWN_ZEROS.len(), 10);
    assert!(KNOWN_ZEROS.iter().all(|z| z.re == 0.5));
    assert!(KNOWN_ZEROS.windows(2).all(|w| w[0].im < w[1].im));
    assert!((KNOWN_ZEROS[0].im - 14.134_725).abs() < 1e-6);
    assert!((KNOWN_ZEROS[5].im - 37.586_178).abs() < 1e-6);
}

#[test]
fn nearest_known_zero_picks_closest() {
    assert_eq!(nearest_known_zero(0.0), &KNOWN_ZEROS[0]);
    assert_eq!(nearest_known_zero(37.6), &KNOWN_ZEROS[5]);
    assert_eq!(nearest_known_zero(1000.0), &KNOWN_ZEROS[9]);
}

#[test]
fn candidate_conversions() {
    let c = ZeroCandidate::on_critical_line(21.0);
    assert_eq!(c.as_tuple(), (0.5, 21.0));
    assert_eq!(ZeroCandidate::from((0.5, 21.0)), c);
}

#[test]
fn request_builder_sets_overrides() {
    let request = ScanRequest::new(40.0, 20)
        .with_sample_count(500)
        .with_threshold(1e-4)
        .with_mode(DetectionMode::Refined);
    assert_eq!(request.sample_count, Some(500));
    assert_eq!(request.threshold, Some(1e-4));
    assert_eq!(request.mode, Some(DetectionMode::Refined));
    assert_eq!(ScanRequest::new(40.0, 20).sample_count, None);
}

#[test]
fn request_json_omits_unset_overrides() {
    let json = serde_json::to_string(&ScanRequest::new(15.0, 15)).unwrap();
    assert_eq!(json, r#"{"max_imaginary":15.0,"precision_digits":15}"#);
    let parsed: ScanRequest =
        serde_json::from_str(r#"{"max_imaginary":15.0,"precision_digits":15,"mode":"refined"}"#)
            .unwrap();
    assert_eq!(parsed.mode, Some(DetectionMode::Refined));
}

#[test]
fn empty_result_is_distinct_and_serializable() {
    let empty = ScanResult::new(Vec::new(), 1000);
    assert!(empty.is_empty());
    assert!(!empty.has_candidate_near(14.13, 1.0));
    let json = serde_json::to_string(&empty).unwrap();
    let back: ScanResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, empty);
}

#[test]
fn result_accessors() {
    let result = ScanResult::new(
        vec![
            ZeroCandidate::on_critical_line(14.12),
            ZeroCandidate::on_critical_line(14.14),
        ],
        1000,
    );
    assert_eq!(result.len(), 2);
    assert_eq!(result.imaginary_parts(), vec![14.12, 14.14]);
    assert!(result.has_candidate_near(14.1347, 0.01));
    assert_eq!((&result).into_iter().count(), 2);
}

#[test]
fn detection_mode_parse_and_display() {
    assert_eq!("Refined".parse::<DetectionMode>(), Ok(DetectionMode::Refined));
    assert_eq!(" threshold ".parse::<DetectionMode>(), Ok(DetectionMode::Threshold));
    assert!("bisection".parse::<DetectionMode>().is_err());
    assert_eq!(DetectionMode::default(), DetectionMode::Threshold);
    assert_eq!(DetectionMode::Refined.to_string(), "refined");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn nearest_is_no_farther_than_any_entry(t in -10.0f64..80.0) {
            let nearest = nearest_known_zero(t);
            let distance = (nearest.im - t).abs();
            for zero in &KNOWN_ZEROS {
                prop_assert!(distance <= (zero.im - t).abs());
            }
        }
    }
}
