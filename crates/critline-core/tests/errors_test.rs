use critline_core::errors::{error_code, ConfigError, CritlineErrorCode, NumericError, ScanError};

#[test]
fn scan_error_codes() {
    assert_eq!(
        ScanError::invalid("max_imaginary", "must be positive").error_code(),
        error_code::INVALID_PARAMETER
    );
    assert_eq!(ScanError::Cancelled.error_code(), error_code::CANCELLED);
    assert_eq!(
        ScanError::DeadlineExceeded { elapsed_ms: 5 }.error_code(),
        error_code::DEADLINE_EXCEEDED
    );
}

#[test]
fn numeric_error_becomes_evaluation_failure() {
    let err: ScanError = NumericError::Pole.into();
    assert_eq!(err.error_code(), error_code::NUMERIC_EVALUATION_FAILURE);
    match err {
        ScanError::NumericEvaluationFailure { reason } => assert!(reason.contains("pole")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn messages_name_the_field() {
    let err = ScanError::invalid("precision_digits", "51 is outside 5..=50");
    assert_eq!(
        err.to_string(),
        "invalid parameter precision_digits: 51 is outside 5..=50"
    );
    let err = ConfigError::ValidationFailed {
        field: "scan.threshold".into(),
        message: "must be positive".into(),
    };
    assert!(err.to_string().contains("scan.threshold"));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn too_many_terms_message() {
    let err = NumericError::TooManyTerms {
        required: 2_000_000,
        limit: 1_000_000,
    };
    assert_eq!(err.to_string(), "evaluation needs 2000000 terms, limit is 1000000");
}
