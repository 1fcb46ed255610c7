use cadence_core::errors::{
    CadenceError, CadenceErrorCode, ConfigError, ValidationError, CONFIG_ERROR, VALIDATION_ERROR,
};

#[test]
fn validation_errors_name_the_offending_field() {
    let err = ValidationError::OutOfRange {
        field: "probability",
        value: 7,
        min: 1,
        max: 5,
    };
    assert_eq!(err.to_string(), "probability out of range: 7 (expected 1-5)");
    assert_eq!(err.error_code(), VALIDATION_ERROR);

    let err = ValidationError::EmptyDateRange {
        cycle_id: "sprint-9".to_string(),
    };
    assert!(err.to_string().contains("sprint-9"));

    let err = ValidationError::UnknownMetric {
        value: "hours".to_string(),
    };
    assert!(err.to_string().contains("hours"));
}

#[test]
fn config_errors_carry_their_code() {
    let err = ConfigError::InvalidValue {
        field: "risk.high_min".to_string(),
        message: "must be greater than medium_min".to_string(),
    };
    assert_eq!(err.error_code(), CONFIG_ERROR);
    assert!(err.to_string().contains("risk.high_min"));
}

#[test]
fn top_level_error_is_transparent() {
    let inner = ValidationError::UnknownMetric {
        value: "velocity".to_string(),
    };
    let outer: CadenceError = inner.clone().into();
    // Transparent wrapping: same message, inner code preserved.
    assert_eq!(outer.to_string(), inner.to_string());
    assert_eq!(outer.error_code(), VALIDATION_ERROR);

    let outer: CadenceError = ConfigError::ParseError {
        message: "bad toml".to_string(),
    }
    .into();
    assert_eq!(outer.error_code(), CONFIG_ERROR);
}

#[test]
fn boundary_string_prefixes_the_code() {
    let err = ValidationError::OutOfRange {
        field: "impact",
        value: 0,
        min: 1,
        max: 5,
    };
    let s = err.boundary_string();
    assert!(s.starts_with("[VALIDATION_ERROR]"));
    assert!(s.contains("impact"));
}
