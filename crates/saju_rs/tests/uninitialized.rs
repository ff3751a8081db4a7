use saju_rs::{SajuError, calculate, is_initialized, solar_terms};

#[test]
fn calls_before_init_fail() {
    assert!(!is_initialized());
    assert_eq!(
        calculate("1990-05-15T14:30", false, "ko"),
        Err(SajuError::NotInitialized)
    );
    assert_eq!(solar_terms(2024).unwrap_err(), SajuError::NotInitialized);
}
