//! End-to-end tests through the global convenience API.

use std::sync::Once;

use saju_rs::*;

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| {
        let config = SajuConfig::from_toml_str("[locale.ja]\nutc_offset_minutes = 540\n")
            .expect("valid config");
        init(config).expect("first init");
    });
}

#[test]
fn golden_korean_request() {
    setup();
    let fp = calculate("1990-05-15T14:30", false, "ko-KR").unwrap();
    assert_eq!(key_of(&fp), "庚午辛巳庚辰癸未");
    let legacy = LegacyPillars::from(&fp);
    assert_eq!(legacy.sky3, "경");
    assert_eq!(legacy.grd0.as_deref(), Some("미"));
}

#[test]
fn second_init_fails() {
    setup();
    assert!(is_initialized());
    assert_eq!(init(SajuConfig::default()), Err(SajuError::AlreadyInitialized));
}

#[test]
fn request_key_and_equality() {
    setup();
    let korean = SajuRequest::new("1990-05-15T14:30", false, "ko");
    let explicit = SajuRequest::new("1990-05-15T14:30+09:00", false, "kr");
    let other = SajuRequest::new("1990-05-15T14:00+09:00", false, "en-US");
    assert_eq!(canonical_key(&korean).unwrap(), "庚午辛巳庚辰癸未");
    assert!(same_saju(&korean, &explicit).unwrap());
    assert!(same_saju(&korean, &other).unwrap());

    let unknown = SajuRequest::new("1990-05-15", true, "ko");
    assert_eq!(canonical_key(&unknown).unwrap(), "庚午辛巳庚辰--");
    assert!(!same_saju(&korean, &unknown).unwrap());
}

#[test]
fn configured_locale_zone_applies() {
    setup();
    // `ja` is configured with +09:00 and no correction: 14:00 there is the
    // same instant and hour as Korean 14:30.
    let ja = calculate("1990-05-15T14:00", false, "ja").unwrap();
    let ko = calculate("1990-05-15T14:30", false, "ko").unwrap();
    assert_eq!(ja, ko);
    let en = calculate("1990-05-15T14:00", false, "en").unwrap();
    assert_eq!(en.day, ko.day);
}

#[test]
fn request_from_json() {
    setup();
    let req: SajuRequest = serde_json::from_str(
        r#"{"civil_date_time":"1990-05-15T14:30","locale":"ko-KR"}"#,
    )
    .unwrap();
    assert!(!req.is_time_unknown);
    let fp = calculate_request(&req).unwrap();
    assert_eq!(fp.to_string(), "庚午 辛巳 庚辰 癸未");
}

#[test]
fn terms_through_the_global_cache() {
    setup();
    let a = solar_terms(2024).unwrap();
    let b = solar_terms(2024).unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    let lichun = a.lichun().instant_utc;
    assert_eq!(prev_solar_term(lichun).unwrap().term, SolarTerm::Ipchun);
    assert_eq!(next_solar_term(lichun).unwrap().term, SolarTerm::Usu);
}

#[test]
fn invalid_input_is_reported() {
    setup();
    assert!(matches!(
        calculate("1990-02-30T10:00", false, "ko"),
        Err(SajuError::Search(saju_search::SearchError::InvalidCivilDateTime(_)))
    ));
    assert!(matches!(
        calculate("1990-05-15", false, "ko"),
        Err(SajuError::Search(saju_search::SearchError::InvalidCivilDateTime(_)))
    ));
    assert!(matches!(
        calculate("1500-05-15T10:00", false, "ko"),
        Err(SajuError::Search(saju_search::SearchError::UnsupportedYearRange { .. }))
    ));
}
