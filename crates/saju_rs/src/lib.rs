//! Convenience wrapper for the saju Four Pillars engine.
//!
//! Provides a global engine with a memoised solar-term provider and
//! functions that take the request fields callers already have: a birth
//! timestamp string, an unknown-time flag and a locale tag.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! init(SajuConfig::default()).expect("engine init");
//!
//! let pillars = calculate("1990-05-15T14:30", false, "ko-KR").unwrap();
//! assert_eq!(saju_rs::key_of(&pillars), "庚午辛巳庚辰癸未");
//! ```

pub mod convenience;
pub mod error;
pub mod global;
pub mod legacy;

pub use convenience::{
    SajuRequest, birth_input, calculate, calculate_input, calculate_request, canonical_key,
    next_solar_term, prev_solar_term, same_saju, solar_terms,
};
pub use error::SajuError;
pub use global::{init, is_initialized};
pub use legacy::{LEGACY_KEYS, LegacyPillars, legacy_equals};

pub use saju_base::{Branch, Element, Pillar, Polarity, SolarTerm, Stem};
pub use saju_config::{DEFAULT_LOG_FILTER, SajuConfig};
pub use saju_search::{
    BirthInput, FourPillars, Locale, LocaleProfile, SearchError, SolarTermBoundary, SolarTermYear,
    canonical_key as key_of, equals, parse_canonical_key,
};
