//! Solar-term search and Four Pillars calculation.
//!
//! This crate provides:
//! - Solar-term boundaries for any supported Gregorian year, with a
//!   per-year memo and a fixed-table alternative
//! - Next/previous solar term from an arbitrary instant
//! - Locale profiles and wall-clock normalisation
//! - The Four Pillars calculator, for known and unknown birth times
//! - Equality and canonical keys for cache lookups

pub mod codec;
pub mod error;
pub mod locale;
pub mod pillars;
pub mod pillars_types;
pub(crate) mod search_util;
pub mod solar_term;
pub mod solar_term_types;

pub use codec::{UNKNOWN_HOUR_KEY, canonical_key, equals, parse_canonical_key};
pub use error::SearchError;
pub use locale::{Locale, LocaleProfile, normalize};
pub use pillars::{
    DAY_CYCLE_EPOCH_INDEX, DatePillarsCalculator, FourPillarsCalculator, YEAR_CYCLE_EPOCH,
    day_pillar, hour_pillar, month_pillar, year_pillar,
};
pub use pillars_types::{BirthInput, FourPillars};
pub use solar_term::{
    AstronomicalTerms, CachedTerms, SolarTermSource, TableSource, compute_solar_terms,
    next_solar_term, prev_solar_term,
};
pub use solar_term_types::{
    FIRST_TABLE_YEAR, MAX_BISECTION_ITERATIONS, MAX_STEP_DAYS, MAX_SUPPORTED_YEAR, MIN_STEP_DAYS,
    MIN_SUPPORTED_YEAR, SolarTermBoundary, SolarTermConfig, SolarTermYear, check_supported_year,
    check_table_year,
};
