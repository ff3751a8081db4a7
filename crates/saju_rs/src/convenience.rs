//! High-level functions on the global engine.
//!
//! Every function here reads the engine set up by [`init`](crate::init) and
//! fails with [`SajuError::NotInitialized`] before that.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use saju_search::{BirthInput, FourPillars, SolarTermBoundary, SolarTermYear, SolarTermSource};
use serde::{Deserialize, Serialize};

use crate::error::SajuError;
use crate::global::global;

/// One calculation request as it arrives from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SajuRequest {
    /// `YYYY-MM-DD[THH:MM[:SS]][Z|±HH:MM]`.
    pub civil_date_time: String,
    #[serde(default)]
    pub is_time_unknown: bool,
    /// Locale tag such as `ko-KR` or `en`.
    pub locale: String,
}

impl SajuRequest {
    pub fn new(civil_date_time: &str, is_time_unknown: bool, locale: &str) -> Self {
        Self {
            civil_date_time: civil_date_time.to_string(),
            is_time_unknown,
            locale: locale.to_string(),
        }
    }
}

/// Parse request fields into a [`BirthInput`] using the configured locale
/// profiles. The zone comes from the text, else from the locale default.
pub fn birth_input(
    civil_date_time: &str,
    is_time_unknown: bool,
    locale: &str,
) -> Result<BirthInput, SajuError> {
    let g = global()?;
    let profile = g.config.locale_profile(locale);
    BirthInput::parse(civil_date_time, is_time_unknown, profile).map_err(|e| {
        tracing::debug!(input = civil_date_time, locale, error = %e, "rejected birth input");
        SajuError::from(e)
    })
}

/// Four Pillars for a textual birth timestamp.
pub fn calculate(
    civil_date_time: &str,
    is_time_unknown: bool,
    locale: &str,
) -> Result<FourPillars, SajuError> {
    let input = birth_input(civil_date_time, is_time_unknown, locale)?;
    calculate_input(&input)
}

/// Four Pillars for a request record.
pub fn calculate_request(request: &SajuRequest) -> Result<FourPillars, SajuError> {
    calculate(
        &request.civil_date_time,
        request.is_time_unknown,
        &request.locale,
    )
}

/// Four Pillars for an already-built input.
pub fn calculate_input(input: &BirthInput) -> Result<FourPillars, SajuError> {
    Ok(global()?.calculator.compute(input)?)
}

/// Solar-term boundaries of a Gregorian year (memoised).
pub fn solar_terms(year: i32) -> Result<Arc<SolarTermYear>, SajuError> {
    Ok(global()?.calculator.source().solar_terms(year)?)
}

/// First solar-term boundary strictly after `instant`.
pub fn next_solar_term(instant: DateTime<Utc>) -> Result<SolarTermBoundary, SajuError> {
    Ok(saju_search::next_solar_term(
        global()?.calculator.source(),
        instant,
    )?)
}

/// Latest solar-term boundary at or before `instant`.
pub fn prev_solar_term(instant: DateTime<Utc>) -> Result<SolarTermBoundary, SajuError> {
    Ok(saju_search::prev_solar_term(
        global()?.calculator.source(),
        instant,
    )?)
}

/// Canonical cache key for a request, e.g. `庚午辛巳庚辰癸未`.
pub fn canonical_key(request: &SajuRequest) -> Result<String, SajuError> {
    Ok(saju_search::canonical_key(&calculate_request(request)?))
}

/// Whether two requests resolve to the same eight characters.
pub fn same_saju(a: &SajuRequest, b: &SajuRequest) -> Result<bool, SajuError> {
    Ok(saju_search::equals(
        &calculate_request(a)?,
        &calculate_request(b)?,
    ))
}
