//! Solar-term boundary search.
//!
//! A solar term begins when the Sun's apparent longitude reaches a
//! multiple of 15°. Each boundary is found by a daily scan for the sign
//! change of (longitude − target), refined by bisection, and rounded to
//! the whole UTC second. Boundaries are always computed a whole year at a
//! time, so next/previous lookups agree exactly with the year tables.
//!
//! Providers implement [`SolarTermSource`]:
//! - [`AstronomicalTerms`] computes every request from the solar model
//! - [`CachedTerms`] memoises another source per year
//! - [`TableSource`] serves a fixed set of precomputed years

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Datelike, Utc};
use saju_base::{ALL_SOLAR_TERMS, SOLAR_TERM_COUNT, SolarTerm};
use saju_time::{calendar_to_jd, jd_ut_to_utc};

use crate::error::SearchError;
use crate::search_util::find_longitude_crossing;
use crate::solar_term_types::{
    SolarTermBoundary, SolarTermConfig, SolarTermYear, check_table_year,
};

/// Anything that can hand out the solar-term table of a Gregorian year.
pub trait SolarTermSource {
    /// The 24 boundaries of `year` plus the next year's 小寒.
    fn solar_terms(&self, year: i32) -> Result<Arc<SolarTermYear>, SearchError>;
}

impl<S: SolarTermSource + ?Sized> SolarTermSource for &S {
    fn solar_terms(&self, year: i32) -> Result<Arc<SolarTermYear>, SearchError> {
        (**self).solar_terms(year)
    }
}

impl<S: SolarTermSource + ?Sized> SolarTermSource for Arc<S> {
    fn solar_terms(&self, year: i32) -> Result<Arc<SolarTermYear>, SearchError> {
        (**self).solar_terms(year)
    }
}

fn to_boundary(term: SolarTerm, jd_ut: f64) -> Result<SolarTermBoundary, SearchError> {
    let instant = jd_ut_to_utc(jd_ut)
        .ok_or(SearchError::NoConvergence("boundary outside representable range"))?;
    Ok(SolarTermBoundary::new(term, instant))
}

/// Compute all 24 boundaries of a Gregorian year from the solar model.
pub fn compute_solar_terms(
    year: i32,
    config: &SolarTermConfig,
) -> Result<SolarTermYear, SearchError> {
    check_table_year(year)?;
    config.validate().map_err(SearchError::InvalidConfig)?;

    // 小寒 falls on January 4–7 for every supported year.
    let mut jd = calendar_to_jd(year, 1, 1.0);
    let mut found = Vec::with_capacity(SOLAR_TERM_COUNT + 1);
    for k in 0..=SOLAR_TERM_COUNT {
        let term = ALL_SOLAR_TERMS[k % SOLAR_TERM_COUNT];
        let jd_term = find_longitude_crossing(term.longitude_deg(), jd, config)?;
        found.push(to_boundary(term, jd_term)?);
        // Consecutive terms are at least 14 days apart.
        jd = jd_term + 10.0;
    }

    let next_year_start = found[SOLAR_TERM_COUNT];
    let boundaries: [SolarTermBoundary; SOLAR_TERM_COUNT] = found[..SOLAR_TERM_COUNT]
        .try_into()
        .map_err(|_| SearchError::NoConvergence("incomplete solar term year"))?;
    tracing::debug!(year, "computed solar terms");
    SolarTermYear::new(year, boundaries, next_year_start)
}

/// First boundary strictly after `instant`.
pub fn next_solar_term<S: SolarTermSource>(
    source: &S,
    instant: DateTime<Utc>,
) -> Result<SolarTermBoundary, SearchError> {
    let year = instant.year();
    let terms = source.solar_terms(year)?;
    if let Some(b) = terms.boundaries().iter().find(|b| b.instant_utc > instant) {
        return Ok(*b);
    }
    // 小寒 of next year is always after any instant in this year.
    Ok(*terms.next_year_start())
}

/// Latest boundary at or before `instant`.
pub fn prev_solar_term<S: SolarTermSource>(
    source: &S,
    instant: DateTime<Utc>,
) -> Result<SolarTermBoundary, SearchError> {
    let year = instant.year();
    let terms = source.solar_terms(year)?;
    if let Some(b) = terms.term_at(instant) {
        return Ok(*b);
    }
    let prev = source.solar_terms(year - 1)?;
    prev.term_at(instant)
        .copied()
        .ok_or(SearchError::NoConvergence("could not find previous solar term"))
}

/// Solar terms straight from the solar model, recomputed on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AstronomicalTerms {
    config: SolarTermConfig,
}

impl AstronomicalTerms {
    pub fn new(config: SolarTermConfig) -> Result<Self, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolarTermConfig {
        &self.config
    }
}

impl SolarTermSource for AstronomicalTerms {
    fn solar_terms(&self, year: i32) -> Result<Arc<SolarTermYear>, SearchError> {
        compute_solar_terms(year, &self.config).map(Arc::new)
    }
}

/// Per-year memo over another source.
///
/// Concurrent first requests for one year may each compute it; the first
/// value stored wins and every caller gets that one.
#[derive(Debug, Default)]
pub struct CachedTerms<S = AstronomicalTerms> {
    inner: S,
    cache: RwLock<HashMap<i32, Arc<SolarTermYear>>>,
}

impl<S: SolarTermSource> CachedTerms<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Years currently held, ascending.
    pub fn cached_years(&self) -> Vec<i32> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        let mut years: Vec<i32> = cache.keys().copied().collect();
        years.sort_unstable();
        years
    }
}

impl<S: SolarTermSource> SolarTermSource for CachedTerms<S> {
    fn solar_terms(&self, year: i32) -> Result<Arc<SolarTermYear>, SearchError> {
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = cache.get(&year) {
                return Ok(Arc::clone(hit));
            }
        }
        let computed = self.inner.solar_terms(year)?;
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let stored = cache.entry(year).or_insert_with(|| {
            tracing::debug!(year, "solar term cache populated");
            computed
        });
        Ok(Arc::clone(stored))
    }
}

/// A fixed table of precomputed years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSource {
    years: HashMap<i32, Arc<SolarTermYear>>,
}

impl TableSource {
    /// Build from at least one year; later duplicates replace earlier ones.
    pub fn from_years<I>(years: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = SolarTermYear>,
    {
        let years: HashMap<i32, Arc<SolarTermYear>> = years
            .into_iter()
            .map(|y| (y.year(), Arc::new(y)))
            .collect();
        if years.is_empty() {
            return Err(SearchError::InvalidConfig("solar term table is empty"));
        }
        Ok(Self { years })
    }

    /// Snapshot `first..=last` from another source.
    pub fn snapshot<S: SolarTermSource>(
        source: &S,
        first: i32,
        last: i32,
    ) -> Result<Self, SearchError> {
        if first > last {
            return Err(SearchError::InvalidConfig("table range is empty"));
        }
        let mut years = HashMap::new();
        for year in first..=last {
            years.insert(year, source.solar_terms(year)?);
        }
        Ok(Self { years })
    }

    /// Smallest and largest year in the table.
    pub fn range(&self) -> (i32, i32) {
        let min = self.years.keys().copied().min().unwrap_or_default();
        let max = self.years.keys().copied().max().unwrap_or_default();
        (min, max)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

impl SolarTermSource for TableSource {
    fn solar_terms(&self, year: i32) -> Result<Arc<SolarTermYear>, SearchError> {
        self.years.get(&year).cloned().ok_or_else(|| {
            let (min, max) = self.range();
            SearchError::UnsupportedYearRange { year, min, max }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_has_strictly_increasing_terms() {
        let y = compute_solar_terms(2024, &SolarTermConfig::default()).unwrap();
        let b = y.boundaries();
        for w in b.windows(2) {
            let gap = (w[1].instant_utc - w[0].instant_utc).num_hours();
            assert!((14 * 24..=16 * 24).contains(&gap), "gap {gap} h");
        }
        assert_eq!(b[0].instant_utc.year(), 2024);
        assert_eq!(b[0].instant_utc.month(), 1);
        assert_eq!(y.next_year_start().instant_utc.year(), 2025);
    }

    #[test]
    fn unsupported_years_rejected() {
        let config = SolarTermConfig::default();
        assert!(matches!(
            compute_solar_terms(1600, &config),
            Err(SearchError::UnsupportedYearRange { year: 1600, .. })
        ));
        assert!(compute_solar_terms(2200, &config).is_err());
    }

    #[test]
    fn cache_returns_same_arc() {
        let cached = CachedTerms::new(AstronomicalTerms::default());
        let a = cached.solar_terms(2000).unwrap();
        let b = cached.solar_terms(2000).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cached.cached_years(), vec![2000]);
    }

    #[test]
    fn table_serves_only_its_years() {
        let table = TableSource::snapshot(&AstronomicalTerms::default(), 2023, 2024).unwrap();
        assert_eq!(table.range(), (2023, 2024));
        assert!(table.solar_terms(2024).is_ok());
        assert_eq!(
            table.solar_terms(2025),
            Err(SearchError::UnsupportedYearRange {
                year: 2025,
                min: 2023,
                max: 2024
            })
        );
        assert!(TableSource::from_years(Vec::new()).is_err());
    }

    #[test]
    fn next_and_prev_bracket_an_instant() {
        let source = AstronomicalTerms::default();
        let t = DateTime::from_timestamp(1_715_731_200, 0).unwrap(); // 2024-05-15
        let next = next_solar_term(&source, t).unwrap();
        let prev = prev_solar_term(&source, t).unwrap();
        assert_eq!(prev.term, SolarTerm::Ipha);
        assert_eq!(next.term, SolarTerm::Soman);
        assert!(prev.instant_utc <= t && t < next.instant_utc);
    }
}
