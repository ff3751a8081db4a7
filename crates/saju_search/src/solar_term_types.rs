//! Types for solar-term boundary search.

use chrono::{DateTime, Utc};
use saju_base::{SOLAR_TERM_COUNT, SolarTerm};

use crate::error::SearchError;

/// First Gregorian year accepted for a birth.
pub const MIN_SUPPORTED_YEAR: i32 = 1700;

/// Last Gregorian year accepted for a birth.
pub const MAX_SUPPORTED_YEAR: i32 = 2150;

/// First year the solar-term provider computes. Births before 小寒 of
/// [`MIN_SUPPORTED_YEAR`] take their month from this year's 大雪.
pub const FIRST_TABLE_YEAR: i32 = MIN_SUPPORTED_YEAR - 1;

/// Reject years outside [`MIN_SUPPORTED_YEAR`]..=[`MAX_SUPPORTED_YEAR`].
pub fn check_supported_year(year: i32) -> Result<(), SearchError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(SearchError::UnsupportedYearRange {
            year,
            min: MIN_SUPPORTED_YEAR,
            max: MAX_SUPPORTED_YEAR,
        })
    }
}

/// Reject years the solar-term provider cannot compute.
pub fn check_table_year(year: i32) -> Result<(), SearchError> {
    if (FIRST_TABLE_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(SearchError::UnsupportedYearRange {
            year,
            min: FIRST_TABLE_YEAR,
            max: MAX_SUPPORTED_YEAR,
        })
    }
}

/// The instant a solar term begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarTermBoundary {
    /// Which term begins.
    pub term: SolarTerm,
    /// When it begins, rounded to the whole UTC second.
    pub instant_utc: DateTime<Utc>,
}

impl SolarTermBoundary {
    pub fn new(term: SolarTerm, instant_utc: DateTime<Utc>) -> Self {
        Self { term, instant_utc }
    }

    /// 0-based term index (小寒 = 0).
    pub fn term_index(&self) -> u8 {
        self.term.index()
    }

    /// Whether this boundary opens a solar month.
    pub fn is_jie(&self) -> bool {
        self.term.is_jie()
    }
}

/// All 24 solar-term boundaries of one Gregorian year.
///
/// Holds the following year's 小寒 too, so a lookup near the end of the
/// year never needs a second year's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarTermYear {
    year: i32,
    boundaries: [SolarTermBoundary; SOLAR_TERM_COUNT],
    next_year_start: SolarTermBoundary,
}

impl SolarTermYear {
    /// Assemble a year, checking term order and strictly increasing instants.
    pub fn new(
        year: i32,
        boundaries: [SolarTermBoundary; SOLAR_TERM_COUNT],
        next_year_start: SolarTermBoundary,
    ) -> Result<Self, SearchError> {
        for (i, b) in boundaries.iter().enumerate() {
            if b.term_index() as usize != i {
                return Err(SearchError::InvalidConfig("solar terms out of order"));
            }
        }
        if next_year_start.term != SolarTerm::Sohan {
            return Err(SearchError::InvalidConfig(
                "next year must start with Minor Cold",
            ));
        }
        let increasing = boundaries
            .windows(2)
            .all(|w| w[0].instant_utc < w[1].instant_utc)
            && boundaries[SOLAR_TERM_COUNT - 1].instant_utc < next_year_start.instant_utc;
        if !increasing {
            return Err(SearchError::InvalidConfig(
                "solar term instants must be strictly increasing",
            ));
        }
        Ok(Self {
            year,
            boundaries,
            next_year_start,
        })
    }

    /// Gregorian year these boundaries belong to.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 24 boundaries in term order.
    pub fn boundaries(&self) -> &[SolarTermBoundary; SOLAR_TERM_COUNT] {
        &self.boundaries
    }

    /// Boundary of one term in this year.
    pub fn get(&self, term: SolarTerm) -> &SolarTermBoundary {
        &self.boundaries[term.index() as usize]
    }

    /// 立春, the start of the Saju year.
    pub fn lichun(&self) -> &SolarTermBoundary {
        self.get(SolarTerm::Ipchun)
    }

    /// 小寒 of the following Gregorian year.
    pub fn next_year_start(&self) -> &SolarTermBoundary {
        &self.next_year_start
    }

    /// The 12 month-opening (節) boundaries in time order.
    pub fn jie_boundaries(&self) -> impl Iterator<Item = &SolarTermBoundary> {
        self.boundaries.iter().filter(|b| b.is_jie())
    }

    /// Latest boundary at or before `instant`, among this year's 24 and the
    /// following 小寒. `None` when `instant` precedes this year's 小寒.
    pub fn term_at(&self, instant: DateTime<Utc>) -> Option<&SolarTermBoundary> {
        if instant >= self.next_year_start.instant_utc {
            return Some(&self.next_year_start);
        }
        self.boundaries
            .iter()
            .rev()
            .find(|b| b.instant_utc <= instant)
    }
}

/// Smallest accepted scan step, in days.
pub const MIN_STEP_DAYS: f64 = 0.01;

/// Largest accepted scan step, in days. A step near the term spacing
/// (~15.2 days) could skip a crossing.
pub const MAX_STEP_DAYS: f64 = 5.0;

/// Most bisection iterations accepted; 1e-6 day needs about 25.
pub const MAX_BISECTION_ITERATIONS: u32 = 200;

/// Configuration for solar-term searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermConfig {
    /// Coarse scan step in days (default 1.0).
    pub step_days: f64,
    /// Maximum bisection iterations (default 60).
    pub max_iterations: u32,
    /// Bracket width at which bisection stops, in days (default 1e-6, ~0.09 s).
    pub convergence_days: f64,
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            max_iterations: 60,
            convergence_days: 1e-6,
        }
    }
}

impl SolarTermConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if self.step_days < MIN_STEP_DAYS {
            return Err("step_days must be at least 0.01");
        }
        if self.step_days > MAX_STEP_DAYS {
            return Err("step_days must not exceed 5");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if self.max_iterations > MAX_BISECTION_ITERATIONS {
            return Err("max_iterations must not exceed 200");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use saju_base::ALL_SOLAR_TERMS;

    fn synthetic_year() -> ([SolarTermBoundary; SOLAR_TERM_COUNT], SolarTermBoundary) {
        let start = DateTime::from_timestamp(1_704_412_800, 0).unwrap();
        let boundaries = ALL_SOLAR_TERMS
            .map(|t| SolarTermBoundary::new(t, start + TimeDelta::days(15 * t.index() as i64)));
        let next = SolarTermBoundary::new(SolarTerm::Sohan, start + TimeDelta::days(365));
        (boundaries, next)
    }

    #[test]
    fn default_config_valid() {
        let c = SolarTermConfig::default();
        assert!(c.validate().is_ok());
        assert!((c.convergence_days - 1e-6).abs() < 1e-15);
    }

    #[test]
    fn config_rejects_bad_values() {
        let base = SolarTermConfig::default();
        assert!(SolarTermConfig { step_days: -1.0, ..base }.validate().is_err());
        assert!(SolarTermConfig { step_days: 10.0, ..base }.validate().is_err());
        assert!(SolarTermConfig { max_iterations: 0, ..base }.validate().is_err());
        assert!(SolarTermConfig { max_iterations: 1_000, ..base }.validate().is_err());
    }

    #[test]
    fn config_step_is_bounded_below() {
        let base = SolarTermConfig::default();
        assert_eq!(
            SolarTermConfig { step_days: 1e-12, ..base }.validate(),
            Err("step_days must be at least 0.01")
        );
        assert!(SolarTermConfig { step_days: MIN_STEP_DAYS, ..base }.validate().is_ok());
        assert!(SolarTermConfig { step_days: MAX_STEP_DAYS, ..base }.validate().is_ok());
        assert!(SolarTermConfig { convergence_days: f64::NAN, ..base }.validate().is_err());
    }

    #[test]
    fn supported_year_range() {
        assert!(check_supported_year(1700).is_ok());
        assert!(check_supported_year(2150).is_ok());
        assert!(check_supported_year(1699).is_err());
        assert!(check_supported_year(2151).is_err());
        assert!(check_table_year(1699).is_ok());
        assert!(check_table_year(1698).is_err());
        assert!(check_table_year(2151).is_err());
    }

    #[test]
    fn year_accessors() {
        let (b, next) = synthetic_year();
        let y = SolarTermYear::new(2024, b, next).unwrap();
        assert_eq!(y.year(), 2024);
        assert_eq!(y.lichun().term, SolarTerm::Ipchun);
        assert_eq!(y.jie_boundaries().count(), 12);
        assert!(y.jie_boundaries().all(|b| b.term_index() % 2 == 0));
    }

    #[test]
    fn term_at_edges() {
        let (b, next) = synthetic_year();
        let y = SolarTermYear::new(2024, b, next).unwrap();
        let lichun = y.lichun().instant_utc;
        assert_eq!(y.term_at(lichun).unwrap().term, SolarTerm::Ipchun);
        assert_eq!(
            y.term_at(lichun - TimeDelta::seconds(1)).unwrap().term,
            SolarTerm::Daehan
        );
        assert!(y.term_at(b[0].instant_utc - TimeDelta::seconds(1)).is_none());
        assert_eq!(y.term_at(next.instant_utc).unwrap(), &next);
    }

    #[test]
    fn rejects_out_of_order() {
        let (mut b, next) = synthetic_year();
        b.swap(3, 4);
        assert!(SolarTermYear::new(2024, b, next).is_err());
        let (mut b, next) = synthetic_year();
        b[5].instant_utc = b[4].instant_utc;
        assert!(SolarTermYear::new(2024, b, next).is_err());
    }
}
