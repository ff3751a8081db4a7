//! Four Pillars calculation.
//!
//! Year and month follow the solar terms: the year turns at 立春 and each
//! month at one of the twelve 節 boundaries. Day and hour follow the local
//! wall clock: the day turns at civil midnight and the hour pillar uses
//! the locale-corrected clock in two-hour blocks starting at 23:00.
//!
//! With a known time every comparison uses the exact instant
//! `corrected clock − zone offset`. With an unknown time
//! ([`DatePillarsCalculator`]) only calendar dates are compared: a date on
//! or after a boundary's local date belongs to the new period.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use saju_base::{Branch, Pillar, SolarTerm, Stem};
use saju_time::{CivilDateTime, validate_offset};

use crate::error::SearchError;
use crate::pillars_types::{BirthInput, FourPillars};
use crate::solar_term::SolarTermSource;
use crate::solar_term_types::{SolarTermBoundary, check_supported_year};

/// Gregorian year whose Saju year is 甲子 (cycle index 0).
pub const YEAR_CYCLE_EPOCH: i32 = 1984;

/// Cycle index of 2000-01-01 (戊午).
pub const DAY_CYCLE_EPOCH_INDEX: i64 = 54;

/// `num_days_from_ce` of 2000-01-01.
const DAY_EPOCH_DAYS_FROM_CE: i64 = 730_120;

/// Year pillar of a Saju year.
pub fn year_pillar(saju_year: i32) -> Pillar {
    Pillar::from_position(saju_year as i64 - YEAR_CYCLE_EPOCH as i64)
}

/// Month pillar from the year pillar and the month's branch.
///
/// The 寅 month of a 甲 or 己 year is 丙寅, and stems run on from there.
pub fn month_pillar(year: Pillar, month_branch: Branch) -> Result<Pillar, SearchError> {
    let m = (month_branch.index() as i64 - 2).rem_euclid(12);
    let stem_idx = ((year.stem().index() as i64 % 5) * 2 + 2 + m) % 10;
    let stem = Stem::from_index(stem_idx as u8).ok_or(SearchError::InvalidPillarCombination {
        stem: stem_idx as u8,
        branch: month_branch.index(),
    })?;
    Ok(Pillar::new(stem, month_branch)?)
}

/// Day pillar of a civil date.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let days = date.num_days_from_ce() as i64 - DAY_EPOCH_DAYS_FROM_CE;
    Pillar::from_position(DAY_CYCLE_EPOCH_INDEX + days)
}

/// Hour pillar for a wall-clock hour (0..=23) on a given day pillar.
///
/// A 甲 or 己 day starts its hours at 甲子.
pub fn hour_pillar(day: Pillar, clock_hour: u32) -> Result<Pillar, SearchError> {
    let branch = Branch::from_clock_hour(clock_hour);
    let stem_idx = ((day.stem().index() as u32 % 5) * 2 + branch.index() as u32) % 10;
    let stem = Stem::from_index(stem_idx as u8).ok_or(SearchError::InvalidPillarCombination {
        stem: stem_idx as u8,
        branch: branch.index(),
    })?;
    Ok(Pillar::new(stem, branch)?)
}

/// Saju year and the 節 boundary in force, for a predicate saying whether a
/// boundary has been reached.
fn year_and_month<S, F>(
    source: &S,
    gregorian_year: i32,
    reached: F,
) -> Result<(i32, SolarTermBoundary), SearchError>
where
    S: SolarTermSource,
    F: Fn(&SolarTermBoundary) -> Result<bool, SearchError>,
{
    let terms = source.solar_terms(gregorian_year)?;

    let saju_year = if reached(terms.lichun())? {
        gregorian_year
    } else {
        gregorian_year - 1
    };

    let next = *terms.next_year_start();
    if reached(&next)? {
        return Ok((saju_year, next));
    }
    let mut latest = None;
    for b in terms.jie_boundaries() {
        if reached(b)? {
            latest = Some(*b);
        }
    }
    if let Some(b) = latest {
        return Ok((saju_year, b));
    }

    // Before this year's 小寒: the month opened by last year's 大雪.
    let prev = source.solar_terms(gregorian_year - 1)?;
    Ok((saju_year, *prev.get(SolarTerm::Daeseol)))
}

fn month_branch_of(boundary: &SolarTermBoundary) -> Result<Branch, SearchError> {
    boundary
        .term
        .month_branch()
        .ok_or(SearchError::NoConvergence("month boundary is not a Jie term"))
}

/// Four Pillars for births with a known clock time.
#[derive(Debug, Clone, Default)]
pub struct FourPillarsCalculator<S> {
    source: S,
}

impl<S: SolarTermSource> FourPillarsCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Pillars of a birth. Unknown-time inputs go to [`DatePillarsCalculator`].
    pub fn compute(&self, input: &BirthInput) -> Result<FourPillars, SearchError> {
        if input.is_time_unknown {
            return DatePillarsCalculator::new(&self.source)
                .compute(input.civil.date(), input.tz_offset_minutes);
        }

        let corrected = input.profile.normalize(&input.civil)?;
        let instant = corrected.to_utc(input.tz_offset_minutes)?;
        self.compute_at(&input.civil, &corrected, instant)
    }

    /// Pillars for a known UTC instant seen on a wall clock.
    ///
    /// `civil` gives the day, `corrected` the hour and the year used to
    /// pick the boundary table.
    pub fn compute_at(
        &self,
        civil: &CivilDateTime,
        corrected: &CivilDateTime,
        instant: DateTime<Utc>,
    ) -> Result<FourPillars, SearchError> {
        check_supported_year(civil.year())?;
        let (saju_year, jie) =
            year_and_month(&self.source, corrected.year(), |b| Ok(b.instant_utc <= instant))?;

        let year = year_pillar(saju_year);
        let month = month_pillar(year, month_branch_of(&jie)?)?;
        let day = day_pillar(civil.date());
        let hour = hour_pillar(day, corrected.hour())?;
        Ok(FourPillars::new(year, month, day, Some(hour)))
    }
}

/// Four Pillars for births known only to the date.
///
/// Never reads a clock value and never applies a locale correction.
#[derive(Debug, Clone, Default)]
pub struct DatePillarsCalculator<S> {
    source: S,
}

impl<S: SolarTermSource> DatePillarsCalculator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Year, month and day pillars of a civil date in a zone; hour is `None`.
    pub fn compute(
        &self,
        date: NaiveDate,
        tz_offset_minutes: i32,
    ) -> Result<FourPillars, SearchError> {
        validate_offset(tz_offset_minutes)?;
        check_supported_year(date.year())?;
        let local_date = |b: &SolarTermBoundary| -> Result<NaiveDate, SearchError> {
            Ok(CivilDateTime::from_utc(b.instant_utc, tz_offset_minutes)?.date())
        };
        let (saju_year, jie) =
            year_and_month(&self.source, date.year(), |b| Ok(local_date(b)? <= date))?;

        let year = year_pillar(saju_year);
        let month = month_pillar(year, month_branch_of(&jie)?)?;
        let day = day_pillar(date);
        Ok(FourPillars::new(year, month, day, None))
    }
}
