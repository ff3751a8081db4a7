//! Civil time handling for the saju engine.
//!
//! This crate provides:
//! - `CivilDateTime`, a zone-less wall clock with checked arithmetic
//! - `CivilStamp`, the parsed form of textual birth timestamps
//! - Julian Date ↔ calendar conversions
//! - ΔT (TT − UT) for converting astronomical instants to civil UTC

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use civil::{CivilDateTime, CivilStamp, MAX_UTC_OFFSET_MINUTES, validate_offset};
pub use delta_t::{decimal_year, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000_JD, SECONDS_PER_DAY,
    UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries, jd_to_millennia,
    jd_to_unix_seconds, unix_seconds_to_jd,
};

use chrono::{DateTime, Utc};

/// Convert a UT Julian Date to a UTC instant rounded to the nearest second.
///
/// Returns `None` when the date is outside chrono's representable range.
pub fn jd_ut_to_utc(jd_ut: f64) -> Option<DateTime<Utc>> {
    let secs = jd_to_unix_seconds(jd_ut).round();
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp(secs as i64, 0)
}

/// UT Julian Date of a UTC instant (leap seconds ignored).
pub fn utc_to_jd_ut(instant: DateTime<Utc>) -> f64 {
    unix_seconds_to_jd(instant.timestamp() as f64)
}

/// Terrestrial Time Julian Date for a UT Julian Date.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd_ut);
    jd_ut + delta_t_seconds(decimal_year(year, month)) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_jd_roundtrip() {
        let t = DateTime::from_timestamp(1_707_035_213, 0).unwrap();
        let jd = utc_to_jd_ut(t);
        assert_eq!(jd_ut_to_utc(jd), Some(t));
    }

    #[test]
    fn unix_epoch_instant() {
        let t = jd_ut_to_utc(UNIX_EPOCH_JD).unwrap();
        assert_eq!(t.timestamp(), 0);
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let jd = calendar_to_jd(2024, 1, 1.0);
        let dt = (jd_ut_to_tt(jd) - jd) * SECONDS_PER_DAY;
        assert!(dt > 60.0 && dt < 80.0, "got {dt}");
    }

    #[test]
    fn non_finite_jd_has_no_instant() {
        assert_eq!(jd_ut_to_utc(f64::NAN), None);
    }
}
