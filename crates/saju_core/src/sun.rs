//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! Geometric longitude from VSOP87 (Earth heliocentric + 180°), reduced to
//! the FK5 system, then corrected for nutation and annual aberration.
//! Method: Meeus, "Astronomical Algorithms", chapter 25 (high accuracy).

use saju_time::{DAYS_PER_JULIAN_MILLENNIUM, J2000_JD, jd_ut_to_tt};

use crate::nutation::nutation_longitude_arcsec;
use crate::vsop87::{earth_heliocentric_longitude_rad, earth_radius_au};

/// Constant of aberration divided by the mean distance, in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.489_8;

/// FK5 longitude correction in arcseconds.
const FK5_CORRECTION_ARCSEC: f64 = -0.090_33;

/// Mean daily motion of the Sun in ecliptic longitude, degrees per day.
pub const SUN_MEAN_MOTION_DEG_PER_DAY: f64 = 0.985_647_36;

/// Full breakdown of the solar position at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Geometric longitude, FK5, mean equinox of date, degrees [0, 360).
    pub geometric_longitude_deg: f64,
    /// Apparent longitude (true equinox, aberrated), degrees [0, 360).
    pub apparent_longitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub radius_au: f64,
    /// Nutation in longitude applied, arcseconds.
    pub nutation_arcsec: f64,
}

/// Solar position for a Julian Ephemeris Day (TT).
pub fn sun_position(jd_tt: f64) -> SunPosition {
    let tau = (jd_tt - J2000_JD) / DAYS_PER_JULIAN_MILLENNIUM;
    let t = tau * 10.0;

    let helio_deg = earth_heliocentric_longitude_rad(tau).to_degrees();
    let radius_au = earth_radius_au(tau);

    let theta = helio_deg + 180.0 + FK5_CORRECTION_ARCSEC / 3600.0;
    let nutation_arcsec = nutation_longitude_arcsec(t);
    let apparent = theta + (nutation_arcsec - ABERRATION_ARCSEC / radius_au) / 3600.0;

    SunPosition {
        geometric_longitude_deg: theta.rem_euclid(360.0),
        apparent_longitude_deg: apparent.rem_euclid(360.0),
        radius_au,
        nutation_arcsec,
    }
}

/// Apparent solar longitude in degrees [0, 360) for a TT Julian Date.
pub fn sun_apparent_longitude_deg(jd_tt: f64) -> f64 {
    sun_position(jd_tt).apparent_longitude_deg
}

/// Apparent solar longitude in degrees [0, 360) for a UT Julian Date.
///
/// ΔT is applied internally, so callers can work on the civil time line.
pub fn sun_apparent_longitude_ut_deg(jd_ut: f64) -> f64 {
    sun_apparent_longitude_deg(jd_ut_to_tt(jd_ut))
}
