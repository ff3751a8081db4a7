//! Nutation in longitude, IAU 1980 leading terms.
//!
//! Keeps the four largest terms of the IAU 1980 series (Meeus,
//! "Astronomical Algorithms", chapter 22), accurate to about 0.5″. That
//! is about 0.2 s of solar motion, far below the resolution of a
//! solar-term boundary.

/// Mean longitude of the Moon's ascending node, in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn lunar_node_longitude_deg(t: f64) -> f64 {
    125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0
}

/// Fundamental mean longitudes `[L_sun, L_moon, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 3] {
    let sun = 280.466_5 + 36_000.769_8 * t;
    let moon = 218.316_5 + 481_267.881_3 * t;
    let node = lunar_node_longitude_deg(t);
    [sun.to_radians(), moon.to_radians(), node.to_radians()]
}

/// Nutation in longitude Δψ in arcseconds.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let [sun, moon, node] = fundamental_arguments(t);
    -17.20 * node.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * node).sin()
}
