//! Solar ephemeris core for solar-term searches.
//!
//! This crate provides the one physical quantity the saju engine needs:
//! the Sun's apparent geocentric ecliptic longitude. It is computed
//! analytically (truncated VSOP87D + nutation + aberration), so no kernel
//! files are loaded and every call is a pure function of its epoch.

pub mod nutation;
pub mod sun;
pub mod vsop87;

pub use nutation::{fundamental_arguments, lunar_node_longitude_deg, nutation_longitude_arcsec};
pub use sun::{
    SUN_MEAN_MOTION_DEG_PER_DAY, SunPosition, sun_apparent_longitude_deg,
    sun_apparent_longitude_ut_deg, sun_position,
};
pub use vsop87::{earth_heliocentric_longitude_rad, earth_radius_au};
