//! Shared scan-and-bisect helpers for longitude crossings.

use saju_base::normalize_pm180;
use saju_core::sun_apparent_longitude_ut_deg;

use crate::error::SearchError;
use crate::solar_term_types::SolarTermConfig;

/// Longest scan before giving up on a crossing, in days.
pub(crate) const MAX_SCAN_DAYS: f64 = 400.0;

/// Signed distance of the Sun past `target_deg`, in (-180, 180].
fn longitude_past(jd_ut: f64, target_deg: f64) -> f64 {
    normalize_pm180(sun_apparent_longitude_ut_deg(jd_ut) - target_deg)
}

/// Bisect a bracket with `f(t_a) < 0 <= f(t_b)` down to `convergence_days`.
///
/// Returns the upper end of the final bracket, the first time known to be
/// at or past the crossing.
pub(crate) fn bisect_crossing<F>(
    mut t_a: f64,
    mut t_b: f64,
    max_iter: u32,
    convergence_days: f64,
    f_at: F,
) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..max_iter {
        if t_b - t_a < convergence_days {
            break;
        }
        let t_mid = 0.5 * (t_a + t_b);
        if f_at(t_mid) >= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
        }
    }
    t_b
}

/// Find the first UT Julian Date after `jd_start` at which the apparent
/// solar longitude reaches `target_deg`.
///
/// Only a rising crossing (negative to non-negative) counts; the jump at
/// ±180° from the target is ignored.
pub(crate) fn find_longitude_crossing(
    target_deg: f64,
    jd_start: f64,
    config: &SolarTermConfig,
) -> Result<f64, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let step = config.step_days;
    let max_steps = (MAX_SCAN_DAYS / config.step_days).ceil() as usize;
    let f = |t: f64| longitude_past(t, target_deg);

    let mut t_prev = jd_start;
    let mut f_prev = f(t_prev);
    for _ in 0..max_steps {
        let t_curr = t_prev + step;
        let f_curr = f(t_curr);

        if f_prev < 0.0 && f_curr >= 0.0 && f_curr - f_prev < 90.0 {
            return Ok(bisect_crossing(
                t_prev,
                t_curr,
                config.max_iterations,
                config.convergence_days,
                f,
            ));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }
    Err(SearchError::NoConvergence("no solar longitude crossing within scan window"))
}
