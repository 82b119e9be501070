//! Per-calendar critical times and the Bengali tuning hooks.
//!
//! The critical time of a civil day decides whether a sankranti falling
//! on that day opens the new regional month on the same day or the next.
//! Tamil cuts at sunset, Odia at a fixed wall-clock instant, Malayalam at
//! the end of madhyahna; Bengali uses a midnight-centered rule with
//! fortnightly exceptions (Sewell & Dikshit) and per-rashi tuning.
//!
//! The Bengali hook values are observed publisher behavior across
//! 1900-2050, not astronomy; they must stay exactly as tabulated.

use drik_eph::{Engine, Location};

use crate::error::SolarError;
use crate::types::SolarCalendar;

const MINUTE: f64 = 1.0 / 1440.0;

/// Minutes after local midnight of the Bengali base/tuned critical time.
///
/// Karkata's window extends to +32 (its single boundary repair), Tula
/// narrows to +23; every other rashi keeps the 24-minute buffer.
pub fn bengali_tuned_crit(rashi: u8) -> f64 {
    match rashi {
        4 => 32.0,
        7 => 23.0,
        _ => 24.0,
    }
}

/// Minutes by which the Bengali civil-day edge precedes midnight for the
/// target rashi (day begins at 23:60-n of the previous calendar date).
pub fn bengali_day_edge_offset(rashi: u8) -> f64 {
    match rashi {
        6 => 4.0,
        7 => 21.0,
        9 => 10.0,
        _ => 0.0,
    }
}

/// Forced midnight-zone assignment for a rashi: `Some(true)` keeps the
/// flooring day as day 1, `Some(false)` pushes to the next day, `None`
/// falls through to the tithi-persistence rule.
///
/// Karkata co-operates with its extended critical time; Makara always
/// counts as after midnight.
pub fn bengali_rashi_correction(rashi: u8) -> Option<bool> {
    match rashi {
        4 => Some(true),
        10 => Some(false),
        _ => None,
    }
}

/// Critical time (JD in UT) of the civil day starting at `jd_day`
/// (midnight UT of the Gregorian date).
///
/// `rashi` is the target sign of the sankranti under consideration; it
/// only matters for the Bengali tuning and may be `None` when the rashi
/// is not yet known (the base buffer applies).
pub fn critical_time(
    engine: &Engine,
    jd_day: f64,
    loc: &Location,
    cal: SolarCalendar,
    rashi: Option<u8>,
) -> Result<f64, SolarError> {
    let jd = match cal {
        SolarCalendar::Tamil => engine.sunset_jd(jd_day, loc)? - 8.0 * MINUTE,
        SolarCalendar::Odia => jd_day + 16.7 / 24.0,
        SolarCalendar::Malayalam => {
            let rise = engine.sunrise_jd(jd_day, loc)?;
            let set = engine.sunset_jd(jd_day, loc)?;
            rise + 0.6 * (set - rise) - 9.5 * MINUTE
        }
        SolarCalendar::Bengali => {
            let minutes = bengali_tuned_crit(rashi.unwrap_or(0));
            jd_day - loc.utc_offset / 24.0 + minutes * MINUTE
        }
    };
    Ok(jd)
}
