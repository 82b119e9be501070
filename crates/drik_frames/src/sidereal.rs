//! Greenwich mean sidereal time.
//!
//! Meeus eq. 12.3, referenced to 0h UT of the day in question. Apparent
//! sidereal time (GAST) is assembled by the rise/set code as
//! GMST + delta-psi * cos(epsilon).

use crate::normalize_deg;

/// Degrees of sidereal rotation per UT day.
pub const EARTH_ROTATION_DEG_PER_DAY: f64 = 360.985_647;

/// Greenwich mean sidereal time at 0h UT, in degrees.
///
/// `jd_0h` must be a midnight-UT Julian Date (fraction 0.5).
pub fn gmst_0h_deg(jd_0h: f64) -> f64 {
    let t = (jd_0h - 2_451_545.0) / 36_525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    normalize_deg(100.460_618_37 + 36_000.770_053_608 * t + 0.000_387_933 * t2 - t3 / 38_710_000.0)
}
