//! Mean Lahiri ayanamsa by 3-D equatorial precession.
//!
//! The Calendar Reform Committee fixed the Lahiri (Chitrapaksha) zero
//! point by its value 23deg 14' 44.889" at 1956-Sep-22 (JD 2435553.5).
//! The ayanamsa at any epoch follows by precessing the vernal-point
//! unit vector from the target epoch to J2000 and on to the reference
//! epoch, rotating into the ecliptic of the reference epoch, and reading
//! off the polar longitude.
//!
//! This is the mean value: no nutation is added here. The tropical
//! longitudes from the solar and lunar theories already carry delta-psi,
//! so adding it again would double-count and leave a ~17" oscillation
//! with the 18.6-year nodal period in every sidereal position.

use drik_frames::{
    mean_obliquity_rad, normalize_deg, precess_equatorial_from_j2000, precess_equatorial_to_j2000,
};
use drik_time::jd_ut_to_tt;

/// Lahiri reference epoch: 1956-Sep-22 00:00 UT.
const LAHIRI_T0: f64 = 2_435_553.5;

/// Ayanamsa at the reference epoch, degrees.
const LAHIRI_AYAN_T0: f64 = 23.245_524_743;

/// Rotate an equatorial 3-vector into the ecliptic frame of obliquity
/// `eps` (radians).
fn equatorial_to_ecliptic(v: &[f64; 3], eps: f64) -> [f64; 3] {
    let (s, c) = eps.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

/// Mean Lahiri ayanamsa in degrees [0, 360) at a JD in UT.
pub fn ayanamsa(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);

    // Vernal point of the target epoch, carried to the reference epoch.
    let x = [1.0, 0.0, 0.0];
    let x = precess_equatorial_to_j2000(&x, jd_tt);
    let x = precess_equatorial_from_j2000(&x, LAHIRI_T0);

    let ecl = equatorial_to_ecliptic(&x, mean_obliquity_rad(LAHIRI_T0));
    let lon = ecl[1].atan2(ecl[0]).to_degrees();

    normalize_deg(-lon + LAHIRI_AYAN_T0)
}

/// Sidereal longitude from a tropical apparent longitude at a JD in UT.
#[inline]
pub fn tropical_to_sidereal(tropical_deg: f64, jd_ut: f64) -> f64 {
    normalize_deg(tropical_deg - ayanamsa(jd_ut))
}
