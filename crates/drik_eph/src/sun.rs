//! Apparent tropical solar longitude, RA, and declination.
//!
//! The geometric longitude comes from the VSOP87D Earth series truncated
//! per Meeus, "Astronomical Algorithms" (2nd ed.), Appendix III: 129
//! periodic terms across six powers of time, good to about one arcsecond
//! over several millennia around J2000. The apparent place then applies,
//! in order: the heliocentric→geocentric flip, the FK5 longitude
//! correction, nutation in longitude, and the constant annual aberration.
//!
//! The series data live in immutable parallel tables; evaluation is a
//! straight accumulation in table order.

use drik_frames::{
    mean_obliquity_deg, normalize_deg, nutation_longitude_deg, nutation_obliquity_deg,
};
use drik_time::{jd_tt_to_centuries, jd_ut_to_tt};

/// Annual aberration constant in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.496;

/// FK5 longitude correction in arcseconds.
const FK5_ARCSEC: f64 = -0.090_33;

/// One VSOP87 periodic term: `a * cos(b + c * tau)`.
///
/// `a` is in units of 1e-8 radian; `tau` is Julian millennia TT from
/// J2000.0.
struct VsopTerm {
    a: f64,
    b: f64,
    c: f64,
}

macro_rules! terms {
    ($($a:expr, $b:expr, $c:expr;)*) => {
        &[$(VsopTerm { a: $a, b: $b, c: $c },)*]
    };
}

/// Earth heliocentric longitude, order 0.
#[rustfmt::skip]
const L0: &[VsopTerm] = terms![
    175_347_046.0, 0.0,        0.0;
    3_341_656.0,   4.669_2568, 6283.075_850;
    34_894.0,      4.626_10,   12_566.151_70;
    3497.0,        2.7441,     5753.3849;
    3418.0,        2.8289,     3.5231;
    3136.0,        3.6277,     77_713.7715;
    2676.0,        4.4181,     7860.4194;
    2343.0,        6.1352,     3930.2097;
    1324.0,        0.7425,     11_506.7698;
    1273.0,        2.0371,     529.6910;
    1199.0,        1.1096,     1577.3435;
    990.0,         5.233,      5884.927;
    902.0,         2.045,      26.298;
    857.0,         3.508,      398.149;
    780.0,         1.179,      5223.694;
    753.0,         2.533,      5507.553;
    505.0,         4.583,      18_849.228;
    492.0,         4.205,      775.523;
    357.0,         2.920,      0.067;
    317.0,         5.849,      11_790.629;
    284.0,         1.899,      796.298;
    271.0,         0.315,      10_977.079;
    243.0,         0.345,      5486.778;
    206.0,         4.806,      2544.314;
    205.0,         1.869,      5573.143;
    202.0,         2.458,      6069.777;
    156.0,         0.833,      213.299;
    132.0,         3.411,      2942.463;
    126.0,         1.083,      20.775;
    115.0,         0.645,      0.980;
    103.0,         0.636,      4694.003;
    102.0,         0.976,      15_720.839;
    102.0,         4.267,      7.114;
    99.0,          6.21,       2146.17;
    98.0,          0.68,       155.42;
    86.0,          5.98,       161_000.69;
    85.0,          1.30,       6275.96;
    85.0,          3.67,       71_430.70;
    80.0,          1.81,       17_260.15;
    79.0,          3.04,       12_036.46;
    75.0,          1.76,       5088.63;
    74.0,          3.50,       3154.69;
    74.0,          4.68,       801.82;
    70.0,          0.83,       9437.76;
    62.0,          3.98,       8827.39;
    61.0,          1.82,       7084.90;
    57.0,          2.78,       6286.60;
    56.0,          4.39,       14_143.50;
    56.0,          3.47,       6279.55;
    52.0,          0.19,       12_139.55;
    52.0,          1.33,       1748.02;
    51.0,          0.28,       5856.48;
    49.0,          0.49,       1194.45;
    41.0,          5.37,       8429.24;
    41.0,          2.40,       19_651.05;
    39.0,          6.17,       10_447.39;
    37.0,          6.04,       10_213.29;
    37.0,          2.57,       1059.38;
    36.0,          1.71,       2352.87;
    36.0,          1.78,       6812.77;
    33.0,          0.59,       17_789.85;
    30.0,          0.44,       83_996.85;
    30.0,          2.74,       1349.87;
    25.0,          3.16,       4690.48;
];

/// Earth heliocentric longitude, order 1.
#[rustfmt::skip]
const L1: &[VsopTerm] = terms![
    628_331_966_747.0, 0.0,        0.0;
    206_059.0,         2.678_235,  6283.075_850;
    4303.0,            2.6351,     12_566.1517;
    425.0,             1.590,      3.523;
    119.0,             5.796,      26.298;
    109.0,             2.966,      1577.344;
    93.0,              2.59,       18_849.23;
    72.0,              1.14,       529.69;
    68.0,              1.87,       398.15;
    67.0,              4.41,       5507.55;
    59.0,              2.89,       5223.69;
    56.0,              2.17,       155.42;
    45.0,              0.40,       796.30;
    36.0,              0.47,       775.52;
    29.0,              2.65,       7.11;
    21.0,              5.34,       0.98;
    19.0,              1.85,       5486.78;
    19.0,              4.97,       213.30;
    17.0,              2.99,       6275.96;
    16.0,              0.03,       2544.31;
    16.0,              1.43,       2146.17;
    15.0,              1.21,       10_977.08;
    12.0,              2.83,       1748.02;
    12.0,              3.26,       5088.63;
    12.0,              5.27,       1194.45;
    12.0,              2.08,       4694.00;
    11.0,              0.77,       553.57;
    10.0,              1.30,       6286.60;
    10.0,              4.24,       1349.87;
    9.0,               2.70,       242.73;
    9.0,               5.64,       951.72;
    8.0,               5.30,       2352.87;
    6.0,               2.65,       9437.76;
    6.0,               4.67,       4690.48;
];

/// Earth heliocentric longitude, order 2.
#[rustfmt::skip]
const L2: &[VsopTerm] = terms![
    52_919.0, 0.0,    0.0;
    8720.0,   1.0721, 6283.0758;
    309.0,    0.867,  12_566.152;
    27.0,     0.05,   3.52;
    16.0,     5.19,   26.30;
    16.0,     3.68,   155.42;
    10.0,     0.76,   18_849.23;
    9.0,      2.06,   77_713.77;
    7.0,      0.83,   775.52;
    5.0,      4.66,   1577.34;
    4.0,      1.03,   7.11;
    4.0,      3.44,   5573.14;
    3.0,      5.14,   796.30;
    3.0,      6.05,   5507.55;
    3.0,      1.19,   242.73;
    3.0,      6.12,   529.69;
    3.0,      0.31,   398.15;
    3.0,      2.28,   553.57;
    2.0,      4.38,   5223.69;
    2.0,      3.75,   0.98;
];

/// Earth heliocentric longitude, order 3.
#[rustfmt::skip]
const L3: &[VsopTerm] = terms![
    289.0, 5.844, 6283.076;
    35.0,  0.0,   0.0;
    17.0,  5.49,  12_566.15;
    3.0,   5.20,  155.42;
    1.0,   4.72,  3.52;
    1.0,   5.30,  18_849.23;
    1.0,   5.97,  242.73;
];

/// Earth heliocentric longitude, order 4.
#[rustfmt::skip]
const L4: &[VsopTerm] = terms![
    114.0, 3.142, 0.0;
    8.0,   4.13,  6283.08;
    1.0,   3.84,  12_566.15;
];

/// Earth heliocentric longitude, order 5.
#[rustfmt::skip]
const L5: &[VsopTerm] = terms![
    1.0, 3.14, 0.0;
];

fn sum_series(series: &[VsopTerm], tau: f64) -> f64 {
    let mut acc = 0.0;
    for term in series {
        acc += term.a * (term.b + term.c * tau).cos();
    }
    acc
}

/// Earth heliocentric ecliptic longitude in radians at `tau` Julian
/// millennia TT from J2000.0 (VSOP87D dynamical ecliptic of date).
fn earth_heliocentric_longitude_rad(tau: f64) -> f64 {
    let l = sum_series(L0, tau)
        + tau
            * (sum_series(L1, tau)
                + tau
                    * (sum_series(L2, tau)
                        + tau
                            * (sum_series(L3, tau)
                                + tau * (sum_series(L4, tau) + tau * sum_series(L5, tau)))));
    l * 1e-8
}

/// Geometric tropical solar longitude in degrees (FK5 frame) at a JD in TT.
fn geometric_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let tau = t / 10.0;

    let l_earth = earth_heliocentric_longitude_rad(tau).to_degrees();
    let theta = normalize_deg(l_earth + 180.0);

    // VSOP87 dynamical frame -> FK5.
    normalize_deg(theta + FK5_ARCSEC / 3600.0)
}

/// Apparent tropical solar longitude in degrees [0, 360) at a JD in UT.
pub fn solar_longitude(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);
    let t = jd_tt_to_centuries(jd_tt);

    let geometric = geometric_longitude_deg(jd_tt);
    let apparent = geometric + nutation_longitude_deg(t) - ABERRATION_ARCSEC / 3600.0;
    normalize_deg(apparent)
}

/// Apparent solar right ascension in degrees [0, 360) at a JD in UT.
pub fn solar_ra(jd_ut: f64) -> f64 {
    let (ra, _dec) = solar_ra_dec(jd_ut);
    ra
}

/// Apparent solar declination in degrees at a JD in UT.
pub fn solar_declination(jd_ut: f64) -> f64 {
    let (_ra, dec) = solar_ra_dec(jd_ut);
    dec
}

/// Apparent solar (RA, declination) in degrees at a JD in UT.
pub fn solar_ra_dec(jd_ut: f64) -> (f64, f64) {
    let jd_tt = jd_ut_to_tt(jd_ut);
    let t = jd_tt_to_centuries(jd_tt);

    let lambda = solar_longitude(jd_ut).to_radians();
    let eps = (mean_obliquity_deg(jd_tt) + nutation_obliquity_deg(t)).to_radians();

    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();

    (normalize_deg(ra.to_degrees()), dec.to_degrees())
}

/// Nutation in longitude in degrees at a JD in UT.
///
/// Shared helper: the Moon borrows this to form its apparent longitude and
/// the rise/set code uses it for apparent sidereal time.
pub fn nutation_longitude(jd_ut: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_ut_to_tt(jd_ut));
    nutation_longitude_deg(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drik_time::calendar_to_jd;

    #[test]
    fn march_equinox_2024() {
        // 2024-Mar-20 03:06 UT.
        let jd = calendar_to_jd(2024, 3, 20.0 + 3.0 / 24.0 + 6.0 / 1440.0);
        let lon = solar_longitude(jd);
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.01, "longitude at equinox = {lon}");
    }

    #[test]
    fn june_solstice_2000() {
        // 2000-Jun-21 01:48 UT.
        let jd = calendar_to_jd(2000, 6, 21.0 + 1.0 / 24.0 + 48.0 / 1440.0);
        let lon = solar_longitude(jd);
        assert!((lon - 90.0).abs() < 0.01, "longitude at solstice = {lon}");
    }

    #[test]
    fn march_equinox_2010() {
        // 2010-Mar-20 17:32 UT.
        let jd = calendar_to_jd(2010, 3, 20.0 + 17.0 / 24.0 + 32.0 / 1440.0);
        let lon = solar_longitude(jd);
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.01, "longitude at equinox = {lon}");
    }

    #[test]
    fn daily_motion_near_one_degree() {
        let jd = calendar_to_jd(2024, 1, 10.0);
        let step = (solar_longitude(jd + 1.0) - solar_longitude(jd)).rem_euclid(360.0);
        // Near perihelion the Sun covers ~1.019 deg/day.
        assert!((step - 1.019).abs() < 0.01, "daily motion = {step}");
    }

    #[test]
    fn declination_bounds() {
        for i in 0..730 {
            let jd = calendar_to_jd(2023, 1, 1.0) + i as f64;
            let dec = solar_declination(jd);
            assert!(dec.abs() < 23.5, "declination {dec} at offset {i}");
        }
    }

    #[test]
    fn ra_tracks_longitude_at_equinox() {
        let jd = calendar_to_jd(2024, 3, 20.0 + 3.0 / 24.0 + 6.0 / 1440.0);
        let ra = solar_ra(jd);
        let dist = ra.min(360.0 - ra);
        assert!(dist < 0.02, "RA at equinox = {ra}");
    }
}
