//! Mean obliquity of the ecliptic.
//!
//! Laskar 1986 ten-term polynomial (Meeus eq. 22.3), valid over tens of
//! millennia; at the epochs the calendar layers touch it agrees with the
//! IAU 1976 cubic to well under 0.01 arcsecond.

const J2000_JD: f64 = 2_451_545.0;

/// Mean obliquity of the ecliptic in degrees at a JD in TT.
pub fn mean_obliquity_deg(jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36_525.0;
    let u = t / 100.0;

    23.0 + 26.0 / 60.0
        + (21.448
            + (-4680.93 * u - 1.55 * u.powi(2) + 1999.25 * u.powi(3) - 51.38 * u.powi(4)
                - 249.67 * u.powi(5)
                - 39.05 * u.powi(6)
                + 7.12 * u.powi(7)
                + 27.87 * u.powi(8)
                + 5.79 * u.powi(9)
                + 2.45 * u.powi(10)))
            / 3600.0
}

/// Mean obliquity of the ecliptic in radians at a JD in TT.
#[inline]
pub fn mean_obliquity_rad(jd_tt: f64) -> f64 {
    mean_obliquity_deg(jd_tt).to_radians()
}
