//! Apparent sunrise and sunset.
//!
//! Meeus ch. 15 iterative method against apparent sidereal time, with
//! Sinclair refraction at the horizon and the solar semidiameter folded
//! into the horizon depression (upper-limb events). Observer altitude
//! lowers the horizon by a further 0.0353 * sqrt(alt_m) degrees.

use crate::error::EphError;
use crate::sun;
use drik_frames::{
    EARTH_ROTATION_DEG_PER_DAY, gmst_0h_deg, mean_obliquity_rad, normalize_deg,
};
use drik_time::{jd_to_gregorian, jd_ut_to_tt};
use drik_time::gregorian_to_jd;

/// An observer location with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Geographic latitude, degrees north.
    pub latitude: f64,
    /// Geographic longitude, degrees east.
    pub longitude: f64,
    /// Altitude above sea level, meters.
    pub altitude: f64,
    /// Fixed UTC offset in hours (fractional and negative allowed).
    pub utc_offset: f64,
}

impl Location {
    pub const NEW_DELHI: Location = Location {
        latitude: 28.6139,
        longitude: 77.2090,
        altitude: 0.0,
        utc_offset: 5.5,
    };

    /// True when latitude and longitude are within their domains.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Rise,
    Set,
}

/// Sinclair atmospheric refraction at the horizon, degrees.
fn sinclair_refraction_horizon(pressure_hpa: f64, temp_c: f64) -> f64 {
    let r = 34.46; // arcminutes at the horizon
    ((pressure_hpa - 80.0) / 930.0 / (1.0 + 0.00008 * (r + 39.0) * (temp_c - 10.0)) * r) / 60.0
}

/// Solve one rise/set event for the civil day starting at `jd_0h` (UT).
fn solve_for_date(
    jd_0h: f64,
    longitude: f64,
    latitude: f64,
    h0: f64,
    event: Event,
) -> Result<f64, EphError> {
    let phi = latitude.to_radians();

    // Apparent sidereal time at 0h UT: GMST + delta-psi * cos(eps).
    let jd_noon = jd_0h + 0.5;
    let dpsi = sun::nutation_longitude(jd_noon);
    let eps = mean_obliquity_rad(jd_ut_to_tt(jd_noon));
    let theta0 = gmst_0h_deg(jd_0h) + dpsi * eps.cos();

    let (ra, dec) = sun::solar_ra_dec(jd_noon);

    let cos_h0 = (h0.to_radians().sin() - phi.sin() * dec.to_radians().sin())
        / (phi.cos() * dec.to_radians().cos());
    if !(-1.0..=1.0).contains(&cos_h0) {
        return Err(match event {
            Event::Rise => EphError::NoRiseOnThisDay,
            Event::Set => EphError::NoSetOnThisDay,
        });
    }
    let hour_angle = cos_h0.acos().to_degrees();

    // Transit estimate, then offset by the hour angle.
    let m0 = ((ra - longitude - theta0) / 360.0).rem_euclid(1.0);
    let mut m = match event {
        Event::Rise => m0 - hour_angle / 360.0,
        Event::Set => m0 + hour_angle / 360.0,
    };
    m = m.rem_euclid(1.0);

    for _ in 0..10 {
        let (ra_i, dec_i) = sun::solar_ra_dec(jd_0h + m);
        let dec_rad = dec_i.to_radians();

        let theta = theta0 + EARTH_ROTATION_DEG_PER_DAY * m;
        let mut local_hour = normalize_deg(theta + longitude - ra_i);
        if local_hour > 180.0 {
            local_hour -= 360.0;
        }

        let sin_alt = phi.sin() * dec_rad.sin()
            + phi.cos() * dec_rad.cos() * local_hour.to_radians().cos();
        let alt = sin_alt.asin().to_degrees();

        let denom = 360.0 * dec_rad.cos() * phi.cos() * local_hour.to_radians().sin();
        if denom.abs() < 1e-12 {
            break;
        }
        let dm = (alt - h0) / denom;
        m += dm;

        if dm.abs() < 1e-7 {
            break;
        }
    }
    // If the loop ran out, m holds the best refinement so far; in the
    // tested range the iteration always converges.

    // Midnight-UT wrap: at low UTC offsets the converged event can belong
    // to the neighboring UT day.
    match event {
        Event::Rise if m > 0.75 => m -= 1.0,
        Event::Set if m < 0.25 => m += 1.0,
        _ => {}
    }

    Ok(jd_0h + m)
}

fn rise_or_set(jd_ut: f64, loc: &Location, event: Event) -> Result<f64, EphError> {
    // Horizon depression: refraction + 16' semidiameter at station pressure.
    let pressure = if loc.altitude > 0.0 {
        1013.25 * (1.0 - 0.0065 * loc.altitude / 288.0).powf(5.255)
    } else {
        1013.25
    };
    let mut h0 = -sinclair_refraction_horizon(pressure, 0.0) - 16.0 / 60.0;
    if loc.altitude > 0.0 {
        h0 -= 0.0353 * loc.altitude.sqrt();
    }

    let (year, month, day) = jd_to_gregorian(jd_ut);
    let jd_0h = gregorian_to_jd(year, month, day);

    let result = solve_for_date(jd_0h, loc.longitude, loc.latitude, h0, event)?;
    if result >= jd_ut - 1e-4 {
        return Ok(result);
    }

    // The event for this UT date fell before the requested instant; the
    // next one belongs to the following UT day.
    solve_for_date(jd_0h + 1.0, loc.longitude, loc.latitude, h0, event)
}

/// JD of apparent sunrise following `jd_ut` (upper limb).
pub fn sunrise(jd_ut: f64, loc: &Location) -> Result<f64, EphError> {
    rise_or_set(jd_ut, loc, Event::Rise)
}

/// JD of apparent sunset following `jd_ut` (upper limb).
pub fn sunset(jd_ut: f64, loc: &Location) -> Result<f64, EphError> {
    rise_or_set(jd_ut, loc, Event::Set)
}
