//! Masa (lunar month) resolution in the Amanta scheme.
//!
//! A lunar month is the closed-open interval between consecutive new
//! moons. The month is named after the rashi the Sun will next enter:
//! `masa = (rashi_at_previous_new_moon mod 12) + 1`. When the Sun's
//! rashi does not change between the bracketing new moons, the month is
//! adhika (intercalary) and keeps the same name with the adhika flag.
//!
//! New moons are localized by 17-point inverse Lagrange interpolation of
//! the lunar phase, monotonized through the 360 -> 0 discontinuity.

use drik_eph::{Engine, Location};
use drik_time::gregorian_to_jd;

use crate::error::VedicError;
use crate::rashi::solar_rashi;
use crate::tithi::{lunar_phase, tithi_at_moment};

/// Sidereal year in days, for the Kali Ahargana year count.
const SIDEREAL_YEAR_DAYS: f64 = 365.256_36;

/// JD of the Kali Yuga epoch (3102 BCE Feb 18, Ujjain midnight).
const KALI_EPOCH_JD: f64 = 588_465.5;

/// The 12 masas, numbered 1 (Chaitra) through 12 (Phalguna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashvina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (index 0 = Chaitra).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashvina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    /// Sanskrit name of the masa.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashvina => "Ashvina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 1-based masa number (Chaitra = 1 .. Phalguna = 12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Masa from a 1-based number; wraps modulo 12.
    pub fn from_number(n: i32) -> Masa {
        ALL_MASAS[(n - 1).rem_euclid(12) as usize]
    }
}

/// A resolved lunar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    /// The masa name.
    pub masa: Masa,
    /// True for an adhika (intercalary) month.
    pub is_adhika: bool,
    /// Saka era year.
    pub year_saka: i32,
    /// Vikram samvat year.
    pub year_vikram: i32,
    /// JD of the new moon opening the month.
    pub jd_start: f64,
    /// JD of the new moon closing the month.
    pub jd_end: f64,
}

/// Inverse Lagrange interpolation: the abscissa where the sampled curve
/// reaches `target`.
fn inverse_lagrange(x: &[f64; 17], y: &[f64; 17], target: f64) -> f64 {
    let mut total = 0.0;
    for i in 0..17 {
        let mut numer = 1.0;
        let mut denom = 1.0;
        for j in 0..17 {
            if j != i {
                numer *= target - y[j];
                denom *= y[i] - y[j];
            }
        }
        total += numer * x[i] / denom;
    }
    total
}

/// Monotonize sampled phases through the 360 -> 0 discontinuity.
fn unwrap_phases(y: &mut [f64; 17]) {
    for i in 1..17 {
        if y[i] < y[i - 1] {
            y[i] += 360.0;
        }
    }
}

fn new_moon_near(engine: &mut Engine, start: f64) -> f64 {
    let mut x = [0.0; 17];
    let mut y = [0.0; 17];
    for i in 0..17 {
        x[i] = -2.0 + i as f64 * 0.25;
        y[i] = lunar_phase(engine, start + x[i]);
    }
    unwrap_phases(&mut y);
    start + inverse_lagrange(&x, &y, 360.0)
}

/// JD of the last new moon at or before `jd_ut`.
///
/// `tithi_hint` is the tithi number at `jd_ut`, giving the distance back
/// to the phase-360 crossing in whole days.
pub fn new_moon_before(engine: &mut Engine, jd_ut: f64, tithi_hint: u8) -> f64 {
    new_moon_near(engine, jd_ut - tithi_hint as f64)
}

/// JD of the first new moon after `jd_ut`.
pub fn new_moon_after(engine: &mut Engine, jd_ut: f64, tithi_hint: u8) -> f64 {
    new_moon_near(engine, jd_ut + (30 - tithi_hint) as f64)
}

/// Saka year at `jd_ut` for a day in masa `masa_num`, by Kali Ahargana.
pub fn year_saka(jd_ut: f64, masa_num: u8) -> i32 {
    let ahar = jd_ut - KALI_EPOCH_JD;
    let kali = ((ahar + (4 - masa_num as i32) as f64 * 30.0) / SIDEREAL_YEAR_DAYS) as i32;
    kali - 3179
}

/// Vikram samvat year from a Saka year.
#[inline]
pub fn year_vikram(saka: i32) -> i32 {
    saka + 135
}

/// Resolve the masa for the civil day `(year, month, day)` at `loc`.
pub fn masa_for_date(
    engine: &mut Engine,
    year: i32,
    month: u32,
    day: u32,
    loc: &Location,
) -> Result<MasaInfo, VedicError> {
    let jd = gregorian_to_jd(year, month, day);
    let jd_rise = engine.sunrise_jd(jd, loc)?;

    let hint = tithi_at_moment(engine, jd_rise);
    let nm_before = new_moon_before(engine, jd_rise, hint);
    let nm_after = new_moon_after(engine, jd_rise, hint);

    let rashi_prev = solar_rashi(engine, nm_before);
    let rashi_next = solar_rashi(engine, nm_after);
    let is_adhika = rashi_prev == rashi_next;

    let masa_num = (rashi_prev % 12) + 1;
    let masa = Masa::from_number(masa_num as i32);

    let saka = year_saka(jd_rise, masa_num);

    Ok(MasaInfo {
        masa,
        is_adhika,
        year_saka: saka,
        year_vikram: year_vikram(saka),
        jd_start: nm_before,
        jd_end: nm_after,
    })
}
