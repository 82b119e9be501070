//! Tithi (lunar day) computation.
//!
//! The synodic month divides into 30 tithis of 12 degrees of Moon-Sun
//! elongation each. The tithi in force at local sunrise governs the
//! whole civil day. Tropical longitudes suffice throughout: the
//! ayanamsa cancels in the elongation.

use drik_eph::{Engine, Location};
use drik_time::gregorian_to_jd;

use crate::error::VedicError;

/// Degrees of elongation per tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// The two pakshas (fortnights) of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright half (waxing moon), elongation 0-180 deg.
    Shukla,
    /// Dark half (waning moon), elongation 180-360 deg.
    Krishna,
}

impl Paksha {
    /// Name of the paksha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// One-letter label used in compact panchang listings.
    pub const fn letter(self) -> &'static str {
        match self {
            Self::Shukla => "S",
            Self::Krishna => "K",
        }
    }
}

/// Paksha-local tithi names, 1-indexed; 15 is Purnima in Shukla and
/// Amavasya in Krishna.
pub const TITHI_NAMES: [&str; 16] = [
    "",
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// The tithi governing a civil day, with its boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// Tithi number in the lunar month, 1-30.
    pub number: u8,
    /// Paksha the tithi belongs to.
    pub paksha: Paksha,
    /// Tithi number within the paksha, 1-15.
    pub in_paksha: u8,
    /// JD where this tithi began.
    pub jd_start: f64,
    /// JD where this tithi ends.
    pub jd_end: f64,
    /// True when the following tithi is skipped (begins and ends between
    /// consecutive sunrises).
    pub is_kshaya: bool,
}

impl TithiInfo {
    /// Display name: paksha-local name, with Purnima/Amavasya by paksha.
    pub fn name(&self) -> &'static str {
        match self.number {
            15 => "Purnima",
            30 => "Amavasya",
            _ => TITHI_NAMES[self.in_paksha as usize],
        }
    }
}

/// Moon-Sun elongation in degrees [0, 360) at a JD in UT.
pub fn lunar_phase(engine: &mut Engine, jd_ut: f64) -> f64 {
    let moon = engine.lunar_longitude(jd_ut);
    let sun = engine.solar_longitude(jd_ut);
    (moon - sun).rem_euclid(360.0)
}

/// Tithi number (1-30) in force at a JD in UT.
///
/// A phase of exactly 360 deg clamps to 30, never 31.
pub fn tithi_at_moment(engine: &mut Engine, jd_ut: f64) -> u8 {
    let phase = lunar_phase(engine, jd_ut);
    let t = (phase / TITHI_SEGMENT_DEG) as u8 + 1;
    t.min(30)
}

/// Locate the start of `target_tithi` inside `[jd_lo, jd_hi]` by bisection
/// on the signed phase difference.
///
/// The difference is wrapped into (-180, 180]; without the wrap the
/// bisection diverges at the 30 -> 1 transition where the phase crosses
/// 360 deg.
pub fn find_tithi_boundary(
    engine: &mut Engine,
    jd_lo: f64,
    jd_hi: f64,
    target_tithi: u8,
) -> f64 {
    let target_phase = (target_tithi - 1) as f64 * TITHI_SEGMENT_DEG;
    let mut lo = jd_lo;
    let mut hi = jd_hi;

    for _ in 0..50 {
        let mid = 0.5 * (lo + hi);
        let mut diff = lunar_phase(engine, mid) - target_phase;
        if diff > 180.0 {
            diff -= 360.0;
        } else if diff < -180.0 {
            diff += 360.0;
        }

        if diff >= 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    0.5 * (lo + hi)
}

/// The tithi governing the civil day `(year, month, day)` at `loc`.
pub fn tithi_at_sunrise(
    engine: &mut Engine,
    year: i32,
    month: u32,
    day: u32,
    loc: &Location,
) -> Result<TithiInfo, VedicError> {
    let jd = gregorian_to_jd(year, month, day);
    let jd_rise = engine.sunrise_jd(jd, loc)?;

    let number = tithi_at_moment(engine, jd_rise);
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let in_paksha = if number <= 15 { number } else { number - 15 };

    let jd_start = find_tithi_boundary(engine, jd_rise - 2.0, jd_rise, number);
    let next = number % 30 + 1;
    let jd_end = find_tithi_boundary(engine, jd_rise, jd_rise + 2.0, next);

    // Kshaya: tomorrow's sunrise skips a tithi. A missing tomorrow
    // sunrise (polar edge) just leaves the flag unset.
    let is_kshaya = match engine.sunrise_jd(jd + 1.0, loc) {
        Ok(rise_tomorrow) => {
            let t_tomorrow = tithi_at_moment(engine, rise_tomorrow);
            (t_tomorrow as i32 - number as i32).rem_euclid(30) > 1
        }
        Err(_) => false,
    };

    Ok(TithiInfo {
        number,
        paksha,
        in_paksha,
        jd_start,
        jd_end,
        is_kshaya,
    })
}

/// True when the civil day repeats the previous day's tithi.
///
/// The previous day is taken by JD subtraction so day 1 of a Gregorian
/// month chains into the month before it.
pub fn is_adhika_tithi(
    engine: &mut Engine,
    year: i32,
    month: u32,
    day: u32,
    loc: &Location,
) -> Result<bool, VedicError> {
    let jd = gregorian_to_jd(year, month, day);
    let (py, pm, pd) = drik_time::jd_to_gregorian(jd - 1.0);

    let today = tithi_at_sunrise(engine, year, month, day, loc)?;
    let yesterday = tithi_at_sunrise(engine, py, pm, pd, loc)?;
    Ok(today.number == yesterday.number)
}
