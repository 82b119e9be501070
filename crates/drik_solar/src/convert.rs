//! Gregorian ↔ regional solar date conversion.

use drik_eph::{Engine, Location};
use drik_time::{gregorian_to_jd, jd_to_gregorian};

use crate::critical::critical_time;
use crate::error::SolarError;
use crate::sankranti::{sankranti_jd, sankranti_to_civil_day};
use crate::types::{SolarCalendar, SolarDate};

/// Rashi the Sun occupies at a JD, by its sidereal longitude.
fn rashi_at(engine: &Engine, jd_ut: f64) -> (u8, f64) {
    let lon = engine.solar_longitude_sidereal(jd_ut);
    let mut rashi = (lon / 30.0).floor() as i32 + 1;
    if rashi > 12 {
        rashi = 12;
    }
    if rashi < 1 {
        rashi = 1;
    }
    (rashi as u8, lon)
}

/// Approximate Gregorian (year, month) in which the sankranti into
/// `rashi` falls, for a regional year beginning in Gregorian `gy0`.
fn sankranti_gregorian_estimate(cal: SolarCalendar, gy0: i32, month: u32) -> (i32, u32) {
    let first = cal.config().first_rashi as u32;
    let mut gm = 3 + first + (month - 1);
    let mut gy = gy0;
    if gm > 12 {
        gm -= 12;
        gy += 1;
    }
    (gy, gm)
}

/// Era year for a date: locate the year-start sankranti (first_rashi) of
/// the Gregorian year and compare civil days.
fn era_year(
    engine: &mut Engine,
    jd_near: f64,
    loc: &Location,
    jd_date: f64,
    cal: SolarCalendar,
) -> Result<i32, SolarError> {
    let cfg = cal.config();
    let (gy, _, _) = jd_to_gregorian(jd_near);

    let target = (cfg.first_rashi - 1) as f64 * 30.0;
    // The year-start sankranti falls in Gregorian month 3 + first_rashi
    // (April for the Mesha calendars, August for Malayalam).
    let est_month = 3 + cfg.first_rashi as u32;
    let jd_est = gregorian_to_jd(gy, est_month, 14);
    let jd_year_start = sankranti_jd(engine, jd_est, target);

    let (ysy, ysm, ysd) =
        sankranti_to_civil_day(engine, jd_year_start, loc, cal, cfg.first_rashi)?;
    let jd_year_civil = gregorian_to_jd(ysy, ysm, ysd);

    Ok(if jd_date >= jd_year_civil {
        gy - cfg.on_offset
    } else {
        gy - cfg.before_offset
    })
}

/// Convert a Gregorian civil day to its regional solar date.
pub fn gregorian_to_solar(
    engine: &mut Engine,
    year: i32,
    month: u32,
    day: u32,
    loc: &Location,
    cal: SolarCalendar,
) -> Result<SolarDate, SolarError> {
    if !(1..=12).contains(&month) {
        return Err(SolarError::InvalidInput("month must be 1-12"));
    }

    let jd = gregorian_to_jd(year, month, day);
    let jd_crit = critical_time(engine, jd, loc, cal, None)?;

    // Rashi in force at the critical time, then the sankranti that
    // opened it.
    let (mut rashi, lon) = rashi_at(engine, jd_crit);
    let target = (rashi - 1) as f64 * 30.0;
    let mut degrees_past = lon - target;
    if degrees_past < 0.0 {
        degrees_past += 360.0;
    }
    let mut jd_sankranti = sankranti_jd(engine, jd_crit - degrees_past, target);

    let (sy, sm, sd) = sankranti_to_civil_day(engine, jd_sankranti, loc, cal, rashi)?;
    let mut day_in_month = (jd - gregorian_to_jd(sy, sm, sd)) as i32 + 1;

    // The critical-time comparison can push the month start past our
    // date; the day then belongs to the previous rashi's month.
    if day_in_month <= 0 {
        rashi = if rashi == 1 { 12 } else { rashi - 1 };
        let prev_target = (rashi - 1) as f64 * 30.0;
        jd_sankranti = sankranti_jd(engine, jd_sankranti - 28.0, prev_target);
        let (py, pm, pd) = sankranti_to_civil_day(engine, jd_sankranti, loc, cal, rashi)?;
        day_in_month = (jd - gregorian_to_jd(py, pm, pd)) as i32 + 1;
    }

    let regional_month = cal.month_of_rashi(rashi);
    let year_val = era_year(engine, jd_crit, loc, jd, cal)?;

    Ok(SolarDate {
        year: year_val,
        month: regional_month,
        day: day_in_month as u32,
        rashi,
        jd_sankranti,
    })
}

/// Convert a regional solar date back to the Gregorian civil day.
///
/// Exact inverse of [`gregorian_to_solar`] for every valid date; the
/// Gregorian-year carry handles months past December (Makara onward for
/// the Mesha calendars, everything from Makaram for Malayalam's
/// mid-year era).
pub fn solar_to_gregorian(
    engine: &mut Engine,
    date: &SolarDate,
    loc: &Location,
    cal: SolarCalendar,
) -> Result<(i32, u32, u32), SolarError> {
    if !(1..=12).contains(&date.month) {
        return Err(SolarError::InvalidInput("regional month must be 1-12"));
    }
    if !(1..=32).contains(&date.day) {
        return Err(SolarError::InvalidInput("day in month must be 1-32"));
    }

    let cfg = cal.config();
    let rashi = cal.rashi_of_month(date.month);
    let gy0 = date.year + cfg.on_offset;
    let (gy, gm) = sankranti_gregorian_estimate(cal, gy0, date.month);

    let target = (rashi - 1) as f64 * 30.0;
    let jd_sank = sankranti_jd(engine, gregorian_to_jd(gy, gm, 14), target);
    let (sy, sm, sd) = sankranti_to_civil_day(engine, jd_sank, loc, cal, rashi)?;

    let jd = gregorian_to_jd(sy, sm, sd) + (date.day - 1) as f64;
    Ok(jd_to_gregorian(jd))
}
