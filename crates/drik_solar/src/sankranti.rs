//! Sankranti localization and sankranti-to-civil-day assignment.

use drik_eph::{Engine, Location};
use drik_time::{gregorian_to_jd, jd_to_gregorian};
use drik_vedic::tithi_at_sunrise;

use crate::critical::{bengali_day_edge_offset, bengali_rashi_correction, critical_time};
use crate::error::SolarError;
use crate::types::SolarCalendar;

const MINUTE: f64 = 1.0 / 1440.0;

/// Locate the instant the Sun's sidereal longitude reaches
/// `target_longitude` (a rashi cusp, multiple of 30 deg) near `jd_est`.
///
/// Bisects over `[jd_est - 20, jd_est + 20]`; if the longitude at the low
/// edge is already past the target, the low side widens by 30 days. The
/// signed difference is wrapped into (-180, 180] so the Mesha cusp
/// (360 -> 0) converges like every other.
pub fn sankranti_jd(engine: &Engine, jd_est: f64, target_longitude: f64) -> f64 {
    let mut lo = jd_est - 20.0;
    let mut hi = jd_est + 20.0;

    let mut diff_lo = engine.solar_longitude_sidereal(lo) - target_longitude;
    if diff_lo > 180.0 {
        diff_lo -= 360.0;
    } else if diff_lo < -180.0 {
        diff_lo += 360.0;
    }
    if diff_lo >= 0.0 {
        lo -= 30.0;
    }

    for _ in 0..50 {
        let mid = 0.5 * (lo + hi);
        let mut diff = engine.solar_longitude_sidereal(mid) - target_longitude;
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

/// The Gregorian civil day that becomes day 1 of the regional month
/// opened by the sankranti at `jd_sankranti` into `rashi`.
pub fn sankranti_to_civil_day(
    engine: &mut Engine,
    jd_sankranti: f64,
    loc: &Location,
    cal: SolarCalendar,
    rashi: u8,
) -> Result<(i32, u32, u32), SolarError> {
    // Local calendar date containing the sankranti. The Bengali day edge
    // may sit a few minutes before midnight for some target rashis.
    let edge_min = if cal == SolarCalendar::Bengali {
        bengali_day_edge_offset(rashi)
    } else {
        0.0
    };
    let local = jd_sankranti + loc.utc_offset / 24.0 + 0.5 + edge_min * MINUTE;
    let (sy, sm, sd) = jd_to_gregorian(local.floor());

    let jd_day = gregorian_to_jd(sy, sm, sd);
    let crit = critical_time(engine, jd_day, loc, cal, Some(rashi))?;

    if jd_sankranti > crit {
        return Ok(jd_to_gregorian(jd_day + 1.0));
    }

    if cal == SolarCalendar::Bengali {
        // Sankranti in the midnight zone: decide per target rashi, else by
        // whether the tithi of the running Hindu day outlasts it.
        let push_next = match bengali_rashi_correction(rashi) {
            Some(keep_day) => !keep_day,
            None => {
                let (py, pm, pd) = jd_to_gregorian(jd_day - 1.0);
                let ti = tithi_at_sunrise(engine, py, pm, pd, loc)?;
                ti.jd_end <= jd_sankranti
            }
        };
        if push_next {
            return Ok(jd_to_gregorian(jd_day + 1.0));
        }
    }

    Ok((sy, sm, sd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drik_time::calendar_to_jd;

    #[test]
    fn mesha_sankranti_2025_lands_mid_april() {
        let engine = Engine::new();
        let jd_est = gregorian_to_jd(2025, 4, 14);
        let jd = sankranti_jd(&engine, jd_est, 0.0);
        let (y, m, d) = jd_to_gregorian(jd);
        assert_eq!((y, m), (2025, 4));
        assert!((13..=15).contains(&d), "Mesha sankranti on Apr {d}");
        // The cusp itself: sidereal longitude within 1" of zero.
        let lon = engine.solar_longitude_sidereal(jd);
        let dist = lon.min(360.0 - lon) * 3600.0;
        assert!(dist < 1.0, "cusp residual {dist}\"");
    }

    #[test]
    fn cusp_residual_under_one_arcsecond_for_all_rashis() {
        let engine = Engine::new();
        for r in 1..=12u8 {
            // Rashi r is entered roughly in Gregorian month 3 + r.
            let mut gm = 3 + r as u32;
            let mut gy = 2024;
            if gm > 12 {
                gm -= 12;
                gy += 1;
            }
            let jd_est = gregorian_to_jd(gy, gm, 14);
            let target = (r - 1) as f64 * 30.0;
            let jd = sankranti_jd(&engine, jd_est, target);
            let mut resid = engine.solar_longitude_sidereal(jd) - target;
            if resid > 180.0 {
                resid -= 360.0;
            } else if resid < -180.0 {
                resid += 360.0;
            }
            assert!(resid.abs() * 3600.0 < 1.0, "rashi {r}: residual {resid} deg");
        }
    }

    #[test]
    fn widened_bracket_still_converges() {
        // Estimate placed after the crossing: the low side widens by 30
        // days and the bisection still lands on the cusp.
        let engine = Engine::new();
        let jd_est = gregorian_to_jd(2025, 4, 14) + 18.0;
        let jd = sankranti_jd(&engine, jd_est, 0.0);
        let (y, m, _) = jd_to_gregorian(jd);
        assert_eq!((y, m), (2025, 4));
    }

    #[test]
    fn tamil_new_year_2025_civil_day() {
        // Mesha sankranti 2025 falls in the small hours of Apr 14 IST,
        // well before the sunset cutoff: Apr 14 is day 1.
        let mut engine = Engine::new();
        let loc = drik_eph::Location::NEW_DELHI;
        let jd_est = gregorian_to_jd(2025, 4, 14);
        let jd_sank = sankranti_jd(&engine, jd_est, 0.0);
        let day = sankranti_to_civil_day(&mut engine, jd_sank, &loc, SolarCalendar::Tamil, 1)
            .unwrap();
        assert_eq!(day, (2025, 4, 14));
    }

    #[test]
    fn bengali_new_year_2025_civil_day() {
        // The same sankranti is after the Bengali midnight buffer of Apr
        // 14, so Boishakh 1 is Apr 15.
        let mut engine = Engine::new();
        let loc = drik_eph::Location::NEW_DELHI;
        let jd_est = gregorian_to_jd(2025, 4, 14);
        let jd_sank = sankranti_jd(&engine, jd_est, 0.0);
        let day = sankranti_to_civil_day(&mut engine, jd_sank, &loc, SolarCalendar::Bengali, 1)
            .unwrap();
        assert_eq!(day, (2025, 4, 15));
    }

    #[test]
    fn odia_new_year_2024_civil_day() {
        // 2024 Mesha sankranti at 21:15 IST on Apr 13, comfortably before
        // the 22:12 cutoff: Apr 13 opens the year.
        let mut engine = Engine::new();
        let loc = drik_eph::Location::NEW_DELHI;
        let jd_est = gregorian_to_jd(2024, 4, 14);
        let jd_sank = sankranti_jd(&engine, jd_est, 0.0);
        let day = sankranti_to_civil_day(&mut engine, jd_sank, &loc, SolarCalendar::Odia, 1)
            .unwrap();
        assert_eq!(day, (2024, 4, 13));
    }

    #[test]
    fn odia_1915_boundary_hugs_the_cutoff() {
        // The 1915 Mesha sankranti fell 42 s before the 22:12 IST cutoff;
        // the assignment must agree with the side of the cutoff the
        // located instant lands on.
        let mut engine = Engine::new();
        let loc = drik_eph::Location::NEW_DELHI;
        let jd_est = calendar_to_jd(1915, 4, 13.0);
        let jd_sank = sankranti_jd(&engine, jd_est, 0.0);

        let local = jd_sank + loc.utc_offset / 24.0 + 0.5;
        let frac = local - local.floor();
        let ist_minutes = frac * 1440.0;
        // 22:12 IST is minute 1332 of the local day.
        assert!(
            (ist_minutes - 1331.3).abs() < 3.0,
            "sankranti at minute {ist_minutes} of Apr 13 IST"
        );

        let jd_day = gregorian_to_jd(1915, 4, 13);
        let crit = critical_time(&mut engine, jd_day, &loc, SolarCalendar::Odia, Some(1)).unwrap();
        let day = sankranti_to_civil_day(&mut engine, jd_sank, &loc, SolarCalendar::Odia, 1)
            .unwrap();
        let expected = if jd_sank <= crit {
            (1915, 4, 13)
        } else {
            (1915, 4, 14)
        };
        assert_eq!(day, expected);
    }
}
