//! Julian Date ↔ calendar conversions.
//!
//! Algorithms from Meeus, "Astronomical Algorithms" (2nd ed.), chapter 7.
//! The proleptic Gregorian calendar is used throughout; dates of interest
//! to the calendar layers all fall after the 1582 reform.

/// J2000.0 epoch as Julian Date (2000-Jan-01 12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Reference JD for day-of-week: 1950-Jan-01 was a Sunday.
const DOW_ANCHOR_JD: f64 = 2_433_282.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day` may be fractional (e.g. 1.5 = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = y.div_euclid(100);
    let b = 2 - a + a / 4;

    let jd_year = (365.25 * (y as f64 + 4716.0)).floor();
    let jd_month = (30.6001 * (m as f64 + 1.0)).floor();

    jd_year + jd_month + day + b as f64 - 1524.5
}

/// Julian Date at 00:00 UT of a Gregorian date.
#[inline]
pub fn gregorian_to_jd(year: i32, month: u32, day: u32) -> f64 {
    calendar_to_jd(year, month, day as f64)
}

/// Convert a Julian Date to Gregorian calendar date with fractional day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd_plus = jd + 0.5;
    let z = jd_plus.floor() as i64;
    let f = jd_plus - z as f64;

    let a = if z < 2_299_161 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha / 4
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d) as f64 - (30.6001 * e as f64).floor() + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u32, day)
}

/// Convert a Julian Date to a whole Gregorian date, truncating the fraction.
pub fn jd_to_gregorian(jd: f64) -> (i32, u32, u32) {
    let (y, m, d) = jd_to_calendar(jd);
    (y, m, d as u32)
}

/// Day of week for a Julian Date: 0 = Monday .. 6 = Sunday.
pub fn day_of_week(jd: f64) -> u32 {
    let days = (jd - DOW_ANCHOR_JD - 1.5).floor() as i64;
    (days.rem_euclid(7)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn j2000_epoch() {
        // 2000-Jan-01 12:00:00 = JD 2451545.0
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < EPS, "J2000.0: got {jd}");
    }

    #[test]
    fn y2000_midnight() {
        let jd = gregorian_to_jd(2000, 1, 1);
        assert!((jd - 2_451_544.5).abs() < EPS);
    }

    #[test]
    fn gregorian_reform_gap() {
        // 1582-Oct-15 follows the reform; JD 2299160.5 at midnight.
        let jd = gregorian_to_jd(1582, 10, 15);
        assert!((jd - 2_299_160.5).abs() < EPS, "got {jd}");
    }

    #[test]
    fn roundtrip_whole_dates() {
        let cases = [
            (1500, 1, 1),
            (1600, 2, 29),
            (1900, 3, 1),
            (1965, 5, 30),
            (2024, 4, 9),
            (2050, 12, 31),
            (2200, 12, 31),
        ];
        for (y, m, d) in cases {
            let jd = gregorian_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_gregorian(jd);
            assert_eq!((y, m, d), (y2, m2, d2), "roundtrip for {y}-{m}-{d}");
        }
    }

    #[test]
    fn roundtrip_every_day_of_2024() {
        // Leap year; exercises every month-length branch.
        let jd0 = gregorian_to_jd(2024, 1, 1);
        for offset in 0..366 {
            let jd = jd0 + offset as f64;
            let (y, m, d) = jd_to_gregorian(jd);
            assert!((gregorian_to_jd(y, m, d) - jd).abs() < EPS);
        }
    }

    #[test]
    fn dow_anchor_2000() {
        // 2000-Jan-01 was a Saturday.
        assert_eq!(day_of_week(gregorian_to_jd(2000, 1, 1)), 5);
    }

    #[test]
    fn dow_sequence() {
        // 2025-Jan-01 was a Wednesday, and the week cycles from there.
        let jd = gregorian_to_jd(2025, 1, 1);
        for i in 0..14 {
            assert_eq!(day_of_week(jd + i as f64), ((2 + i) % 7) as u32);
        }
    }
}
