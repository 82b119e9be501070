//! Civil-day panchang assembly: HinduDate records and month tables.

use drik_eph::{Engine, Location};
use drik_time::{day_of_week, gregorian_to_jd};

use crate::error::VedicError;
use crate::masa::{self, Masa};
use crate::tithi::{self, Paksha, TithiInfo};
use crate::vaar::Vaar;

/// A fully resolved Hindu lunisolar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HinduDate {
    /// Saka era year.
    pub year_saka: i32,
    /// Vikram samvat year.
    pub year_vikram: i32,
    /// The masa.
    pub masa: Masa,
    /// True inside an adhika (intercalary) month.
    pub is_adhika_masa: bool,
    /// Paksha of the governing tithi.
    pub paksha: Paksha,
    /// Paksha-local tithi, 1-15.
    pub tithi: u8,
    /// True when this day repeats the previous day's tithi.
    pub is_adhika_tithi: bool,
}

/// One Gregorian day of a month panchang.
#[derive(Debug, Clone, Copy)]
pub struct PanchangDay {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Weekday of the civil day.
    pub vaar: Vaar,
    /// JD of local sunrise.
    pub jd_sunrise: f64,
    /// The resolved Hindu date.
    pub hindu: HinduDate,
    /// The governing tithi with its boundaries.
    pub tithi: TithiInfo,
}

/// Resolve the full Hindu date for a Gregorian civil day.
pub fn gregorian_to_hindu(
    engine: &mut Engine,
    year: i32,
    month: u32,
    day: u32,
    loc: &Location,
) -> Result<HinduDate, VedicError> {
    let ti = tithi::tithi_at_sunrise(engine, year, month, day, loc)?;
    let mi = masa::masa_for_date(engine, year, month, day, loc)?;
    let is_adhika_tithi = tithi::is_adhika_tithi(engine, year, month, day, loc)?;

    Ok(HinduDate {
        year_saka: mi.year_saka,
        year_vikram: mi.year_vikram,
        masa: mi.masa,
        is_adhika_masa: mi.is_adhika,
        paksha: ti.paksha,
        tithi: ti.in_paksha,
        is_adhika_tithi,
    })
}

/// Days in a Gregorian month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    const MDAYS: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && ((year % 4 == 0 && year % 100 != 0) || year % 400 == 0) {
        29
    } else {
        MDAYS[month as usize]
    }
}

/// Build the panchang for every day of a Gregorian month.
pub fn month_panchang(
    engine: &mut Engine,
    year: i32,
    month: u32,
    loc: &Location,
) -> Result<Vec<PanchangDay>, VedicError> {
    let ndays = days_in_month(year, month);
    let mut days = Vec::with_capacity(ndays as usize);

    for d in 1..=ndays {
        let jd = gregorian_to_jd(year, month, d);
        let jd_sunrise = engine.sunrise_jd(jd, loc)?;
        let hindu = gregorian_to_hindu(engine, year, month, d, loc)?;
        let ti = tithi::tithi_at_sunrise(engine, year, month, d, loc)?;

        days.push(PanchangDay {
            year,
            month,
            day: d,
            vaar: Vaar::from_dow(day_of_week(jd)),
            jd_sunrise,
            hindu,
            tithi: ti,
        });
    }

    Ok(days)
}

/// Split a JD into local (h, m, s), rounding to the nearest second.
pub fn jd_to_local_hms(jd_ut: f64, utc_offset: f64) -> (u32, u32, u32) {
    let local = jd_ut + utc_offset / 24.0 + 0.5;
    let frac = local - local.floor();
    let total = (frac * 86_400.0).round() as u32 % 86_400;
    (total / 3600, total % 3600 / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 4), 30);
    }

    #[test]
    fn local_hms_rounding() {
        // JD at exactly 06:30:00 IST.
        let jd = drik_time::gregorian_to_jd(2024, 1, 1) + 1.0 / 24.0; // 01:00 UT
        let (h, m, s) = jd_to_local_hms(jd, 5.5);
        assert_eq!((h, m, s), (6, 30, 0));
    }

    #[test]
    fn local_hms_carry() {
        // 23:59:59.7 local rounds into the next day cleanly.
        let jd = drik_time::gregorian_to_jd(2024, 1, 1) - 5.5 / 24.0 + (86_399.7 / 86_400.0);
        let (h, m, s) = jd_to_local_hms(jd, 5.5);
        assert_eq!((h, m, s), (0, 0, 0));
    }

    #[test]
    fn april_2024_month_table() {
        let mut engine = Engine::new();
        let loc = Location::NEW_DELHI;
        let days = month_panchang(&mut engine, 2024, 4, &loc).unwrap();
        assert_eq!(days.len(), 30);
        // Apr 9 opened Chaitra Shukla Pratipada, Saka 1946.
        let d9 = &days[8];
        assert_eq!(d9.hindu.masa, Masa::Chaitra);
        assert_eq!(d9.hindu.paksha, Paksha::Shukla);
        assert_eq!(d9.hindu.tithi, 1);
        assert_eq!(d9.hindu.year_saka, 1946);
        assert!(!d9.hindu.is_adhika_masa);
        // Weekdays advance one step per row.
        for w in days.windows(2) {
            let a = w[0].vaar as u8;
            let b = w[1].vaar as u8;
            assert_eq!((a + 1) % 7, b);
        }
    }
}
