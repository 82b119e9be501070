//! Stable public facade over the drik panchang engine.
//!
//! Everything the CLI, generators, and external consumers need lives
//! behind this crate: calendar primitives, the ephemeris engine, the
//! lunisolar panchang, and the four regional solar calendars.
//!
//! ```no_run
//! use drik::{Engine, Location, gregorian_to_hindu};
//!
//! let mut engine = Engine::new();
//! let hd = gregorian_to_hindu(&mut engine, 2024, 4, 9, &Location::NEW_DELHI).unwrap();
//! println!("{} {} {}", hd.masa.name(), hd.paksha.name(), hd.tithi);
//! ```

pub use drik_eph::{Engine, EphError, Location};
pub use drik_solar::{
    ALL_CALENDARS, SolarCalendar, SolarDate, SolarError, gregorian_to_solar, solar_to_gregorian,
};
pub use drik_time::{day_of_week, gregorian_to_jd, jd_to_gregorian};
pub use drik_vedic::{
    HinduDate, Masa, MasaInfo, Paksha, PanchangDay, Rashi, TithiInfo, Vaar, VedicError,
    days_in_month, gregorian_to_hindu, jd_to_local_hms, masa_for_date, month_panchang,
    tithi_at_sunrise,
};

/// First fully supported Gregorian year.
pub const MIN_YEAR: i32 = 1500;

/// Last fully supported Gregorian year.
pub const MAX_YEAR: i32 = 2200;

/// Validate a Gregorian date against the supported domain.
///
/// In-range callers may skip this; the engines themselves do not check.
pub fn validate_gregorian(year: i32, month: u32, day: u32) -> Result<(), VedicError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year)
        || !(1..=12).contains(&month)
        || day < 1
        || day > days_in_month(year, month)
    {
        return Err(VedicError::DateOutOfRange);
    }
    Ok(())
}

/// Apparent tropical solar longitude in degrees [0, 360).
pub fn solar_longitude(engine: &Engine, jd_ut: f64) -> f64 {
    engine.solar_longitude(jd_ut)
}

/// Apparent tropical lunar longitude in degrees [0, 360).
pub fn lunar_longitude(engine: &mut Engine, jd_ut: f64) -> f64 {
    engine.lunar_longitude(jd_ut)
}

/// Mean Lahiri ayanamsa in degrees [0, 360).
pub fn ayanamsa(engine: &Engine, jd_ut: f64) -> f64 {
    engine.ayanamsa(jd_ut)
}

/// JD of apparent sunrise for the local civil day beginning at
/// `jd_local_midnight`.
pub fn sunrise_jd(
    engine: &Engine,
    jd_local_midnight: f64,
    loc: &Location,
) -> Result<f64, EphError> {
    engine.sunrise_jd(jd_local_midnight, loc)
}

/// JD of apparent sunset for the local civil day beginning at
/// `jd_local_midnight`.
pub fn sunset_jd(
    engine: &Engine,
    jd_local_midnight: f64,
    loc: &Location,
) -> Result<f64, EphError> {
    engine.sunset_jd(jd_local_midnight, loc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_bounds() {
        assert!(validate_gregorian(2024, 2, 29).is_ok());
        assert!(validate_gregorian(2023, 2, 29).is_err());
        assert!(validate_gregorian(1499, 6, 1).is_err());
        assert!(validate_gregorian(2201, 6, 1).is_err());
        assert!(validate_gregorian(2024, 0, 1).is_err());
        assert!(validate_gregorian(2024, 13, 1).is_err());
        assert!(validate_gregorian(2024, 4, 31).is_err());
    }

    #[test]
    fn facade_functions_delegate() {
        let mut engine = Engine::new();
        let jd = gregorian_to_jd(2024, 4, 9);
        assert_eq!(solar_longitude(&engine, jd), engine.solar_longitude(jd));
        assert_eq!(ayanamsa(&engine, jd), engine.ayanamsa(jd));
        let a = lunar_longitude(&mut engine, jd);
        let b = engine.lunar_longitude(jd);
        assert_eq!(a, b);
    }

    #[test]
    fn end_to_end_through_the_facade() {
        let mut engine = Engine::new();
        let loc = Location::NEW_DELHI;
        validate_gregorian(2024, 4, 9).unwrap();
        let hd = gregorian_to_hindu(&mut engine, 2024, 4, 9, &loc).unwrap();
        assert_eq!(hd.masa, Masa::Chaitra);
        let sd = gregorian_to_solar(&mut engine, 2024, 4, 14, &loc, SolarCalendar::Tamil).unwrap();
        assert_eq!((sd.month, sd.day), (1, 1));
    }
}
