//! Lunisolar calendar resolution: tithi, masa, and civil-day panchang.
//!
//! This crate provides:
//! - Paksha/tithi types and the tithi engine (phase, boundaries by
//!   bisection, tithi at sunrise, adhika/kshaya detection)
//! - Masa resolution with new-moon localization and adhika-masa rule
//! - Saka and Vikram year counts by Kali Ahargana
//! - `HinduDate` assembly and Gregorian-month panchang tables

pub mod error;
pub mod masa;
pub mod panchang;
pub mod rashi;
pub mod tithi;
pub mod vaar;

pub use error::VedicError;
pub use masa::{ALL_MASAS, Masa, MasaInfo, masa_for_date, new_moon_after, new_moon_before,
    year_saka, year_vikram};
pub use panchang::{HinduDate, PanchangDay, days_in_month, gregorian_to_hindu, jd_to_local_hms,
    month_panchang};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_sidereal, solar_rashi};
pub use tithi::{Paksha, TITHI_NAMES, TithiInfo, find_tithi_boundary, is_adhika_tithi,
    lunar_phase, tithi_at_moment, tithi_at_sunrise};
pub use vaar::{ALL_VAARS, Vaar};
