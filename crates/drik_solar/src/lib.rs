//! Regional solar calendars (Tamil, Bengali, Odia, Malayalam).
//!
//! This crate provides:
//! - Sankranti localization by bisection on sidereal solar longitude
//! - The four region-specific critical-time rules, including the Bengali
//!   midnight rule with its per-rashi tuning hooks
//! - Sankranti-to-civil-day assignment
//! - Gregorian ↔ regional solar date conversion

pub mod convert;
pub mod critical;
pub mod error;
pub mod sankranti;
pub mod types;

pub use convert::{gregorian_to_solar, solar_to_gregorian};
pub use critical::{bengali_day_edge_offset, bengali_rashi_correction, bengali_tuned_crit,
    critical_time};
pub use error::SolarError;
pub use sankranti::{sankranti_jd, sankranti_to_civil_day};
pub use types::{ALL_CALENDARS, SolarCalendar, SolarDate};
