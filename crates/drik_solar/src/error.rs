//! Error types for the regional solar calendars.

use std::error::Error;
use std::fmt::{Display, Formatter};

use drik_eph::EphError;
use drik_vedic::VedicError;

/// Errors from solar calendar conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolarError {
    /// Error from the ephemeris (no sunrise/sunset on this day).
    Eph(EphError),
    /// Input out of domain (month or day outside its range).
    InvalidInput(&'static str),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eph(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for SolarError {}

impl From<EphError> for SolarError {
    fn from(e: EphError) -> Self {
        Self::Eph(e)
    }
}

impl From<VedicError> for SolarError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::Eph(eph) => Self::Eph(eph),
            VedicError::DateOutOfRange => Self::InvalidInput("date outside supported range"),
            _ => Self::InvalidInput("lunisolar resolution failed"),
        }
    }
}
