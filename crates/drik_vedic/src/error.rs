//! Error types for lunisolar calendar resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use drik_eph::EphError;

/// Errors from tithi/masa resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris (no sunrise/sunset on this day).
    Eph(EphError),
    /// A Gregorian date outside the supported 1500-2200 range.
    DateOutOfRange,
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eph(e) => write!(f, "ephemeris error: {e}"),
            Self::DateOutOfRange => write!(f, "date outside the supported 1500-2200 range"),
        }
    }
}

impl Error for VedicError {}

impl From<EphError> for VedicError {
    fn from(e: EphError) -> Self {
        Self::Eph(e)
    }
}
