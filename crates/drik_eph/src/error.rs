//! Error types for the ephemeris engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EphError {
    /// The Sun does not rise at this location on this day.
    NoRiseOnThisDay,
    /// The Sun does not set at this location on this day.
    NoSetOnThisDay,
}

impl Display for EphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRiseOnThisDay => write!(f, "the Sun does not rise on this day"),
            Self::NoSetOnThisDay => write!(f, "the Sun does not set on this day"),
        }
    }
}

impl Error for EphError {}
