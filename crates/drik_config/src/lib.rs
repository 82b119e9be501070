//! Layered location resolution for the drik CLI.
//!
//! A location may come from, in increasing priority:
//! 1. the built-in preset table (`--preset`, default "delhi"),
//! 2. a TOML file (`--config`),
//! 3. explicit command-line overrides (`-l LAT,LON`, `-u OFFSET`).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use drik_eph::Location;
use serde::Deserialize;

/// Errors from configuration resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Reading the configuration file failed.
    Io(String),
    /// The configuration file is not valid TOML for a location.
    Parse(String),
    /// No preset with the given name.
    UnknownPreset(String),
    /// Latitude/longitude outside their domains.
    InvalidLocation,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::UnknownPreset(name) => write!(f, "unknown location preset '{name}'"),
            Self::InvalidLocation => write!(f, "latitude must be in [-90, 90] and longitude in [-180, 180]"),
        }
    }
}

impl Error for ConfigError {}

fn default_utc_offset() -> f64 {
    5.5
}

/// A location as written in a TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: f64,
}

impl From<LocationConfig> for Location {
    fn from(c: LocationConfig) -> Location {
        Location {
            latitude: c.latitude,
            longitude: c.longitude,
            altitude: c.altitude,
            utc_offset: c.utc_offset,
        }
    }
}

/// Built-in presets (all IST).
pub fn preset(name: &str) -> Option<LocationConfig> {
    let (latitude, longitude) = match name {
        "delhi" => (28.6139, 77.2090),
        "mumbai" => (19.0760, 72.8777),
        "kolkata" => (22.5726, 88.3639),
        "chennai" => (13.0827, 80.2707),
        "bhubaneswar" => (20.2961, 85.8245),
        "thiruvananthapuram" => (8.5241, 76.9366),
        _ => return None,
    };
    Some(LocationConfig {
        latitude,
        longitude,
        altitude: 0.0,
        utc_offset: 5.5,
    })
}

/// Load a location from a TOML file.
pub fn load_toml(path: &Path) -> Result<LocationConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    parse_toml(&content)
}

/// Parse a location from TOML text.
pub fn parse_toml(content: &str) -> Result<LocationConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Command-line overrides applied on top of a preset or file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub lat_lon: Option<(f64, f64)>,
    pub utc_offset: Option<f64>,
}

/// Resolve the effective location from the three layers.
pub fn resolve(
    file: Option<&Path>,
    preset_name: Option<&str>,
    overrides: Overrides,
) -> Result<Location, ConfigError> {
    let base = match (file, preset_name) {
        (Some(path), _) => load_toml(path)?,
        (None, Some(name)) => preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?,
        (None, None) => preset("delhi").expect("built-in preset"),
    };

    let mut loc = Location::from(base);
    if let Some((lat, lon)) = overrides.lat_lon {
        loc.latitude = lat;
        loc.longitude = lon;
    }
    if let Some(off) = overrides.utc_offset {
        loc.utc_offset = off;
    }

    if !loc.is_valid() {
        return Err(ConfigError::InvalidLocation);
    }
    Ok(loc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolution_is_delhi() {
        let loc = resolve(None, None, Overrides::default()).unwrap();
        assert!((loc.latitude - 28.6139).abs() < 1e-9);
        assert!((loc.utc_offset - 5.5).abs() < 1e-9);
    }

    #[test]
    fn preset_lookup() {
        assert!(preset("kolkata").is_some());
        assert!(preset("atlantis").is_none());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = resolve(None, Some("atlantis"), Overrides::default()).unwrap_err();
        assert_eq!(err, ConfigError::UnknownPreset("atlantis".into()));
    }

    #[test]
    fn toml_parsing_with_defaults() {
        let cfg = parse_toml("latitude = 12.97\nlongitude = 77.59\n").unwrap();
        assert_eq!(cfg.altitude, 0.0);
        assert!((cfg.utc_offset - 5.5).abs() < 1e-9);
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        assert!(parse_toml("latitude = 1.0\nlongitude = 2.0\ntimezone = \"IST\"\n").is_err());
    }

    #[test]
    fn overrides_win() {
        let loc = resolve(
            None,
            Some("chennai"),
            Overrides {
                lat_lon: Some((10.0, 76.0)),
                utc_offset: Some(6.0),
            },
        )
        .unwrap();
        assert!((loc.latitude - 10.0).abs() < 1e-9);
        assert!((loc.utc_offset - 6.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_override_rejected() {
        let err = resolve(
            None,
            None,
            Overrides {
                lat_lon: Some((123.0, 0.0)),
                utc_offset: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidLocation);
    }
}
