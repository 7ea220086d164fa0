// Portal configuration
// Business hours are configurable; everything else derives from them.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bookable hours as a half-open range `[start_hour, end_hour)`, plus one
/// explicit early slot at 7:30 for before-school bookings.
pub const EARLY_SLOT_HOUR: u32 = 7;
pub const EARLY_SLOT_MINUTE: u32 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid business hours {start}..{end} (need 1 <= start < end <= 23)")]
    InvalidHours { start: u32, end: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// First bookable full hour (inclusive).
    pub business_start_hour: u32,
    /// End of bookable hours (exclusive).
    pub business_end_hour: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            business_start_hour: 8,
            business_end_hour: 18,
        }
    }
}

impl PortalConfig {
    /// Load configuration from the platform config directory, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Self =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.business_start_hour == 0
            || self.business_start_hour >= self.business_end_hour
            || self.business_end_hour > 23
        {
            return Err(ConfigError::InvalidHours {
                start: self.business_start_hour,
                end: self.business_end_hour,
            });
        }
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("sg", "counselpoint", "counselpoint")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hours_are_eight_to_six() {
        let config = PortalConfig::default();
        assert_eq!(config.business_start_hour, 8);
        assert_eq!(config.business_end_hour, 18);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_hours() {
        let config = PortalConfig {
            business_start_hour: 18,
            business_end_hour: 8,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: PortalConfig = toml::from_str("business_start_hour = 9").unwrap();
        assert_eq!(config.business_start_hour, 9);
        assert_eq!(config.business_end_hour, 18);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = PortalConfig::load_from(PathBuf::from("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
