// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{path::PathStyle, predicates::LARGE_DRIVE_SIZE};

/// Errors that can occur while loading a validator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    IO(#[from] io::Error),

    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("large drive threshold must be greater than zero")]
    InvalidThreshold,
}

/// Tunables for the [`Validator`](crate::Validator)
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "largeDriveSize": 128000000000, "pathStyle": "windows" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Drives above this size in bytes get a large drive warning
    pub large_drive_size: u64,
    /// Rules used to compare mount points with the image path
    pub path_style: PathStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            large_drive_size: LARGE_DRIVE_SIZE,
            path_style: PathStyle::host(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading validator configuration from {:?}", path);
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Load a configuration from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Set the path comparison rules
    pub fn with_path_style(self, path_style: PathStyle) -> Self {
        Self { path_style, ..self }
    }

    /// Set the large drive threshold in bytes
    pub fn with_large_drive_size(self, large_drive_size: u64) -> Self {
        Self {
            large_drive_size,
            ..self
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.large_drive_size == 0 {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.large_drive_size, LARGE_DRIVE_SIZE);
        assert_eq!(config.path_style, PathStyle::host());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_json(r#"{ "largeDriveSize": 128000000000, "pathStyle": "windows" }"#).unwrap();
        assert_eq!(config.large_drive_size, 128_000_000_000);
        assert_eq!(config.path_style, PathStyle::Windows);

        let config = Config::default()
            .with_path_style(PathStyle::Posix)
            .with_large_drive_size(1);
        assert_eq!(config.path_style, PathStyle::Posix);
        assert_eq!(config.large_drive_size, 1);
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            Config::from_json(r#"{ "largeDriveSize": 0 }"#),
            Err(ConfigError::InvalidThreshold)
        ));
        assert!(matches!(
            Config::from_json(r#"{ "pathStyle": "dos" }"#),
            Err(ConfigError::InvalidJson(_))
        ));
        assert!(matches!(
            Config::from_path("/nonexistent/config.json"),
            Err(ConfigError::IO(_))
        ));
    }
}
