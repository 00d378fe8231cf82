// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::Error;

/// A disk image selected for flashing
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Location of the image file
    pub path: String,
    /// Final size in bytes once written
    pub size: u64,
    /// Size of the compressed source in bytes
    #[serde(default)]
    pub compressed_size: Option<u64>,
    /// Whether `size` is only an estimate
    #[serde(default)]
    pub is_size_estimated: bool,
    /// Minimum drive size the image publisher recommends
    #[serde(default)]
    pub recommended_drive_size: Option<u64>,
}

impl Image {
    /// Creates an image descriptor with an exactly known size
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
            ..Default::default()
        }
    }

    /// Load an image descriptor from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        crate::read_json(path.as_ref())
    }

    /// Parse an image descriptor from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_estimated_image() {
        let image = Image::from_json(
            r#"{
                "path": "/home/user/ubuntu.img.xz",
                "size": 3000000000,
                "compressedSize": 1200000000,
                "isSizeEstimated": true,
                "recommendedDriveSize": 8000000000
            }"#,
        )
        .unwrap();

        assert_eq!(image.compressed_size, Some(1_200_000_000));
        assert!(image.is_size_estimated);
        assert_eq!(image.recommended_drive_size, Some(8_000_000_000));
    }

    #[test]
    fn test_missing_size_is_rejected() {
        assert!(Image::from_json(r#"{ "path": "/tmp/a.img" }"#).is_err());
    }
}
