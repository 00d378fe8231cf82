// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A mount point of a drive
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mountpoint {
    /// Path where the volume is mounted (e.g. /media/user/BOOT or E:\)
    pub path: String,
    /// Optional volume label
    #[serde(default)]
    pub label: Option<String>,
}

impl Mountpoint {
    /// Creates a mount point without a label
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: None,
        }
    }
}

/// A drive that may receive a flashed image.
///
/// Every flag is three-state: `None` means the enumeration layer did not
/// report it, which is distinct from an explicit `Some(false)`.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drive {
    /// Device identifier (e.g. /dev/sdb, \\.\PHYSICALDRIVE1)
    pub device: String,
    /// Human readable description, usually vendor and model
    #[serde(default)]
    pub description: String,
    /// Size in bytes, if known
    #[serde(default)]
    pub size: Option<u64>,
    /// Write protected
    #[serde(default)]
    pub is_read_only: Option<bool>,
    /// Hosts the running operating system
    #[serde(default)]
    pub is_system: Option<bool>,
    /// Removable media
    #[serde(default)]
    pub is_removable: Option<bool>,
    /// Disabled by the caller, never offered as a target
    #[serde(default)]
    pub disabled: Option<bool>,
    /// Mount points of the volumes on this drive, in reported order
    #[serde(default)]
    pub mountpoints: Vec<Mountpoint>,
}

impl Drive {
    /// Creates a drive descriptor with only the device identifier set
    pub fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.device)?;

        match self.size {
            Some(bytes) => write!(f, " ({:.2} GiB)", bytes as f64 / 1_073_741_824.0)?,
            None => f.write_str(" (unknown size)")?,
        }

        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_display() {
        let mut drive = Drive::new("/dev/sdb");
        assert_eq!(drive.to_string(), "/dev/sdb (unknown size)");

        drive.size = Some(16 * 1024 * 1024 * 1024);
        drive.description = "Kingston DataTraveler".into();
        assert_eq!(drive.to_string(), "/dev/sdb (16.00 GiB) - Kingston DataTraveler");
    }

    #[test]
    fn test_serialize_skips_unknown_flags() {
        let drive = Drive {
            size: Some(1024),
            is_read_only: Some(false),
            mountpoints: vec![Mountpoint::new("/mnt")],
            ..Drive::new("/dev/sdc")
        };
        let json = serde_json::to_value(&drive).unwrap();

        assert_eq!(json["isReadOnly"], false);
        assert!(json.get("isSystem").is_none());
        assert!(json.get("disabled").is_none());
        assert_eq!(json["mountpoints"][0]["path"], "/mnt");
        assert!(json["mountpoints"][0].get("label").is_none());
    }
}
