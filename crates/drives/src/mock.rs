// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Mock descriptors for testing.
//!
//! Builders for drives and images so that validation can be exercised
//! without a device enumeration layer.

use std::ops::Deref;

use crate::{Drive, Image, Mountpoint};

/// Represents a mock drive.
#[derive(Debug, Clone)]
pub struct MockDrive(pub Drive);

impl Deref for MockDrive {
    type Target = Drive;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MockDrive {
    /// Creates a new mock drive with the specified size in bytes
    pub fn new(size_bytes: u64) -> Self {
        Self(Drive {
            size: Some(size_bytes),
            ..Self::unknown_size().0
        })
    }

    /// Creates a mock drive that did not report its size
    pub fn unknown_size() -> Self {
        Self(Drive {
            device: "/dev/mock0".to_string(),
            description: "Mock Device".to_string(),
            ..Default::default()
        })
    }

    /// Set the device identifier
    pub fn device(mut self, device: &str) -> Self {
        self.0.device = device.to_string();
        self
    }

    /// Report the drive as write protected or not
    pub fn read_only(mut self, value: bool) -> Self {
        self.0.is_read_only = Some(value);
        self
    }

    /// Report the drive as hosting the operating system or not
    pub fn system(mut self, value: bool) -> Self {
        self.0.is_system = Some(value);
        self
    }

    /// Report the drive as disabled or not
    pub fn disabled(mut self, value: bool) -> Self {
        self.0.disabled = Some(value);
        self
    }

    /// Add a mount point at the given path
    pub fn mountpoint(mut self, path: &str) -> Self {
        self.0.mountpoints.push(Mountpoint::new(path));
        self
    }

    /// Consume the mock and return the drive descriptor
    pub fn build(self) -> Drive {
        self.0
    }
}

/// Represents a mock image.
#[derive(Debug, Clone)]
pub struct MockImage(pub Image);

impl Deref for MockImage {
    type Target = Image;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MockImage {
    /// Creates a new mock image of an exact size in bytes
    pub fn new(size_bytes: u64) -> Self {
        Self(Image::new("/tmp/mock.img", size_bytes))
    }

    /// Set the location of the image file
    pub fn path(mut self, path: &str) -> Self {
        self.0.path = path.to_string();
        self
    }

    /// Mark the size as an estimate with a known compressed size
    pub fn estimated(mut self, compressed_size: u64) -> Self {
        self.0.is_size_estimated = true;
        self.0.compressed_size = Some(compressed_size);
        self
    }

    /// Set the recommended drive size in bytes
    pub fn recommended(mut self, drive_size: u64) -> Self {
        self.0.recommended_drive_size = Some(drive_size);
        self
    }

    /// Consume the mock and return the image descriptor
    pub fn build(self) -> Image {
        self.0
    }
}
