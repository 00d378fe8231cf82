// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Individual drive and image checks
//!
//! Each predicate accepts an absent drive or image and answers with a fixed
//! default in that case. Flags are only considered set when explicitly
//! reported as `Some(true)`.

use drives::{Drive, Image};

use crate::path::PathStyle;

/// Drives larger than this are most likely not removable media (64GB)
pub const LARGE_DRIVE_SIZE: u64 = 64_000_000_000;

/// Check if the drive is write protected
pub fn is_drive_locked(drive: Option<&Drive>) -> bool {
    drive.is_some_and(|d| d.is_read_only == Some(true))
}

/// Check if the drive hosts the running operating system
pub fn is_system_drive(drive: Option<&Drive>) -> bool {
    drive.is_some_and(|d| d.is_system == Some(true))
}

/// Check if the drive was disabled by the caller
pub fn is_drive_disabled(drive: Option<&Drive>) -> bool {
    drive.is_some_and(|d| d.disabled == Some(true))
}

/// Check if the image file lives on one of the drive's mount points.
///
/// Writing to such a drive would overwrite the image while reading it.
pub fn is_source_drive(drive: Option<&Drive>, image: Option<&Image>, style: PathStyle) -> bool {
    let (Some(drive), Some(image)) = (drive, image) else {
        return false;
    };

    drive
        .mountpoints
        .iter()
        .any(|mountpoint| style.is_path_inside(&image.path, &mountpoint.path))
}

/// Check if the drive can hold the image.
///
/// Missing information never blocks: an absent drive or image, or a drive
/// of unknown size, counts as large enough. For an estimated image size the
/// final size may lie on either side of `size`, so the drive is only too
/// small when it is below both the estimate and the compressed size.
pub fn is_drive_large_enough(drive: Option<&Drive>, image: Option<&Image>) -> bool {
    let (Some(drive), Some(image)) = (drive, image) else {
        return true;
    };
    let Some(size) = drive.size else {
        return true;
    };

    size >= required_drive_size(image)
}

/// Smallest drive size in bytes that [`is_drive_large_enough`] accepts.
///
/// This is the image size, or for an estimated size the lower of the
/// estimate and the compressed size.
pub fn required_drive_size(image: &Image) -> u64 {
    if image.is_size_estimated {
        image.size.min(image.compressed_size.unwrap_or(image.size))
    } else {
        image.size
    }
}

/// Check if the drive meets the image's recommended drive size.
///
/// An absent drive is never recommended, while an image without a
/// recommendation accepts any drive.
pub fn is_drive_size_recommended(drive: Option<&Drive>, image: Option<&Image>) -> bool {
    let Some(drive) = drive else {
        return false;
    };
    let Some(recommended) = image.and_then(|i| i.recommended_drive_size) else {
        return true;
    };

    drive.size.unwrap_or(0) >= recommended
}

/// Check if the drive is unusually large for a flashing target
pub fn is_drive_size_large(drive: Option<&Drive>, threshold: u64) -> bool {
    drive.and_then(|d| d.size).is_some_and(|size| size > threshold)
}

/// Check if the drive can be written with the image at all.
///
/// Only the lock and size checks take part here. Disabled, system and
/// source drives are reported through statuses instead.
pub fn is_drive_valid(drive: Option<&Drive>, image: Option<&Image>) -> bool {
    !is_drive_locked(drive) && is_drive_large_enough(drive, image)
}
