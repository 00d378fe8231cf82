// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Ranking drive/image issues into statuses
//!
//! Issues are checked in a fixed order. Errors are exclusive: the first
//! matching error is the only status reported for a drive. When no error
//! applies, every matching warning is reported.

use drives::{Drive, Image};
use log::{debug, trace};

use crate::{
    config::Config,
    predicates::{
        is_drive_disabled, is_drive_large_enough, is_drive_locked, is_drive_size_large, is_drive_size_recommended,
        is_drive_valid, is_source_drive, is_system_drive, required_drive_size,
    },
    status::{Issue, Status},
};

/// A single check performed against a drive
#[derive(Debug, Clone, Copy)]
enum Check {
    ContainsImage,
    Locked,
    TooSmall,
    System,
    SizeNotRecommended,
    LargeDrive,
}

/// Error checks, in precedence order
const ERROR_CHECKS: [Check; 3] = [Check::ContainsImage, Check::Locked, Check::TooSmall];

/// Warning checks, in reporting order
const WARNING_CHECKS: [Check; 3] = [Check::System, Check::SizeNotRecommended, Check::LargeDrive];

/// Drive/image compatibility validator
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: Config,
}

impl Validator {
    /// Creates a validator with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if the image lives on the drive, using the configured path style
    pub fn is_source_drive(&self, drive: Option<&Drive>, image: Option<&Image>) -> bool {
        is_source_drive(drive, image, self.config.path_style)
    }

    /// Check if the drive exceeds the configured large drive threshold
    pub fn is_drive_size_large(&self, drive: Option<&Drive>) -> bool {
        is_drive_size_large(drive, self.config.large_drive_size)
    }

    /// See [`is_drive_valid`]
    pub fn is_drive_valid(&self, drive: Option<&Drive>, image: Option<&Image>) -> bool {
        is_drive_valid(drive, image)
    }

    fn evaluate(&self, check: Check, drive: &Drive, image: Option<&Image>) -> Option<Issue> {
        let hit = match check {
            Check::ContainsImage => self.is_source_drive(Some(drive), image).then_some(Issue::ContainsImage),
            Check::Locked => is_drive_locked(Some(drive)).then_some(Issue::Locked),
            Check::TooSmall => match (drive.size, image) {
                (Some(size), Some(image)) if !is_drive_large_enough(Some(drive), Some(image)) => {
                    Some(Issue::TooSmall {
                        shortfall: required_drive_size(image).saturating_sub(size),
                    })
                }
                _ => None,
            },
            Check::System => is_system_drive(Some(drive)).then_some(Issue::System),
            Check::SizeNotRecommended => {
                (!is_drive_size_recommended(Some(drive), image)).then_some(Issue::SizeNotRecommended)
            }
            Check::LargeDrive => self.is_drive_size_large(Some(drive)).then_some(Issue::LargeDrive),
        };

        trace!("{}: {:?} -> {:?}", drive.device, check, hit);
        hit
    }

    /// Compute the statuses to present for a drive.
    ///
    /// Returns nothing for an absent or disabled drive. Otherwise returns
    /// either exactly one error, or zero or more warnings.
    pub fn drive_image_compatibility_statuses(&self, drive: Option<&Drive>, image: Option<&Image>) -> Vec<Status> {
        let Some(drive) = drive else {
            return Vec::new();
        };

        if is_drive_disabled(Some(drive)) {
            debug!("Skipping disabled drive {}", drive.device);
            return Vec::new();
        }

        if let Some(error) = ERROR_CHECKS
            .iter()
            .find_map(|check| self.evaluate(*check, drive, image))
        {
            debug!("Drive {} is not compatible: {}", drive.device, error);
            return vec![Status::from(error)];
        }

        WARNING_CHECKS
            .iter()
            .filter_map(|check| self.evaluate(*check, drive, image))
            .map(Status::from)
            .collect()
    }

    /// Compute the statuses of every drive, concatenated in drive order
    pub fn list_drive_image_compatibility_statuses<'a, I>(&self, drives: I, image: Option<&Image>) -> Vec<Status>
    where
        I: IntoIterator<Item = &'a Drive>,
    {
        drives
            .into_iter()
            .flat_map(|drive| self.drive_image_compatibility_statuses(Some(drive), image))
            .collect()
    }

    /// Check if any of the drives has a status to present
    pub fn has_list_drive_image_compatibility_status<'a, I>(&self, drives: I, image: Option<&Image>) -> bool
    where
        I: IntoIterator<Item = &'a Drive>,
    {
        drives
            .into_iter()
            .any(|drive| !self.drive_image_compatibility_statuses(Some(drive), image).is_empty())
    }
}
