// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Drive and image compatibility checks
//!
//! Decides whether a drive is a suitable target for writing an image to,
//! and turns the individual checks into a ranked list of statuses for
//! presentation:
//!
//! - Predicates over a single drive (locked, system, disabled, size)
//! - Source drive detection through mount point containment
//! - Per-drive statuses with error precedence, plus list aggregation
//!
//! All checks are pure and total. Absent drives or images never cause a
//! failure, they fall back to a documented default instead.
//!
//! Example:
//! ```
//! use constraints::{Issue, Validator};
//! use drives::{Drive, Image};
//!
//! let drive = Drive {
//!     size: Some(2_000_000_000),
//!     ..Drive::new("/dev/sdb")
//! };
//! let image = Image::new("/home/user/os.img", 4_000_000_000);
//!
//! let validator = Validator::default();
//! let statuses = validator.drive_image_compatibility_statuses(Some(&drive), Some(&image));
//! assert_eq!(
//!     statuses[0].issue(),
//!     &Issue::TooSmall { shortfall: 2_000_000_000 }
//! );
//! ```

pub mod config;
pub mod path;
pub mod predicates;
pub mod status;
pub mod validator;

pub use config::{Config, ConfigError};
pub use path::PathStyle;
pub use predicates::*;
pub use status::{EnglishMessages, Issue, MessageFormatter, Severity, Status};
pub use validator::Validator;
