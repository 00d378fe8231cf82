// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Descriptor records for drives and disk images
//!
//! These are plain snapshots handed over by a device enumeration layer and an
//! image metadata layer. Nothing in here touches real hardware: the records
//! are (de)serializable so that listings can be loaded from JSON.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

mod drive;
pub use drive::{Drive, Mountpoint};

mod image;
pub use image::Image;

pub mod mock;

mod units;
pub use units::format_size;

/// Errors that can occur when loading descriptor records
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred
    #[error("io: {0}")]
    IO(#[from] io::Error),

    /// Invalid JSON
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// A snapshot of the drives available for flashing, optionally with the
/// image that is about to be written.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Candidate drives, in enumeration order
    #[serde(default)]
    pub drives: Vec<Drive>,

    /// The selected image, if any
    #[serde(default)]
    pub image: Option<Image>,
}

impl Listing {
    /// Load a listing from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        read_json(path.as_ref())
    }

    /// Load a listing from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a listing from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a drive by its device identifier
    pub fn drive(&self, device: &str) -> Option<&Drive> {
        self.drives.iter().find(|d| d.device == device)
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    debug!("Reading descriptor from {:?}", path);
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
