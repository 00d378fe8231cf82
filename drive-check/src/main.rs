// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use constraints::{Config, EnglishMessages, Status, Validator};
use drives::{Drive, Image, Listing};
use itertools::Itertools;
use log::{debug, info};
use miette::{IntoDiagnostic, WrapErr};
use serde::Serialize;

/// Check drives against a disk image before flashing
#[derive(Debug, Parser)]
#[command(name = "drive-check", version)]
struct Cli {
    /// JSON listing of candidate drives, optionally with the image ("-" for stdin)
    listing: PathBuf,

    /// JSON image description, replaces the image from the listing
    #[arg(short, long)]
    image: Option<PathBuf>,

    /// JSON validator configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Report entry for a single drive
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DriveReport<'a> {
    device: &'a str,
    valid: bool,
    statuses: Vec<Status>,
}

fn report<'a>(validator: &Validator, drive: &'a Drive, image: Option<&Image>) -> DriveReport<'a> {
    DriveReport {
        device: &drive.device,
        valid: validator.is_drive_valid(Some(drive), image),
        statuses: validator.drive_image_compatibility_statuses(Some(drive), image),
    }
}

/// Errors first, then warnings, otherwise in reported order
fn sorted_for_display(statuses: &[Status]) -> Vec<&Status> {
    statuses.iter().sorted_by_key(|s| s.severity()).collect()
}

/// Read the listing from a file, or from stdin when the path is "-"
fn load_listing(path: &Path) -> Result<Listing, drives::Error> {
    if path == Path::new("-") {
        debug!("Reading listing from stdin");
        Listing::from_reader(io::stdin().lock())
    } else {
        Listing::from_path(path)
    }
}

/// Load the inputs and print the report.
///
/// Returns whether any drive has a status to present.
fn run(cli: &Cli) -> miette::Result<bool> {
    let listing = load_listing(&cli.listing)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to load listing {}", cli.listing.display()))?;

    let image = match &cli.image {
        Some(path) => Some(
            Image::from_path(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to load image {}", path.display()))?,
        ),
        None => listing.image.clone(),
    };

    let config = match &cli.config {
        Some(path) => Config::from_path(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    debug!("Using {:?}", config);

    let validator = Validator::new(config);
    let image = image.as_ref();

    match image {
        Some(image) => info!("Checking {} drives against {}", listing.drives.len(), image.path),
        None => info!("Checking {} drives without an image", listing.drives.len()),
    }

    if cli.json {
        let reports = listing
            .drives
            .iter()
            .map(|drive| report(&validator, drive, image))
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        for drive in &listing.drives {
            let report = report(&validator, drive, image);
            let marker = if report.valid { "✅" } else { "❌" };
            println!("{marker} {drive}");
            for status in sorted_for_display(&report.statuses) {
                println!("  └─{}: {}", status.severity(), status.message(&EnglishMessages));
            }
        }
    }

    Ok(validator.has_list_drive_image_compatibility_status(&listing.drives, image))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    pretty_env_logger::formatted_timed_builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::from(2)
        }
    }
}
