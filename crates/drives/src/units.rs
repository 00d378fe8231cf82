// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

/// Format a byte size into a human-readable string with appropriate units
///
/// # Examples
///
/// ```
/// use drives::format_size;
/// assert_eq!(format_size(1500), "1.5KiB");
/// assert_eq!(format_size(1500000), "1.4MiB");
/// ```
pub fn format_size(size: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let bytes = size as f64;
    match bytes {
        b if b >= TB => format!("{:.1}TiB", b / TB),
        b if b >= GB => format!("{:.1}GiB", b / GB),
        b if b >= MB => format!("{:.1}MiB", b / MB),
        b if b >= KB => format!("{:.1}KiB", b / KB),
        _ => format!("{}B", size),
    }
}
