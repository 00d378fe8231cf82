// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use drives::format_size;
use serde::{Deserialize, Serialize};

/// How severe a status is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// The drive must not be written
    Error,
    /// The drive can be written, but the user should know about it
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// An incompatibility between a drive and an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Issue {
    /// The drive hosts the image file itself
    ContainsImage,
    /// The drive is write protected
    Locked,
    /// The drive is smaller than the image
    TooSmall {
        /// Missing space in bytes
        shortfall: u64,
    },
    /// The drive hosts the running operating system
    System,
    /// The drive is below the image's recommended size
    SizeNotRecommended,
    /// The drive is unusually large for a flashing target
    LargeDrive,
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::ContainsImage | Issue::Locked | Issue::TooSmall { .. } => Severity::Error,
            Issue::System | Issue::SizeNotRecommended | Issue::LargeDrive => Severity::Warning,
        }
    }

    /// Stable identifier, used as the lookup key for message catalogs
    pub fn id(&self) -> &'static str {
        match self {
            Issue::ContainsImage => "containsImage",
            Issue::Locked => "locked",
            Issue::TooSmall { .. } => "tooSmall",
            Issue::System => "system",
            Issue::SizeNotRecommended => "sizeNotRecommended",
            Issue::LargeDrive => "largeDrive",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Turns issues into user facing text.
///
/// Implement this to plug in a localized message catalog.
pub trait MessageFormatter {
    fn message(&self, issue: &Issue) -> String;
}

/// Default English messages
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishMessages;

impl MessageFormatter for EnglishMessages {
    fn message(&self, issue: &Issue) -> String {
        match issue {
            Issue::ContainsImage => "Source drive".to_string(),
            Issue::Locked => "Locked".to_string(),
            Issue::TooSmall { shortfall } => {
                format!("Insufficient space, additional {} required", format_size(*shortfall))
            }
            Issue::System => "System drive".to_string(),
            Issue::SizeNotRecommended => "Not recommended".to_string(),
            Issue::LargeDrive => "Large drive".to_string(),
        }
    }
}

/// A status to present for a drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "type")]
    severity: Severity,
    #[serde(flatten)]
    issue: Issue,
}

impl From<Issue> for Status {
    fn from(issue: Issue) -> Self {
        Self {
            severity: issue.severity(),
            issue,
        }
    }
}

impl Status {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render the message text with the given formatter
    pub fn message(&self, formatter: &dyn MessageFormatter) -> String {
        formatter.message(&self.issue)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message(&EnglishMessages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_severity_follows_issue() {
        for issue in [Issue::ContainsImage, Issue::Locked, Issue::TooSmall { shortfall: 1 }] {
            assert!(Status::from(issue).is_error());
        }
        for issue in [Issue::System, Issue::SizeNotRecommended, Issue::LargeDrive] {
            assert_eq!(Status::from(issue).severity(), Severity::Warning);
        }
        assert!(Severity::Error < Severity::Warning);
    }

    #[test]
    fn test_english_messages() {
        let status = Status::from(Issue::TooSmall {
            shortfall: 512 * 1024 * 1024,
        });
        assert_eq!(
            status.message(&EnglishMessages),
            "Insufficient space, additional 512.0MiB required"
        );
        assert_eq!(Status::from(Issue::ContainsImage).to_string(), "error: Source drive");
        assert_eq!(Status::from(Issue::System).to_string(), "warning: System drive");
    }

    #[test]
    fn test_custom_formatter() {
        struct Ids;
        impl MessageFormatter for Ids {
            fn message(&self, issue: &Issue) -> String {
                format!("drive.status.{issue}")
            }
        }

        let status = Status::from(Issue::SizeNotRecommended);
        assert_eq!(status.message(&Ids), "drive.status.sizeNotRecommended");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(Status::from(Issue::TooSmall { shortfall: 42 })).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "ERROR", "kind": "tooSmall", "shortfall": 42 })
        );

        let json = serde_json::to_value(Status::from(Issue::LargeDrive)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "WARNING", "kind": "largeDrive" }));

        let status: Status = serde_json::from_value(json).unwrap();
        assert_eq!(status, Status::from(Issue::LargeDrive));
    }
}
