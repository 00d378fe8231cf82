// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Path containment on segment boundaries
//!
//! Mount points and image locations are plain strings reported by the host,
//! so they are compared lexically using the separator rules of a [`PathStyle`]
//! rather than through the filesystem.

use serde::{Deserialize, Serialize};

/// Separator and comparison rules for host paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/` separated, case sensitive
    Posix,
    /// `\` or `/` separated, ASCII case insensitive
    Windows,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::host()
    }
}

impl PathStyle {
    /// The path style of the host we are compiled for
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    fn is_separator(&self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '\\' || c == '/',
        }
    }

    /// Check whether the path starts at a root.
    ///
    /// Posix paths are absolute with a leading `/`. Windows paths are
    /// absolute with a drive letter (`C:`), a UNC prefix (`\\server`) or a
    /// leading separator.
    pub fn is_absolute(&self, path: &str) -> bool {
        match self {
            PathStyle::Posix => path.starts_with('/'),
            PathStyle::Windows => {
                let mut chars = path.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), _) if self.is_separator(c) => true,
                    (Some(letter), Some(':')) => letter.is_ascii_alphabetic(),
                    _ => false,
                }
            }
        }
    }

    fn segment_eq(&self, a: &str, b: &str) -> bool {
        match self {
            PathStyle::Posix => a == b,
            PathStyle::Windows => a.eq_ignore_ascii_case(b),
        }
    }

    /// Split a path into its normalized segments.
    ///
    /// Empty and `.` segments are dropped and `..` removes the previous
    /// segment, so `/a//b/./c/../d` yields `["a", "b", "d"]`.
    pub fn segments<'a>(&self, path: &'a str) -> Vec<&'a str> {
        let mut segments = Vec::new();
        for segment in path.split(|c: char| self.is_separator(c)) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                segment => segments.push(segment),
            }
        }
        segments
    }

    /// Check whether `path` is `parent` itself or lies beneath it.
    ///
    /// Only whole segments match: `/Volumes/fo` is not a parent of
    /// `/Volumes/foo/image.img`. A relative path is never inside an absolute
    /// one or the other way around. An empty `parent` contains nothing.
    pub fn is_path_inside(&self, path: &str, parent: &str) -> bool {
        if path.trim().is_empty() || parent.trim().is_empty() {
            return false;
        }
        if self.is_absolute(path) != self.is_absolute(parent) {
            return false;
        }

        let path = self.segments(path);
        let parent = self.segments(parent);

        parent.len() <= path.len() && parent.iter().zip(&path).all(|(a, b)| self.segment_eq(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_segments() {
        let posix = PathStyle::Posix;
        assert_eq!(posix.segments("/a//b/./c/../d"), vec!["a", "b", "d"]);
        assert_eq!(posix.segments("/"), Vec::<&str>::new());
        assert_eq!(posix.segments("C:\\Users"), vec!["C:\\Users"]);

        let windows = PathStyle::Windows;
        assert_eq!(windows.segments("C:\\Users\\me/Downloads\\"), vec!["C:", "Users", "me", "Downloads"]);
    }

    #[test]
    fn test_posix_containment() {
        let style = PathStyle::Posix;
        assert!(style.is_path_inside("/Volumes/foo/image.img", "/Volumes/foo"));
        assert!(style.is_path_inside("/Volumes/foo/image.img", "/Volumes/foo/"));
        assert!(style.is_path_inside("/Volumes/foo/a/b/c/image.img", "/Volumes/foo"));
        assert!(style.is_path_inside("/Volumes/foo", "/Volumes/foo"));
        assert!(style.is_path_inside("/home/user/image.img", "/"));
        assert!(style.is_path_inside("/Volumes/foo/../bar/image.img", "/Volumes/bar"));

        // prefix of the string but not of the segments
        assert!(!style.is_path_inside("/Volumes/foo/image.img", "/Volumes/fo"));
        assert!(!style.is_path_inside("/Volumes/foobar/image.img", "/Volumes/foo"));
        assert!(!style.is_path_inside("/Volumes/foo", "/Volumes/foo/bar"));
        assert!(!style.is_path_inside("/Volumes/Foo/image.img", "/Volumes/foo"));
    }

    #[test]
    fn test_windows_containment() {
        let style = PathStyle::Windows;
        assert!(style.is_path_inside("E:\\images\\raspios.img", "E:\\"));
        assert!(style.is_path_inside("e:\\images\\raspios.img", "E:\\"));
        assert!(style.is_path_inside("E:/images/raspios.img", "E:\\images"));
        assert!(!style.is_path_inside("E:\\images\\raspios.img", "C:\\"));
        assert!(!style.is_path_inside("E:\\imagesfoo\\raspios.img", "E:\\images"));
    }

    #[test]
    fn test_separator_is_injected() {
        // A windows path is a single segment under posix rules
        assert!(!PathStyle::Posix.is_path_inside("E:\\images\\raspios.img", "E:\\images"));
        assert!(PathStyle::Windows.is_path_inside("E:\\images\\raspios.img", "E:\\images"));
    }

    #[test]
    fn test_absolute() {
        assert!(PathStyle::Posix.is_absolute("/"));
        assert!(PathStyle::Posix.is_absolute("/media/usb"));
        assert!(!PathStyle::Posix.is_absolute("media/usb"));
        assert!(!PathStyle::Posix.is_absolute("C:\\"));

        assert!(PathStyle::Windows.is_absolute("C:\\"));
        assert!(PathStyle::Windows.is_absolute("e:/images"));
        assert!(PathStyle::Windows.is_absolute("\\\\server\\share"));
        assert!(PathStyle::Windows.is_absolute("\\images"));
        assert!(!PathStyle::Windows.is_absolute("images\\os.img"));
        assert!(!PathStyle::Windows.is_absolute("1:\\images"));
    }

    #[test]
    fn test_relative_never_inside_absolute() {
        let posix = PathStyle::Posix;
        assert!(!posix.is_path_inside("images/os.img", "/images"));
        assert!(!posix.is_path_inside("images/os.img", "/"));
        assert!(!posix.is_path_inside("/images/os.img", "images"));
        assert!(posix.is_path_inside("images/os.img", "images"));

        let windows = PathStyle::Windows;
        assert!(!windows.is_path_inside("images\\os.img", "C:\\images"));
        assert!(!windows.is_path_inside("C:\\images\\os.img", "images"));
        assert!(windows.is_path_inside("\\\\nas\\share\\os.img", "\\\\nas\\share"));
    }

    #[test]
    fn test_empty_paths() {
        let style = PathStyle::Posix;
        assert!(!style.is_path_inside("", "/"));
        assert!(!style.is_path_inside("/image.img", ""));
        assert!(!style.is_path_inside("/image.img", "  "));
    }
}
