use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::autoversion;
use crate::errors::{ErrorInfo, VersionError};

/// Standard four-part version tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileVersion {
    /// Major version number.
    pub major: i64,
    /// Minor version number.
    pub minor: i64,
    /// Build number.
    pub build: i64,
    /// Revision number.
    pub revision: i64,
}

impl FileVersion {
    /// Tuple of the compiled-in build.
    pub const CURRENT: FileVersion = FileVersion::new(
        autoversion::MAJOR,
        autoversion::MINOR,
        autoversion::BUILD,
        autoversion::REVISION,
    );

    /// Creates a version tuple from its components.
    pub const fn new(major: i64, minor: i64, build: i64, revision: i64) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Returns the components in `FILEVERSION` order.
    pub const fn to_array(self) -> [i64; 4] {
        [self.major, self.minor, self.build, self.revision]
    }

    /// Formats the tuple as a NUL terminated resource-compiler string.
    pub fn rc_string(&self) -> String {
        format!(
            "{}, {}, {}, {}\0",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl From<[i64; 4]> for FileVersion {
    fn from([major, minor, build, revision]: [i64; 4]) -> Self {
        Self::new(major, minor, build, revision)
    }
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

fn parse_component(raw: &str, input: &str) -> Result<i64, VersionError> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if raw.strip_prefix('-').is_some_and(is_digits) {
        return Err(VersionError::Parse(
            ErrorInfo::new(
                "gdl_version.negative_component",
                "version components must be non-negative",
            )
            .with_context("component", raw)
            .with_context("input", input),
        ));
    }
    let invalid = |message: String| {
        VersionError::Parse(
            ErrorInfo::new("gdl_version.parse_component", message)
                .with_context("component", raw)
                .with_context("input", input),
        )
    };
    if !is_digits(raw) {
        return Err(invalid("version components must be decimal digits".into()));
    }
    raw.parse().map_err(|err: std::num::ParseIntError| invalid(err.to_string()))
}

impl FromStr for FileVersion {
    type Err = VersionError;

    /// Parses `"1.3.8853.44578"` or the resource form `"1, 3, 8853, 44578\0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_suffix('\0').unwrap_or(s);
        let separator = if trimmed.contains(',') { ", " } else { "." };
        let parts: Vec<&str> = trimmed.split(separator).collect();
        let [major, minor, build, revision] = parts.as_slice() else {
            return Err(VersionError::Parse(
                ErrorInfo::new(
                    "gdl_version.component_count",
                    format!("expected 4 version components, found {}", parts.len()),
                )
                .with_context("input", s),
            ));
        };
        Ok(Self::new(
            parse_component(major, s)?,
            parse_component(minor, s)?,
            parse_component(build, s)?,
            parse_component(revision, s)?,
        ))
    }
}
