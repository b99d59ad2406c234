//! Release maturity labels and their abbreviations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, VersionError};

/// Release maturity of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Early, unstable builds.
    Alpha,
    /// Feature complete builds under test.
    Beta,
    /// Builds proposed for release.
    #[serde(rename = "Release Candidate")]
    ReleaseCandidate,
    /// Published builds.
    Release,
}

impl Status {
    /// Every status, ordered by maturity.
    pub const ALL: [Status; 4] = [
        Status::Alpha,
        Status::Beta,
        Status::ReleaseCandidate,
        Status::Release,
    ];

    /// Returns the long label, e.g. `"Release"`.
    pub const fn label(self) -> &'static str {
        match self {
            Status::Alpha => "Alpha",
            Status::Beta => "Beta",
            Status::ReleaseCandidate => "Release Candidate",
            Status::Release => "Release",
        }
    }

    /// Returns the abbreviation, e.g. `"r"`.
    pub const fn short(self) -> &'static str {
        match self {
            Status::Alpha => "a",
            Status::Beta => "b",
            Status::ReleaseCandidate => "rc",
            Status::Release => "r",
        }
    }

    /// Looks up a status by its long label.
    pub fn from_label(label: &str) -> Result<Self, VersionError> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == label)
            .ok_or_else(|| {
                VersionError::Status(
                    ErrorInfo::new("gdl_version.unknown_status", "unknown release status")
                        .with_context("label", label)
                        .with_hint("expected one of: Alpha, Beta, Release Candidate, Release"),
                )
            })
    }

    /// Looks up a status by its abbreviation.
    pub fn from_short(short: &str) -> Result<Self, VersionError> {
        Self::ALL
            .into_iter()
            .find(|status| status.short() == short)
            .ok_or_else(|| {
                VersionError::Status(
                    ErrorInfo::new(
                        "gdl_version.unknown_status_short",
                        "unknown release status abbreviation",
                    )
                    .with_context("short", short)
                    .with_hint("expected one of: a, b, rc, r"),
                )
            })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = VersionError;

    /// Accepts either the long label or the abbreviation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).or_else(|_| Self::from_short(s))
    }
}
