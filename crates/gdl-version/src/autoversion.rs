//! Build and version constants for GDL.
//!
//! The four-part version tuple is written once, in the `version_tuple!`
//! invocation below. The dotted string and both resource-compiler forms are
//! generated from those literals at compile time, so they cannot drift apart.

use crate::status::Status;

macro_rules! version_tuple {
    ($major:literal, $minor:literal, $build:literal, $revision:literal) => {
        /// Major version number.
        pub const MAJOR: i64 = $major;
        /// Minor version number.
        pub const MINOR: i64 = $minor;
        /// Build number.
        pub const BUILD: i64 = $build;
        /// Revision number.
        pub const REVISION: i64 = $revision;

        /// `"MAJOR.MINOR.BUILD.REVISION"`.
        pub const FULLVERSION_STRING: &str =
            concat!($major, ".", $minor, ".", $build, ".", $revision);

        /// Version tuple in the layout expected by a `FILEVERSION` statement.
        pub const RC_FILEVERSION: [i64; 4] = [$major, $minor, $build, $revision];
        /// Comma separated, NUL terminated version string for resource scripts.
        pub const RC_FILEVERSION_STRING: &str =
            concat!($major, ", ", $minor, ", ", $build, ", ", $revision, "\0");
    };
}

// Date version types

/// Build day, zero padded.
pub const DATE: &str = "02";
/// Build month, zero padded.
pub const MONTH: &str = "03";
/// Build year.
pub const YEAR: &str = "2010";
/// Distribution-style `YY.MM` version.
pub const UBUNTU_VERSION_STYLE: f64 = 10.03;

// Software status

/// Release maturity of this build.
pub const STATUS_KIND: Status = Status::Release;
/// Long status label.
pub const STATUS: &str = STATUS_KIND.label();
/// Status abbreviation.
pub const STATUS_SHORT: &str = STATUS_KIND.short();

// Standard version type

version_tuple!(1, 3, 8853, 44578);

// Miscellaneous version types

/// Cumulative number of builds.
pub const BUILDS_COUNT: i64 = 19021;

/// Tracks the versioning tool's internal state. Always zero.
pub const BUILD_HISTORY: i64 = 0;
