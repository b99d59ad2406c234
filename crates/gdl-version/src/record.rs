//! The version record as a single value that can be compared and serialized.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::autoversion;
use crate::errors::{ErrorInfo, VersionError};
use crate::file_version::FileVersion;
use crate::status::Status;

/// Tolerance used when comparing distribution-style versions.
pub const DISTRIBUTION_VERSION_EPSILON: f64 = 1e-9;

/// Build and version metadata of one GDL build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
    /// Build day, zero padded (`"02"`).
    pub date: Cow<'static, str>,
    /// Build month, zero padded (`"03"`).
    pub month: Cow<'static, str>,
    /// Build year (`"2010"`).
    pub year: Cow<'static, str>,
    /// Distribution-style `YY.MM` version.
    pub ubuntu_version_style: f64,
    /// Release maturity.
    pub status: Status,
    /// Abbreviation of [`Self::status`].
    pub status_short: Cow<'static, str>,
    /// Major version number.
    pub major: i64,
    /// Minor version number.
    pub minor: i64,
    /// Build number.
    pub build: i64,
    /// Revision number.
    pub revision: i64,
    /// Cumulative build counter.
    pub builds_count: i64,
    /// Dot-joined version tuple.
    pub full_version: Cow<'static, str>,
    /// Versioning tool state, always zero.
    pub build_history: i64,
}

/// One field that differs between two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMismatch {
    /// Serialized field name.
    pub field: String,
    /// Value in the reference record.
    pub expected: String,
    /// Value in the compared record.
    pub found: String,
}

impl VersionRecord {
    /// Record of the compiled-in build.
    pub const CURRENT: VersionRecord = VersionRecord {
        date: Cow::Borrowed(autoversion::DATE),
        month: Cow::Borrowed(autoversion::MONTH),
        year: Cow::Borrowed(autoversion::YEAR),
        ubuntu_version_style: autoversion::UBUNTU_VERSION_STYLE,
        status: autoversion::STATUS_KIND,
        status_short: Cow::Borrowed(autoversion::STATUS_SHORT),
        major: autoversion::MAJOR,
        minor: autoversion::MINOR,
        build: autoversion::BUILD,
        revision: autoversion::REVISION,
        builds_count: autoversion::BUILDS_COUNT,
        full_version: Cow::Borrowed(autoversion::FULLVERSION_STRING),
        build_history: autoversion::BUILD_HISTORY,
    };

    /// Returns a copy of [`Self::CURRENT`].
    pub fn current() -> Self {
        Self::CURRENT
    }

    /// Returns the four-part version tuple.
    pub fn file_version(&self) -> FileVersion {
        FileVersion::new(self.major, self.minor, self.build, self.revision)
    }

    /// Checks the relationships between fields.
    pub fn validate(&self) -> Result<(), VersionError> {
        let expected_full = self.file_version().to_string();
        if self.full_version != expected_full {
            return Err(VersionError::Invariant(
                ErrorInfo::new(
                    "gdl_version.full_version_mismatch",
                    "full version does not match the version tuple",
                )
                .with_context("full_version", self.full_version.to_string())
                .with_context("expected", expected_full),
            ));
        }
        if self.status_short != self.status.short() {
            return Err(VersionError::Invariant(
                ErrorInfo::new(
                    "gdl_version.status_short_mismatch",
                    "status abbreviation does not match status",
                )
                .with_context("status", self.status.label())
                .with_context("status_short", self.status_short.to_string())
                .with_hint(format!("expected \"{}\"", self.status.short())),
            ));
        }
        if self.build_history != 0 {
            return Err(VersionError::Invariant(
                ErrorInfo::new("gdl_version.build_history", "build history must be zero")
                    .with_context("build_history", self.build_history.to_string()),
            ));
        }
        for (field, value) in [
            ("major", self.major),
            ("minor", self.minor),
            ("build", self.build),
            ("revision", self.revision),
            ("builds_count", self.builds_count),
        ] {
            if value < 0 {
                return Err(VersionError::Invariant(
                    ErrorInfo::new(
                        "gdl_version.negative_counter",
                        "version counters must be non-negative",
                    )
                    .with_context("field", field)
                    .with_context("value", value.to_string()),
                ));
            }
        }

        let year = parse_date_component("year", &self.year, 4, 0..=9999)?;
        let month = parse_date_component("month", &self.month, 2, 1..=12)?;
        parse_date_component("date", &self.date, 2, 1..=days_in_month(year, month))?;
        let expected_style = distribution_version(&self.year, &self.month)?;
        if (self.ubuntu_version_style - expected_style).abs() > DISTRIBUTION_VERSION_EPSILON {
            return Err(VersionError::Invariant(
                ErrorInfo::new(
                    "gdl_version.distribution_version_mismatch",
                    "distribution version does not match year and month",
                )
                .with_context("ubuntu_version_style", self.ubuntu_version_style.to_string())
                .with_context("expected", expected_style.to_string()),
            ));
        }
        log::debug!("version record {} is consistent", self.full_version);
        Ok(())
    }

    /// Lists `(field, rendered value)` pairs in serialization order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.to_string()),
            ("month", self.month.to_string()),
            ("year", self.year.to_string()),
            ("ubuntu_version_style", self.ubuntu_version_style.to_string()),
            ("status", self.status.label().to_string()),
            ("status_short", self.status_short.to_string()),
            ("major", self.major.to_string()),
            ("minor", self.minor.to_string()),
            ("build", self.build.to_string()),
            ("revision", self.revision.to_string()),
            ("builds_count", self.builds_count.to_string()),
            ("full_version", self.full_version.to_string()),
            ("build_history", self.build_history.to_string()),
        ]
    }

    /// Returns every field where `other` differs from `self`.
    pub fn diff(&self, other: &VersionRecord) -> Vec<FieldMismatch> {
        self.fields()
            .into_iter()
            .zip(other.fields())
            .filter(|((_, expected), (_, found))| expected != found)
            .map(|((field, expected), (_, found))| FieldMismatch {
                field: field.to_string(),
                expected,
                found,
            })
            .collect()
    }
}

impl Default for VersionRecord {
    fn default() -> Self {
        Self::CURRENT
    }
}

fn parse_date_component(
    field: &str,
    raw: &str,
    width: usize,
    range: std::ops::RangeInclusive<u32>,
) -> Result<u32, VersionError> {
    let malformed = || {
        VersionError::Parse(
            ErrorInfo::new(
                "gdl_version.date_component",
                format!("{field} must be {width} decimal digits"),
            )
            .with_context("field", field)
            .with_context("value", raw),
        )
    };
    if raw.len() != width || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let value: u32 = raw.parse().map_err(|_| malformed())?;
    if !range.contains(&value) {
        return Err(VersionError::Parse(
            ErrorInfo::new(
                "gdl_version.date_range",
                format!("{field} is outside {}..={}", range.start(), range.end()),
            )
            .with_context("field", field)
            .with_context("value", raw),
        ));
    }
    Ok(value)
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Derives the distribution-style `YY.MM` version from a build year and month.
///
/// `("2010", "03")` yields `10.03`.
pub fn distribution_version(year: &str, month: &str) -> Result<f64, VersionError> {
    let year = parse_date_component("year", year, 4, 0..=9999)?;
    let month = parse_date_component("month", month, 2, 1..=12)?;
    Ok(f64::from(year % 100) + f64::from(month) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_record_is_consistent() {
        VersionRecord::CURRENT.validate().expect("compiled-in record");
    }

    #[test]
    fn distribution_version_of_build_date() {
        let derived = distribution_version("2010", "03").unwrap();
        assert!((derived - 10.03).abs() < DISTRIBUTION_VERSION_EPSILON);
    }

    #[test]
    fn month_lengths_follow_the_calendar() {
        assert_eq!(days_in_month(2010, 2), 28);
        assert_eq!(days_in_month(2012, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2010, 4), 30);
        assert_eq!(days_in_month(2010, 12), 31);
    }

    #[test]
    fn diff_against_self_is_empty() {
        let record = VersionRecord::current();
        assert!(record.diff(&VersionRecord::CURRENT).is_empty());
    }
}
