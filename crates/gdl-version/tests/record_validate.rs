use std::borrow::Cow;

use gdl_version::{distribution_version, Status, VersionError, VersionRecord};

fn failure_code(record: &VersionRecord) -> String {
    match record.validate() {
        Err(err) => err.code().to_string(),
        Ok(()) => panic!("record unexpectedly valid"),
    }
}

#[test]
fn rejects_full_version_drift() {
    let mut record = VersionRecord::current();
    record.revision += 1;
    assert_eq!(failure_code(&record), "gdl_version.full_version_mismatch");
}

#[test]
fn rejects_status_short_mismatch() {
    let mut record = VersionRecord::current();
    record.status = Status::Beta;
    let err = record.validate().unwrap_err();
    assert!(matches!(err, VersionError::Invariant(_)));
    assert_eq!(err.code(), "gdl_version.status_short_mismatch");
    assert_eq!(err.info().hint.as_deref(), Some("expected \"b\""));

    record.status_short = Cow::Borrowed("b");
    record.validate().expect("consistent after fixing abbreviation");
}

#[test]
fn rejects_nonzero_build_history() {
    let mut record = VersionRecord::current();
    record.build_history = 1;
    assert_eq!(failure_code(&record), "gdl_version.build_history");
}

#[test]
fn rejects_negative_counters() {
    let mut record = VersionRecord::current();
    record.builds_count = -1;
    let err = record.validate().unwrap_err();
    assert_eq!(err.code(), "gdl_version.negative_counter");
    assert_eq!(err.info().context.get("field").map(String::as_str), Some("builds_count"));
}

#[test]
fn rejects_malformed_dates() {
    let mut record = VersionRecord::current();
    record.date = Cow::Borrowed("2");
    assert_eq!(failure_code(&record), "gdl_version.date_component");

    let mut record = VersionRecord::current();
    record.month = Cow::Borrowed("13");
    assert_eq!(failure_code(&record), "gdl_version.date_range");
}

#[test]
fn rejects_distribution_version_drift() {
    let mut record = VersionRecord::current();
    record.ubuntu_version_style = 10.04;
    assert_eq!(failure_code(&record), "gdl_version.distribution_version_mismatch");

    record.month = Cow::Borrowed("04");
    record.validate().expect("month now matches");
}

#[test]
fn distribution_version_wraps_century() {
    let value = distribution_version("1999", "12").unwrap();
    assert!((value - 99.12).abs() < 1e-9);
    let value = distribution_version("2000", "01").unwrap();
    assert!((value - 0.01).abs() < 1e-9);
    assert!(distribution_version("10", "03").is_err());
}

#[test]
fn diff_lists_changed_fields() {
    let mut other = VersionRecord::current();
    other.build = 9000;
    other.full_version = Cow::Owned("1.3.9000.44578".into());

    let mismatches = VersionRecord::CURRENT.diff(&other);
    let fields: Vec<&str> = mismatches.iter().map(|m| m.field.as_str()).collect();
    assert_eq!(fields, ["build", "full_version"]);
    assert_eq!(mismatches[0].expected, "8853");
    assert_eq!(mismatches[0].found, "9000");
}

fn dated(date: &'static str, month: &'static str, year: &'static str) -> VersionRecord {
    let mut record = VersionRecord::current();
    record.date = Cow::Borrowed(date);
    record.month = Cow::Borrowed(month);
    record.year = Cow::Borrowed(year);
    record.ubuntu_version_style = distribution_version(year, month).unwrap();
    record
}

#[test]
fn rejects_days_past_end_of_month() {
    assert_eq!(failure_code(&dated("31", "02", "2010")), "gdl_version.date_range");
    assert_eq!(failure_code(&dated("29", "02", "2010")), "gdl_version.date_range");
    assert_eq!(failure_code(&dated("31", "04", "2010")), "gdl_version.date_range");
}

#[test]
fn accepts_leap_day_in_leap_year() {
    dated("29", "02", "2012").validate().expect("leap day");
    dated("30", "04", "2010").validate().expect("end of april");
}
