use gdl_version::autoversion::*;
use gdl_version::{Status, VersionRecord};

#[test]
fn exact_literal_values() {
    assert_eq!(DATE, "02");
    assert_eq!(MONTH, "03");
    assert_eq!(YEAR, "2010");
    assert_eq!(UBUNTU_VERSION_STYLE, 10.03);
    assert_eq!(STATUS, "Release");
    assert_eq!(STATUS_SHORT, "r");
    assert_eq!(MAJOR, 1);
    assert_eq!(MINOR, 3);
    assert_eq!(BUILD, 8853);
    assert_eq!(REVISION, 44578);
    assert_eq!(BUILDS_COUNT, 19021);
    assert_eq!(FULLVERSION_STRING, "1.3.8853.44578");
    assert_eq!(BUILD_HISTORY, 0);
}

#[test]
fn full_version_is_dot_joined_tuple() {
    assert_eq!(
        FULLVERSION_STRING,
        format!("{MAJOR}.{MINOR}.{BUILD}.{REVISION}")
    );
}

#[test]
fn resource_forms_follow_the_tuple() {
    assert_eq!(RC_FILEVERSION, [MAJOR, MINOR, BUILD, REVISION]);
    assert_eq!(RC_FILEVERSION_STRING, "1, 3, 8853, 44578\0");
}

#[test]
fn status_short_abbreviates_status() {
    let status = Status::from_label(STATUS).expect("known status");
    assert_eq!(status, STATUS_KIND);
    assert_eq!(status.short(), STATUS_SHORT);
}

#[test]
fn repeated_reads_are_identical() {
    let first = VersionRecord::current();
    for _ in 0..16 {
        assert_eq!(VersionRecord::current(), first);
        assert_eq!(FULLVERSION_STRING, first.full_version);
    }
}

#[test]
fn constants_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (FULLVERSION_STRING, BUILD_HISTORY, VersionRecord::current())))
        .collect();
    for handle in handles {
        let (full, history, record) = handle.join().expect("reader thread");
        assert_eq!(full, "1.3.8853.44578");
        assert_eq!(history, 0);
        assert_eq!(record, VersionRecord::CURRENT);
    }
}
