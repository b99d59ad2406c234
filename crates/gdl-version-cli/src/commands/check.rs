use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use gdl_version::{load_record, FieldMismatch, VersionRecord};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Version record file (`.json` or `.toml`).
    pub path: PathBuf,
    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    status: String,
    path: String,
    mismatches: Vec<FieldMismatch>,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let mismatches = compare(&args.path)?;
    let report = CheckReport {
        status: String::from(if mismatches.is_empty() { "ok" } else { "mismatch" }),
        path: args.path.display().to_string(),
        mismatches,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}: {}", report.path, report.status);
        for mismatch in &report.mismatches {
            println!(
                "  {}: expected {}, found {}",
                mismatch.field, mismatch.expected, mismatch.found
            );
        }
    }
    if !report.mismatches.is_empty() {
        return Err(format!(
            "{} field(s) differ from the compiled-in record",
            report.mismatches.len()
        )
        .into());
    }
    Ok(())
}

/// Loads `path` and lists its differences from the compiled-in record.
pub fn compare(path: &Path) -> Result<Vec<FieldMismatch>, Box<dyn Error>> {
    let record = load_record(path)?;
    let mismatches = VersionRecord::CURRENT.diff(&record);
    for mismatch in &mismatches {
        log::warn!(
            "{} differs: expected {}, found {}",
            mismatch.field,
            mismatch.expected,
            mismatch.found
        );
    }
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gdl_version::to_toml_string;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn matching_record_has_no_mismatches() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.toml");
        fs::write(&path, to_toml_string(&VersionRecord::CURRENT).unwrap()).unwrap();
        assert!(compare(&path).unwrap().is_empty());
    }

    #[test]
    fn older_build_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.toml");
        let mut record = VersionRecord::current();
        record.builds_count = 19020;
        fs::write(&path, to_toml_string(&record).unwrap()).unwrap();
        let mismatches = compare(&path).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].field, "builds_count");
    }

    #[test]
    fn invalid_record_fails_before_diff() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("version.toml");
        let mut record = VersionRecord::current();
        record.full_version = "1.3.0.0".into();
        fs::write(&path, to_toml_string(&record).unwrap()).unwrap();
        assert!(compare(&path).is_err());
    }
}
