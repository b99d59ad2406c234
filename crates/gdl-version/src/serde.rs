use std::collections::BTreeMap;
use std::fs;
use std::iter::FromIterator;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, VersionError};
use crate::record::VersionRecord;

fn serde_error(code: &str, err: impl ToString) -> VersionError {
    VersionError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, VersionError> {
    let value =
        serde_json::to_value(value).map_err(|err| serde_error("gdl_version.json_encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical)
        .map_err(|err| serde_error("gdl_version.json_write", err))?;
    Ok(bytes)
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, VersionError> {
    serde_json::from_slice(data).map_err(|err| serde_error("gdl_version.json_read", err))
}

/// Serializes a record as a TOML document.
pub fn to_toml_string(record: &VersionRecord) -> Result<String, VersionError> {
    toml::to_string(record).map_err(|err| serde_error("gdl_version.toml_encode", err))
}

/// Parses a record from a TOML document.
pub fn from_toml_str(data: &str) -> Result<VersionRecord, VersionError> {
    toml::from_str(data).map_err(|err| serde_error("gdl_version.toml_read", err))
}

/// Loads and validates a version record from a `.json` or `.toml` file.
///
/// Files without a `.json` extension are parsed as TOML.
pub fn load_record(path: &Path) -> Result<VersionRecord, VersionError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        VersionError::Io(
            ErrorInfo::new(
                "gdl_version.read_record",
                format!("failed to read version record: {err}"),
            )
            .with_context("path", path.display().to_string()),
        )
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    log::debug!(
        "loading version record from {} as {}",
        path.display(),
        if is_json { "json" } else { "toml" }
    );
    let parsed = if is_json {
        from_json_slice(contents.as_bytes())
    } else {
        from_toml_str(&contents)
    };
    let record = parsed.map_err(|err| {
        let info = err.info().clone();
        VersionError::Serde(info.with_context("path", path.display().to_string()))
    })?;
    record.validate()?;
    Ok(record)
}
