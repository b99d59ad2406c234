use sha2::{Digest, Sha256};

use crate::errors::VersionError;
use crate::record::VersionRecord;
use crate::serde::to_canonical_json_bytes;

/// Hex encoded SHA-256 of the record's canonical JSON form.
pub fn record_fingerprint(record: &VersionRecord) -> Result<String, VersionError> {
    let bytes = to_canonical_json_bytes(record)?;
    Ok(hex::encode(Sha256::digest(bytes)))
}
