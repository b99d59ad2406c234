#![deny(missing_docs)]
#![doc = "Build and version record for GDL: compile-time constants in [`autoversion`] plus helpers to compare, serialize and check them."]

pub mod autoversion;
pub mod errors;
mod file_version;
mod hash;
pub mod record;
mod serde;
mod status;

pub use crate::serde::{
    from_json_slice, from_toml_str, load_record, to_canonical_json_bytes, to_toml_string,
};
pub use errors::{ErrorInfo, VersionError};
pub use file_version::FileVersion;
pub use hash::record_fingerprint;
pub use record::{distribution_version, FieldMismatch, VersionRecord};
pub use status::Status;
