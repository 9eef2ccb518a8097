//! # qr-request-config
//!
//! Request document loading for the QR request validator: JSON, TOML and
//! YAML parsing, file loading by extension, and the JSON Schema export.
//! This crate depends on `domain`, `shared` and `validator` only.

/// Request loading helpers (file + serialization).
pub mod load;
/// Request document parsing and validation.
pub mod requests;
/// JSON Schema export for request documents.
pub mod requests_schema;

pub use load::{detect_request_format, load_request_from_path, to_pretty_json, to_pretty_toml};
pub use requests::{
    RequestFormat, ValidatedRequest, parse_request_document, parse_request_json,
    parse_request_toml, parse_request_unvalidated, parse_request_yaml, validate_request,
};
pub use requests_schema::request_descriptor_schema;

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
