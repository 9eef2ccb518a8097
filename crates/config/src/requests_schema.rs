//! JSON Schema export for request documents.

use qr_request_domain::RequestDescriptor;
use schemars::{Schema, schema_for};

/// JSON Schema for `RequestDescriptor`.
#[must_use]
pub fn request_descriptor_schema() -> Schema {
    schema_for!(RequestDescriptor)
}
