//! JSON Schema exports for API v1 DTOs.

use crate::v1::ApiV1ValidationResult;
use qr_request_domain::RequestDescriptor;
use schemars::{Schema, schema_for};

/// JSON Schema for the validation request body.
#[must_use]
pub fn api_v1_validate_request_schema() -> Schema {
    schema_for!(RequestDescriptor)
}

/// JSON Schema for `ApiV1ValidationResult`.
#[must_use]
pub fn api_v1_validation_result_schema() -> Schema {
    schema_for!(ApiV1ValidationResult)
}
