//! API v1 DTOs and helpers.

mod mappers;
mod schema;
mod types;
mod validation;

pub use mappers::{
    error_code_to_api_v1, error_envelope_to_api_v1_error, field_error_to_api_v1,
    result_to_api_v1_result, validation_result_to_api_v1,
};
pub use schema::{api_v1_validate_request_schema, api_v1_validation_result_schema};
pub use types::*;
pub use validation::{validate_request, validate_request_body};
