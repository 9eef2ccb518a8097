//! API v1 DTO types.

use qr_request_domain::RequestDescriptor;
use qr_request_validator::FieldName;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Error kind exposed in API v1 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiV1ErrorKind {
    /// Expected, user-facing errors (parse failures, unreadable input).
    Expected,
    /// Invariant violations that indicate a bug.
    Invariant,
}

/// API v1 error code string (stable contract value).
pub type ApiV1ErrorCode = String;

/// Metadata map attached to API v1 errors.
pub type ApiV1ErrorMeta = BTreeMap<String, String>;

/// API v1 error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiV1ErrorDto {
    /// Stable error code (e.g. `ERR_CONFIG_INVALID_JSON`).
    pub code: ApiV1ErrorCode,
    /// Human-readable message for the caller.
    pub message: String,
    /// Error category.
    pub kind: ApiV1ErrorKind,
    /// Optional metadata for debugging and correlation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ApiV1ErrorMeta>,
}

/// API v1 result wrapper for success or failure payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiV1Result<T> {
    /// Success response.
    Ok {
        /// Indicates success.
        ok: bool,
        /// Success payload.
        data: T,
    },
    /// Error response.
    Err {
        /// Indicates failure.
        ok: bool,
        /// Error payload.
        error: ApiV1ErrorDto,
    },
}

impl<T> ApiV1Result<T> {
    /// Build a success response wrapper.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self::Ok { ok: true, data }
    }

    /// Build an error response wrapper.
    #[must_use]
    pub const fn err(error: ApiV1ErrorDto) -> Self {
        Self::Err { ok: false, error }
    }
}

/// One failed rule, as returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiV1FieldErrorDto {
    /// Wire name of the field (`data`, `size`, `charsetSource`, ...).
    pub field_name: String,
    /// Human-readable explanation.
    pub message: String,
}

impl ApiV1FieldErrorDto {
    /// Build a field error DTO.
    pub fn new(field_name: FieldName, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.as_str().to_string(),
            message: message.into(),
        }
    }
}

/// API v1 response for a request validation call.
///
/// Exactly one of three shapes:
/// - `{"ok": true, "data": <request>}` when every rule passes
/// - `{"ok": false, "errors": [...]}` when one or more rules fail
/// - `{"ok": false, "error": {...}}` when the body could not be read at all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ApiV1ValidationResult {
    /// The request is valid and echoed back unchanged.
    Valid {
        /// Always `true`.
        ok: bool,
        /// The submitted request, without defaults applied.
        data: RequestDescriptor,
    },
    /// One or more rules failed.
    Invalid {
        /// Always `false`.
        ok: bool,
        /// Every failure, in rule order.
        errors: Vec<ApiV1FieldErrorDto>,
    },
    /// The body could not be parsed into a request.
    Failed {
        /// Always `false`.
        ok: bool,
        /// Parse or read failure.
        error: ApiV1ErrorDto,
    },
}

impl ApiV1ValidationResult {
    /// Build a success response.
    #[must_use]
    pub const fn valid(data: RequestDescriptor) -> Self {
        Self::Valid { ok: true, data }
    }

    /// Build a field-error response.
    #[must_use]
    pub const fn invalid(errors: Vec<ApiV1FieldErrorDto>) -> Self {
        Self::Invalid { ok: false, errors }
    }

    /// Build a failure response.
    #[must_use]
    pub const fn failed(error: ApiV1ErrorDto) -> Self {
        Self::Failed { ok: false, error }
    }

    /// Returns true for the success shape.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}
