//! Request document parsing and validation.
//!
//! A request document is a boundary input (file, CLI argument, HTTP body)
//! holding one `RequestDescriptor` with camelCase keys. Parsing is strict:
//! unknown keys and unknown formats fail at this layer, while every other
//! field problem is left to the validator's rule table so the caller sees
//! all of them at once.

use qr_request_domain::RequestDescriptor;
use qr_request_shared::{ErrorCode, ErrorEnvelope, Validated};
use std::fmt;

/// Validated request proof.
pub type ValidatedRequest = Validated<RequestDescriptor>;

/// Serialization format of a request document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
    /// YAML document.
    Yaml,
}

impl RequestFormat {
    /// Returns the lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }

    /// Detect the format from a file extension (case-insensitive, no dot).
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    const fn error_code(self) -> &'static str {
        match self {
            Self::Json => "invalid_json",
            Self::Toml => "invalid_toml",
            Self::Yaml => "invalid_yaml",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

impl fmt::Display for RequestFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Run the rule table over a parsed descriptor.
///
/// Field errors become a single `request:invalid_fields` envelope listing
/// every failing field.
pub fn validate_request(descriptor: RequestDescriptor) -> Result<ValidatedRequest, ErrorEnvelope> {
    qr_request_validator::validate_owned(descriptor).map_err(ErrorEnvelope::from)
}

/// Parse a request document without running the rule table.
pub fn parse_request_unvalidated(
    input: &str,
    format: RequestFormat,
) -> Result<RequestDescriptor, ErrorEnvelope> {
    let parsed = match format {
        RequestFormat::Json => {
            serde_json::from_str(input).map_err(|error| parse_error(format, &error))
        },
        RequestFormat::Toml => toml::from_str(input).map_err(|error| parse_error(format, &error)),
        RequestFormat::Yaml => {
            serde_yaml_ng::from_str(input).map_err(|error| parse_error(format, &error))
        },
    };
    if let Err(envelope) = &parsed {
        tracing::warn!(
            event = "qr_request.parse_failed",
            format = %format,
            code = %envelope.code,
            "request document rejected"
        );
    }
    parsed
}

/// Parse and validate a request document in the given format.
pub fn parse_request_document(
    input: &str,
    format: RequestFormat,
) -> Result<ValidatedRequest, ErrorEnvelope> {
    let descriptor = parse_request_unvalidated(input, format)?;
    validate_request(descriptor)
}

/// Parse and validate a request from JSON.
pub fn parse_request_json(input: &str) -> Result<ValidatedRequest, ErrorEnvelope> {
    parse_request_document(input, RequestFormat::Json)
}

/// Parse and validate a request from TOML.
pub fn parse_request_toml(input: &str) -> Result<ValidatedRequest, ErrorEnvelope> {
    parse_request_document(input, RequestFormat::Toml)
}

/// Parse and validate a request from YAML.
pub fn parse_request_yaml(input: &str) -> Result<ValidatedRequest, ErrorEnvelope> {
    parse_request_document(input, RequestFormat::Yaml)
}

fn parse_error(format: RequestFormat, error: &dyn fmt::Display) -> ErrorEnvelope {
    ErrorEnvelope::expected(
        ErrorCode::new("config", format.error_code()),
        format!("invalid request {}: {error}", format.label()),
    )
    .with_metadata("format", format.as_str())
}
