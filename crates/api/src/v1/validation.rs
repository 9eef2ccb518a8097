//! API v1 request validation entry points.

use crate::v1::{ApiV1ValidationResult, error_envelope_to_api_v1_error, validation_result_to_api_v1};
use qr_request_config::{RequestFormat, parse_request_unvalidated};
use qr_request_domain::RequestDescriptor;

/// Validate an already-decoded request.
#[must_use]
pub fn validate_request(descriptor: &RequestDescriptor) -> ApiV1ValidationResult {
    validation_result_to_api_v1(qr_request_validator::validate(descriptor))
}

/// Decode a JSON request body and validate it.
///
/// Bodies that do not decode (bad JSON, unknown keys, unknown format) yield
/// the `error` shape; every other problem yields the `errors` shape.
#[must_use]
pub fn validate_request_body(body: &str) -> ApiV1ValidationResult {
    match parse_request_unvalidated(body, RequestFormat::Json) {
        Ok(descriptor) => validate_request(&descriptor),
        Err(envelope) => {
            ApiV1ValidationResult::failed(error_envelope_to_api_v1_error(&envelope, None))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::ApiV1ErrorKind;

    #[test]
    fn body_with_field_errors_lists_them() -> Result<(), String> {
        let result = validate_request_body(r#"{"data":"somedata","charsetSource":"WA"}"#);
        let ApiV1ValidationResult::Invalid { ok, errors } = &result else {
            return Err(format!("expected field errors, got {result:?}"));
        };
        assert!(!*ok);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.first().map(|error| error.field_name.as_str()),
            Some("charsetSource")
        );
        Ok(())
    }

    #[test]
    fn undecodable_body_yields_error_shape() {
        let result = validate_request_body("not json");
        assert!(matches!(
            result,
            ApiV1ValidationResult::Failed { ok: false, ref error }
                if error.code == "ERR_CONFIG_INVALID_JSON" && error.kind == ApiV1ErrorKind::Expected
        ));
    }

    #[test]
    fn valid_body_is_echoed_without_defaults() {
        let result = validate_request_body(r#"{"data":"somedata"}"#);
        assert_eq!(
            result,
            ApiV1ValidationResult::valid(RequestDescriptor::new("somedata"))
        );
    }
}
