//! Request validation E2E tests: document -> validator -> API v1 response.

use qr_request_api::v1::{ApiV1ValidationResult, validate_request, validate_request_body};
use qr_request_config::{parse_request_json, parse_request_yaml};
use qr_request_domain::{Charset, Ecc, Format, RequestDescriptor};
use qr_request_shared::ErrorCode;
use qr_request_validator::{effective_options, validate_owned};
use std::error::Error;

#[test]
fn request_validation_end_to_end() -> Result<(), Box<dyn Error>> {
    let body = r##"{
        "data": "https://example.com/table/12",
        "size": { "width": 400, "height": 400 },
        "format": "gif",
        "charsetTarget": "ISO-8859-1",
        "ecc": "M",
        "color": "#336699",
        "margin": 2
    }"##;

    let validated = parse_request_json(body)?;
    let options = effective_options(&validated)?;
    assert_eq!(options.format, Format::Gif);
    assert_eq!(options.charset_source, Charset::Utf8);
    assert_eq!(options.charset_target, Charset::Iso88591);
    assert_eq!(options.ecc, Ecc::M);
    assert_eq!(options.color.to_string(), "51-102-153");
    assert_eq!(options.bg_color.to_string(), "0-0-0");
    assert_eq!(options.q_zone.get(), 0);

    // The echoed request carries only what the caller sent.
    let response = validate_request_body(body);
    let ApiV1ValidationResult::Valid { data, .. } = &response else {
        return Err(format!("expected valid response, got {response:?}").into());
    };
    assert_eq!(data, validated.as_inner());
    assert!(data.bg_color.is_none());

    Ok(())
}

#[test]
fn every_problem_is_reported_in_one_pass() -> Result<(), Box<dyn Error>> {
    let yaml = "data: \"\"\nsize:\n  width: 1010\n  height: 1010\necc: X\nqZone: 7.5\n";
    let envelope = parse_request_yaml(yaml)
        .err()
        .ok_or("invalid YAML request passed validation")?;
    assert_eq!(envelope.code, ErrorCode::invalid_fields());
    assert_eq!(
        envelope.metadata.get("fields").map(String::as_str),
        Some("data,size,ecc,qZone")
    );

    let descriptor = RequestDescriptor::new("")
        .with_size(1010, 1010)
        .with_ecc("X")
        .with_q_zone(7.5);
    let response = serde_json::to_value(validate_request(&descriptor))?;
    assert_eq!(
        response,
        serde_json::json!({
            "ok": false,
            "errors": [
                { "fieldName": "data", "message": "data length should be between 1 and 900" },
                { "fieldName": "size", "message": "width should be less than 1000" },
                { "fieldName": "size", "message": "height should be less than 1000" },
                { "fieldName": "ecc", "message": "ecc should be one of (L, M, Q, H)" },
                { "fieldName": "qZone", "message": "qZone should be an integer between 0 and 100" }
            ]
        })
    );
    Ok(())
}

#[test]
fn same_size_passes_for_vector_formats() -> Result<(), Box<dyn Error>> {
    let descriptor = RequestDescriptor::new("somedata")
        .with_format(Format::Svg)
        .with_size(1010, 1010);
    let validated = validate_owned(descriptor.clone())?;
    assert_eq!(validated.into_inner(), descriptor);
    Ok(())
}

#[test]
fn undecodable_bodies_use_the_error_shape() -> Result<(), Box<dyn Error>> {
    let response = serde_json::to_value(validate_request_body(r#"{"data":"x","format":"bmp"}"#))?;
    assert_eq!(response.get("ok"), Some(&serde_json::Value::Bool(false)));
    assert_eq!(
        response
            .pointer("/error/code")
            .and_then(serde_json::Value::as_str),
        Some("ERR_CONFIG_INVALID_JSON")
    );
    assert!(response.get("errors").is_none());
    Ok(())
}

#[test]
fn fractional_sizes_are_rejected_when_decoding() -> Result<(), Box<dyn Error>> {
    let body = r#"{"data":"somedata","size":{"width":10.5,"height":10.5}}"#;
    let envelope = parse_request_json(body)
        .err()
        .ok_or("fractional size decoded")?;
    assert_eq!(envelope.code, ErrorCode::new("config", "invalid_json"));

    let response = serde_json::to_value(validate_request_body(body))?;
    assert_eq!(
        response
            .pointer("/error/code")
            .and_then(serde_json::Value::as_str),
        Some("ERR_CONFIG_INVALID_JSON")
    );
    Ok(())
}
