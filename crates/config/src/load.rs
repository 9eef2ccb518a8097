//! Request loading helpers (file + serialization).
//!
//! The loader picks the document format from the file extension and surfaces
//! every failure as a typed `ErrorEnvelope`.

use crate::requests::{RequestFormat, ValidatedRequest, parse_request_document};
use qr_request_domain::RequestDescriptor;
use qr_request_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::path::Path;

/// Load and validate a request document from disk.
///
/// The format comes from the extension: `.json`, `.toml`, `.yaml` or `.yml`.
pub fn load_request_from_path(path: &Path) -> Result<ValidatedRequest, ErrorEnvelope> {
    let format = detect_request_format(path)?;
    let text = read_request_file(path)?;
    let validated = parse_request_document(&text, format)
        .map_err(|error| error.with_metadata("path", path.to_string_lossy().to_string()))?;

    tracing::debug!(
        event = "qr_request.loaded",
        source = %path.display(),
        format = %format,
        "loaded request document"
    );
    Ok(validated)
}

/// Detect the document format of `path` from its extension.
pub fn detect_request_format(path: &Path) -> Result<RequestFormat, ErrorEnvelope> {
    let extension = path.extension().and_then(|value| value.to_str());
    extension
        .and_then(RequestFormat::from_extension)
        .ok_or_else(|| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "unsupported_request_format"),
                "unsupported request format; use .json, .toml, .yaml or .yml",
            )
            .with_metadata("extension", extension.unwrap_or_default().to_string())
        })
}

/// Serialize a descriptor as pretty JSON (with trailing newline).
pub fn to_pretty_json(descriptor: &RequestDescriptor) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(descriptor).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize request: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize a descriptor as pretty TOML (with trailing newline).
pub fn to_pretty_toml(descriptor: &RequestDescriptor) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(descriptor).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize request TOML: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn read_request_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "request_not_found"),
            _ => ErrorCode::new("config", "request_read_failed"),
        };

        ErrorEnvelope::expected(code, format!("failed to read request file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::parse_request_toml;
    use qr_request_domain::Format;
    use std::error::Error;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qr-request-load-{}-{name}", std::process::id()))
    }

    #[test]
    fn loads_yaml_file_by_extension() -> Result<(), Box<dyn Error>> {
        let path = temp_path("request.yml");
        std::fs::write(&path, "data: somedata\nformat: eps\nsize:\n  width: 4000\n  height: 4000\n")?;
        let loaded = load_request_from_path(&path);
        std::fs::remove_file(&path)?;

        let validated = loaded?;
        assert_eq!(validated.format, Some(Format::Eps));
        Ok(())
    }

    #[test]
    fn missing_file_reports_not_found() {
        let error = load_request_from_path(&temp_path("missing.json")).err();
        assert_eq!(
            error.map(|envelope| envelope.code),
            Some(ErrorCode::new("config", "request_not_found"))
        );
    }

    #[test]
    fn unknown_extension_is_rejected_before_reading() -> Result<(), Box<dyn Error>> {
        let envelope = load_request_from_path(Path::new("/nonexistent/request.ini"))
            .err()
            .ok_or("unsupported extension loaded")?;
        assert_eq!(
            envelope.code,
            ErrorCode::new("config", "unsupported_request_format")
        );
        assert_eq!(
            envelope.metadata.get("extension").map(String::as_str),
            Some("ini")
        );
        Ok(())
    }

    #[test]
    fn invalid_fields_keep_the_source_path() -> Result<(), Box<dyn Error>> {
        let path = temp_path("invalid.json");
        std::fs::write(&path, r#"{"data":"","margin":51}"#)?;
        let loaded = load_request_from_path(&path);
        std::fs::remove_file(&path)?;

        let envelope = loaded.err().ok_or("invalid request loaded")?;
        assert_eq!(envelope.code, ErrorCode::invalid_fields());
        assert_eq!(
            envelope.metadata.get("path").map(String::as_str),
            Some(path.to_string_lossy().as_ref())
        );
        Ok(())
    }

    #[test]
    fn pretty_output_round_trips() -> Result<(), Box<dyn Error>> {
        let descriptor = RequestDescriptor::new("somedata")
            .with_size(250, 250)
            .with_ecc("M")
            .with_bg_color("#ffffff");

        let json = to_pretty_json(&descriptor)?;
        assert!(json.ends_with('\n'));
        let parsed: RequestDescriptor = serde_json::from_str(&json)?;
        assert_eq!(parsed, descriptor);

        let toml_text = to_pretty_toml(&descriptor)?;
        let validated = parse_request_toml(&toml_text)?;
        assert_eq!(validated.as_inner(), &descriptor);
        Ok(())
    }
}
