//! Field errors and their ordered, non-empty aggregate.

use qr_request_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request field guarded by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    /// `data`
    Data,
    /// `size`
    Size,
    /// `charsetSource`
    CharsetSource,
    /// `charsetTarget`
    CharsetTarget,
    /// `ecc`
    Ecc,
    /// `color`
    Color,
    /// `bgColor`
    BgColor,
    /// `margin`
    Margin,
    /// `qZone`
    QZone,
}

impl FieldName {
    /// Returns the wire (camelCase) name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Size => "size",
            Self::CharsetSource => "charsetSource",
            Self::CharsetTarget => "charsetTarget",
            Self::Ecc => "ecc",
            Self::Color => "color",
            Self::BgColor => "bgColor",
            Self::Margin => "margin",
            Self::QZone => "qZone",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Field the failing rule guards.
    pub field_name: FieldName,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field_name: FieldName, message: impl Into<String>) -> Self {
        Self {
            field_name,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.field_name, self.message)
    }
}

/// Every failed rule for one request, in rule declaration order.
///
/// Never empty: a request with no failures validates successfully instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wrap a list of failures, or `None` when the list is empty.
    #[must_use]
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Borrow the failures.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Number of failures (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Failures for a single field, in order.
    pub fn for_field(&self, field: FieldName) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |error| error.field_name == field)
    }

    /// Distinct field names, in order of first failure.
    #[must_use]
    pub fn field_names(&self) -> Vec<FieldName> {
        let mut names: Vec<FieldName> = Vec::new();
        for error in &self.0 {
            if !names.contains(&error.field_name) {
                names.push(error.field_name);
            }
        }
        names
    }

    /// Consume and return the failures.
    #[must_use]
    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<ValidationErrors> for ErrorEnvelope {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_names()
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        Self::expected(
            ErrorCode::invalid_fields(),
            format!("invalid QR request: {errors}"),
        )
        .with_metadata("fields", fields)
        .with_metadata("error_count", errors.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn sample() -> Result<ValidationErrors, Box<dyn Error>> {
        let errors = ValidationErrors::from_vec(vec![
            FieldError::new(FieldName::Size, "width should be less than 1000"),
            FieldError::new(FieldName::Size, "height should be less than 1000"),
            FieldError::new(FieldName::QZone, "qZone should be an integer between 0 and 100"),
        ]);
        Ok(errors.ok_or("sample errors should not be empty")?)
    }

    #[test]
    fn empty_lists_are_not_errors() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn field_names_keep_first_failure_order() -> Result<(), Box<dyn Error>> {
        let errors = sample()?;
        assert_eq!(errors.field_names(), [FieldName::Size, FieldName::QZone]);
        Ok(())
    }

    #[test]
    fn for_field_preserves_order() -> Result<(), Box<dyn Error>> {
        let errors = sample()?;
        let messages: Vec<&str> = errors
            .for_field(FieldName::Size)
            .map(|error| error.message.as_str())
            .collect();
        assert_eq!(
            messages,
            ["width should be less than 1000", "height should be less than 1000"]
        );
        Ok(())
    }

    #[test]
    fn serializes_as_plain_list_with_camel_case_keys() -> Result<(), Box<dyn Error>> {
        let errors = ValidationErrors::from_vec(vec![FieldError::new(
            FieldName::CharsetSource,
            "charset source should be one of (ISO-8859-1, UTF-8)",
        )]);
        assert_eq!(
            serde_json::to_value(&errors)?,
            serde_json::json!([{
                "fieldName": "charsetSource",
                "message": "charset source should be one of (ISO-8859-1, UTF-8)"
            }])
        );
        Ok(())
    }

    #[test]
    fn converts_into_envelope_with_field_metadata() -> Result<(), Box<dyn Error>> {
        let errors = sample()?;
        let envelope = ErrorEnvelope::from(errors);
        assert_eq!(envelope.code, ErrorCode::invalid_fields());
        assert_eq!(
            envelope.metadata.get("fields").map(String::as_str),
            Some("size,qZone")
        );
        assert_eq!(
            envelope.metadata.get("error_count").map(String::as_str),
            Some("3")
        );
        assert!(envelope.message.starts_with("invalid QR request: size: width"));
        Ok(())
    }

    #[test]
    fn field_name_wire_names_match_serde() -> Result<(), Box<dyn Error>> {
        for name in [
            FieldName::Data,
            FieldName::Size,
            FieldName::CharsetSource,
            FieldName::CharsetTarget,
            FieldName::Ecc,
            FieldName::Color,
            FieldName::BgColor,
            FieldName::Margin,
            FieldName::QZone,
        ] {
            assert_eq!(serde_json::to_value(name)?, name.as_str());
        }
        Ok(())
    }
}
