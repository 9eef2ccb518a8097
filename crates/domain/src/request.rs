//! QR request descriptor and its resolved (defaulted) view.

use crate::color::{Color, ColorError};
use crate::options::{
    Charset, DEFAULT_BG_COLOR, DEFAULT_CHARSET_SOURCE, DEFAULT_CHARSET_TARGET, DEFAULT_COLOR,
    DEFAULT_ECC, DEFAULT_FORMAT, DEFAULT_HEIGHT, DEFAULT_MARGIN, DEFAULT_QZONE, DEFAULT_WIDTH,
    Ecc, Format, MAX_MARGIN, MAX_QZONE,
};
use qr_request_shared::validation::is_integer;
use qr_request_shared::{BoundedU32, ErrorCode, ErrorEnvelope};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested image dimensions, in pixels.
///
/// Signed so a negative side decodes and is reported by the minimum-size
/// rules; a fractional side does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Size {
    /// Image width.
    pub width: i64,
    /// Image height.
    pub height: i64,
}

impl Size {
    /// Create a size from width and height.
    #[must_use]
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Square size.
    #[must_use]
    pub const fn square(side: i64) -> Self {
        Self::new(side, side)
    }
}

/// Description of a QR image to request from the generation endpoint.
///
/// This is the unvalidated input. Enumerated options other than `format`
/// are kept as raw strings so unknown values surface as field errors
/// instead of parse failures. Margin and quiet zone follow JSON number
/// semantics, so a fractional margin is representable and rejected by
/// validation. Size sides are integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequestDescriptor {
    /// Payload encoded into the QR code.
    pub data: String,
    /// Optional image dimensions (defaults to 200x200).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Optional image format (defaults to `png`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
    /// Optional source charset (defaults to `UTF-8`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset_source: Option<String>,
    /// Optional target charset (defaults to `UTF-8`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset_target: Option<String>,
    /// Optional error-correction level (defaults to `L`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecc: Option<String>,
    /// Optional foreground color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Optional background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    /// Optional margin in pixels (defaults to 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    /// Optional quiet zone in modules (defaults to 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_zone: Option<f64>,
}

impl RequestDescriptor {
    /// Create a descriptor carrying only the payload.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            size: None,
            format: None,
            charset_source: None,
            charset_target: None,
            ecc: None,
            color: None,
            bg_color: None,
            margin: None,
            q_zone: None,
        }
    }

    /// Set the image size.
    #[must_use]
    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Set the image format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the source charset.
    #[must_use]
    pub fn with_charset_source(mut self, charset: impl Into<String>) -> Self {
        self.charset_source = Some(charset.into());
        self
    }

    /// Set the target charset.
    #[must_use]
    pub fn with_charset_target(mut self, charset: impl Into<String>) -> Self {
        self.charset_target = Some(charset.into());
        self
    }

    /// Set the error-correction level.
    #[must_use]
    pub fn with_ecc(mut self, ecc: impl Into<String>) -> Self {
        self.ecc = Some(ecc.into());
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    /// Set the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set the quiet zone.
    #[must_use]
    pub fn with_q_zone(mut self, q_zone: f64) -> Self {
        self.q_zone = Some(q_zone);
        self
    }

    /// Format the request resolves to (explicit or default).
    #[must_use]
    pub fn resolved_format(&self) -> Format {
        self.format.unwrap_or(DEFAULT_FORMAT)
    }

    /// Typed view with every default applied.
    pub fn effective(&self) -> Result<EffectiveOptions, ResolveError> {
        EffectiveOptions::resolve(self)
    }
}

/// Request options with every default applied and every value typed.
///
/// Built from a descriptor on demand; the descriptor itself is never
/// rewritten with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    /// Payload.
    pub data: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Image format.
    pub format: Format,
    /// Source charset.
    pub charset_source: Charset,
    /// Target charset.
    pub charset_target: Charset,
    /// Error-correction level.
    pub ecc: Ecc,
    /// Foreground color.
    pub color: Color,
    /// Background color.
    pub bg_color: Color,
    /// Margin in pixels.
    pub margin: BoundedU32<0, MAX_MARGIN>,
    /// Quiet zone in modules.
    pub q_zone: BoundedU32<0, MAX_QZONE>,
}

/// Failures while typing a descriptor into `EffectiveOptions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Charset or ECC value outside its enumeration.
    UnknownOption {
        /// Field name.
        field: &'static str,
        /// Raw value.
        value: String,
    },
    /// Color value does not match the grammar.
    InvalidColor {
        /// Field name.
        field: &'static str,
        /// Grammar failure.
        source: ColorError,
    },
    /// Numeric value is fractional, negative or too large.
    InvalidNumber {
        /// Field name.
        field: &'static str,
        /// Raw value.
        value: String,
    },
}

impl ResolveError {
    /// Field the failure refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::UnknownOption { field, .. }
            | Self::InvalidColor { field, .. }
            | Self::InvalidNumber { field, .. } => field,
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption { field, value } => {
                write!(formatter, "{field} has unknown value {value:?}")
            },
            Self::InvalidColor { field, source } => write!(formatter, "{field}: {source}"),
            Self::InvalidNumber { field, value } => {
                write!(formatter, "{field} must be a whole number in range, got {value}")
            },
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidColor { source, .. } => Some(source),
            Self::UnknownOption { .. } | Self::InvalidNumber { .. } => None,
        }
    }
}

impl From<ResolveError> for ErrorEnvelope {
    fn from(error: ResolveError) -> Self {
        Self::expected(
            ErrorCode::new("domain", "unresolvable_option"),
            error.to_string(),
        )
        .with_metadata("field", error.field())
    }
}

impl EffectiveOptions {
    /// Apply defaults and type every field.
    ///
    /// Succeeds for every descriptor the validator accepts.
    pub fn resolve(descriptor: &RequestDescriptor) -> Result<Self, ResolveError> {
        let (width, height) = match descriptor.size {
            None => (DEFAULT_WIDTH, DEFAULT_HEIGHT),
            Some(size) => (
                side_u32("size.width", size.width)?,
                side_u32("size.height", size.height)?,
            ),
        };

        let margin = match descriptor.margin {
            None => DEFAULT_MARGIN,
            Some(value) => whole_u32("margin", value)?,
        };
        let q_zone = match descriptor.q_zone {
            None => DEFAULT_QZONE,
            Some(value) => whole_u32("qZone", value)?,
        };

        Ok(Self {
            data: descriptor.data.clone(),
            width,
            height,
            format: descriptor.resolved_format(),
            charset_source: resolve_charset(
                "charsetSource",
                descriptor.charset_source.as_deref(),
                DEFAULT_CHARSET_SOURCE,
            )?,
            charset_target: resolve_charset(
                "charsetTarget",
                descriptor.charset_target.as_deref(),
                DEFAULT_CHARSET_TARGET,
            )?,
            ecc: match descriptor.ecc.as_deref() {
                None => DEFAULT_ECC,
                Some(raw) => Ecc::parse(raw).ok_or_else(|| ResolveError::UnknownOption {
                    field: "ecc",
                    value: raw.to_owned(),
                })?,
            },
            color: resolve_color("color", descriptor.color.as_deref(), DEFAULT_COLOR)?,
            bg_color: resolve_color("bgColor", descriptor.bg_color.as_deref(), DEFAULT_BG_COLOR)?,
            margin: BoundedU32::new(margin).ok_or_else(|| invalid_number("margin", margin))?,
            q_zone: BoundedU32::new(q_zone).ok_or_else(|| invalid_number("qZone", q_zone))?,
        })
    }
}

fn resolve_charset(
    field: &'static str,
    raw: Option<&str>,
    default: Charset,
) -> Result<Charset, ResolveError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    Charset::parse(raw).ok_or_else(|| ResolveError::UnknownOption {
        field,
        value: raw.to_owned(),
    })
}

fn resolve_color(
    field: &'static str,
    raw: Option<&str>,
    default: &str,
) -> Result<Color, ResolveError> {
    Color::parse(raw.unwrap_or(default)).map_err(|source| ResolveError::InvalidColor { field, source })
}

fn side_u32(field: &'static str, value: i64) -> Result<u32, ResolveError> {
    u32::try_from(value).map_err(|_| invalid_number(field, value))
}

fn whole_u32(field: &'static str, value: f64) -> Result<u32, ResolveError> {
    if !is_integer(value) || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(invalid_number(field, value));
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is a whole number checked to fit in u32"
    )]
    let whole = value as u32;
    Ok(whole)
}

fn invalid_number(field: &'static str, value: impl fmt::Display) -> ResolveError {
    ResolveError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}
