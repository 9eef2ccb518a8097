//! Closed enumerations and defaults for QR request options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// PNG raster.
    Png,
    /// GIF raster.
    Gif,
    /// JPEG raster.
    Jpeg,
    /// JPEG raster (short spelling).
    Jpg,
    /// SVG vector.
    Svg,
    /// EPS vector.
    Eps,
}

impl Format {
    /// Every accepted format, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Png,
        Self::Gif,
        Self::Jpeg,
        Self::Jpg,
        Self::Svg,
        Self::Eps,
    ];

    /// Returns the canonical string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Jpeg => "jpeg",
            Self::Jpg => "jpg",
            Self::Svg => "svg",
            Self::Eps => "eps",
        }
    }

    /// Parse the canonical spelling.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == value)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Character set used to interpret or encode the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Charset {
    /// Latin-1.
    #[serde(rename = "ISO-8859-1")]
    Iso88591,
    /// UTF-8.
    #[serde(rename = "UTF-8")]
    Utf8,
}

impl Charset {
    /// Every accepted charset, in canonical order.
    pub const ALL: [Self; 2] = [Self::Iso88591, Self::Utf8];

    /// Returns the canonical string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iso88591 => "ISO-8859-1",
            Self::Utf8 => "UTF-8",
        }
    }

    /// Parse the canonical spelling (case-sensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|charset| charset.as_str() == value)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// QR error-correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Ecc {
    /// ~7% recovery.
    L,
    /// ~15% recovery.
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl Ecc {
    /// Every accepted level, lowest to highest.
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    /// Returns the canonical string identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }

    /// Parse the canonical spelling (case-sensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ecc| ecc.as_str() == value)
    }
}

impl fmt::Display for Ecc {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Format used when the request omits one.
pub const DEFAULT_FORMAT: Format = Format::Png;
/// Width used when the request omits a size.
pub const DEFAULT_WIDTH: u32 = 200;
/// Height used when the request omits a size.
pub const DEFAULT_HEIGHT: u32 = 200;
/// Source charset used when the request omits one.
pub const DEFAULT_CHARSET_SOURCE: Charset = Charset::Utf8;
/// Target charset used when the request omits one.
pub const DEFAULT_CHARSET_TARGET: Charset = Charset::Utf8;
/// Error-correction level used when the request omits one.
pub const DEFAULT_ECC: Ecc = Ecc::L;
/// Foreground color used when the request omits one.
pub const DEFAULT_COLOR: &str = "0-0-0";
/// Background color used when the request omits one.
pub const DEFAULT_BG_COLOR: &str = "0-0-0";
/// Margin (pixels) used when the request omits one.
pub const DEFAULT_MARGIN: u32 = 1;
/// Quiet zone (modules) used when the request omits one.
pub const DEFAULT_QZONE: u32 = 0;

/// Inclusive payload length bounds, in characters.
pub const DATA_MIN_LENGTH: usize = 1;
/// Inclusive payload length bounds, in characters.
pub const DATA_MAX_LENGTH: usize = 900;
/// Smallest accepted width/height.
pub const MIN_SIZE: u32 = 10;
/// Largest accepted margin.
pub const MAX_MARGIN: u32 = 50;
/// Largest accepted quiet zone.
pub const MAX_QZONE: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_spellings_only() {
        assert_eq!(Format::parse("svg"), Some(Format::Svg));
        assert_eq!(Format::parse("SVG"), None);
        assert_eq!(Charset::parse("ISO-8859-1"), Some(Charset::Iso88591));
        assert_eq!(Charset::parse("utf-8"), None);
        assert_eq!(Ecc::parse("H"), Some(Ecc::H));
        assert_eq!(Ecc::parse("WA"), None);
    }

    #[test]
    fn serde_uses_canonical_spellings() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Format::Jpeg)?, "\"jpeg\"");
        assert_eq!(serde_json::to_string(&Charset::Iso88591)?, "\"ISO-8859-1\"");
        assert_eq!(serde_json::to_string(&Ecc::Q)?, "\"Q\"");
        let parsed: Charset = serde_json::from_str("\"UTF-8\"")?;
        assert_eq!(parsed, Charset::Utf8);
        Ok(())
    }

    #[test]
    fn display_matches_as_str() {
        for format in Format::ALL {
            assert_eq!(format.to_string(), format.as_str());
        }
        for charset in Charset::ALL {
            assert_eq!(charset.to_string(), charset.as_str());
        }
        for ecc in Ecc::ALL {
            assert_eq!(ecc.to_string(), ecc.as_str());
        }
    }
}
