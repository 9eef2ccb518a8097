//! Color grammar for foreground/background colors.
//!
//! Accepted shapes:
//! - `R-G-B`, decimal channels in `[0, 255]` (leading zeros allowed)
//! - `#RRGGBB` or `#RGB`, case-insensitive hex digits

use qr_request_shared::validation::{is_ascii_digits, is_ascii_hex_digits};
use qr_request_shared::{ErrorCode, ErrorEnvelope};
use std::fmt;

/// An RGB color accepted by the image endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

/// Reasons a color string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is neither `R-G-B` nor `#hex`.
    UnknownShape {
        /// Raw input.
        input: String,
    },
    /// A decimal channel is above 255.
    ChannelOutOfRange {
        /// Channel name (`red`, `green`, `blue`).
        channel: &'static str,
        /// Raw channel digits.
        value: String,
    },
    /// A `#` color has the wrong digit count or a non-hex digit.
    InvalidHex {
        /// Raw input.
        input: String,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownShape { .. } => {
                formatter.write_str("color must be R-G-B, #RRGGBB or #RGB")
            },
            Self::ChannelOutOfRange { channel, .. } => {
                write!(formatter, "color {channel} channel must be between 0 and 255")
            },
            Self::InvalidHex { .. } => {
                formatter.write_str("hex color must have 3 or 6 hex digits after '#'")
            },
        }
    }
}

impl std::error::Error for ColorError {}

impl From<ColorError> for ErrorEnvelope {
    fn from(error: ColorError) -> Self {
        let envelope = Self::expected(ErrorCode::new("domain", "invalid_color"), error.to_string());
        match error {
            ColorError::UnknownShape { input } | ColorError::InvalidHex { input } => {
                envelope.with_metadata("input", input)
            },
            ColorError::ChannelOutOfRange { channel, value } => envelope
                .with_metadata("channel", channel)
                .with_metadata("value", value),
        }
    }
}

const CHANNELS: [&str; 3] = ["red", "green", "blue"];

impl Color {
    /// Create a color from channel values.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse either grammar.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex {
                input: input.to_owned(),
            });
        }
        parse_dashed(input)
    }

    /// Returns true when `input` matches either grammar.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }
}

impl fmt::Display for Color {
    /// Renders the `R-G-B` form used on the wire.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}-{}-{}", self.red, self.green, self.blue)
    }
}

fn parse_dashed(input: &str) -> Result<Color, ColorError> {
    let unknown = || ColorError::UnknownShape {
        input: input.to_owned(),
    };
    let mut parts = input.split('-');
    let mut channels = [0_u8; 3];
    for (slot, name) in channels.iter_mut().zip(CHANNELS) {
        let part = parts.next().ok_or_else(unknown)?;
        if !is_ascii_digits(part) {
            return Err(unknown());
        }
        *slot = parse_channel(part).ok_or_else(|| ColorError::ChannelOutOfRange {
            channel: name,
            value: part.to_owned(),
        })?;
    }
    if parts.next().is_some() {
        return Err(unknown());
    }
    let [red, green, blue] = channels;
    Ok(Color::rgb(red, green, blue))
}

// Leading zeros are stripped first so "000255" is still a valid channel.
fn parse_channel(digits: &str) -> Option<u8> {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0);
    }
    significant.parse().ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !is_ascii_hex_digits(hex) {
        return None;
    }
    match hex.len() {
        6 => Some(Color::rgb(
            u8::from_str_radix(hex.get(0..2)?, 16).ok()?,
            u8::from_str_radix(hex.get(2..4)?, 16).ok()?,
            u8::from_str_radix(hex.get(4..6)?, 16).ok()?,
        )),
        3 => {
            let nibble = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
            let (red, green, blue) = (nibble(0..1)?, nibble(1..2)?, nibble(2..3)?);
            Some(Color::rgb(red * 17, green * 17, blue * 17))
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_dashed_channels() -> Result<(), ColorError> {
        assert_eq!(Color::parse("0-0-0")?, Color::rgb(0, 0, 0));
        assert_eq!(Color::parse("255-128-007")?, Color::rgb(255, 128, 7));
        assert_eq!(Color::parse("000000255-0-0")?, Color::rgb(255, 0, 0));
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_channel() {
        let error = Color::parse("300-0-0").err();
        assert_eq!(
            error,
            Some(ColorError::ChannelOutOfRange {
                channel: "red",
                value: "300".to_string(),
            })
        );
        assert!(!Color::is_valid("0-0-256"));
        assert!(!Color::is_valid("0-0-99999999999999999999999"));
    }

    #[test]
    fn rejects_other_shapes() {
        for input in ["", "0-0", "0-0-0-0", "a-b-c", "-1-0-0", "0--0", " 0-0-0", "red"] {
            assert!(!Color::is_valid(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn parses_hex_forms_case_insensitively() -> Result<(), ColorError> {
        assert_eq!(Color::parse("#FF8000")?, Color::rgb(255, 128, 0));
        assert_eq!(Color::parse("#ff8000")?, Color::rgb(255, 128, 0));
        assert_eq!(Color::parse("#fA0")?, Color::rgb(255, 170, 0));
        Ok(())
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["#", "#ff", "#ffff", "#fffffff", "#ggg", "ffffff", "#+12"] {
            assert!(!Color::is_valid(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn display_renders_dashed_form() -> Result<(), ColorError> {
        assert_eq!(Color::parse("#0a0B0c")?.to_string(), "10-11-12");
        Ok(())
    }

    #[test]
    fn color_errors_map_into_envelopes() -> Result<(), Box<dyn std::error::Error>> {
        let error = Color::parse("1-2-999").err().ok_or("out-of-range channel parsed")?;
        let envelope = ErrorEnvelope::from(error);
        assert_eq!(envelope.code, ErrorCode::new("domain", "invalid_color"));
        assert_eq!(envelope.metadata.get("channel").map(String::as_str), Some("blue"));
        Ok(())
    }

    proptest! {
        #[test]
        fn every_byte_triplet_round_trips_through_dashed_form(
            red in any::<u8>(), green in any::<u8>(), blue in any::<u8>()
        ) {
            let color = Color::rgb(red, green, blue);
            prop_assert_eq!(Color::parse(&color.to_string()), Ok(color));
        }

        #[test]
        fn channels_above_255_are_rejected(value in 256_u32..100_000) {
            let input = format!("{value}-0-0");
            prop_assert!(!Color::is_valid(&input));
        }
    }
}
