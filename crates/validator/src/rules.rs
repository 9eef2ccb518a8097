//! The ordered rule table.
//!
//! Each rule is a `(field, predicate, message)` record. The engine evaluates
//! every rule in declaration order and never stops early, so the order of
//! this table is the order callers see failures in.

use crate::field::{FieldError, FieldName};
use crate::limits::max_size_for_format;
use qr_request_domain::{
    Charset, Color, DATA_MAX_LENGTH, DATA_MIN_LENGTH, Ecc, Format, MAX_MARGIN, MAX_QZONE,
    MIN_SIZE, RequestDescriptor,
};
use qr_request_shared::validation::{at_least, at_most, integer_in_range, is_one_of, length_in_range};
use std::borrow::Cow;
use std::fmt;

const CHARSET_NAMES: [&str; 2] = [Charset::Iso88591.as_str(), Charset::Utf8.as_str()];
const ECC_NAMES: [&str; 4] = [Ecc::L.as_str(), Ecc::M.as_str(), Ecc::Q.as_str(), Ecc::H.as_str()];

/// Inputs every predicate sees: the descriptor plus values resolved from
/// defaults.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    descriptor: &'a RequestDescriptor,
    format: Format,
    max_size: u32,
}

impl<'a> RuleContext<'a> {
    /// Resolve the format (explicit or default) and its size limit.
    #[must_use]
    pub fn new(descriptor: &'a RequestDescriptor) -> Self {
        let format = descriptor.resolved_format();
        Self {
            descriptor,
            format,
            max_size: max_size_for_format(format),
        }
    }

    /// Descriptor under validation.
    #[must_use]
    pub const fn descriptor(&self) -> &'a RequestDescriptor {
        self.descriptor
    }

    /// Resolved format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Size limit for the resolved format.
    #[must_use]
    pub const fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Direction of a charset field, used in its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetDirection {
    /// `charsetSource`
    Source,
    /// `charsetTarget`
    Target,
}

impl CharsetDirection {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

/// Message for a charset outside the accepted set.
#[must_use]
pub fn charset_message(direction: CharsetDirection) -> String {
    format!(
        "charset {} should be one of ({})",
        direction.as_str(),
        CHARSET_NAMES.join(", ")
    )
}

/// Message for an ECC level outside the accepted set.
#[must_use]
pub fn ecc_message() -> String {
    format!("ecc should be one of ({})", ECC_NAMES.join(", "))
}

/// Message for a malformed color field.
#[must_use]
pub fn color_message(field: FieldName) -> String {
    format!("{field} should be R-G-B (0-255 per channel), #RRGGBB or #RGB")
}

#[derive(Clone, Copy)]
enum RuleMessage {
    Fixed(&'static str),
    Built(fn(&RuleContext<'_>) -> String),
}

/// One declarative check in the rule table.
#[derive(Clone, Copy)]
pub struct FieldRule {
    field: FieldName,
    predicate: fn(&RuleContext<'_>) -> bool,
    message: RuleMessage,
}

impl FieldRule {
    /// Field this rule guards.
    #[must_use]
    pub const fn field(&self) -> FieldName {
        self.field
    }

    /// Returns true when the descriptor passes this rule.
    #[must_use]
    pub fn is_satisfied(&self, context: &RuleContext<'_>) -> bool {
        (self.predicate)(context)
    }

    /// Explanation reported when the rule fails.
    #[must_use]
    pub fn message(&self, context: &RuleContext<'_>) -> Cow<'static, str> {
        match self.message {
            RuleMessage::Fixed(message) => Cow::Borrowed(message),
            RuleMessage::Built(build) => Cow::Owned(build(context)),
        }
    }

    /// Evaluate the rule, producing an error only on failure.
    #[must_use]
    pub fn evaluate(&self, context: &RuleContext<'_>) -> Option<FieldError> {
        if self.is_satisfied(context) {
            None
        } else {
            Some(FieldError::new(self.field, self.message(context)))
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FieldRule")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

static RULES: [FieldRule; 13] = [
    FieldRule {
        field: FieldName::Data,
        predicate: data_length_in_range,
        message: RuleMessage::Fixed("data length should be between 1 and 900"),
    },
    FieldRule {
        field: FieldName::Size,
        predicate: size_is_square,
        message: RuleMessage::Fixed("width and height should be equal"),
    },
    FieldRule {
        field: FieldName::Size,
        predicate: width_at_least_min,
        message: RuleMessage::Fixed("width should be greater of equal to 10"),
    },
    FieldRule {
        field: FieldName::Size,
        predicate: height_at_least_min,
        message: RuleMessage::Fixed("height should be greater of equal to 10"),
    },
    FieldRule {
        field: FieldName::Size,
        predicate: width_within_format_limit,
        message: RuleMessage::Built(width_limit_message),
    },
    FieldRule {
        field: FieldName::Size,
        predicate: height_within_format_limit,
        message: RuleMessage::Built(height_limit_message),
    },
    FieldRule {
        field: FieldName::CharsetSource,
        predicate: charset_source_known,
        message: RuleMessage::Built(charset_source_message),
    },
    FieldRule {
        field: FieldName::CharsetTarget,
        predicate: charset_target_known,
        message: RuleMessage::Built(charset_target_message),
    },
    FieldRule {
        field: FieldName::Ecc,
        predicate: ecc_known,
        message: RuleMessage::Built(ecc_rule_message),
    },
    FieldRule {
        field: FieldName::Color,
        predicate: color_well_formed,
        message: RuleMessage::Built(color_rule_message),
    },
    FieldRule {
        field: FieldName::BgColor,
        predicate: bg_color_well_formed,
        message: RuleMessage::Built(bg_color_rule_message),
    },
    FieldRule {
        field: FieldName::Margin,
        predicate: margin_in_range,
        message: RuleMessage::Fixed("margin should be an integer between 0 and 50"),
    },
    FieldRule {
        field: FieldName::QZone,
        predicate: q_zone_in_range,
        message: RuleMessage::Fixed("qZone should be an integer between 0 and 100"),
    },
];

/// The rule table, in evaluation order.
#[must_use]
pub fn rules() -> &'static [FieldRule] {
    &RULES
}

fn width_limit_message(context: &RuleContext<'_>) -> String {
    format!("width should be less than {}", context.max_size)
}

fn height_limit_message(context: &RuleContext<'_>) -> String {
    format!("height should be less than {}", context.max_size)
}

fn charset_source_message(_: &RuleContext<'_>) -> String {
    charset_message(CharsetDirection::Source)
}

fn charset_target_message(_: &RuleContext<'_>) -> String {
    charset_message(CharsetDirection::Target)
}

fn ecc_rule_message(_: &RuleContext<'_>) -> String {
    ecc_message()
}

fn color_rule_message(_: &RuleContext<'_>) -> String {
    color_message(FieldName::Color)
}

fn bg_color_rule_message(_: &RuleContext<'_>) -> String {
    color_message(FieldName::BgColor)
}

// Optional fields pass when absent; only present values are checked.

fn data_length_in_range(context: &RuleContext<'_>) -> bool {
    length_in_range(
        &context.descriptor.data,
        DATA_MIN_LENGTH,
        DATA_MAX_LENGTH,
    )
}

fn size_is_square(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .size
        .is_none_or(|size| size.width == size.height)
}

fn width_at_least_min(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .size
        .is_none_or(|size| at_least(size.width, i64::from(MIN_SIZE)))
}

fn height_at_least_min(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .size
        .is_none_or(|size| at_least(size.height, i64::from(MIN_SIZE)))
}

fn width_within_format_limit(context: &RuleContext<'_>) -> bool {
    let max = i64::from(context.max_size);
    context
        .descriptor
        .size
        .is_none_or(|size| at_most(size.width, max))
}

fn height_within_format_limit(context: &RuleContext<'_>) -> bool {
    let max = i64::from(context.max_size);
    context
        .descriptor
        .size
        .is_none_or(|size| at_most(size.height, max))
}

fn charset_source_known(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .charset_source
        .as_deref()
        .is_none_or(|value| is_one_of(value, &CHARSET_NAMES))
}

fn charset_target_known(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .charset_target
        .as_deref()
        .is_none_or(|value| is_one_of(value, &CHARSET_NAMES))
}

fn ecc_known(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .ecc
        .as_deref()
        .is_none_or(|value| is_one_of(value, &ECC_NAMES))
}

fn color_well_formed(context: &RuleContext<'_>) -> bool {
    context.descriptor.color.as_deref().is_none_or(Color::is_valid)
}

fn bg_color_well_formed(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .bg_color
        .as_deref()
        .is_none_or(Color::is_valid)
}

fn margin_in_range(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .margin
        .is_none_or(|margin| integer_in_range(margin, 0, i64::from(MAX_MARGIN)))
}

fn q_zone_in_range(context: &RuleContext<'_>) -> bool {
    context
        .descriptor
        .q_zone
        .is_none_or(|q_zone| integer_in_range(q_zone, 0, i64::from(MAX_QZONE)))
}
