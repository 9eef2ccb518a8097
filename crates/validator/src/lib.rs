//! # qr-request-validator
//!
//! Checks a [`RequestDescriptor`] against an ordered rule table and reports
//! every failing rule at once.
//!
//! - **Rules** - the static `(field, predicate, message)` table
//! - **Limits** - per-format size caps
//! - **Fields** - `FieldError` and the non-empty `ValidationErrors` list
//!
//! Validation is pure: it never mutates the descriptor, never applies
//! defaults to it and performs no I/O.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod field;
pub mod limits;
pub mod rules;

pub use field::{FieldError, FieldName, ValidationErrors};
pub use limits::{RASTER_MAX_SIZE, UNBOUNDED_MAX_SIZE, max_size_for_format};
pub use rules::{
    CharsetDirection, FieldRule, RuleContext, charset_message, color_message, ecc_message, rules,
};

use qr_request_domain::{EffectiveOptions, RequestDescriptor};
use qr_request_shared::{ErrorCode, ErrorEnvelope, Validated};

/// Outcome of [`validate`]: the same descriptor, or every failure.
pub type ValidationResult<'a> = Result<&'a RequestDescriptor, ValidationErrors>;

/// Evaluate every rule and return the failures, in rule order.
///
/// An empty list means the descriptor is valid.
#[must_use]
pub fn check(descriptor: &RequestDescriptor) -> Vec<FieldError> {
    let context = RuleContext::new(descriptor);
    let errors: Vec<FieldError> = rules()
        .iter()
        .filter_map(|rule| rule.evaluate(&context))
        .collect();

    tracing::debug!(
        event = "qr_request.validate",
        format = %context.format(),
        max_size = context.max_size(),
        data_len = descriptor.data.chars().count(),
        error_count = errors.len(),
        "validated QR request"
    );

    errors
}

/// Validate a borrowed descriptor.
///
/// Returns the descriptor unchanged when every rule passes, otherwise all
/// failures in rule order.
pub fn validate(descriptor: &RequestDescriptor) -> ValidationResult<'_> {
    match ValidationErrors::from_vec(check(descriptor)) {
        None => Ok(descriptor),
        Some(errors) => Err(errors),
    }
}

/// Validate an owned descriptor and wrap it in a [`Validated`] proof.
pub fn validate_owned(
    descriptor: RequestDescriptor,
) -> Result<Validated<RequestDescriptor>, ValidationErrors> {
    match ValidationErrors::from_vec(check(&descriptor)) {
        None => Ok(Validated::new(descriptor)),
        Some(errors) => Err(errors),
    }
}

/// Apply defaults to a validated descriptor.
///
/// Every descriptor that passes the rule table resolves; a failure here
/// means the rules and the resolver disagree.
pub fn effective_options(
    descriptor: &Validated<RequestDescriptor>,
) -> Result<EffectiveOptions, ErrorEnvelope> {
    EffectiveOptions::resolve(descriptor.as_inner()).map_err(|error| {
        ErrorEnvelope::invariant(
            ErrorCode::new("validator", "unresolvable_validated_request"),
            format!("validated request failed to resolve (this is a bug): {error}"),
        )
        .with_metadata("field", error.field())
    })
}

/// Returns the validator crate version.
#[must_use]
pub const fn validator_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
