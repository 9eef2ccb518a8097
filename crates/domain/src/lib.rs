//! # qr-request-domain
//!
//! Domain model for QR image requests, with no infrastructure dependencies:
//!
//! - **Request** - `RequestDescriptor`, `Size`, `EffectiveOptions`
//! - **Options** - `Format`, `Charset`, `Ecc` and the default/limit constants
//! - **Color** - the `R-G-B` / `#hex` color grammar
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use qr_request_shared::shared_crate_version;

// =============================================================================
// DOMAIN MODULES
// =============================================================================

pub mod color;
pub mod options;
pub mod request;

pub use color::{Color, ColorError};
pub use options::{
    Charset, DATA_MAX_LENGTH, DATA_MIN_LENGTH, DEFAULT_BG_COLOR, DEFAULT_CHARSET_SOURCE,
    DEFAULT_CHARSET_TARGET, DEFAULT_COLOR, DEFAULT_ECC, DEFAULT_FORMAT, DEFAULT_HEIGHT,
    DEFAULT_MARGIN, DEFAULT_QZONE, DEFAULT_WIDTH, Ecc, Format, MAX_MARGIN, MAX_QZONE, MIN_SIZE,
};
pub use request::{EffectiveOptions, RequestDescriptor, ResolveError, Size};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_crate_compiles() {
        assert!(!domain_crate_version().is_empty());
        assert_eq!(domain_crate_version(), shared_crate_version());
    }
}
