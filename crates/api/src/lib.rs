//! # qr-request-api
//!
//! API data transfer objects and wire formats for request validation.
//! This crate depends on `domain`, `shared`, `validator` and `config`.

/// API v1 DTOs.
pub mod v1;

/// Returns the api crate version.
#[must_use]
pub const fn api_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
