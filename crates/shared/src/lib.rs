//! # qr-request-shared
//!
//! Shared result types, error handling and validation primitives for the
//! qr-request workspace.
//!
//! This crate provides foundational types that are used across all other crates:
//!
//! - Error envelope and the shared `Result` alias
//! - `Validated<T>` proofs and bounded numeric wrappers
//! - Pure predicates used by rule tables
//!
//! ## Design Principles
//!
//! 1. **No workspace dependencies** - This crate only depends on external crates
//! 2. **Pure predicates** - Validation helpers hold no state and never fail
//! 3. **Serde-compatible** - Error types support serialization

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod errors;
pub mod invariants;
pub mod validation;

pub use errors::{ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata, Result};
pub use invariants::{BoundedU32, Validated};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
