//! Mercury core: transport-agnostic wire primitives and the shared error type.
//!
//! This crate defines the envelope schema, method codes, status classification
//! and base64 text encoding used by the request adapter. It carries no runtime
//! dependencies so it can be reused by any transport implementation.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; all fallible paths
//! surface as `MercuryError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, MercuryError, Result};
pub use protocol::envelope::{Envelope, MultiEnvelope, MGET_REPLY, MGET_REQUEST};
