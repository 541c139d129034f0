//! Base64 text codec for transport arguments.
//!
//! Envelopes never travel as raw bytes inside the argument list; they are
//! carried as standard (padded) base64 text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{MercuryError, Result};

/// Encode bytes as base64 text.
pub fn encode_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text back to bytes.
pub fn decode_text(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|e| MercuryError::Decode(format!("invalid base64: {e}")))
}
