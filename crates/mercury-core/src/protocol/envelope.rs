//! Mercury envelope schema (protobuf).
//!
//! Field presence follows proto2 `optional` semantics so the encoded bytes
//! match the peer exactly: request envelopes always carry `uri`,
//! `content_type`, `method` and `source` (empty string when the caller gave
//! nothing), and never carry `status_code`, which only replies set.

use bytes::Buf;
use prost::Message;

use crate::error::{MercuryError, Result};
use crate::protocol::codec;

/// Outgoing batch marker, set on the header envelope of a multi-get request.
pub const MGET_REQUEST: &str = "vnd.spotify/mercury-mget-request";
/// Incoming batch marker, expected on the header of a multi-get reply.
pub const MGET_REPLY: &str = "vnd.spotify/mercury-mget-reply";

/// Request/reply envelope exchanged with the transport.
#[derive(Clone, PartialEq, Message)]
pub struct Envelope {
    #[prost(string, optional, tag = "1")]
    pub uri: Option<String>,
    #[prost(string, optional, tag = "2")]
    pub content_type: Option<String>,
    #[prost(string, optional, tag = "3")]
    pub method: Option<String>,
    /// Reply only.
    #[prost(sint32, optional, tag = "4")]
    pub status_code: Option<i32>,
    #[prost(string, optional, tag = "5")]
    pub source: Option<String>,
}

/// Batch payload: every sub-request envelope, in caller order, as one unit.
#[derive(Clone, PartialEq, Message)]
pub struct MultiEnvelope {
    #[prost(message, repeated, tag = "1")]
    pub requests: Vec<Envelope>,
}

impl Envelope {
    /// Build a request envelope with all four request fields populated.
    pub fn request(uri: &str, content_type: &str, method: &str, source: &str) -> Self {
        Self {
            uri: Some(uri.to_string()),
            content_type: Some(content_type.to_string()),
            method: Some(method.to_string()),
            status_code: None,
            source: Some(source.to_string()),
        }
    }

    /// Build a reply header, as the peer would send it.
    pub fn reply(content_type: &str, status_code: i32) -> Self {
        Self {
            content_type: Some(content_type.to_string()),
            status_code: Some(status_code),
            ..Self::default()
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    pub fn from_bytes<B: Buf>(buf: B) -> Result<Self> {
        Self::decode(buf).map_err(|e| MercuryError::Decode(format!("invalid envelope: {e}")))
    }

    pub fn to_base64(&self) -> String {
        codec::encode_text(&self.to_bytes())
    }

    pub fn from_base64(text: &str) -> Result<Self> {
        let raw = codec::decode_text(text)?;
        Self::from_bytes(raw.as_slice())
    }
}

impl MultiEnvelope {
    pub fn new(requests: Vec<Envelope>) -> Self {
        Self { requests }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    pub fn from_bytes<B: Buf>(buf: B) -> Result<Self> {
        Self::decode(buf).map_err(|e| MercuryError::Decode(format!("invalid multi envelope: {e}")))
    }

    pub fn to_base64(&self) -> String {
        codec::encode_text(&self.to_bytes())
    }

    pub fn from_base64(text: &str) -> Result<Self> {
        let raw = codec::decode_text(text)?;
        Self::from_bytes(raw.as_slice())
    }
}
