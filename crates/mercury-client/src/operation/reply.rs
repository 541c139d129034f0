use bytes::Bytes;

use mercury_core::error::Result;
use mercury_core::protocol::codec;

/// Two-part transport reply: header envelope blob and body blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub header: Bytes,
    pub body: Bytes,
}

impl Reply {
    pub fn new(header: impl Into<Bytes>, body: impl Into<Bytes>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
        }
    }

    /// Reply whose parts arrived as base64 text.
    pub fn from_base64(header: &str, body: &str) -> Result<Self> {
        Ok(Self::new(codec::decode_text(header)?, codec::decode_text(body)?))
    }
}
