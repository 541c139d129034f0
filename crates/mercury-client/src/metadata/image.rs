//! Image metadata record.

use prost::{Enumeration, Message};
use serde::Serialize;

use mercury_core::error::{MercuryError, Result};

use super::uri::SpotifyUri;

/// Wire form of an image record.
#[derive(Clone, PartialEq, Message)]
pub struct ImageProto {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub file_id: Option<Vec<u8>>,
    #[prost(enumeration = "ImageSize", optional, tag = "2")]
    pub size: Option<i32>,
    #[prost(sint32, optional, tag = "3")]
    pub width: Option<i32>,
    #[prost(sint32, optional, tag = "4")]
    pub height: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ImageSize {
    Default = 0,
    Small = 1,
    Large = 2,
    Xlarge = 3,
}

/// Decoded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub file_uri: Option<SpotifyUri>,
    pub size: ImageSize,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Fetchable location, when both a file id and a width are known.
    pub file_url: Option<String>,
}

impl Image {
    /// Decode an image record; `resource_host` serves the image files.
    pub fn decode(bytes: &[u8], resource_host: &str) -> Result<Self> {
        let raw = ImageProto::decode(bytes)
            .map_err(|e| MercuryError::Decode(format!("invalid image record: {e}")))?;

        let file_uri = raw.file_id.as_deref().map(|id| SpotifyUri::from_gid("image", id));
        let width = raw.width.map(i64::from);
        let file_url = match (&file_uri, width) {
            (Some(uri), Some(w)) => Some(format!("https://{resource_host}/{w}/{}", uri.to_id())),
            _ => None,
        };

        Ok(Self {
            file_uri,
            size: raw.size(),
            width,
            height: raw.height.map(i64::from),
            file_url,
        })
    }
}
