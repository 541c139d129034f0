//! Metadata records decoded from reply bodies.

pub mod image;
pub mod uri;

use serde::Serialize;

pub use image::{Image, ImageSize};
pub use uri::SpotifyUri;

use crate::config::MetadataSection;
use crate::decode::{DecoderRegistry, Decoders};

/// Content type of an image record reply.
pub const IMAGE_CONTENT_TYPE: &str = "vnd.spotify/metadata-image";

/// Any decoded metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Metadata {
    Image(Image),
}

/// Keyed decoders for every supported metadata record.
pub fn metadata_decoders(cfg: &MetadataSection) -> DecoderRegistry<Metadata> {
    let host = cfg.resource_host.clone();
    DecoderRegistry::new().with(IMAGE_CONTENT_TYPE, move |bytes: &[u8]| {
        Image::decode(bytes, &host).map(Metadata::Image)
    })
}

/// Single decoder for operations that only ever receive images.
pub fn image_decoder(cfg: &MetadataSection) -> Decoders<Image> {
    let host = cfg.resource_host.clone();
    Decoders::single(move |bytes: &[u8]| Image::decode(bytes, &host))
}
