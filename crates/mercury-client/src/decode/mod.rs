//! Decoder registry: content type to byte decoder.
//!
//! Two shapes are supported. A single decoder serves operations that only
//! ever expect one content type; a keyed table serves operations whose replies
//! vary (different metadata record kinds). A missing key is not an error here;
//! the operation reports it as an unrecognized type.

pub mod registry;

pub use registry::{Decoder, DecoderRegistry, Decoders};
