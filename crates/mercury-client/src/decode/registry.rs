use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use mercury_core::error::{MercuryError, Result};

/// Byte-to-domain decoding function.
pub type Decoder<T> = Arc<dyn Fn(&[u8]) -> Result<T> + Send + Sync>;

/// Content-type (or schema key) keyed decoder table. Pure and stateless once built.
pub struct DecoderRegistry<T> {
    decoders: HashMap<String, Decoder<T>>,
}

impl<T> Default for DecoderRegistry<T> {
    fn default() -> Self {
        Self { decoders: HashMap::new() }
    }
}

impl<T> Clone for DecoderRegistry<T> {
    fn clone(&self) -> Self {
        Self { decoders: self.decoders.clone() }
    }
}

impl<T> fmt::Debug for DecoderRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("content_types", &self.content_types())
            .finish()
    }
}

impl<T> DecoderRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, key: impl Into<String>, decoder: F)
    where
        F: Fn(&[u8]) -> Result<T> + Send + Sync + 'static,
    {
        self.decoders.insert(key.into(), Arc::new(decoder));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with<F>(mut self, key: impl Into<String>, decoder: F) -> Self
    where
        F: Fn(&[u8]) -> Result<T> + Send + Sync + 'static,
    {
        self.register(key, decoder);
        self
    }

    pub fn resolve(&self, key: &str) -> Option<&Decoder<T>> {
        self.decoders.get(key)
    }

    /// Decode `bytes` with the decoder registered under `key`.
    pub fn decode(&self, key: &str, bytes: &[u8]) -> Result<T> {
        let decoder = self
            .resolve(key)
            .ok_or_else(|| MercuryError::UnrecognizedType(key.to_string()))?;
        decoder(bytes)
    }

    pub fn content_types(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// How an operation picks its decoder once the reply content type is known.
pub enum Decoders<T> {
    /// One decoder, used whatever the reply content type.
    Single(Decoder<T>),
    /// Lookup by reply content type.
    Keyed(DecoderRegistry<T>),
}

impl<T> Clone for Decoders<T> {
    fn clone(&self) -> Self {
        match self {
            Decoders::Single(d) => Decoders::Single(Arc::clone(d)),
            Decoders::Keyed(r) => Decoders::Keyed(r.clone()),
        }
    }
}

impl<T> fmt::Debug for Decoders<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoders::Single(_) => f.write_str("Decoders::Single"),
            Decoders::Keyed(r) => f.debug_tuple("Decoders::Keyed").field(r).finish(),
        }
    }
}

impl<T> Decoders<T> {
    pub fn single<F>(decoder: F) -> Self
    where
        F: Fn(&[u8]) -> Result<T> + Send + Sync + 'static,
    {
        Decoders::Single(Arc::new(decoder))
    }

    pub fn keyed(registry: DecoderRegistry<T>) -> Self {
        Decoders::Keyed(registry)
    }

    /// `None` only for a keyed table without an entry for `content_type`.
    pub fn resolve(&self, content_type: &str) -> Option<&Decoder<T>> {
        match self {
            Decoders::Single(d) => Some(d),
            Decoders::Keyed(r) => r.resolve(content_type),
        }
    }
}

impl<T> From<DecoderRegistry<T>> for Decoders<T> {
    fn from(registry: DecoderRegistry<T>) -> Self {
        Decoders::Keyed(registry)
    }
}
