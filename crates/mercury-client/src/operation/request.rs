use serde::Deserialize;

use mercury_core::Envelope;

/// Caller-supplied request. Every field is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogicalRequest {
    pub uri: Option<String>,
    pub content_type: Option<String>,
    pub method: Option<String>,
    pub source: Option<String>,
}

impl LogicalRequest {
    /// Plain lookup of `uri`.
    pub fn get(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }

    pub fn subscribe(uri: impl Into<String>) -> Self {
        Self::get(uri).with_method("SUB")
    }

    pub fn unsubscribe(uri: impl Into<String>) -> Self {
        Self::get(uri).with_method("UNSUB")
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Field-for-field envelope; no validation of uri syntax or method vocabulary.
    pub fn to_envelope(&self) -> Envelope {
        Envelope::request(
            self.uri.as_deref().unwrap_or_default(),
            self.content_type.as_deref().unwrap_or_default(),
            self.method.as_deref().unwrap_or_default(),
            self.source.as_deref().unwrap_or_default(),
        )
    }
}
