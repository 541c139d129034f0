use serde::Deserialize;
use mercury_core::error::{MercuryError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub metadata: MetadataSection,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MercuryError::Configuration(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.metadata.validate()?;

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            metadata: MetadataSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataSection {
    /// Bare host serving image files (no scheme, no path).
    #[serde(default = "default_resource_host")]
    pub resource_host: String,
}

impl Default for MetadataSection {
    fn default() -> Self {
        Self {
            resource_host: default_resource_host(),
        }
    }
}

impl MetadataSection {
    pub fn validate(&self) -> Result<()> {
        let host = self.resource_host.as_str();
        if host.is_empty() {
            return Err(MercuryError::Configuration(
                "metadata.resource_host must not be empty".into(),
            ));
        }
        if host.chars().any(char::is_whitespace) {
            return Err(MercuryError::Configuration(
                "metadata.resource_host must not contain whitespace".into(),
            ));
        }
        if host.contains("://") || host.contains('/') {
            return Err(MercuryError::Configuration(
                "metadata.resource_host must be a bare host name".into(),
            ));
        }
        Ok(())
    }
}

fn default_resource_host() -> String {
    "d3rt1990lpmkn.cloudfront.net".into()
}
