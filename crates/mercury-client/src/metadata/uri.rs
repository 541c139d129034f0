//! `spotify:<kind>:<id>` locators.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use mercury_core::error::{MercuryError, Result};

const SCHEME: &str = "spotify";

/// Content-addressed resource locator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpotifyUri {
    kind: String,
    id: String,
}

impl SpotifyUri {
    pub fn from_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Locator for a raw binary id (file ids, gids); the id is lower-case hex.
    pub fn from_gid(kind: impl Into<String>, gid: &[u8]) -> Self {
        Self::from_id(kind, hex::encode(gid))
    }

    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        let (Some(scheme), Some(kind), Some(id)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MercuryError::BadUri(format!("expected spotify:<kind>:<id>, got {s:?}")));
        };
        if scheme != SCHEME {
            return Err(MercuryError::BadUri(format!("unknown scheme: {scheme}")));
        }
        if kind.is_empty() || id.is_empty() {
            return Err(MercuryError::BadUri(format!("empty kind or id: {s:?}")));
        }
        Ok(Self::from_id(kind, id))
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn to_id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}:{}:{}", self.kind, self.id)
    }
}

impl FromStr for SpotifyUri {
    type Err = MercuryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for SpotifyUri {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
