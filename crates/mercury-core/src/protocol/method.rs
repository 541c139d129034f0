//! Request methods and their numeric transport codes.

/// Method carried in an envelope's `method` field.
///
/// The envelope keeps the raw string; this enum only exists to derive the
/// numeric code the transport expects as the first call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// Plain lookup (empty method string or `GET`).
    Get,
    /// Subscribe to updates of a uri.
    Sub,
    /// Drop a subscription.
    Unsub,
    /// Anything else; accepted and sent verbatim.
    Other(String),
}

impl Method {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "GET" => Method::Get,
            "SUB" => Method::Sub,
            "UNSUB" => Method::Unsub,
            other => Method::Other(other.to_string()),
        }
    }

    /// Numeric transport code: SUB=1, UNSUB=2, everything else 0.
    pub fn code(&self) -> u8 {
        match self {
            Method::Sub => 1,
            Method::Unsub => 2,
            Method::Get | Method::Other(_) => 0,
        }
    }
}

/// Numeric transport code for a raw method string.
pub fn method_code(raw: &str) -> u8 {
    Method::parse(raw).code()
}
