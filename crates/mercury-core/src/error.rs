//! Shared error type across Mercury crates.

use thiserror::Error;

/// Stable error codes (safe to surface to callers and logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed operation construction.
    Configuration,
    /// Reply status in the client error range.
    ClientError,
    /// Reply status in the server error range, or a protocol violation by the peer.
    ServerError,
    /// No decoder registered for the reply content type.
    UnrecognizedType,
    /// Capability gap (batched reply bodies).
    NotImplemented,
    /// Malformed bytes, base64 or protobuf.
    Decode,
    /// Malformed resource identifier.
    BadUri,
    /// Transport refused the outgoing arguments.
    Transport,
    /// Internal failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Configuration => "CONFIGURATION",
            ErrorCode::ClientError => "CLIENT_ERROR",
            ErrorCode::ServerError => "SERVER_ERROR",
            ErrorCode::UnrecognizedType => "UNRECOGNIZED_TYPE",
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
            ErrorCode::Decode => "DECODE",
            ErrorCode::BadUri => "BAD_URI",
            ErrorCode::Transport => "TRANSPORT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MercuryError>;

/// Unified error type used by core and client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MercuryError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("Client Error: {message} ({code})")]
    Client { code: i32, message: String },
    #[error("Server Error: {}", fmt_server(.code, .message))]
    Server { code: Option<i32>, message: String },
    #[error("Unrecognized metadata type: \"{0}\"")]
    UnrecognizedType(String),
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("bad uri: {0}")]
    BadUri(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("internal: {0}")]
    Internal(String),
}

fn fmt_server(code: &Option<i32>, message: &str) -> String {
    match code {
        Some(c) => format!("{message} ({c})"),
        None => message.to_string(),
    }
}

impl MercuryError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MercuryError::Configuration(_) => ErrorCode::Configuration,
            MercuryError::Client { .. } => ErrorCode::ClientError,
            MercuryError::Server { .. } => ErrorCode::ServerError,
            MercuryError::UnrecognizedType(_) => ErrorCode::UnrecognizedType,
            MercuryError::NotImplemented(_) => ErrorCode::NotImplemented,
            MercuryError::Decode(_) => ErrorCode::Decode,
            MercuryError::BadUri(_) => ErrorCode::BadUri,
            MercuryError::Transport(_) => ErrorCode::Transport,
            MercuryError::Internal(_) => ErrorCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_peer_wording() {
        let e = MercuryError::Client { code: 404, message: "Not Found".into() };
        assert_eq!(e.to_string(), "Client Error: Not Found (404)");

        let e = MercuryError::Server { code: Some(503), message: "Service Unavailable".into() };
        assert_eq!(e.to_string(), "Server Error: Service Unavailable (503)");

        let e = MercuryError::Server { code: None, message: "oops".into() };
        assert_eq!(e.to_string(), "Server Error: oops");

        let e = MercuryError::UnrecognizedType("vnd.x".into());
        assert_eq!(e.to_string(), "Unrecognized metadata type: \"vnd.x\"");
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(MercuryError::Configuration("x".into()).code().as_str(), "CONFIGURATION");
        assert_eq!(MercuryError::NotImplemented("x").code().as_str(), "NOT_IMPLEMENTED");
    }
}
