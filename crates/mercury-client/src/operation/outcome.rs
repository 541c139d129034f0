use mercury_core::error::{ErrorCode, MercuryError};

/// Terminal result of processing a reply, delivered to the observer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(MercuryError),
}

impl<T> Outcome<T> {
    /// Event name of this outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::Failure(e) => match e.code() {
                ErrorCode::ClientError => "client-error",
                ErrorCode::ServerError => "server-error",
                ErrorCode::UnrecognizedType => "unrecognized-type",
                ErrorCode::NotImplemented => "not-implemented",
                ErrorCode::Decode => "decode-error",
                _ => "error",
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&MercuryError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(e) => Some(e),
        }
    }
}

impl<T> From<MercuryError> for Outcome<T> {
    fn from(e: MercuryError) -> Self {
        Outcome::Failure(e)
    }
}
