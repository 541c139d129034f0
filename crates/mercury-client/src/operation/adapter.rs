use mercury_core::error::{MercuryError, Result};
use mercury_core::protocol::method::method_code;
use mercury_core::protocol::status::{classify, reason_phrase, StatusClass};
use mercury_core::{Envelope, MultiEnvelope, MGET_REPLY, MGET_REQUEST};

use crate::decode::Decoders;
use crate::observer::Observer;
use crate::operation::{LogicalRequest, Outcome, Reply};
use crate::transport::{Transport, TransportArgs};

const UNKNOWN_ERROR: &str = "Unknown Error";
const MGET_MISMATCH: &str = "server didn't send a multi-get reply for a multi-get request";

/// One logical request/reply lifecycle over the transport.
///
/// Built once from 1..N requests, turned into transport arguments, then fed
/// the correlated reply. Replies are classified synchronously; every result,
/// errors included, goes to the caller's observer.
#[derive(Debug, Clone)]
pub struct Operation<T> {
    name: String,
    request: Envelope,
    payload: Option<Vec<Envelope>>,
    decoders: Decoders<T>,
}

impl<T> Operation<T> {
    /// Build an operation.
    ///
    /// A single request is sent as is and `header` is ignored. Several requests
    /// need a header: it is sent with its content type replaced by the
    /// multi-get marker, followed by one envelope per request in order.
    pub fn new(
        name: impl Into<String>,
        requests: Vec<LogicalRequest>,
        decoders: Decoders<T>,
        header: Option<LogicalRequest>,
    ) -> Result<Self> {
        let name = name.into();

        let (request, payload) = match (requests.as_slice(), header) {
            ([], _) => {
                return Err(MercuryError::Configuration(
                    "at least one request is required".into(),
                ))
            }
            ([single], _) => (single.to_envelope(), None),
            (_, None) => {
                return Err(MercuryError::Configuration(
                    "a header is required to send multiple requests".into(),
                ))
            }
            (many, Some(header)) => {
                let header = header.with_content_type(MGET_REQUEST).to_envelope();
                let payload = many.iter().map(LogicalRequest::to_envelope).collect();
                (header, Some(payload))
            }
        };

        tracing::debug!(
            op = %name,
            uri = %request.uri(),
            batch = payload.as_ref().map_or(0, Vec::len),
            "operation prepared"
        );

        Ok(Self {
            name,
            request,
            payload,
            decoders,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The single request envelope, or the batch header.
    pub fn request(&self) -> &Envelope {
        &self.request
    }

    /// Batch entries; `None` unless more than one request was given.
    pub fn payload(&self) -> Option<&[Envelope]> {
        self.payload.as_deref()
    }

    pub fn is_batch(&self) -> bool {
        self.payload.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Ordered transport arguments for sequence number `seq`.
    pub fn build(&self, seq: u64) -> TransportArgs {
        TransportArgs {
            seq,
            method_code: method_code(self.request.method()),
            header: self.request.to_base64(),
            payload: self
                .payload
                .as_ref()
                .map(|p| MultiEnvelope::new(p.clone()).to_base64()),
        }
    }

    /// Build the arguments and hand them to `transport`.
    pub fn submit(&self, seq: u64, transport: &dyn Transport) -> Result<()> {
        let args = self.build(seq);
        tracing::debug!(op = %self.name, seq, args = args.len(), "submitting");
        transport.send(args)
    }

    /// Classify the reply and report the outcome to `observer`.
    ///
    /// A batch operation answered without the multi-get reply marker gets a
    /// server error first and is then dispatched like any other reply.
    pub fn process(&self, reply: &Reply, observer: &dyn Observer<T>) {
        let header = match Envelope::from_bytes(reply.header.clone()) {
            Ok(h) => h,
            Err(e) => {
                tracing::warn!(op = %self.name, error = %e, "malformed reply header");
                observer.on_outcome(Outcome::Failure(e));
                return;
            }
        };

        let code = header.status_code();
        let class = classify(code);
        if class != StatusClass::Ok {
            let message = reason_phrase(code).unwrap_or(UNKNOWN_ERROR).to_string();
            let err = match class {
                StatusClass::ClientError => MercuryError::Client { code, message },
                _ => MercuryError::Server { code: Some(code), message },
            };
            tracing::debug!(op = %self.name, status = code, "error reply");
            observer.on_outcome(Outcome::Failure(err));
            return;
        }

        let content_type = header.content_type();
        if self.is_batch() && content_type != MGET_REPLY {
            tracing::warn!(op = %self.name, %content_type, "multi-get request answered without multi-get reply");
            observer.on_outcome(Outcome::Failure(MercuryError::Server {
                code: None,
                message: MGET_MISMATCH.into(),
            }));
        }

        observer.on_outcome(self.dispatch(content_type, &reply.body));
    }

    fn dispatch(&self, content_type: &str, body: &[u8]) -> Outcome<T> {
        if content_type == MGET_REPLY {
            return Outcome::Failure(MercuryError::NotImplemented("multi-get reply decoding"));
        }

        let Some(decoder) = self.decoders.resolve(content_type) else {
            return Outcome::Failure(MercuryError::UnrecognizedType(content_type.to_string()));
        };

        match decoder(body) {
            Ok(value) => Outcome::Success(value),
            Err(e) => {
                tracing::debug!(op = %self.name, %content_type, error = %e, "body decode failed");
                Outcome::Failure(e)
            }
        }
    }
}
