//! Transport boundary.
//!
//! The connection itself (handshake, framing, sequence allocation, reply
//! correlation) lives outside this crate. An operation only needs a way to
//! hand over its arguments; the transport later calls
//! [`Operation::process`](crate::operation::Operation::process) with the
//! correlated reply.

pub mod args;
pub mod recording;

pub use args::TransportArgs;
pub use recording::RecordingTransport;

use mercury_core::error::Result;

/// Fire-and-forget sink for outgoing calls.
pub trait Transport: Send + Sync {
    fn send(&self, args: TransportArgs) -> Result<()>;
}
