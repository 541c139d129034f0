//! Mercury client library.
//!
//! Wires logical requests into transport arguments and transport replies into
//! decoded values or classified errors. The transport connection itself is
//! supplied by the caller through [`transport::Transport`].

pub mod config;
pub mod decode;
pub mod metadata;
pub mod observer;
pub mod operation;
pub mod transport;

pub use decode::{Decoder, DecoderRegistry, Decoders};
pub use observer::{Collector, FnObserver, Observer};
pub use operation::{LogicalRequest, Operation, Outcome, Reply};
pub use transport::{RecordingTransport, Transport, TransportArgs};
