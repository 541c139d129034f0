//! Request adapter: build envelopes from logical requests, classify replies.

pub mod adapter;
pub mod outcome;
pub mod reply;
pub mod request;

pub use adapter::Operation;
pub use outcome::Outcome;
pub use reply::Reply;
pub use request::LogicalRequest;
