//! Wire protocol modules.
//!
//! - `envelope`: protobuf request/reply envelope and the multi-get batch unit.
//! - `method`: method strings and their numeric transport codes.
//! - `status`: reply status classification and reason phrases.
//! - `codec`: base64 text carried inside transport arguments.
//!
//! Decoders are panic-free: malformed input is reported as `MercuryError`.

pub mod codec;
pub mod envelope;
pub mod method;
pub mod status;
