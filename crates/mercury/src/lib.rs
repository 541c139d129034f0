//! Top-level facade crate for the Mercury request adapter.
//!
//! Re-exports the wire primitives and the client library so users can depend on a single crate.

pub mod core {
    pub use mercury_core::*;
}

pub mod client {
    pub use mercury_client::*;
}
