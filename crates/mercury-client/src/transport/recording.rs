use std::sync::{Mutex, PoisonError};

use mercury_core::error::Result;

use super::{Transport, TransportArgs};

/// In-memory transport that keeps every call it was handed.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<TransportArgs>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<TransportArgs> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, args: TransportArgs) -> Result<()> {
        tracing::trace!(seq = args.seq, "recorded transport call");
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(args);
        Ok(())
    }
}
