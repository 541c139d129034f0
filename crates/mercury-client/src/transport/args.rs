use serde::Serialize;
use serde_json::Value;

/// Ordered argument list for one transport call.
///
/// On the wire: `[method_code, header_b64]`, plus `payload_b64` for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportArgs {
    /// Transport-assigned sequence number the reply will be correlated with.
    pub seq: u64,
    pub method_code: u8,
    /// Base64 of the single request or batch header envelope.
    pub header: String,
    /// Base64 of the batch entries, serialized as one unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl TransportArgs {
    pub fn len(&self) -> usize {
        if self.payload.is_some() {
            3
        } else {
            2
        }
    }

    /// Argument list as the transport serializes it.
    pub fn to_values(&self) -> Vec<Value> {
        let mut out = vec![Value::from(self.method_code), Value::from(self.header.clone())];
        if let Some(p) = &self.payload {
            out.push(Value::from(p.clone()));
        }
        out
    }
}
