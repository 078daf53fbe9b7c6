//! The generic response envelope and the policy for decoding it.
//!
//! Paystack wraps every reply in `{"status": bool, "message": str, "data": ...}`
//! but the shape of `data` differs per endpoint and changes over time, so the
//! envelope stays an untyped, insertion-ordered JSON object.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::PaystackError;

/// Decoded JSON object returned by every resource operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    /// The top-level `status` flag. `Some(false)` is how Paystack reports a
    /// rejected request.
    pub fn status(&self) -> Option<bool> {
        self.0.get("status").and_then(Value::as_bool)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for Envelope {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for Envelope {
    fn from(map: Map<String, Value>) -> Self {
        Envelope(map)
    }
}

/// What to do when a response body is not a JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Fail with [`PaystackError::MalformedResponse`].
    #[default]
    Strict,
    /// Return an empty envelope and no error.
    Lenient,
}

impl DecodePolicy {
    /// Decode `body` into a fresh envelope.
    pub fn decode(self, status: u16, body: &[u8]) -> Result<Envelope, PaystackError> {
        match serde_json::from_slice::<Map<String, Value>>(body) {
            Ok(map) => Ok(Envelope(map)),
            Err(source) => {
                warn!(status, bytes = body.len(), error = %source, "response body is not a JSON object");
                match self {
                    DecodePolicy::Strict => Err(PaystackError::MalformedResponse { status, source }),
                    DecodePolicy::Lenient => Ok(Envelope::default()),
                }
            }
        }
    }
}
