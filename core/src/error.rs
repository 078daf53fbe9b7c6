//! Error types for the Paystack client.
//!
//! # Design
//! Only failures of the client itself are errors: the body could not be
//! encoded, the request never completed, or the reply was not a JSON object.
//! Paystack's own failures (`{"status": false, ...}` with a 4xx status) are
//! ordinary envelopes and never show up here.

use thiserror::Error;

/// Boxed cause reported by a [`Transport`](crate::Transport) implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `PaystackClient` operations.
#[derive(Debug, Error)]
pub enum PaystackError {
    /// The request body could not be serialized. Nothing was sent.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// DNS, connect, TLS, timeout, or body-read failure. Never retried.
    #[error("request failed: {0}")]
    Transport(#[source] TransportError),

    /// The response body was not a JSON object.
    #[error("malformed response body (HTTP {status}): {source}")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PaystackError {
    pub fn is_transport(&self) -> bool {
        matches!(self, PaystackError::Transport(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, PaystackError::MalformedResponse { .. })
    }
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set")]
    MissingSecret { var: &'static str },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("unsupported base URL scheme `{scheme}`, expected http or https")]
    UnsupportedScheme { scheme: String },
}
