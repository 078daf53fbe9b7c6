//! Authenticated request dispatch shared by every resource operation.
//!
//! # Design
//! `PaystackClient` holds an immutable [`ClientConfig`] and a shared
//! [`Transport`]. A call is split into three steps that can each be used on
//! their own: `build_request` produces an `HttpRequest`, `execute` sends it
//! and returns the raw response, and `DecodePolicy::decode` turns the body
//! into an [`Envelope`]. Every call decodes into its own local value, so one
//! client can be cloned into as many threads as needed.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::PaystackError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::response::Envelope;
use crate::transport::{Transport, UreqTransport};

/// Client for the Paystack REST API.
#[derive(Clone)]
pub struct PaystackClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl PaystackClient {
    /// Client for `https://api.paystack.co` with default pool settings.
    /// Performs no I/O.
    pub fn new(secret: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(secret))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, PaystackError> {
        Ok(Self::with_config(ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the request for `method` and `path` without sending it.
    ///
    /// `path` is appended to the base URL as-is and must begin with `/`.
    /// `Content-Type` is only set when there is a body.
    pub fn build_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, PaystackError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(PaystackError::Encoding)?;

        let mut headers = vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.config.secret()),
        )];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method,
            url: format!("{}{}", self.config.base(), path),
            headers,
            body,
        })
    }

    /// Sends one request and returns the raw response, whatever its status.
    pub fn execute<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, PaystackError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body)?;
        debug!(%method, path, has_body = request.body.is_some(), "dispatching request");

        match self.transport.send(&request) {
            Ok(response) => {
                debug!(%method, path, status = response.status, bytes = response.body.len(), "received response");
                Ok(response)
            }
            Err(err) => {
                warn!(%method, path, error = %err, "request failed");
                Err(PaystackError::Transport(err))
            }
        }
    }

    /// Runs `endpoint` and decodes the reply into an [`Envelope`].
    ///
    /// A Paystack-level rejection (`"status": false`, usually with a 4xx) is
    /// returned as `Ok`; inspect [`Envelope::status`].
    pub fn call<B>(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        body: Option<&B>,
    ) -> Result<Envelope, PaystackError>
    where
        B: Serialize + ?Sized,
    {
        self.call_with_status(endpoint, id, body)
            .map(|(_, envelope)| envelope)
    }

    /// Like [`call`](Self::call) but also returns the HTTP status code.
    pub fn call_with_status<B>(
        &self,
        endpoint: &Endpoint,
        id: Option<&str>,
        body: Option<&B>,
    ) -> Result<(u16, Envelope), PaystackError>
    where
        B: Serialize + ?Sized,
    {
        let path = endpoint.path(id);
        let response = self.execute(endpoint.method, &path, body)?;
        let envelope = self.config.policy().decode(response.status, &response.body)?;
        Ok((response.status, envelope))
    }
}

impl fmt::Debug for PaystackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaystackClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Body argument for operations that send none.
pub(crate) const NO_BODY: Option<&()> = None;
