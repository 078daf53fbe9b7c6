//! The network seam: something that turns an `HttpRequest` into an
//! `HttpResponse`.
//!
//! # Design
//! `PaystackClient` never talks to a socket directly. The default
//! [`UreqTransport`] owns one pooled `ureq::Agent`; tests and embedders can
//! supply their own implementation. Implementations must be safe to share
//! between threads because a single client is meant to be reused everywhere.

use std::sync::Arc;

use ureq::http;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP exchange. Exactly one attempt, no retry.
pub trait Transport: Send + Sync {
    /// Send `request` and read the whole response body, whatever the status.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// Blocking transport backed by a pooled, keep-alive `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        // Status codes are data for the caller, so the agent must not turn
        // 4xx/5xx into `Err`.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.request_timeout()))
            .timeout_connect(Some(config.request_connect_timeout()))
            .max_idle_connections(config.pool_max_idle())
            .max_idle_connections_per_host(config.pool_max_idle())
            .max_idle_age(config.pool_idle_timeout())
            .proxy(ureq::Proxy::try_from_env())
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = match &request.body {
            Some(body) => self.agent.run(builder.body(body.as_bytes())?)?,
            None => self.agent.run(builder.body(())?)?,
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        // The body reader is dropped on every path out of this function,
        // which hands the connection back to the pool or closes it.
        let body = response.body_mut().read_to_vec()?;

        Ok(HttpResponse { status, headers, body })
    }
}
