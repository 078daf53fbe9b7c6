//! Client configuration: credential, endpoint, and connection-pool settings.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::response::DecodePolicy;

pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

pub const SECRET_KEY_VAR: &str = "PAYSTACK_SECRET_KEY";
pub const BASE_URL_VAR: &str = "PAYSTACK_BASE_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 100;

/// Immutable settings shared by every request a client makes.
///
/// The secret is held as given; Paystack is the only judge of whether it is
/// valid.
#[derive(Clone)]
pub struct ClientConfig {
    secret: String,
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    idle_timeout: Duration,
    max_idle_connections: usize,
    decode_policy: DecodePolicy,
}

impl ClientConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            decode_policy: DecodePolicy::default(),
        }
    }

    /// Reads `PAYSTACK_SECRET_KEY` (required) and `PAYSTACK_BASE_URL`
    /// (optional) from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup(SECRET_KEY_VAR).ok_or(ConfigError::MissingSecret { var: SECRET_KEY_VAR })?;
        let config = Self::new(secret);
        match lookup(BASE_URL_VAR) {
            Some(base_url) => config.base_url(&base_url),
            None => Ok(config),
        }
    }

    /// Points the client at another host, e.g. a local mock. Paths are
    /// appended to this URL verbatim, so any trailing `/` is dropped.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        self.base_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Overall deadline for one request, from connect to last body byte.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deadline for establishing a connection, TLS handshake included.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// How long a pooled keep-alive connection may sit unused.
    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn max_idle_connections(mut self, max: usize) -> Self {
        self.max_idle_connections = max;
        self
    }

    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.decode_policy = policy;
        self
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn base(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn request_connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn pool_idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    pub fn pool_max_idle(&self) -> usize {
        self.max_idle_connections
    }

    pub fn policy(&self) -> DecodePolicy {
        self.decode_policy
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .field("max_idle_connections", &self.max_idle_connections)
            .field("decode_policy", &self.decode_policy)
            .finish()
    }
}
