//! Transport capability used by the prober.
//!
//! # Responsibilities
//! - Issue one GET against the target
//! - Report either the response status code or why no response arrived
//!
//! # Design Decisions
//! - The response body is never read; only the status line matters
//! - No request timeout unless one is set explicitly
//! - Redirects follow the client's default policy

use std::future::Future;
use thiserror::Error;

/// Reasons a probe produced no HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// The target could not be turned into a request (bad or empty URL).
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    /// DNS resolution, TCP connect or TLS handshake failed.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request deadline elapsed.
    #[error("Request timed out")]
    Timeout,

    /// Any other failure while sending the request or reading the response head.
    #[error("Request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TransportError::InvalidTarget(err.to_string())
        } else if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// Something that can probe a target and return its HTTP status code.
pub trait Transport: Send + Sync {
    fn probe(&self, target: &str) -> impl Future<Output = Result<u16, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn probe(&self, target: &str) -> impl Future<Output = Result<u16, TransportError>> + Send {
        (**self).probe(target)
    }
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the client defaults: no request timeout, system proxy, redirects followed.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self::from_client(client))
    }

    /// Wrap a preconfigured client (timeouts, proxy, TLS roots).
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn probe(&self, target: &str) -> impl Future<Output = Result<u16, TransportError>> + Send {
        let request = self.client.get(target);
        async move {
            let response = request.send().await?;
            Ok(response.status().as_u16())
        }
    }
}
