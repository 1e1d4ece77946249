//! HTTP transport seam between session logic and the browser network stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` and page flows build [`ApiRequest`] values and hand them to a
//! [`Transport`]. In the browser (hydrate) `BrowserTransport` sends them with
//! `gloo-net`; server-side builds get a stub that always fails, since these
//! endpoints are only meaningful in the browser. Tests substitute a scripted
//! transport.

#![allow(clippy::unused_async)]

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// One request against the backend API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path, joined onto the configured base URL by the transport.
    pub path: String,
    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), bearer: None, body: None }
    }

    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw HTTP response: status plus undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Sends API requests. Futures are not required to be `Send`; the client runs
/// on the single-threaded browser event loop.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and return the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Production transport over the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    config: ApiConfig,
}

impl BrowserTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.config.api_url(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let sent = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| TransportError::new(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| TransportError::new(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(TransportError::new("not available on server"))
        }
    }
}
