//! HTTP client factory for the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`] binds one [`ApiConfig`] to one [`Transport`]. Front ends build a
//! single client at startup and hand it to the session manager, so every API
//! call shares the same base URL.
//!
//! DESIGN
//! ======
//! Transports only move bytes: they report the status code and raw body, or a
//! network failure. Status classification, JSON decoding and error-message
//! extraction happen here once for every backend.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::rc::Rc;

use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    /// Sent as a JSON body when present.
    pub body: Option<Value>,
}

/// Status and raw body of a completed round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request over the wire.
///
/// Futures are not required to be `Send`: the browser transport runs on the
/// single-threaded JS event loop.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Pre-configured API client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Rc::new(transport),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST {base}{path}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] for network failures, non-2xx statuses and
    /// undecodable bodies.
    pub async fn post_json(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> Result<Value, TransportError> {
        self.execute(HttpRequest {
            method: HttpMethod::Post,
            url: self.config.endpoint(path),
            bearer: bearer.map(str::to_owned),
            body: Some(body),
        })
        .await
    }

    /// `GET {base}{path}`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::post_json`].
    pub async fn get_json(&self, path: &str, bearer: Option<&str>) -> Result<Value, TransportError> {
        self.execute(HttpRequest {
            method: HttpMethod::Get,
            url: self.config.endpoint(path),
            bearer: bearer.map(str::to_owned),
            body: None,
        })
        .await
    }

    async fn execute(&self, request: HttpRequest) -> Result<Value, TransportError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                message: error_message(response.status, &response.body),
            });
        }
        decode_body(&response.body)
    }
}

fn decode_body(body: &str) -> Result<Value, TransportError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Server-provided `error`/`message` text, else a generic status line.
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .into_iter()
                .find_map(|field| value.get(field).and_then(Value::as_str).map(str::to_owned))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}
