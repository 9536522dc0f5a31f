//! REST transport and API client factory.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports a network error, since these
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Only transport-level failures surface here. Status codes and bodies are
//! handed back untouched for `auth::ApiClient` to classify.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use auth::{ApiClient, ApiConfig, HttpRequest, HttpResponse, Transport, TransportError};

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use auth::HttpMethod;
            use gloo_net::http::Request;

            let network = |e: gloo_net::Error| TransportError::Network(e.to_string());

            let builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
            };
            let builder = match &request.bearer {
                Some(token) => builder.header("Authorization", &bearer_header(token)),
                None => builder,
            };
            let resp = match &request.body {
                Some(body) => builder.json(body).map_err(network)?.send().await,
                None => builder.send().await,
            }
            .map_err(network)?;

            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Network("not available outside the browser".to_owned()))
        }
    }
}

/// Build the app-wide API client from the build-time `API_BASE`.
pub fn build_api_client() -> ApiClient {
    ApiClient::new(ApiConfig::from_build_env(), GlooTransport)
}
