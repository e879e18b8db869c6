//! Browser transport for the platform REST API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): a stub that reports the transport as
//! unavailable, since fetch only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Delivery failures become `TransportError::Request`; unreadable bodies
//! become `TransportError::Body`. Non-2xx statuses pass through untouched so
//! the session store can read the server's error message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use session::error::TransportError;
use session::{ApiRequest, ApiResponse, Transport};

#[cfg(any(test, feature = "csr"))]
use session::transport::join_url;

/// `Transport` backed by the browser's fetch API.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "csr"))]
    fn url_for(&self, request: &ApiRequest) -> String {
        join_url(&self.base_url, &request.path)
    }
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(method: session::Method, url: &str, err: &dyn std::fmt::Display) -> String {
    format!("{} {url} failed: {err}", method.as_str())
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use session::Method;

            let url = self.url_for(&request);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(authorization) = request.authorization() {
                builder = builder.header("Authorization", &authorization);
            }
            let outbound = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Request(request_failed_message(request.method, &url, &e)))?;

            let resp = outbound
                .send()
                .await
                .map_err(|e| TransportError::Request(request_failed_message(request.method, &url, &e)))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
            log::debug!("{} {url} -> {status}", request.method.as_str());
            Ok(ApiResponse::from_text(status, &text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Request("not available outside the browser".to_owned()))
        }
    }
}
