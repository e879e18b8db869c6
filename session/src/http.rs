//! Authenticated HTTP client used by screens and the CLI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every non-auth API call goes through [`ApiClient`]. It reads the token from
//! the store's memory (never from persisted storage), refuses to send a
//! token that has already expired, and in that case logs the user out through
//! the store so the route guard sends them to the login screen.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::store::SessionStore;
use crate::token;
use crate::transport::{ApiRequest, ApiResponse, Method};
use crate::types::error_message;

/// Request builder bound to a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    store: SessionStore,
}

impl ApiClient {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Send a request, attaching `Authorization: Bearer <token>` when signed in.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Expired`] (after forcing logout) if the in-memory
    /// token has expired, or [`ApiError::Transport`] if delivery fails.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest::new(method, path);
        request.body = body;

        if let Some(token) = self.store.token() {
            if token::is_expired(&token, self.store.now_unix_secs()) {
                tracing::info!(method = method.as_str(), path, "token expired before dispatch; logging out");
                self.store.expire();
                return Err(ApiError::Expired);
            }
            request = request.with_bearer(token);
        }

        let response = self.store.transport().send(request).await?;
        tracing::debug!(method = method.as_str(), path, status = response.status, "api request completed");
        Ok(response)
    }

    /// Send a request and decode a 2xx JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`ApiClient::request`] returns, plus [`ApiError::Status`] for
    /// non-2xx responses and [`ApiError::Decode`] for unexpected bodies.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let response = self.request(method, path, body).await?;
        if !response.is_success() {
            let message = error_message(&response.body).unwrap_or_else(|| format!("HTTP {}", response.status));
            return Err(ApiError::Status { status: response.status, message });
        }
        Ok(serde_json::from_value(response.body)?)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_json`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json(Method::Get, path, None).await
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_json`].
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T, ApiError> {
        self.request_json(Method::Post, path, Some(body)).await
    }
}
