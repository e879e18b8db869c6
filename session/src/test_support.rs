//! Fixtures shared by the unit tests in this crate.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use crate::error::TransportError;
use crate::role::Role;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::types::Identity;

pub(crate) const NOW: f64 = 1_700_000_000.0;

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    exp: i64,
}

/// Mint an HS256 token whose `exp` is `NOW + offset_secs`.
pub(crate) fn token_expiring_in(offset_secs: i64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let exp = NOW as i64 + offset_secs;
    let claims = TestClaims { sub: "42".to_owned(), exp };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).expect("encode token")
}

pub(crate) fn identity(role: Role) -> Identity {
    Identity {
        id: 42,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "a@b.com".to_owned(),
        role,
    }
}

/// Transport double that replays scripted responses and records requests.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn push(&self, response: Result<ApiResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(Ok(ApiResponse { status, body }));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".to_owned())))
    }
}
