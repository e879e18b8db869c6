//! Wire payloads for the authentication endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The signed-in user as returned by `POST /auth/login` and persisted under
/// the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(alias = "user_id")]
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl Identity {
    /// First and last name joined for display.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub profile_details: String,
    pub role: Role,
}

impl Registration {
    /// Build a member registration from a single full-name field.
    ///
    /// The first word becomes `first_name`; everything after the first
    /// whitespace run becomes `last_name` (possibly empty).
    #[must_use]
    pub fn from_full_name(full_name: &str, email: &str, password: &str, profile_details: &str) -> Self {
        let (first_name, last_name) = split_full_name(full_name);
        Self {
            email: email.trim().to_owned(),
            first_name,
            last_name,
            password: password.to_owned(),
            profile_details: profile_details.trim().to_owned(),
            role: Role::Member,
        }
    }
}

/// Split a display name into `(first, rest)`.
#[must_use]
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_owned();
    let rest = parts.collect::<Vec<_>>().join(" ");
    (first, rest)
}

/// Successful `POST /auth/login` response.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub access_token: String,
    pub user: Identity,
}

/// Extract a human-readable message from an API error body.
///
/// FastAPI sends `{"detail": "..."}` for handled errors and
/// `{"detail": [{"msg": "..."}, ...]}` for validation failures; some routes
/// use `{"message": "..."}` instead.
#[must_use]
pub fn error_message(body: &serde_json::Value) -> Option<String> {
    let detail = body.get("detail").and_then(|detail| match detail {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    });
    detail
        .or_else(|| body.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|msg| !msg.trim().is_empty())
}
