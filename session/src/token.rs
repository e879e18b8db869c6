//! Bearer-token claim decoding and expiry check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by session restoration and the HTTP client's pre-dispatch check.
//! Only the payload segment is read; the signature is the server's business.
//! Anything that cannot be decoded counts as expired so callers fail safe.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::error::TokenError;

/// Registered claims the client cares about.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Claims {
    /// Expiry as Unix seconds; JWT allows fractional values.
    pub exp: Option<f64>,
    /// Subject (user id). Numeric subjects are kept as their decimal text;
    /// any other shape is ignored rather than failing the whole payload.
    #[serde(default, deserialize_with = "lenient_subject")]
    pub sub: Option<String>,
}

fn lenient_subject<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl Claims {
    /// Expiry timestamp, or an error when the claim is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::MissingExpiry`] when no `exp` claim is present.
    pub fn expires_at(&self) -> Result<f64, TokenError> {
        self.exp.ok_or(TokenError::MissingExpiry)
    }
}

/// Decode the JSON payload segment of a JWT without verifying its signature.
///
/// # Errors
///
/// Returns a [`TokenError`] if the token is not three segments, the payload is
/// not base64url, or the payload is not a JSON claims object.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Whether `token` must be treated as expired at `now_unix_secs`.
///
/// Undecodable tokens and tokens without an `exp` claim are expired. A token
/// whose expiry equals `now` is already expired.
#[must_use]
pub fn is_expired(token: &str, now_unix_secs: f64) -> bool {
    match decode_claims(token).and_then(|claims| claims.expires_at()) {
        Ok(exp) => exp <= now_unix_secs,
        Err(e) => {
            tracing::debug!(error = %e, "treating undecodable token as expired");
            true
        }
    }
}
