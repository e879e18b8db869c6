use super::*;
use crate::test_support::{NOW, token_expiring_in};

fn unsigned_token(payload_json: &str) -> String {
    format!("eyJhbGciOiJub25lIn0.{}.sig", URL_SAFE_NO_PAD.encode(payload_json))
}

// =============================================================================
// decode_claims
// =============================================================================

#[test]
fn decode_claims_reads_exp_and_sub() {
    let claims = decode_claims(&token_expiring_in(60)).expect("claims");
    assert_eq!(claims.exp, Some(NOW + 60.0));
    assert_eq!(claims.sub.as_deref(), Some("42"));
}

#[test]
fn decode_claims_accepts_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":12}"#);
    assert!(payload.ends_with('='));
    let token = format!("h.{payload}.s");
    assert_eq!(decode_claims(&token).expect("claims").exp, Some(12.0));
}

#[test]
fn decode_claims_accepts_fractional_exp() {
    let claims = decode_claims(&unsigned_token(r#"{"exp":1700000000.5}"#)).expect("claims");
    assert_eq!(claims.exp, Some(1_700_000_000.5));
}

#[test]
fn decode_claims_rejects_wrong_segment_count() {
    assert!(matches!(decode_claims("only.two"), Err(TokenError::Malformed)));
    assert!(matches!(decode_claims("a.b.c.d"), Err(TokenError::Malformed)));
    assert!(matches!(decode_claims(""), Err(TokenError::Malformed)));
}

#[test]
fn decode_claims_rejects_bad_base64() {
    assert!(matches!(decode_claims("h.!!!.s"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
    assert!(matches!(decode_claims(&token), Err(TokenError::Json(_))));
}

#[test]
fn missing_exp_is_reported() {
    let claims = decode_claims(&unsigned_token(r#"{"sub":"1"}"#)).expect("claims");
    assert!(matches!(claims.expires_at(), Err(TokenError::MissingExpiry)));
}

#[test]
fn numeric_subject_is_kept_as_text() {
    let claims = decode_claims(&unsigned_token(r#"{"sub":42,"exp":12}"#)).expect("claims");
    assert_eq!(claims.sub.as_deref(), Some("42"));
    assert_eq!(claims.exp, Some(12.0));
}

#[test]
fn unusual_subject_shapes_do_not_block_decoding() {
    let claims = decode_claims(&unsigned_token(r#"{"sub":{"id":1},"exp":12,"roles":["x"]}"#)).expect("claims");
    assert_eq!(claims.sub, None);
    assert_eq!(claims.exp, Some(12.0));
}

// =============================================================================
// is_expired
// =============================================================================

#[test]
fn future_expiry_is_valid() {
    assert!(!is_expired(&token_expiring_in(1), NOW));
    assert!(!is_expired(&token_expiring_in(3600), NOW));
}

#[test]
fn past_expiry_is_expired() {
    assert!(is_expired(&token_expiring_in(-1), NOW));
    assert!(is_expired(&token_expiring_in(-600), NOW));
}

#[test]
fn expiry_equal_to_now_is_expired() {
    assert!(is_expired(&token_expiring_in(0), NOW));
}

#[test]
fn expiry_boundary_tracks_clock() {
    let token = token_expiring_in(10);
    assert!(!is_expired(&token, NOW + 9.999));
    assert!(is_expired(&token, NOW + 10.0));
}

#[test]
fn garbage_tokens_are_expired() {
    assert!(is_expired("", NOW));
    assert!(is_expired("opaque-session-token", NOW));
    assert!(is_expired("h.!!!.s", NOW));
    assert!(is_expired(&unsigned_token(r#"{"sub":"1"}"#), NOW));
    assert!(is_expired(&unsigned_token(r#"{"exp":"tomorrow"}"#), NOW));
}

#[test]
fn numeric_subject_with_future_expiry_is_valid() {
    let token = unsigned_token(&format!(r#"{{"sub":42,"exp":{}}}"#, NOW + 3600.0));
    assert!(!is_expired(&token, NOW));
}
