use super::*;
use serde_json::json;

#[test]
fn identity_deserializes_login_user_payload() {
    let identity: Identity = serde_json::from_value(json!({
        "id": 7,
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "role": "Mentor"
    }))
    .unwrap();
    assert_eq!(identity.id, 7);
    assert_eq!(identity.role, Role::Mentor);
    assert_eq!(identity.display_name(), "Grace Hopper");
}

#[test]
fn identity_accepts_user_id_alias_and_missing_role() {
    let identity: Identity = serde_json::from_value(json!({
        "user_id": 3,
        "first_name": "Solo",
        "email": "solo@example.com"
    }))
    .unwrap();
    assert_eq!(identity.id, 3);
    assert_eq!(identity.role, Role::Member);
    assert_eq!(identity.display_name(), "Solo");
}

#[test]
fn registration_splits_full_name() {
    let reg = Registration::from_full_name("  Ada  King Lovelace ", " ada@example.com ", "pw", " Founder ");
    assert_eq!(reg.first_name, "Ada");
    assert_eq!(reg.last_name, "King Lovelace");
    assert_eq!(reg.email, "ada@example.com");
    assert_eq!(reg.profile_details, "Founder");
    assert_eq!(reg.role, Role::Member);
}

#[test]
fn registration_serializes_signup_body() {
    let reg = Registration::from_full_name("Ada", "a@b.com", "pw", "bio");
    assert_eq!(
        serde_json::to_value(&reg).unwrap(),
        json!({
            "email": "a@b.com",
            "first_name": "Ada",
            "last_name": "",
            "password": "pw",
            "profile_details": "bio",
            "role": "Member"
        })
    );
}

#[test]
fn error_message_prefers_string_detail() {
    assert_eq!(
        error_message(&json!({ "detail": "Invalid credentials", "message": "other" })),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn error_message_joins_validation_details() {
    let body = json!({ "detail": [{ "msg": "field required" }, { "msg": "value is not a valid email" }] });
    assert_eq!(
        error_message(&body),
        Some("field required; value is not a valid email".to_owned())
    );
}

#[test]
fn error_message_falls_back_to_message_field() {
    assert_eq!(error_message(&json!({ "message": "Email taken" })), Some("Email taken".to_owned()));
}

#[test]
fn error_message_ignores_empty_or_missing_fields() {
    assert_eq!(error_message(&json!({ "detail": "" })), None);
    assert_eq!(error_message(&json!({})), None);
    assert_eq!(error_message(&serde_json::Value::Null), None);
}

#[test]
fn identity_with_null_role_defaults_to_member() {
    let identity: Identity = serde_json::from_value(json!({
        "id": 9,
        "first_name": "Null",
        "last_name": "Role",
        "email": "null@example.com",
        "role": null
    }))
    .unwrap();
    assert_eq!(identity.role, Role::Member);
}
