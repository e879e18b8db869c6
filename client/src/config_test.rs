use super::*;

#[test]
fn unset_url_uses_default() {
    assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
}

#[test]
fn blank_url_uses_default() {
    assert_eq!(resolve_api_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn configured_url_is_trimmed() {
    assert_eq!(resolve_api_url(Some(" https://api.example.org ")), "https://api.example.org");
}
