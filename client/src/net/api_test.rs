use super::*;
use session::Method;

#[test]
fn url_for_joins_base_and_path() {
    let transport = GlooTransport::new("http://127.0.0.1:8000/");
    let request = ApiRequest::new(Method::Get, "/dashboard/member");
    assert_eq!(transport.url_for(&request), "http://127.0.0.1:8000/dashboard/member");
}

#[test]
fn base_url_is_kept_verbatim() {
    assert_eq!(GlooTransport::new("https://api.example.com").base_url(), "https://api.example.com");
}

#[test]
fn request_failed_message_names_method_and_url() {
    let msg = request_failed_message(Method::Post, "http://x/auth/login", &"connection refused");
    assert_eq!(msg, "POST http://x/auth/login failed: connection refused");
}
