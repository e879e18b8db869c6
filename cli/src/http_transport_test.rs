use super::*;

#[test]
fn url_for_joins_base_and_path() {
    let transport = ReqwestTransport::new("http://127.0.0.1:8000/");
    assert_eq!(transport.url_for("/auth/login"), "http://127.0.0.1:8000/auth/login");
}

#[test]
fn methods_map_one_to_one() {
    assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(reqwest_method(Method::Post), reqwest::Method::POST);
    assert_eq!(reqwest_method(Method::Put), reqwest::Method::PUT);
    assert_eq!(reqwest_method(Method::Patch), reqwest::Method::PATCH);
    assert_eq!(reqwest_method(Method::Delete), reqwest::Method::DELETE);
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    // Port 9 (discard) on localhost is closed in test environments.
    let transport = ReqwestTransport::new("http://127.0.0.1:9");
    let result = transport.send(ApiRequest::new(Method::Get, "/")).await;
    assert!(matches!(result, Err(TransportError::Request(_))));
}
