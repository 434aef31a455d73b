mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://Example.com/Path?q=1" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["original_url"], "https://Example.com/Path?q=1");
    assert_eq!(json["short_url"], format!("{}/{}", common::BASE_URL, code));
    assert_eq!(json["created"], true);

    let location = response.header("location");
    assert_eq!(location, format!("{}/{}", common::BASE_URL, code).as_str());
}

#[tokio::test]
async fn test_shorten_same_url_twice_returns_same_code() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "http://a.com" }))
        .await;
    first.assert_status(StatusCode::CREATED);

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "http://a.com" }))
        .await;
    second.assert_status_ok();

    let first = first.json::<serde_json::Value>();
    let second = second.json::<serde_json::Value>();
    assert_eq!(first["code"], second["code"]);
    assert_eq!(second["created"], false);
}

#[tokio::test]
async fn test_shorten_equivalent_urls_share_code() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/Docs" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "  HTTPS://EXAMPLE.COM/Docs " }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["code"], second["code"]);
    assert_eq!(second["original_url"], "https://example.com/Docs");
}

#[tokio::test]
async fn test_shorten_different_urls_get_different_codes() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();

    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/A" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["code"], second["code"]);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_rejects_too_long_url() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let url = format!("https://example.com/{}", "a".repeat(2048));
    let response = server.post("/api/shorten").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let response = server.post("/api/shorten").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_shorten_uses_host_header_without_base_url() {
    let server =
        TestServer::new(common::create_test_router(common::create_host_based_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .add_header("Host", "localhost:3000")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(json["short_url"], format!("http://localhost:3000/{code}"));
}

#[tokio::test]
async fn test_shorten_respects_forwarded_proto() {
    let server =
        TestServer::new(common::create_test_router(common::create_host_based_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .add_header("Host", "s.example.org")
        .add_header("X-Forwarded-Proto", "https")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    let json = response.json::<serde_json::Value>();
    let code = json["code"].as_str().unwrap();
    assert_eq!(json["short_url"], format!("https://s.example.org/{code}"));
}

#[tokio::test]
async fn test_shorten_rejects_embedded_newline() {
    let server = TestServer::new(common::create_test_router(common::create_test_state())).unwrap();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["details"]["reason"],
        "URL must not contain control characters"
    );

    let health = server.get("/health").await.json::<serde_json::Value>();
    assert_eq!(health["links"], 0);
}
