mod common;

use axum::http::StatusCode;
use link_registry::utils::code_generator::CodeGenerator;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_with_alias() {
    let (server, _state, _clock) = common::make_server();

    let response = server
        .post("/links/shorten")
        .json(&json!({ "original_url": "https://example.com", "custom_alias": "ex" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({
        "short_code": "ex",
        "original_url": "https://example.com"
    }));
}

#[tokio::test]
async fn test_shorten_generates_signed_code() {
    let (server, _state, _clock) = common::make_server();

    let body = common::create_link(&server, "https://example.com/page", None).await;

    let expected = CodeGenerator::new(common::TEST_SECRET).generate("https://example.com/page");
    assert_eq!(body["short_code"], expected.as_str());
    assert_eq!(body["original_url"], "https://example.com/page");
}

#[tokio::test]
async fn test_shorten_duplicate_alias() {
    let (server, state, _clock) = common::make_server();

    common::create_link(&server, "https://a.com", Some("dup")).await;

    let response = server
        .post("/links/shorten")
        .json(&json!({ "original_url": "https://b.com", "custom_alias": "dup" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["message"], "Custom alias already exists.");

    // The failed call left the original mapping alone.
    assert_eq!(state.link_service.link_count().await, 1);
    let stats = state.link_service.get_stats("dup").await.unwrap();
    assert_eq!(stats.original_url, "https://a.com");
}

#[tokio::test]
async fn test_shorten_same_url_twice_conflicts_on_generated_code() {
    let (server, _state, _clock) = common::make_server();

    common::create_link(&server, "https://example.com", None).await;

    let response = server
        .post("/links/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["message"], "Short code already exists.");
}

#[tokio::test]
async fn test_shorten_ignores_requested_expiry() {
    let (server, _state, clock) = common::make_server();

    let response = server
        .post("/links/shorten")
        .json(&json!({
            "original_url": "https://example.com",
            "custom_alias": "ttl",
            "expires_at": "2099-12-31T23:59:59Z"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let stats = server.get("/links/ttl/stats").await.json::<Value>();
    let expected = clock_now_plus_ttl(&clock);
    assert_eq!(stats["expires_at"], expected);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, _state, _clock) = common::make_server();

    let response = server
        .post("/links/shorten")
        .json(&json!({ "original_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, _state, _clock) = common::make_server();

    let response = server
        .post("/links/shorten")
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_invalid_alias() {
    let (server, state, _clock) = common::make_server();

    for alias in ["has space", "a/b", "shorten", "."] {
        let response = server
            .post("/links/shorten")
            .json(&json!({ "original_url": "https://example.com", "custom_alias": alias }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error", "alias {alias:?}");
    }

    assert_eq!(state.link_service.link_count().await, 0);
}

#[tokio::test]
async fn test_shorten_empty_alias_falls_back_to_generated_code() {
    let (server, _state, _clock) = common::make_server();

    let response = server
        .post("/links/shorten")
        .json(&json!({ "original_url": "https://example.com", "custom_alias": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    let expected = CodeGenerator::new(common::TEST_SECRET).generate("https://example.com");
    assert_eq!(body["short_code"], expected.as_str());
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (server, _state, _clock) = common::make_server();

    let response = server
        .post("/links/shorten")
        .json(&json!({ "custom_alias": "ex" }))
        .await;

    assert!(response.status_code().is_client_error());
}

fn clock_now_plus_ttl(clock: &link_registry::domain::clock::ManualClock) -> Value {
    use link_registry::domain::clock::Clock;

    let deadline = clock.now() + chrono::Duration::days(common::TEST_TTL_DAYS);
    serde_json::to_value(deadline).unwrap()
}
