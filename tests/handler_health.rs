mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_check() {
    let (server, _state, _clock) = common::make_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["registry"]["status"], "ok");
    assert_eq!(body["checks"]["registry"]["message"], "Links: 0, TTL: 30 days");
}

#[tokio::test]
async fn test_health_reports_link_count() {
    let (server, _state, _clock) = common::make_server();
    common::create_link(&server, "https://a.com", None).await;
    common::create_link(&server, "https://b.com", Some("b")).await;

    let body = server.get("/health").await.json::<Value>();

    assert_eq!(body["checks"]["registry"]["message"], "Links: 2, TTL: 30 days");
}
