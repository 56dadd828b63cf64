#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use link_registry::domain::clock::ManualClock;
use link_registry::domain::expiry::ExpiryPolicy;
use link_registry::routes::app_router;
use link_registry::state::AppState;
use link_registry::utils::code_generator::CodeGenerator;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TTL_DAYS: i64 = 30;

/// A clock pinned to a fixed instant so tests can step through expiry.
pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
    ))
}

pub fn create_test_state(clock: Arc<ManualClock>) -> AppState {
    AppState::new(
        CodeGenerator::new(TEST_SECRET),
        ExpiryPolicy::new(TEST_TTL_DAYS),
        clock,
    )
}

/// Test server running the full application router on a fresh registry.
pub fn make_server() -> (TestServer, AppState, Arc<ManualClock>) {
    let clock = test_clock();
    let state = create_test_state(clock.clone());

    let app = ServiceExt::<Request>::into_make_service(app_router(state.clone()));

    (TestServer::new(app).unwrap(), state, clock)
}

pub async fn create_link(server: &TestServer, url: &str, alias: Option<&str>) -> Value {
    let mut body = json!({ "original_url": url });
    if let Some(alias) = alias {
        body["custom_alias"] = json!(alias);
    }

    let response = server.post("/links/shorten").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
