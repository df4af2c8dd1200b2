// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::response::Response;
use sport_swipe::config::Config;
use sport_swipe::db::{DecisionStore, FirestoreDb, MemoryStore};
use sport_swipe::middleware::auth::create_jwt;
use sport_swipe::models::Sport;
use sport_swipe::routes::create_router;
use sport_swipe::services::SportCatalog;
use sport_swipe::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// A three-card deck.
#[allow(dead_code)]
pub fn test_catalog() -> SportCatalog {
    SportCatalog::from_sports(vec![
        Sport::new("1", "Darts"),
        Sport::new("2", "Soccer"),
        Sport::new("3", "Golf"),
    ])
}

/// Create a test app over the given store and catalog.
#[allow(dead_code)]
pub fn create_test_app_with(
    store: Arc<dyn DecisionStore>,
    catalog: SportCatalog,
) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), store, catalog));
    (create_router(state.clone()), state)
}

/// Create a test app backed by an in-memory store.
/// Returns the router, the shared state and a handle on the store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, MemoryStore) {
    let store = MemoryStore::new();
    let (app, state) = create_test_app_with(Arc::new(store.clone()), test_catalog());
    (app, state, store)
}

/// Create a test JWT token.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    create_jwt(user_id, signing_key).expect("Failed to create test JWT")
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// Build an authenticated JSON request.
#[allow(dead_code)]
pub fn authed_request(
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(
            axum::http::header::AUTHORIZATION,
            format!("Bearer {}", token),
        );

    match body {
        Some(json) => builder
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
