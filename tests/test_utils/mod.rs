//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use hr_assistant::api::AppState;
use hr_assistant::api::app;
use hr_assistant::core::AppConfig;

/// Creates a test application router that forwards questions to
/// `api_url`, usually a `mockito` server.
pub fn test_app(api_url: &str) -> Router {
    let mut app_config = AppConfig::with_api_url(api_url).expect("Invalid test API url");
    app_config.web_ui_path = String::from("./web-ui");
    let app_state = AppState::new(app_config).expect("Failed to build app state");
    app(Arc::new(RwLock::new(app_state)))
}

/// An API url nothing listens on, for tests that never reach the
/// answer API.
pub fn unused_api_url() -> String {
    String::from("http://127.0.0.1:9/ask")
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).expect("Body is not json")
}
