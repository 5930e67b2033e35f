#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

use court_coordinator::api::create_router;
use court_coordinator::api::handlers::AppState;
use court_coordinator::config::ScriptCommand;
use court_coordinator::config::settings::AppConfig;

/// Config rooted in a temp dir, with shell snippets standing in for the
/// recognition and scheduling scripts
pub fn test_config(dir: &TempDir, score_script: &str, schedule_script: &str) -> AppConfig {
    let mut config = AppConfig::new();
    config.store.data_file = dir.path().join("courts.json");
    config.server.public_dir = dir.path().join("public");
    config.scripts.working_dir = dir.path().to_path_buf();
    config.scripts.score_recognition = ScriptCommand::new("sh", &["-c", score_script]);
    config.scripts.scheduling = ScriptCommand::new("sh", &["-c", schedule_script]);
    config.triggers.enabled = false;

    fs::create_dir_all(&config.server.public_dir).unwrap();
    fs::write(config.public_path("viewer.html"), "<h1>viewer</h1>").unwrap();
    fs::write(config.public_path("admin.html"), "<h1>admin</h1>").unwrap();
    fs::write(config.public_path("style.css"), "body { margin: 0 }").unwrap();
    config
}

pub fn setup_app(config: AppConfig) -> axum::Router {
    create_router(Arc::new(AppState::new(config)))
}

pub fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &axum::Router, method: &str, uri: &str) -> Response<Body> {
    app.clone().oneshot(test_request(method, uri)).await.unwrap()
}

pub async fn extract_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body")
        .to_vec()
}

pub async fn extract_json(body: Body) -> Value {
    serde_json::from_slice(&extract_bytes(body).await).expect("Should parse JSON")
}
