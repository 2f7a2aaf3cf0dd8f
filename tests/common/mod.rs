//! Shared setup for integration tests: a migrated, seeded in-memory database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use superheroes_api::api::{create_router, AppState};
use superheroes_api::commands::seed::seed_sample_data;
use superheroes_api::config::Config;
use superheroes_api::infra::{Database, Persistence};

/// In-memory SQLite keeps its data only while its single connection lives.
pub async fn empty_database() -> Arc<Database> {
    let config = Config::with_database("sqlite::memory:", 1);
    let db = Database::connect(&config)
        .await
        .expect("in-memory database should migrate");

    Arc::new(db)
}

pub async fn seeded_database() -> Arc<Database> {
    let db = empty_database().await;
    let uow = Persistence::new(db.get_connection());
    seed_sample_data(&uow)
        .await
        .expect("sample data should seed");

    db
}

pub async fn app() -> Router {
    create_router(AppState::from_database(seeded_database().await))
}

pub async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri, None).await
}
