// ABOUTME: Common test utilities for API tests
// ABOUTME: Builds routers over a chosen store and drives single requests through them

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use todoapp_api::build_app;
use todoapp_storage::{connect_pool, StorageConfig};
use todoapp_todos::{SqliteTodoStore, TodoStore};

/// Captured response
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

pub fn app_with(store: Arc<dyn TodoStore>) -> Router {
    build_app(store)
}

/// App backed by a fresh single-connection in-memory SQLite database
#[allow(dead_code)]
pub async fn sqlite_app() -> Router {
    let config = StorageConfig {
        max_connections: 1,
        ..StorageConfig::default()
    };
    let pool = connect_pool("sqlite::memory:", &config)
        .await
        .expect("Failed to create database pool");
    let store = SqliteTodoStore::new(pool);
    store.initialize().await.expect("Failed to create todos table");
    build_app(Arc::new(store))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

#[allow(dead_code)]
pub async fn put_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::PUT, uri, Some(body)).await
}

#[allow(dead_code)]
pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}
