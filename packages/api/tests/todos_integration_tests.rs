// ABOUTME: End-to-end API tests over a real SQLite-backed store
// ABOUTME: Walks the create, read, update, delete lifecycle through the router

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{delete, get, post_json, put_json, sqlite_app};

#[tokio::test]
async fn test_todo_api_lifecycle() {
    let app = sqlite_app().await;

    // Create
    let created = post_json(
        &app,
        "/todos",
        r#"{"title":"Integration Test Todo", "completed":false}"#,
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.json(),
        json!({"id": 1, "title": "Integration Test Todo", "completed": false})
    );

    // Get one
    let fetched = get(&app, "/todos/1").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json(), created.json());

    // Update
    let updated = put_json(&app, "/todos/1", r#"{"title":"Updated","completed":true}"#).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.json(),
        json!({"id": 1, "title": "Updated", "completed": true})
    );

    let verified = get(&app, "/todos/1").await;
    assert_eq!(verified.json(), updated.json());

    // Delete
    let deleted = delete(&app, "/todos/1").await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_empty());

    let gone = get(&app, "/todos/1").await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body, "Todo not found");
}

#[tokio::test]
async fn test_list_ordered_and_empty() {
    let app = sqlite_app().await;

    let empty = get(&app, "/todos").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, "[]");

    for title in ["first", "second", "third"] {
        let body = json!({"title": title}).to_string();
        assert_eq!(post_json(&app, "/todos", &body).await.status, StatusCode::CREATED);
    }
    delete(&app, "/todos/2").await;

    let listed = get(&app, "/todos").await;
    assert_eq!(
        listed.json(),
        json!([
            {"id": 1, "title": "first", "completed": false},
            {"id": 3, "title": "third", "completed": false}
        ])
    );
}

#[tokio::test]
async fn test_get_missing_and_invalid_ids() {
    let app = sqlite_app().await;

    let missing = get(&app, "/todos/99").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body, "Todo not found");

    let invalid = get(&app, "/todos/abc").await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body, "Invalid ID");
}

#[tokio::test]
async fn test_update_body_id_is_ignored() {
    let app = sqlite_app().await;

    post_json(&app, "/todos", r#"{"title":"one"}"#).await;
    post_json(&app, "/todos", r#"{"title":"two"}"#).await;

    let updated = put_json(&app, "/todos/2", r#"{"id":1,"title":"two!","completed":true}"#).await;
    assert_eq!(updated.json()["id"], 2);

    assert_eq!(get(&app, "/todos/1").await.json()["title"], "one");
    assert_eq!(get(&app, "/todos/2").await.json()["title"], "two!");
}
