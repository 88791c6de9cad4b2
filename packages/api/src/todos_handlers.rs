// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: Each handler performs at most one storage call and writes one response

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use tracing::{error, info};

use super::response::ApiError;
use super::TodoState;
use todoapp_storage::StorageError;
use todoapp_todos::Todo;

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId)
}

/// Decode the first JSON value of the raw body regardless of content type.
///
/// Bytes after that value are ignored and a `null` body is the default todo.
fn decode_todo(body: &Bytes) -> Result<Todo, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Todo>>();
    match values.next() {
        Some(value) => Ok(value?.unwrap_or_default()),
        // Nothing but whitespace; the plain decoder reports the EOF
        None => Ok(serde_json::from_slice::<Todo>(body)?),
    }
}

/// List all todos
pub async fn list_todos(State(state): State<TodoState>) -> Result<Response, ApiError> {
    info!("Listing todos");

    let todos = state.store.get_todos().await?;
    Ok((StatusCode::OK, ResponseJson(todos)).into_response())
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<TodoState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let todo = decode_todo(&body)?;
    info!("Creating todo: {}", todo.title);

    let created = state.store.create_todo(todo).await?;
    Ok((StatusCode::CREATED, ResponseJson(created)).into_response())
}

/// Get a single todo by ID
pub async fn get_todo(
    State(state): State<TodoState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    info!("Getting todo: {}", id);

    // Absence and storage failure share the external 404; only the latter is logged
    let todo = state.store.get_todo_by_id(id).await.map_err(|e| {
        if !matches!(e, StorageError::NotFound) {
            error!("Failed to fetch todo {}: {}", id, e);
        }
        ApiError::NotFound
    })?;

    Ok((StatusCode::OK, ResponseJson(todo)).into_response())
}

/// Replace title and completed of a todo; the path id wins over any body id
pub async fn update_todo(
    State(state): State<TodoState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    let todo = decode_todo(&body)?.with_id(id);
    info!("Updating todo: {}", id);

    let updated = state.store.update_todo(todo).await?;
    Ok((StatusCode::OK, ResponseJson(updated)).into_response())
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<TodoState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    info!("Deleting todo: {}", id);

    state.store.delete_todo(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
