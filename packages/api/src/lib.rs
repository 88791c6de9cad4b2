// ABOUTME: HTTP API layer for the todo service providing REST endpoints and routing
// ABOUTME: Handlers depend on the TodoStore capability, never on a concrete database

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use todoapp_todos::TodoStore;

pub mod response;
pub mod todos_handlers;

pub use response::ApiError;

/// Shared state for API handlers
#[derive(Clone)]
pub struct TodoState {
    pub store: Arc<dyn TodoStore>,
}

impl TodoState {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }
}

/// Creates the todos API router
pub fn create_todos_router() -> Router<TodoState> {
    Router::new()
        .route("/todos", get(todos_handlers::list_todos))
        .route("/todos", post(todos_handlers::create_todo))
        .route("/todos/{id}", get(todos_handlers::get_todo))
        .route("/todos/{id}", put(todos_handlers::update_todo))
        .route("/todos/{id}", delete(todos_handlers::delete_todo))
}

/// Router with the store applied, ready to serve.
pub fn build_app(store: Arc<dyn TodoStore>) -> Router {
    create_todos_router().with_state(TodoState::new(store))
}
