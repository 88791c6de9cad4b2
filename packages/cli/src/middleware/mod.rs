//! Middleware for request tracing and panic recovery

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use uuid::Uuid;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Create a panic handler that returns consistent error responses
pub fn create_panic_handler() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic)
}

/// Wrap `router` with panic recovery and per-request trace logging.
///
/// Tracing is the outer layer so recovered panics are logged with their 500.
pub fn apply(router: Router) -> Router {
    router
        .layer(create_panic_handler())
        .layer(TraceLayer::new_for_http())
}

/// Panic payloads are `String` for formatted panics and `&str` for literals
fn panic_message(err: &(dyn Any + Send)) -> &str {
    err.downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic")
}

/// Log the panic under a fresh request id and answer with an opaque 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let request_id = Uuid::new_v4();

    error!(
        request_id = %request_id,
        panic_message = %panic_message(err.as_ref()),
        "Todo handler panicked"
    );

    let body = json!({
        "error": {
            "code": "INTERNAL_ERROR",
            "message": "An internal server error occurred",
            "request_id": request_id.to_string()
        }
    });

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
