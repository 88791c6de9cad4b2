//! Server lifecycle: pool, table, listener, graceful shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::ServerResult;
use crate::middleware;
use todoapp_storage::{close_pool, connect_pool, StorageConfig};
use todoapp_todos::{SqliteTodoStore, TodoStore};

/// Full application router for `store`, with middleware applied
pub fn build_router(store: Arc<dyn TodoStore>) -> Router {
    middleware::apply(todoapp_api::build_app(store))
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Run until Ctrl-C or SIGTERM.
pub async fn run(config: Config) -> ServerResult<()> {
    run_until(config, shutdown_signal()).await
}

/// Run until `shutdown` resolves.
///
/// The pool is closed exactly once on every path after it was opened,
/// including failures while creating the table or binding the listener.
pub async fn run_until<F>(config: Config, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let storage_config = StorageConfig {
        max_connections: config.max_connections,
        ..StorageConfig::default()
    };
    let pool = connect_pool(&config.database_url, &storage_config).await?;

    let result = serve_with_pool(&config, pool.clone(), shutdown).await;

    close_pool(&pool).await;
    info!("Server stopped");
    result
}

async fn serve_with_pool<F>(config: &Config, pool: SqlitePool, shutdown: F) -> ServerResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = SqliteTodoStore::new(pool);
    store.initialize().await?;

    let app = build_router(Arc::new(store));

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);

    serve(listener, app, shutdown).await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
