//! HTTP server answering `GET /` with a static JSON greeting.
//!
//! Everything else gets a 404. Request bodies are never parsed by the
//! handler; JSON bodies are only checked against a size cap.

pub mod body_limit;
pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::{Result, ServerError};

/// Target of the startup line; always enabled regardless of `RUST_LOG`.
pub const BOOTUP_TARGET: &str = "bootup";

/// Creates the Axum application router.
pub fn create_app() -> Router {
    Router::new()
        .route(
            "/",
            get(routes::greeting::get).fallback(routes::fallback::not_found),
        )
        .fallback(routes::fallback::not_found)
        .layer(middleware::from_fn(body_limit::limit_json_body))
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on the config's address (`0.0.0.0:3000` outside tests).
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    tracing::info!(
        target: BOOTUP_TARGET,
        port,
        "[bootup]: Server is running at port: {port}"
    );

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
