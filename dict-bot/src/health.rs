//! Liveness endpoint: `GET /` answers with a static string while the process is up.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const RUNNING_TEXT: &str = "Dictionary bot is running";

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { RUNNING_TEXT }))
        .layer(TraceLayer::new_for_http())
}

/// Serves [`router`] on `0.0.0.0:port` until `shutdown` resolves.
pub async fn serve<S>(port: u16, shutdown: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind liveness server to {}", addr))?;
    info!(%addr, "Liveness server listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
        .context("Liveness server failed")?;
    Ok(())
}
