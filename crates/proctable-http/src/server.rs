//! HTTP server implementation using Axum.

use crate::handler::handle_snapshot;
use axum::Router;
use proctable_core::ProcessTable;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
///
/// Read-only: every request runs its own pass over `table`.
pub struct AppState {
    pub table: ProcessTable,
}

/// Build the router. Every request, whatever its path or method, is served
/// by the snapshot handler.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handle_snapshot)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Returns the bound address (useful when port=0) and the server task. The
/// task stops accepting connections once `shutdown` resolves and finishes
/// after in-flight requests complete.
pub async fn start_server<F>(
    table: ProcessTable,
    host: &str,
    port: u16,
    shutdown: F,
) -> anyhow::Result<(SocketAddr, JoinHandle<std::io::Result<()>>)>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = Arc::new(AppState { table });
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    });

    Ok((actual_addr, handle))
}
