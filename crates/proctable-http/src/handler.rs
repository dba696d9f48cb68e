//! Request handler serving the process table.

use crate::server::AppState;
use axum::{
    extract::State,
    http::{header, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use proctable_core::ServerConfig;
use std::sync::Arc;
use tracing::{debug, error};

/// Snapshot handler, mounted as the router fallback so every path and
/// method reaches it.
///
/// Each call runs its own acquisition pass on the blocking pool.
pub async fn handle_snapshot(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    debug!("Snapshot request: {} {}", method, uri);

    let result = tokio::task::spawn_blocking(move || state.table.snapshot()).await;

    let records = match result {
        Ok(Ok(records)) => records,
        Ok(Err(e)) => {
            error!("Process snapshot failed: {}", e);
            return error_response(format!("Failed to read process table: {}", e));
        }
        Err(e) => {
            error!("Snapshot task failed: {}", e);
            return error_response(format!("Snapshot task failed: {}", e));
        }
    };

    match serde_json::to_vec(&records) {
        Ok(body) => {
            debug!("Serving {} process records ({} bytes)", records.len(), body.len());
            json_response(body)
        }
        Err(e) => {
            error!("Failed to serialize process table: {}", e);
            error_response(format!("Failed to marshal: {}", e))
        }
    }
}

fn json_response(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(ServerConfig::CONTENT_TYPE_JSON),
            ),
            (header::CONTENT_LENGTH, HeaderValue::from(body.len())),
        ],
        body,
    )
        .into_response()
}

fn error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(ServerConfig::CONTENT_TYPE_TEXT),
            ),
            (header::CONTENT_LENGTH, HeaderValue::from(message.len())),
        ],
        message,
    )
        .into_response()
}
