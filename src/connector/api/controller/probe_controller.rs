use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use super::super::Container;

/// `GET /probe` — raw-text check that the assistant resolves.
///
/// Unlike the form route, failures here surface the mapped HTTP status
/// directly (401/404/500) with the user-safe message as the body.
pub async fn probe(State(container): State<Arc<Container>>) -> (StatusCode, String) {
    match container.gateway().resolve(container.assistant_name()).await {
        Ok(handle) => (StatusCode::OK, format!("ok: {}", handle.name())),
        Err(e) => {
            warn!("Assistant probe failed: {e}");
            let status = StatusCode::from_u16(e.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, e.user_message().to_string())
        }
    }
}
