use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::container::Container;
use super::controller::{ask_controller, probe_controller};

/// The single-page HTTP surface: form in, rendered answer (or inline
/// error) out, plus the raw-text probe route.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route(
            "/",
            get(ask_controller::form).post(ask_controller::submit),
        )
        .route("/probe", get(probe_controller::probe))
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}
