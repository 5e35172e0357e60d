//! HTTP adapters - the REST API surface.
//!
//! The presentation feature owns its dto/handlers/routes; this module
//! assembles the application router around it.

pub mod presentations;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use presentations::presentation_router;
pub use presentations::ApiError;
pub use presentations::PresentationAppState;

/// Assembles the full application router.
pub fn app_router(state: PresentationAppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .merge(presentation_router().with_state(state))
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe.
async fn ping() -> &'static str {
    "Service is up and running"
}
