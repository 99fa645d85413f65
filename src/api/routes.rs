//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{echo, root};

/// Create the API router.
///
/// The static `/` route takes precedence over the parameterized `/:data`
/// route, so the root record is never shadowed by the echo handler.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/:data", get(echo))
        .layer(TraceLayer::new_for_http())
}
