//! API layer - HTTP entry points.

pub mod cors;
pub mod extract;
pub mod http;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::app::App;
use cors::OriginPolicy;

/// Build the complete router: routes, origin rejection, CORS headers, tracing.
///
/// Layers run outside-in: tracing, then origin rejection, then CORS, then the
/// route handlers.
pub fn router(app: Arc<App>, policy: OriginPolicy) -> Router {
    let policy = Arc::new(policy);

    http::routes()
        .with_state(app)
        .layer(cors::cors_layer(policy.clone()))
        .layer(middleware::from_fn_with_state(
            policy,
            cors::reject_disallowed_origin,
        ))
        .layer(TraceLayer::new_for_http())
}
