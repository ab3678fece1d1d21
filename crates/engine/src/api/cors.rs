//! Cross-origin access control.
//!
//! [`OriginPolicy`] decides which browser origins may talk to the API. A
//! request without an `Origin` header (same-origin or non-browser callers) is
//! always allowed. Requests from any other origin are stopped by
//! [`reject_disallowed_origin`] before routing, and allowed origins get CORS
//! headers from [`cors_layer`].

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, request::Parts, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:8080",
    "http://localhost:1234",
    "https://movies.com",
    "https://midu.dev",
];

/// Allow-list of browser origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    allowed: Vec<String>,
}

impl OriginPolicy {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// True when `origin` is absent or an exact member of the allow-list.
    pub fn allows(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.iter().any(|allowed| allowed == origin),
        }
    }

    fn allows_header(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.allows(Some(origin)))
            .unwrap_or(false)
    }
}

impl Default for OriginPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS)
    }
}

/// Middleware that rejects requests from origins outside the policy.
///
/// Runs before routing, so preflight requests are covered too.
pub async fn reject_disallowed_origin(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if !policy.allows_header(origin) {
            tracing::warn!(origin = ?origin, "Rejected request from disallowed origin");
            return (StatusCode::FORBIDDEN, "Not allowed by CORS").into_response();
        }
    }

    next.run(request).await
}

/// CORS headers for allowed origins: the origin is echoed back and preflights
/// advertise every method the API serves.
pub fn cors_layer(policy: Arc<OriginPolicy>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| policy.allows_header(origin),
        ))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
