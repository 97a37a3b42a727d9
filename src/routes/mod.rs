//! HTTP route handlers.
//!
//! Only the health endpoint is registered. Every other path falls through to
//! axum's default 404.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{middleware, routing::any, Router};

use crate::config::HEALTH_PATH;
use crate::middleware::request_id_layer;

/// Creates the Axum router with the health route.
pub fn create_router() -> Router {
    // Health check - any method, exact path
    let health_routes = Router::new().route(HEALTH_PATH, any(health::health));

    Router::new()
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
