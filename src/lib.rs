// src/lib.rs
//! Contact form pipeline for the portfolio site: the `/api/contact` submission
//! handler and the client-side form controller that drives it.

use axum::{extract::Extension, middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod common;
pub mod contact;
pub mod form;
pub mod health;
pub mod logging_middleware;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

use common::AppState;

/// Composes every route with the shared state and logging layers.
/// CORS is left to the caller since it depends on deployment configuration.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(contact::contact_routes())
        .merge(health::health_routes())
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(Arc::new(state)))
        .layer(TraceLayer::new_for_http())
}
