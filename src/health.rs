// src/health.rs
//! Liveness endpoint reporting whether submissions are relayed or only logged

use axum::{extract::Extension, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::common::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub mode: &'static str,
}

/// GET /api/health
pub async fn get_health(Extension(state): Extension<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        mode: if state.is_dev_mode() { "dev" } else { "live" },
    })
}

pub fn health_routes() -> Router {
    Router::new().route("/api/health", get(get_health))
}
