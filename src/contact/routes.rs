// src/contact/routes.rs

use axum::{routing::post, Router};

use super::handlers;

pub const CONTACT_PATH: &str = "/api/contact";

pub fn contact_routes() -> Router {
    Router::new().route(CONTACT_PATH, post(handlers::submit_contact_form))
}
