// src/contact/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates;
pub mod validators;


pub use models::{ContactRequest, ContactResponse, ContactSubmission};
pub use routes::{contact_routes, CONTACT_PATH};
