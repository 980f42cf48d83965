// src/contact/handlers.rs
//! Contact form handler - relays submissions through the configured email provider

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Extension},
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::common::{safe_email_log, ApiError, AppState};

use super::models::{ContactRequest, ContactResponse};
use super::templates::build_contact_email;
use super::validators::validate_contact_request;

/// POST /api/contact - Submit contact form (public endpoint)
///
/// The body is taken as raw bytes so that malformed JSON, and bodies the
/// extractor refuses to buffer (e.g. over the size limit), surface as the
/// generic server error instead of axum's plain-text rejection.
pub async fn submit_contact_form(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let body =
        body.map_err(|e| ApiError::InternalServer(format!("unreadable request body: {}", e)))?;
    let request: ContactRequest = serde_json::from_slice(&body)?;
    let submission = validate_contact_request(request)?;

    let Some(mailer) = state.mailer.as_ref() else {
        info!(
            from_name = %submission.name,
            from_email = %submission.email,
            body = %submission.message,
            "Contact form submission (no RESEND_API_KEY set)"
        );
        return Ok(Json(ContactResponse::dev_mode()));
    };

    let email = build_contact_email(&submission);

    match mailer.send(&email).await {
        Ok(id) => {
            info!(
                message_id = ?id,
                from_name = %submission.name,
                from_email = %safe_email_log(&submission.email),
                provider = mailer.provider_name(),
                "Contact form email sent successfully"
            );
            Ok(Json(ContactResponse::delivered(id)))
        }
        Err(e) => {
            error!(
                error = %e,
                provider = mailer.provider_name(),
                from_email = %safe_email_log(&submission.email),
                "Failed to send contact form email"
            );
            Err(ApiError::EmailDelivery)
        }
    }
}
