use crate::common::error::{ApiError, FIELDS_REQUIRED, INVALID_EMAIL};

use super::models::{ContactRequest, ContactSubmission};

/// Validate a raw contact request. Presence is checked for every field
/// before the email shape, so a missing field always wins.
pub fn validate_contact_request(request: ContactRequest) -> Result<ContactSubmission, ApiError> {
    let (name, email, message) = match (request.name, request.email, request.message) {
        (Some(name), Some(email), Some(message))
            if !name.is_empty() && !email.is_empty() && !message.is_empty() =>
        {
            (name, email, message)
        }
        _ => return Err(ApiError::ValidationError(FIELDS_REQUIRED.to_string())),
    };

    validate_email(&email)?;

    Ok(ContactSubmission {
        name,
        email,
        message,
    })
}

/// Structural check only: the address must contain an `@`
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    if !email.contains('@') {
        return Err(ApiError::ValidationError(INVALID_EMAIL.to_string()));
    }

    Ok(())
}
