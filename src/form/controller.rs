// src/form/controller.rs
use reqwest::{Client, Url};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::contact::{ContactResponse, ContactSubmission, CONTACT_PATH};

pub const FALLBACK_ERROR: &str = "Something went wrong. Try emailing directly.";
pub const SEND_FAILED: &str = "Failed to send";
pub const SUCCESS_CONFIRMATION: &str = "Message sent! I'll respond within 24 hours.";

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactSubmission,
    status: SubmissionStatus,
}

/// Owns the contact form's field values and submission status, and posts
/// the fields to `/api/contact` on the configured site.
#[derive(Debug)]
pub struct FormController {
    http: Client,
    endpoint: Url,
    state: Arc<RwLock<FormState>>,
}

impl FormController {
    pub fn new(http: Client, site_url: &str) -> Result<Self, FormError> {
        let invalid = |reason: String| FormError::InvalidUrl {
            url: site_url.to_string(),
            reason,
        };
        let endpoint = Url::parse(site_url)
            .and_then(|base| base.join(CONTACT_PATH))
            .map_err(|e| invalid(e.to_string()))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https".to_string()));
        }

        Ok(Self {
            http,
            endpoint,
            state: Arc::new(RwLock::new(FormState::default())),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.state.write().await;
        match field {
            Field::Name => state.fields.name = value,
            Field::Email => state.fields.email = value,
            Field::Message => state.fields.message = value,
        }
    }

    pub async fn fields(&self) -> ContactSubmission {
        self.state.read().await.fields.clone()
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.state.read().await.status.clone()
    }

    pub async fn is_submit_enabled(&self) -> bool {
        self.state.read().await.status != SubmissionStatus::Loading
    }

    pub async fn submit_label(&self) -> &'static str {
        if self.is_submit_enabled().await {
            "Send Message"
        } else {
            "Sending..."
        }
    }

    /// Posts the current fields and returns the resulting status.
    ///
    /// While a previous submission is in flight this is a no-op that
    /// returns `Loading` without issuing a request. On success the fields
    /// are cleared; on failure they are kept for another attempt.
    ///
    /// The request runs on its own task, so dropping the returned future
    /// does not leave the form stuck in `Loading`: the attempt still settles
    /// into `Success` or `Error`.
    pub async fn submit(&self) -> SubmissionStatus {
        let payload = {
            let mut state = self.state.write().await;
            if state.status == SubmissionStatus::Loading {
                debug!("Submit ignored, a submission is already in flight");
                return SubmissionStatus::Loading;
            }
            state.status = SubmissionStatus::Loading;
            state.fields.clone()
        };

        let http = self.http.clone();
        let endpoint = self.endpoint.clone();
        let state = self.state.clone();

        let attempt = tokio::spawn(async move {
            let outcome = post_contact(&http, &endpoint, &payload).await;
            settle(&state, outcome).await
        });

        match attempt.await {
            Ok(status) => status,
            Err(e) => {
                warn!(error = %e, "Contact submission task failed");
                settle(&self.state, Err(FALLBACK_ERROR.to_string())).await
            }
        }
    }
}

/// Writes the outcome of an attempt back into the form state
async fn settle(state: &RwLock<FormState>, outcome: Result<(), String>) -> SubmissionStatus {
    let mut state = state.write().await;
    let status = match outcome {
        Ok(()) => {
            state.fields = ContactSubmission::default();
            SubmissionStatus::Success
        }
        Err(reason) => SubmissionStatus::Error(reason),
    };
    state.status = status.clone();
    status
}

/// Err carries the text to show the user
async fn post_contact(
    http: &Client,
    endpoint: &Url,
    payload: &ContactSubmission,
) -> Result<(), String> {
    let response = match http.post(endpoint.clone()).json(payload).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, endpoint = %endpoint, "Contact request failed");
            return Err(FALLBACK_ERROR.to_string());
        }
    };

    let status = response.status();
    let body: Value = match response.json().await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, status = %status, "Unreadable contact response");
            return Err(FALLBACK_ERROR.to_string());
        }
    };

    if !status.is_success() {
        let reason = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|reason| !reason.is_empty())
            .unwrap_or(SEND_FAILED);
        warn!(status = %status, reason = %reason, "Contact submission rejected");
        return Err(reason.to_string());
    }

    match serde_json::from_value::<ContactResponse>(body) {
        Ok(ContactResponse { id, message, .. }) => {
            info!(id = ?id, reply = ?message, "Contact form submitted")
        }
        Err(_) => info!("Contact form submitted"),
    }

    Ok(())
}
