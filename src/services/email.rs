// src/services/email.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::common::safe_email_log;

pub const RESEND_API_BASE: &str = "https://api.resend.com";

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A fully addressed message ready for a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Transactional email provider. Returns the provider-assigned message id,
/// if the provider reported one.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, EmailError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str {
        "unknown"
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Resend (https://resend.com/docs/api-reference/emails/send-email)
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ResendMailer {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: RESEND_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailProvider for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<Option<String>, EmailError> {
        let payload = SendEmailRequest {
            from: &email.from,
            to: &email.to,
            reply_to: &email.reply_to,
            subject: &email.subject,
            html: &email.html,
        };

        debug!(
            endpoint = %self.endpoint(),
            reply_to = %safe_email_log(&email.reply_to),
            "Sending email via Resend"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ResendErrorBody>(&text) {
                Ok(ResendErrorBody {
                    name: Some(name),
                    message: Some(message),
                }) => format!("{}: {}", name, message),
                Ok(ResendErrorBody {
                    message: Some(message),
                    ..
                }) => message,
                _ => text,
            };
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| EmailError::InvalidResponse(e.to_string()))?;

        info!(message_id = ?body.id, to = ?email.to, "Email sent successfully via Resend");

        Ok(body.id)
    }

    fn provider_name(&self) -> &'static str {
        "resend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_server;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn sample_email() -> OutboundEmail {
        OutboundEmail {
            from: "Portfolio Contact <onboarding@resend.dev>".to_string(),
            to: vec!["owner@example.com".to_string()],
            reply_to: "jane@x.com".to_string(),
            subject: "Portfolio inquiry from Jane".to_string(),
            html: "<p>Hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_payload_with_bearer_auth() {
        let captured: Arc<Mutex<Option<(Option<String>, Value)>>> = Arc::new(Mutex::new(None));
        let sink = captured.clone();

        let app = Router::new().route(
            "/emails",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *sink.lock().await = Some((auth, body));
                    Json(json!({ "id": "email_123" }))
                }
            }),
        );
        let addr = spawn_server(app).await;

        let mailer = ResendMailer::new(Client::new(), "re_test_key")
            .with_base_url(format!("http://{}/", addr));
        let id = mailer.send(&sample_email()).await.unwrap();
        assert_eq!(id.as_deref(), Some("email_123"));

        let (auth, body) = captured.lock().await.take().expect("request captured");
        assert_eq!(auth.as_deref(), Some("Bearer re_test_key"));
        assert_eq!(body["from"], "Portfolio Contact <onboarding@resend.dev>");
        assert_eq!(body["to"], json!(["owner@example.com"]));
        assert_eq!(body["reply_to"], "jane@x.com");
        assert_eq!(body["subject"], "Portfolio inquiry from Jane");
        assert_eq!(body["html"], "<p>Hi</p>");
    }

    #[tokio::test]
    async fn test_send_maps_provider_rejection() {
        let app = Router::new().route(
            "/emails",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "statusCode": 422,
                        "name": "validation_error",
                        "message": "Invalid `from` field."
                    })),
                )
            }),
        );
        let addr = spawn_server(app).await;

        let mailer =
            ResendMailer::new(Client::new(), "re_test_key").with_base_url(format!("http://{}", addr));
        let err = mailer.send(&sample_email()).await.unwrap_err();

        match err {
            EmailError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "validation_error: Invalid `from` field.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_accepts_success_without_id() {
        let app = Router::new().route("/emails", post(|| async { Json(json!({ "ok": true })) }));
        let addr = spawn_server(app).await;

        let mailer =
            ResendMailer::new(Client::new(), "re_test_key").with_base_url(format!("http://{}", addr));
        assert_eq!(mailer.send(&sample_email()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_send_rejects_non_json_success() {
        let app = Router::new().route("/emails", post(|| async { "queued" }));
        let addr = spawn_server(app).await;

        let mailer =
            ResendMailer::new(Client::new(), "re_test_key").with_base_url(format!("http://{}", addr));
        let err = mailer.send(&sample_email()).await.unwrap_err();
        assert!(matches!(err, EmailError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_send_reports_transport_failure() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mailer =
            ResendMailer::new(Client::new(), "re_test_key").with_base_url(format!("http://{}", addr));
        let err = mailer.send(&sample_email()).await.unwrap_err();
        assert!(matches!(err, EmailError::RequestFailed(_)));
    }

    #[test]
    fn test_provider_name() {
        let mailer = ResendMailer::new(Client::new(), "key");
        assert_eq!(mailer.provider_name(), "resend");
        assert_eq!(mailer.endpoint(), "https://api.resend.com/emails");
    }
}
