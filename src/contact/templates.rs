// src/contact/templates.rs
//! Outbound email for a contact submission

use crate::services::OutboundEmail;

use super::models::ContactSubmission;

pub const CONTACT_FROM: &str = "Portfolio Contact <onboarding@resend.dev>";
pub const CONTACT_TO: &str = "uzairsaleemdev@gmail.com";

pub fn build_contact_email(submission: &ContactSubmission) -> OutboundEmail {
    OutboundEmail {
        from: CONTACT_FROM.to_string(),
        to: vec![CONTACT_TO.to_string()],
        reply_to: submission.email.clone(),
        subject: contact_subject(&submission.name),
        html: contact_email_html(submission),
    }
}

pub fn contact_subject(name: &str) -> String {
    format!("Portfolio inquiry from {}", name)
}

/// Submitter text is interpolated as-is, without HTML escaping.
// TODO: escape name/email/message once the site owner signs off on changing the rendered output
pub fn contact_email_html(submission: &ContactSubmission) -> String {
    format!(
        r##"<div style="font-family: sans-serif; max-width: 600px; margin: 0 auto; background: #0a0a0a; color: #ffffff; padding: 32px; border-radius: 12px; border: 1px solid #22c55e33;">
    <h2 style="color: #22c55e; margin-top: 0;">New Portfolio Inquiry</h2>
    <p style="color: #999; margin-bottom: 24px;">Someone reached out through the portfolio contact form</p>

    <div style="background: #111; padding: 20px; border-radius: 8px; margin-bottom: 16px;">
        <p style="color: #888; margin: 0 0 4px; font-size: 12px; text-transform: uppercase; letter-spacing: 1px;">From</p>
        <p style="color: #fff; margin: 0; font-size: 16px; font-weight: 600;">{name}</p>
        <p style="color: #22c55e; margin: 4px 0 0; font-size: 14px;">{email}</p>
    </div>

    <div style="background: #111; padding: 20px; border-radius: 8px;">
        <p style="color: #888; margin: 0 0 8px; font-size: 12px; text-transform: uppercase; letter-spacing: 1px;">Message</p>
        <p style="color: #ddd; margin: 0; line-height: 1.6; white-space: pre-wrap;">{message}</p>
    </div>

    <p style="color: #555; font-size: 12px; margin-top: 24px; margin-bottom: 0;">
        Reply directly to this email to respond to {name}.
    </p>
</div>"##,
        name = submission.name,
        email = submission.email,
        message = submission.message,
    )
}
