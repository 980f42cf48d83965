// src/services/mod.rs
//
// Outbound integrations used by the domain modules

pub mod email;

// Re-export commonly used types for convenience
pub use email::{EmailError, EmailProvider, OutboundEmail, ResendMailer};
