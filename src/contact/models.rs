// src/contact/models.rs

use serde::{Deserialize, Serialize};

pub const DEV_MODE_MESSAGE: &str = "Message received (dev mode)";

/// A validated contact form submission. Also the wire shape the form posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Raw request body; any field may be absent or null
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ContactResponse {
    pub fn dev_mode() -> Self {
        Self {
            success: true,
            message: Some(DEV_MODE_MESSAGE.to_string()),
            id: None,
        }
    }

    pub fn delivered(id: Option<String>) -> Self {
        Self {
            success: true,
            message: None,
            id,
        }
    }
}
