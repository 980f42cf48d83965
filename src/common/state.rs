// Application state shared across all modules

use std::sync::Arc;

use crate::common::dev_mode::DevModeConfig;
use crate::services::EmailProvider;

/// Application state. `mailer` is `None` in dev mode.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Option<Arc<dyn EmailProvider>>,
}

impl AppState {
    pub fn dev_mode() -> Self {
        Self { mailer: None }
    }

    pub fn with_mailer(mailer: Arc<dyn EmailProvider>) -> Self {
        Self {
            mailer: Some(mailer),
        }
    }

    /// Builds the state from the dev mode decision, constructing the provider
    /// client only when submissions are to be relayed
    pub fn from_dev_mode<F>(dev_mode: &DevModeConfig, build_mailer: F) -> Self
    where
        F: FnOnce() -> Arc<dyn EmailProvider>,
    {
        if dev_mode.is_enabled() {
            Self::dev_mode()
        } else {
            Self::with_mailer(build_mailer())
        }
    }

    pub fn is_dev_mode(&self) -> bool {
        self.mailer.is_none()
    }
}
