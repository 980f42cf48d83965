// Common module - shared types and utilities across all modules

pub mod config;
pub mod dev_mode;
pub mod error;
pub mod helpers;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use dev_mode::DevModeConfig;
pub use error::ApiError;
pub use helpers::safe_email_log;
pub use state::AppState;
