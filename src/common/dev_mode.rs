// src/common/dev_mode.rs
//! Development mode configuration
//! Without a provider credential, contact submissions are logged instead of emailed

use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevModeConfig {
    pub enabled: bool,
    /// Set when `--dev` turned dev mode on although a credential was present
    pub forced: bool,
}

impl DevModeConfig {
    /// An empty or whitespace-only key counts as not configured
    pub fn from_api_key(api_key: Option<&str>) -> Self {
        let configured = api_key.map(|k| !k.trim().is_empty()).unwrap_or(false);

        Self {
            enabled: !configured,
            forced: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mode_name(&self) -> &'static str {
        if self.enabled {
            "dev"
        } else {
            "live"
        }
    }
}

/// Override dev mode from the `--dev` CLI flag
pub fn apply_cli_override(mut config: DevModeConfig, force_dev: bool) -> DevModeConfig {
    if force_dev && !config.enabled {
        info!("CLI override: dev mode forced on");
        config.enabled = true;
        config.forced = true;
    }

    config
}

/// Print dev mode status on startup
pub fn print_dev_mode_status(config: &DevModeConfig) {
    if config.enabled {
        warn!("DEV MODE ENABLED: contact submissions are logged, not emailed");
        if config.forced {
            warn!("   RESEND_API_KEY is set but ignored because of --dev");
        } else {
            warn!("   Set RESEND_API_KEY to relay submissions through Resend");
        }
    } else {
        info!("Live mode - contact submissions are relayed through Resend");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_enables_dev_mode() {
        let config = DevModeConfig::from_api_key(None);
        assert!(config.is_enabled());
        assert_eq!(config.mode_name(), "dev");
    }

    #[test]
    fn test_blank_key_enables_dev_mode() {
        assert!(DevModeConfig::from_api_key(Some("")).is_enabled());
        assert!(DevModeConfig::from_api_key(Some("   ")).is_enabled());
    }

    #[test]
    fn test_configured_key_disables_dev_mode() {
        let config = DevModeConfig::from_api_key(Some("re_123"));
        assert!(!config.is_enabled());
        assert_eq!(config.mode_name(), "live");
    }

    #[test]
    fn test_cli_override_forces_dev_mode() {
        let config = apply_cli_override(DevModeConfig::from_api_key(Some("re_123")), true);
        assert!(config.enabled);
        assert!(config.forced);

        let untouched = apply_cli_override(DevModeConfig::from_api_key(Some("re_123")), false);
        assert!(!untouched.enabled);

        // Already in dev mode, nothing is forced
        let already = apply_cli_override(DevModeConfig::from_api_key(None), true);
        assert!(already.enabled);
        assert!(!already.forced);
    }
}
