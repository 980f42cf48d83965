// Server configuration from CLI arguments and environment

use axum::http::HeaderValue;
use clap::Parser;

use super::dev_mode::{apply_cli_override, DevModeConfig};

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:3001,http://localhost:5173";

#[derive(Parser, Debug, Clone)]
#[command(name = "portfolio_api", about = "Portfolio contact form API")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins
    #[arg(long, env = "CORS_ORIGINS", default_value = DEFAULT_CORS_ORIGINS)]
    pub cors_origins: String,

    /// Resend API key; submissions are only logged when unset
    #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
    pub resend_api_key: Option<String>,

    /// Log submissions instead of emailing them even if a key is set
    #[arg(long = "dev", alias = "dev-mode")]
    pub force_dev: bool,
}

impl ServerConfig {
    pub fn dev_mode(&self) -> DevModeConfig {
        apply_cli_override(
            DevModeConfig::from_api_key(self.resend_api_key.as_deref()),
            self.force_dev,
        )
    }

    /// Unparseable origins are skipped
    pub fn allowed_origins(&self) -> Vec<HeaderValue> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["portfolio_api"];
        argv.extend_from_slice(args);
        ServerConfig::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_explicit_arguments() {
        let config = parse(&[
            "--port",
            "9000",
            "--cors-origins",
            "https://example.dev, http://localhost:3000,,",
            "--resend-api-key",
            "re_test",
        ]);

        assert_eq!(config.port, 9000);
        assert_eq!(config.allowed_origins().len(), 2);
        assert!(!config.dev_mode().is_enabled());
    }

    #[test]
    fn test_dev_flag_overrides_key() {
        let config = parse(&["--resend-api-key", "re_test", "--dev", "--port", "1"]);
        let dev_mode = config.dev_mode();
        assert!(dev_mode.enabled);
        assert!(dev_mode.forced);
    }

    #[test]
    fn test_invalid_origin_is_skipped() {
        let config = parse(&["--cors-origins", "http://ok.dev,bad\u{7f}origin", "--port", "1"]);
        assert_eq!(config.allowed_origins().len(), 1);
    }
}
