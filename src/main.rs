// src/main.rs
use clap::Parser;
use dotenv::dotenv;
use reqwest::Client;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portfolio_api::common::dev_mode::print_dev_mode_status;
use portfolio_api::common::{AppState, ServerConfig};
use portfolio_api::services::{EmailProvider, ResendMailer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let config = ServerConfig::parse();
    let dev_mode = config.dev_mode();
    print_dev_mode_status(&dev_mode);

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let state = AppState::from_dev_mode(&dev_mode, || {
        let api_key = config.resend_api_key.clone().unwrap_or_default();
        let mailer: Arc<dyn EmailProvider> = Arc::new(ResendMailer::new(Client::new(), api_key));
        info!("ResendMailer initialized");
        mailer
    });

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let origins = config.allowed_origins();
    info!(origins = ?origins, "CORS origins configured");

    let app = portfolio_api::app(state).layer(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    );

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
