// src/send_contact.rs
//! Submits the contact form from the command line, the same way the page does

use clap::Parser;
use dotenv::dotenv;
use reqwest::Client;
use tracing_subscriber::EnvFilter;

use portfolio_api::form::{Field, FormController, SubmissionStatus, SUCCESS_CONFIRMATION};

#[derive(Parser, Debug)]
#[command(name = "send_contact", about = "Send a message through the portfolio contact form")]
struct Cli {
    /// Site the contact API is served from
    #[arg(long, env = "CONTACT_API_URL", default_value = "http://localhost:8080")]
    api_url: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let controller = FormController::new(Client::new(), &cli.api_url)?;

    controller.set_field(Field::Name, cli.name).await;
    controller.set_field(Field::Email, cli.email).await;
    controller.set_field(Field::Message, cli.message).await;

    println!("{}", controller.submit_label().await);

    match controller.submit().await {
        SubmissionStatus::Success => {
            println!("✓ {}", SUCCESS_CONFIRMATION);
            Ok(())
        }
        SubmissionStatus::Error(reason) => anyhow::bail!(reason),
        status => anyhow::bail!("submission ended in unexpected state {:?}", status),
    }
}
