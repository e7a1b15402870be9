//! # Payments Application
//!
//! Binary that wires together all the components:
//! - Load configuration from flags and environment
//! - Initialize structured logging
//! - Initialize the repository adapter
//! - Create the payment service
//! - Start the HTTP server

mod config;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, LogFormat, redact_url};
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::build_repo;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,payments_app=debug,payments_hex=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::parse();
    init_tracing(config.log_format);

    tracing::info!("Starting payments server on {}", config.addr);
    tracing::info!("Using database: {}", redact_url(&config.database_url));

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    let service = PaymentService::new(repo);
    let server = HttpServer::new(service);

    server.run(&config.addr).await?;

    tracing::info!("Server stopped");
    Ok(())
}
