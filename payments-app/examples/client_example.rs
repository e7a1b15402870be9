//! Client example walking a payment through its lifecycle against a running server.
//!
//! Run with: cargo run -p payments-app --example client_example --no-default-features --features sqlite

use payments_client::PaymentsClient;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::build_repo;
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind to an ephemeral port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("payments.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("Starting server on {addr}...");
    println!("   Database: {db_url}");

    let repo = build_repo(&db_url).await?;
    let router = HttpServer::new(PaymentService::new(repo)).router();

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {err}");
        }
    });

    let client = PaymentsClient::new(format!("http://{addr}"));

    let health = client.health().await?;
    println!("Server health: {health}");

    // A negative amount is refused
    let response = client.create_payment("-5.00").await;
    println!("Negative amount refused: {}", response.unwrap_err());

    let payment = client.create_payment("100.21").await?;
    let id = payment.id.clone().unwrap_or_default();
    println!("Created payment {id} for {}", payment.amount);

    let second = client.create_payment("0.99").await?;
    println!(
        "Created payment {} for {}",
        second.id.unwrap_or_default(),
        second.amount
    );

    let updated = client.update_payment(&id, "1.00").await?;
    println!("Updated payment {id} to {}", updated.amount);

    println!("\nAll payments:");
    for p in client.list_payments().await? {
        println!(
            "   - {} {} ({})",
            p.id.unwrap_or_default(),
            p.amount,
            p.links.self_link
        );
    }

    client.delete_payment(&id).await?;
    println!("\nDeleted payment {id}");

    let gone = client.get_payment(&id).await;
    println!("Lookup after delete: {}", gone.unwrap_err());

    Ok(())
}
