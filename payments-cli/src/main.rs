//! Payments CLI
//!
//! Command-line interface for the Payments API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use payments_client::PaymentsClient;
use payments_types::{Money, PaymentId};

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Create a new payment
    Create {
        /// Amount as a decimal string, e.g. 100.21
        #[arg(long, value_parser = parse_amount)]
        amount: Money,
    },
    /// Get payment details
    Get {
        /// Payment ID (UUID)
        #[arg(value_parser = parse_payment_id)]
        id: PaymentId,
    },
    /// List all payments
    List,
    /// Replace the amount of a payment
    Update {
        /// Payment ID (UUID)
        #[arg(value_parser = parse_payment_id)]
        id: PaymentId,
        /// New amount as a decimal string
        #[arg(long, value_parser = parse_amount)]
        amount: Money,
    },
    /// Delete a payment
    Delete {
        /// Payment ID (UUID)
        #[arg(value_parser = parse_payment_id)]
        id: PaymentId,
    },
}

fn parse_amount(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

fn parse_payment_id(s: &str) -> Result<PaymentId, String> {
    s.parse().map_err(|_| format!("Invalid payment ID: {s}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Payment { action } => match action {
            PaymentCommands::Create { amount } => {
                let payment = client.create_payment(&amount.to_string()).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Get { id } => {
                let payment = client.get_payment(&id.to_string()).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::List => {
                let payments = client.list_payments().await?;
                println!("{}", serde_json::to_string_pretty(&payments)?);
            }
            PaymentCommands::Update { id, amount } => {
                let payment = client
                    .update_payment(&id.to_string(), &amount.to_string())
                    .await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Delete { id } => {
                client.delete_payment(&id.to_string()).await?;
                println!("✓ Payment {id} deleted");
            }
        },
    }

    Ok(())
}
