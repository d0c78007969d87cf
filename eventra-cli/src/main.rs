//! Eventra CLI
//!
//! Command-line interface for the eventra payments API.

use anyhow::Result;
use chrono::{NaiveDateTime, Timelike};
use clap::{Args, Parser, Subcommand};

use eventra_client::PaymentsClient;
use eventra_types::{PaymentId, PaymentRequest, ReservationId, StatusId, local_datetime};

#[derive(Parser)]
#[command(name = "eventra")]
#[command(author, version, about = "Eventra payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the payments API
    #[arg(long, env = "EVENTRA_API_URL", default_value = "http://localhost:3000")]
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
    /// Payment status lookup
    Status {
        #[command(subcommand)]
        action: StatusCommands,
    },
    /// Check API health
    Health,
}

/// Fields shared by add, process and update.
#[derive(Args)]
struct PaymentArgs {
    /// Reservation being paid for
    #[arg(long)]
    reservation: i64,
    /// Amount in the smallest currency unit (céntimos)
    #[arg(long)]
    amount: i64,
    /// Payment method, e.g. CARD
    #[arg(long, default_value = "CARD")]
    method: String,
    /// Status ID (1 PENDING, 2 COMPLETED, 3 CANCELLED)
    #[arg(long, default_value_t = 1)]
    status: i64,
    /// Payment date as yyyy-MM-ddTHH:mm:ss (defaults to now)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDateTime>,
}

impl PaymentArgs {
    fn into_request(self) -> PaymentRequest {
        let payment_date = self.date.unwrap_or_else(now);
        PaymentRequest {
            reservation_id: ReservationId::new(self.reservation),
            amount: self.amount,
            payment_method: self.method,
            status_id: StatusId::new(self.status),
            payment_date,
        }
    }
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Record a payment
    Add(PaymentArgs),
    /// Create a checkout preference for a reservation
    Process(PaymentArgs),
    /// List all payments
    List,
    /// Get payment details
    Get {
        /// Payment ID
        id: i64,
    },
    /// Overwrite a payment
    Update {
        /// Payment ID
        id: i64,
        #[command(flatten)]
        payment: PaymentArgs,
    },
    /// Delete a payment
    Delete {
        /// Payment ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum StatusCommands {
    /// List payment statuses
    List,
}

fn parse_date(s: &str) -> Result<NaiveDateTime> {
    local_datetime::parse(s)
        .map_err(|_| anyhow::anyhow!("Invalid date: {}. Expected yyyy-MM-ddTHH:mm:ss", s))
}

/// Current local time truncated to whole seconds.
fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
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
            PaymentCommands::Add(args) => {
                let payment = client.add_payment(&args.into_request()).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Process(args) => {
                let preference = client.process_payment(&args.into_request()).await?;
                println!("{}", serde_json::to_string_pretty(&preference)?);
            }
            PaymentCommands::List => {
                let payments = client.list_payments().await?;
                println!("{}", serde_json::to_string_pretty(&payments)?);
            }
            PaymentCommands::Get { id } => {
                let payment = client.get_payment(PaymentId::new(id)).await?;
                println!("{}", serde_json::to_string_pretty(&payment)?);
            }
            PaymentCommands::Update { id, payment } => {
                let updated = client
                    .update_payment(PaymentId::new(id), &payment.into_request())
                    .await?;
                println!("{}", serde_json::to_string_pretty(&updated)?);
            }
            PaymentCommands::Delete { id } => {
                client.delete_payment(PaymentId::new(id)).await?;
                println!("✓ Payment {} deleted", id);
            }
        },

        Commands::Status { action } => match action {
            StatusCommands::List => {
                let statuses = client.list_statuses().await?;
                println!("{}", serde_json::to_string_pretty(&statuses)?);
            }
        },
    }

    Ok(())
}
