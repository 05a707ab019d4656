//! Mango Market CLI - operator console for the marketplace backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in (persists the session file)
//! mm-cli auth login -e vendor@example.com -p <password>
//!
//! # Orders
//! mm-cli orders list
//! mm-cli orders set-status 6617f2a9c4 delivered
//! mm-cli orders settle 6617f2a9c4 --kind floating-cash --status paid
//!
//! # Products
//! mm-cli products list
//! mm-cli products variations update <product> <variation> \
//!     --price 120 --quantity 25 --image-url https://... --image-file ./new.png
//! ```
//!
//! # Environment Variables
//!
//! - `MARKET_API_BASE_URL` - Base URL of the marketplace backend
//! - `MARKET_SESSION_FILE` - Session file path (optional)
//! - `RUST_LOG` - Log filter (defaults to info for the console crates)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::Console;

#[derive(Parser)]
#[command(name = "mm-cli")]
#[command(author, version, about = "Mango Market operator console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, log out, and inspect the session
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Orders: listing, status workflow, payments, settlements
    Orders {
        #[command(subcommand)]
        action: commands::orders::OrderAction,
    },
    /// Chat orders: conversational-flow orders with editable rows
    ChatOrders {
        #[command(subcommand)]
        action: commands::chat_orders::ChatOrderAction,
    },
    /// Products and their variations
    Products {
        #[command(subcommand)]
        action: commands::products::ProductAction,
    },
    /// Product categories (global or vendor-scoped)
    Categories {
        #[command(subcommand)]
        action: commands::catalog::CategoryAction,
    },
    /// Storefront banners
    Banners {
        #[command(subcommand)]
        action: commands::catalog::BannerAction,
    },
    /// Vendor accounts (admin)
    Vendors {
        #[command(subcommand)]
        action: commands::vendors::VendorAction,
    },
    /// Delivery drivers (admin)
    Drivers {
        #[command(subcommand)]
        action: commands::drivers::DriverAction,
    },
    /// FAQs, inquiries, tickets, contact messages, and settings
    Support {
        #[command(subcommand)]
        action: commands::support::SupportAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; defaults to info for our crates if
    // RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mm_cli=info,mango_market_client=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let console = Console::bootstrap().await?;

    match cli.command {
        Commands::Auth { action } => commands::auth::run(&console, action).await,
        Commands::Orders { action } => commands::orders::run(&console, action).await,
        Commands::ChatOrders { action } => commands::chat_orders::run(&console, action).await,
        Commands::Products { action } => commands::products::run(&console, action).await,
        Commands::Categories { action } => commands::catalog::run_categories(&console, action).await,
        Commands::Banners { action } => commands::catalog::run_banners(&console, action).await,
        Commands::Vendors { action } => commands::vendors::run(&console, action).await,
        Commands::Drivers { action } => commands::drivers::run(&console, action).await,
        Commands::Support { action } => commands::support::run(&console, action).await,
    }
}
