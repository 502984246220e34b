//! Bookmarket CLI - marketplace client for the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Log in; the session is kept in BOOKMARKET_SESSION_FILE
//! bm-cli login -t 1234567890 -p secret
//!
//! # Browse and buy
//! bm-cli products search "harry potter"
//! bm-cli cart add 7 --quantity 2
//! bm-cli cart checkout --lines c-1,c-2 --address 3 --payment ALIPAY
//!
//! # Ask the navigation guard about a page
//! bm-cli navigate /orders
//! ```
//!
//! Every command prints its result as JSON on stdout. Logs go to stderr,
//! filtered by `RUST_LOG`.
//!
//! # Environment Variables
//!
//! Client settings are described in `bookmarket_client::config`. In addition:
//! - `SENTRY_DSN` - Report errors to Sentry (optional)
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (optional)
//! - `BOOKMARKET_PASSWORD` - Password for `login` when `--password` is omitted

#![cfg_attr(not(test), forbid(unsafe_code))]

use bookmarket_client::{BookmarketApi, ClientConfig, Router, SessionStore};
use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use commands::Context;
use commands::account::{AccountArgs, ProfileAction, RegisterArgs};
use commands::address::AddressAction;
use commands::cart::CartAction;
use commands::catalog::ProductsAction;
use commands::favorites::FavoritesAction;
use commands::orders::{BuyArgs, OrdersAction};
use commands::sell::SellAction;
use error::CliError;

#[derive(Parser)]
#[command(name = "bm-cli")]
#[command(author, version, about = "Bookmarket marketplace client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and keep the session
    Login(AccountArgs),
    /// Forget the stored session
    Logout,
    /// Create an account
    Register(RegisterArgs),
    /// Show the logged-in user
    Whoami,
    /// Manage the logged-in user's profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Upload an image and print its URL
    Upload {
        /// Image file
        path: std::path::PathBuf,
    },
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Buy a single book directly
    Buy(BuyArgs),
    /// Purchase orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Sell used books
    Sell {
        #[command(subcommand)]
        action: SellAction,
    },
    /// Saved books
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Address book
    Address {
        #[command(subcommand)]
        action: AddressAction,
    },
    /// Check whether a page may be opened with the current session
    Navigate {
        /// Full path, e.g. `/orders?status=PAID`
        path: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN")
        .ok()
        .filter(|dsn| !dsn.trim().is_empty())?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: std::env::var("SENTRY_ENVIRONMENT")
                .ok()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load .env before Sentry reads SENTRY_DSN
    let _ = dotenvy::dotenv();
    let _sentry_guard = init_sentry();

    // Defaults to info level for the client if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bookmarket_client=info,bm_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let session = SessionStore::persistent(&config.session_file);
    let ctx = Context {
        api: BookmarketApi::from_config(&config, session.clone())?,
        router: Router::application(session),
    };

    let output = commands::execute(cli.command, &ctx).await?;
    print_json(&output)
}

#[allow(clippy::print_stdout)]
fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
