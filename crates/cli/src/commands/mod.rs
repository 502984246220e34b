//! Command implementations.
//!
//! Each command runs one catalog call (or a guard evaluation) and returns
//! its result as JSON for `main` to print.

pub mod account;
pub mod address;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod navigate;
pub mod orders;
pub mod sell;

use bookmarket_client::{BookmarketApi, Router};
use serde::Serialize;
use serde_json::{Value, json};

use crate::Commands;
use crate::error::CliError;

/// Everything a command needs.
pub struct Context {
    pub api: BookmarketApi,
    pub router: Router,
}

/// Run `command` and return what it should print.
///
/// # Errors
///
/// Returns `CliError` if arguments are invalid or the API call fails.
pub async fn execute(command: Commands, ctx: &Context) -> Result<Value, CliError> {
    match command {
        Commands::Login(args) => account::login(&ctx.api, args).await,
        Commands::Logout => account::logout(&ctx.api),
        Commands::Register(args) => account::register(&ctx.api, args).await,
        Commands::Whoami => to_json(&ctx.api.get_current_user().await?),
        Commands::Profile { action } => account::profile(&ctx.api, action).await,
        Commands::Upload { path } => to_json(&ctx.api.upload_image_file(&path).await?),
        Commands::Products { action } => catalog::run(&ctx.api, action).await,
        Commands::Cart { action } => cart::run(&ctx.api, action).await,
        Commands::Buy(args) => orders::buy(&ctx.api, args).await,
        Commands::Orders { action } => orders::run(&ctx.api, action).await,
        Commands::Sell { action } => sell::run(&ctx.api, action).await,
        Commands::Favorites { action } => favorites::run(&ctx.api, action).await,
        Commands::Address { action } => address::run(&ctx.api, action).await,
        Commands::Navigate { path } => Ok(navigate::run(&ctx.router, &path)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

/// Output of commands that only succeed or fail.
fn ok() -> Value {
    json!({ "ok": true })
}
