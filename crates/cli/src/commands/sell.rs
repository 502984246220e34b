//! `sell` subcommands.

use bookmarket_client::BookmarketApi;
use bookmarket_core::{Amount, CreateUsedBookRequest, SoldBookStatus};
use clap::{Args, Subcommand};
use serde_json::{Value, json};

use super::to_json;
use crate::error::CliError;

#[derive(Args)]
pub struct ListingArgs {
    #[arg(long)]
    title: String,
    /// Asking price
    #[arg(long)]
    price: Amount,
    /// Cover image URL (see `bm-cli upload`)
    #[arg(long, default_value = "")]
    cover: String,
    /// Original list price
    #[arg(long)]
    list_price: Option<Amount>,
    #[arg(long)]
    writer: Option<String>,
    #[arg(long)]
    isbn: Option<String>,
    #[arg(long)]
    publisher: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Condition, 1 to 10
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=10))]
    used_degree: Option<u32>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    stock: Option<u32>,
}

#[derive(Subcommand)]
pub enum SellAction {
    /// List a book for sale
    Create(ListingArgs),
    /// My listings
    List {
        /// Only listings in this status (`CHECKING`, `SHIPPED`, `COMPLETED`)
        #[arg(short, long)]
        status: Option<SoldBookStatus>,
    },
    /// Most recent listings
    Top,
}

pub async fn run(api: &BookmarketApi, action: SellAction) -> Result<Value, CliError> {
    match action {
        SellAction::Create(args) => {
            let request = CreateUsedBookRequest {
                title: args.title,
                price: args.price,
                cover: args.cover,
                list_price: args.list_price,
                writer: args.writer,
                isbn: args.isbn,
                publisher: args.publisher,
                category: args.category,
                used_degree: args.used_degree,
                description: args.description,
                stock: args.stock,
                ..CreateUsedBookRequest::default()
            };
            let id = api.create_used_book(&request).await?;
            Ok(json!({ "ubId": id }))
        }
        SellAction::List { status } => to_json(&api.get_sold_books(status).await?),
        SellAction::Top => to_json(&api.get_top_sold_books().await?),
    }
}
