//! `products` subcommands.

use bookmarket_client::BookmarketApi;
use bookmarket_core::BookId;
use clap::Subcommand;
use serde_json::Value;

use super::to_json;
use crate::error::CliError;

#[derive(Subcommand)]
pub enum ProductsAction {
    /// Show one product
    Get { id: BookId },
    /// Products related to one product
    Recommend { id: BookId },
    /// List products, optionally in one category
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Best sellers in a category
    Top { category: String },
    /// Full-text search
    Search { keyword: String },
    /// Title completions for a prefix
    Suggest { prefix: String },
}

pub async fn run(api: &BookmarketApi, action: ProductsAction) -> Result<Value, CliError> {
    match action {
        ProductsAction::Get { id } => to_json(&api.get_product(id).await?),
        ProductsAction::Recommend { id } => to_json(&api.get_recommended_products(id).await?),
        ProductsAction::List { category } => {
            to_json(&api.list_products(category.as_deref()).await?)
        }
        ProductsAction::Top { category } => {
            to_json(&api.get_top_products_by_category(&category).await?)
        }
        ProductsAction::Search { keyword } => to_json(&api.search_products(&keyword).await?),
        ProductsAction::Suggest { prefix } => to_json(&api.search_suggestions(&prefix).await?),
    }
}
