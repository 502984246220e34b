//! `favorites` subcommands.

use bookmarket_client::BookmarketApi;
use bookmarket_core::{BookId, FavoriteId};
use clap::Subcommand;
use serde_json::Value;

use super::{ok, to_json};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// My favorites
    List,
    /// Save a book
    Add { ub_id: BookId },
    /// Remove a favorite by its id (see `favorites list`)
    Remove { id: FavoriteId },
    /// Most recent favorites
    Top,
}

pub async fn run(api: &BookmarketApi, action: FavoritesAction) -> Result<Value, CliError> {
    match action {
        FavoritesAction::List => to_json(&api.get_favorites().await?),
        FavoritesAction::Add { ub_id } => {
            api.add_favorite(ub_id).await?;
            Ok(ok())
        }
        FavoritesAction::Remove { id } => {
            api.remove_favorite(id).await?;
            Ok(ok())
        }
        FavoritesAction::Top => to_json(&api.get_top_favorites().await?),
    }
}
