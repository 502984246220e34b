//! Favorites.

use serde::{Deserialize, Serialize};

use crate::types::{Amount, BookId, FavoriteId};

/// A book the current user has marked as a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub id: FavoriteId,
    pub ub_id: BookId,
    pub title: String,
    #[serde(default)]
    pub cover: String,
    pub price: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}
