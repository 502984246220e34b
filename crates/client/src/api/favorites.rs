//! Saved books.

use bookmarket_core::{BookId, FavoriteId, FavoriteItem};
use tracing::instrument;

use super::{BookmarketApi, done};
use crate::error::ApiError;
use crate::http::RequestOptions;

impl BookmarketApi {
    /// The logged-in user's favorites.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_favorites(&self) -> Result<Vec<FavoriteItem>, ApiError> {
        self.http
            .get("/favorites", RequestOptions::new())
            .await?
            .into_data()
    }

    /// Save a book. The book id travels in the query string; the body is empty.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn add_favorite(&self, ub_id: BookId) -> Result<(), ApiError> {
        self.http
            .post(
                "/favorites",
                &serde_json::json!({}),
                RequestOptions::new().query("ubId", ub_id),
            )
            .await
            .map(done)
    }

    /// Remove a favorite by its own id (not the book id).
    ///
    /// Removing an id that is already gone either succeeds or fails with
    /// whatever the server reports; the remaining favorites are unaffected.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, id: FavoriteId) -> Result<(), ApiError> {
        self.http
            .delete("/favorites", RequestOptions::new().query("id", id))
            .await
            .map(done)
    }

    /// Most recently saved favorites.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_top_favorites(&self) -> Result<Vec<FavoriteItem>, ApiError> {
        self.http
            .get("/favorites/top5", RequestOptions::new())
            .await?
            .into_data()
    }
}
