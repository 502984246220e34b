//! Catalog browsing: product detail, recommendations, category lists and search.

use bookmarket_core::{BookId, Product};
use tracing::instrument;

use super::{BookmarketApi, segment};
use crate::error::ApiError;
use crate::http::RequestOptions;

impl BookmarketApi {
    /// Get a single product.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails or the product does not exist.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: BookId) -> Result<Product, ApiError> {
        self.http
            .get(&format!("/used_books/{id}"), RequestOptions::new())
            .await?
            .into_data()
    }

    /// Get products related to `id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_recommended_products(&self, id: BookId) -> Result<Vec<Product>, ApiError> {
        self.http
            .get(&format!("/used_books/recommend/{id}"), RequestOptions::new())
            .await?
            .into_data()
    }

    /// List products, optionally restricted to one category.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, ApiError> {
        self.http
            .get(
                "/used_books/category",
                RequestOptions::new().query_opt("category", category),
            )
            .await?
            .into_data()
    }

    /// Best sellers in `category`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_top_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, ApiError> {
        self.http
            .get(
                "/used_books/category/top",
                RequestOptions::new().query("category", category),
            )
            .await?
            .into_data()
    }

    /// Full-text search.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn search_products(&self, keyword: &str) -> Result<Vec<Product>, ApiError> {
        self.http
            .get(
                &format!("/usedbook/search/{}", segment(keyword)),
                RequestOptions::new(),
            )
            .await?
            .into_data()
    }

    /// Title completions for a partially typed keyword.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn search_suggestions(&self, prefix: &str) -> Result<Vec<String>, ApiError> {
        self.http
            .get(
                &format!("/usedbook/search/suggest/{}", segment(prefix)),
                RequestOptions::new(),
            )
            .await?
            .into_data()
    }
}
