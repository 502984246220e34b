//! Seller-side used-book listings.

use bookmarket_core::{BookId, CreateUsedBookRequest, SoldBookStatus, UsedBookOrder};
use tracing::instrument;

use super::BookmarketApi;
use crate::error::ApiError;
use crate::http::RequestOptions;

impl BookmarketApi {
    /// List a book for sale. Returns the id the server assigned to it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_used_book(
        &self,
        request: &CreateUsedBookRequest,
    ) -> Result<BookId, ApiError> {
        self.http
            .post("/used_books/create", request, RequestOptions::new())
            .await?
            .into_data()
    }

    /// The logged-in user's listings, optionally only those in `status`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_sold_books(
        &self,
        status: Option<SoldBookStatus>,
    ) -> Result<Vec<UsedBookOrder>, ApiError> {
        self.http
            .get(
                "/used_books/orders",
                RequestOptions::new().query_opt("status", status),
            )
            .await?
            .into_data()
    }

    /// Most recent listings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_top_sold_books(&self) -> Result<Vec<UsedBookOrder>, ApiError> {
        self.http
            .get("/used_books/orders/top5", RequestOptions::new())
            .await?
            .into_data()
    }
}
