//! Shopping cart operations.

use bookmarket_core::{AddToCartRequest, BookId, Cart, CartItemId, UpdateCartItemRequest};
use tracing::instrument;

use super::{BookmarketApi, done, segment};
use crate::error::ApiError;
use crate::http::RequestOptions;

impl BookmarketApi {
    /// Add `quantity` copies of a book to the cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError`; an out-of-stock rejection arrives as
    /// `ApiError::Application` carrying the server message.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, ub_id: BookId, quantity: u32) -> Result<(), ApiError> {
        let body = AddToCartRequest { ub_id, quantity };
        self.http
            .post("/cart", &body, RequestOptions::new())
            .await
            .map(done)
    }

    /// The current user's cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_cart(&self) -> Result<Cart, ApiError> {
        // Trailing slash is part of the backend route
        self.http.get("/cart/", RequestOptions::new()).await?.into_data()
    }

    /// Set the quantity of one cart line.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self), fields(line = %line_id))]
    pub async fn update_cart_item(
        &self,
        line_id: &CartItemId,
        quantity: u32,
    ) -> Result<(), ApiError> {
        self.http
            .patch(
                &format!("/cart/{}", segment(line_id.as_str())),
                &UpdateCartItemRequest { quantity },
                RequestOptions::new(),
            )
            .await
            .map(done)
    }

    /// Remove one cart line.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self), fields(line = %line_id))]
    pub async fn remove_cart_item(&self, line_id: &CartItemId) -> Result<(), ApiError> {
        self.http
            .delete(
                &format!("/cart/{}", segment(line_id.as_str())),
                RequestOptions::new(),
            )
            .await
            .map(done)
    }
}
