//! Address book.

use bookmarket_core::{AddressId, AddressInput, AddressItem};
use tracing::instrument;

use super::{BookmarketApi, done};
use crate::error::ApiError;
use crate::http::RequestOptions;

impl BookmarketApi {
    /// The logged-in user's addresses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_addresses(&self) -> Result<Vec<AddressItem>, ApiError> {
        self.http
            .get("/address", RequestOptions::new())
            .await?
            .into_data()
    }

    /// Add an address. Returns the id the server assigned.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self, input))]
    pub async fn create_address(&self, input: &AddressInput) -> Result<AddressId, ApiError> {
        self.http
            .post("/address", input, RequestOptions::new())
            .await?
            .into_data()
    }

    /// Replace an address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self, input))]
    pub async fn update_address(&self, id: AddressId, input: &AddressInput) -> Result<(), ApiError> {
        self.http
            .put(&format!("/address/{id}"), input, RequestOptions::new())
            .await
            .map(done)
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn delete_address(&self, id: AddressId) -> Result<(), ApiError> {
        self.http
            .delete(&format!("/address/{id}"), RequestOptions::new())
            .await
            .map(done)
    }
}
