//! Buyer orders: checkout, payment and history.

use bookmarket_core::{CartCheckoutRequest, ImmediateCheckoutRequest, Order, OrderId, OrderStatus};
use tracing::instrument;

use super::{BookmarketApi, done};
use crate::error::ApiError;
use crate::http::RequestOptions;

impl BookmarketApi {
    /// Place an order for the selected cart lines.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails, including when the server
    /// rejects an empty selection.
    #[instrument(skip(self, request), fields(lines = request.cart_item_ids.len()))]
    pub async fn checkout_cart(&self, request: &CartCheckoutRequest) -> Result<(), ApiError> {
        self.http
            .post("/cart/checkout", request, RequestOptions::new())
            .await
            .map(done)
    }

    /// Buy a single book directly, bypassing the cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self, request), fields(ub_id = %request.ub_id, quantity = request.quantity))]
    pub async fn checkout_product(
        &self,
        request: &ImmediateCheckoutRequest,
    ) -> Result<(), ApiError> {
        self.http
            .post("/immediate/checkout", request, RequestOptions::new())
            .await
            .map(done)
    }

    /// Start payment for an order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn pay_order(&self, order_id: OrderId) -> Result<(), ApiError> {
        self.http
            .post(
                &format!("/orders/{order_id}/pay"),
                &serde_json::json!({}),
                RequestOptions::new(),
            )
            .await
            .map(done)
    }

    /// The logged-in user's orders, optionally only those in `status`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_my_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, ApiError> {
        self.http
            .get(
                "/orders/my",
                RequestOptions::new().query_opt("status", status),
            )
            .await?
            .into_data()
    }

    /// Most recent orders.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_top_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.http
            .get("/orders/top5", RequestOptions::new())
            .await?
            .into_data()
    }
}
