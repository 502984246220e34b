//! Buyer purchase orders and checkout requests.

use serde::{Deserialize, Serialize};

use crate::types::{AddressId, Amount, BookId, CartItemId, OrderId, OrderStatus};

/// A purchase order placed by the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub total_amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Whether loyalty credit was applied at checkout.
    #[serde(default, deserialize_with = "super::flag::deserialize")]
    pub leaf: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_time: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A line of a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub ub_id: BookId,
    pub title: String,
    #[serde(default)]
    pub cover: String,
    pub price: Amount,
    pub quantity: u32,
}

/// Body of `POST /cart/checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCheckoutRequest {
    /// Apply loyalty credit.
    pub leaf: bool,
    pub cart_item_ids: Vec<CartItemId>,
    pub address_id: AddressId,
    pub payment_method: String,
}

/// Body of `POST /immediate/checkout`: buy a single book directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImmediateCheckoutRequest {
    pub leaf: bool,
    pub ub_id: BookId,
    pub quantity: u32,
    pub address_id: AddressId,
    pub payment_method: String,
}
