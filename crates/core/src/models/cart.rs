//! Shopping cart records.

use serde::{Deserialize, Serialize};

use super::Product;
use crate::types::{Amount, BookId, CartItemId};

/// The current user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Sum of `price * quantity` over all lines, as computed by the server.
    pub total: Amount,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Total number of books across all lines.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Find a line by its identifier.
    #[must_use]
    pub fn line(&self, id: &CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.cart_item_id == id)
    }
}

/// A cart line: the listed product plus the line identifier and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_item_id: CartItemId,
    pub quantity: u32,
    #[serde(flatten)]
    pub product: Product,
}

/// Body of `POST /cart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub ub_id: BookId,
    pub quantity: u32,
}

/// Body of `PATCH /cart/{cartItemId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}
