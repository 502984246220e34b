//! Seller-side used-book (recycling) orders.

use serde::{Deserialize, Serialize};

use crate::types::{Amount, BookId, SoldBookStatus, UsedBookOrderId};

/// A book the current user has put up for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedBookOrder {
    pub id: UsedBookOrderId,
    /// Catalog listing created for the book, once it has passed checking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ub_id: Option<BookId>,
    pub title: String,
    #[serde(default)]
    pub cover: String,
    pub price: Amount,
    pub status: SoldBookStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

/// Body of `POST /used_books/create`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsedBookRequest {
    pub title: String,
    pub price: Amount,
    pub cover: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_binding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_degree: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}
