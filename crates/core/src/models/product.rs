//! Catalog listings.

use serde::{Deserialize, Serialize};

use crate::types::{Amount, BookId};

/// A used book listed in the catalog.
///
/// Bibliographic fields are optional because sellers fill them in freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub ub_id: BookId,
    pub title: String,
    pub price: Amount,
    /// Original list price of the book when new.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_num: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_binding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
    #[serde(default)]
    pub cover: String,
    /// Category code, e.g. `WENXUE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Condition grade; higher means closer to new.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_degree: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_product() {
        let json = r#"{"ubId":3,"title":"Walden","price":12.5,"cover":"/img/3.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.ub_id, BookId::new(3));
        assert_eq!(product.price.to_string(), "12.50");
        assert!(product.isbn.is_none());
    }

    #[test]
    fn test_negative_stock_rejected() {
        let json = r#"{"ubId":3,"title":"Walden","price":1,"cover":"","stock":-2}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
