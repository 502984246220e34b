//! Address book entries.

use serde::{Deserialize, Serialize};

use crate::types::{AddressId, UserId};

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressItem {
    pub id: AddressId,
    pub user_id: UserId,
    #[serde(flatten)]
    pub address: AddressInput,
}

impl AddressItem {
    /// Whether this entry holds the same address as `input`, ignoring the
    /// server-assigned identifiers.
    #[must_use]
    pub fn matches(&self, input: &AddressInput) -> bool {
        &self.address == input
    }
}

/// Address fields the user edits; the body of create and update calls.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub consignee: String,
    pub telephone: String,
    /// Province, city and district.
    pub region: String,
    /// Street address.
    pub detail: String,
    #[serde(default, deserialize_with = "super::flag::deserialize")]
    pub is_default: bool,
}
