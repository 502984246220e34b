//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The backend never
//! issues negative identifiers, so numeric IDs wrap `u64`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_u64()`
/// - `From<u64>` and `Into<u64>` implementations
/// - `Display` and `FromStr`, so IDs can be used as path segments and CLI arguments
///
/// # Example
///
/// ```rust
/// # use bookmarket_core::define_id;
/// define_id!(ShelfId);
/// define_id!(LoanId);
///
/// let shelf = ShelfId::new(1);
/// let loan = LoanId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ShelfId = loan;
/// assert_eq!(shelf.to_string(), "1");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from a u64 value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying u64 value.
            #[must_use]
            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<u64>().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(BookId);
define_id!(OrderId);
define_id!(UsedBookOrderId);
define_id!(FavoriteId);
define_id!(AddressId);
define_id!(UserId);

/// Cart line identifier.
///
/// Unlike the other identifiers the backend issues cart lines as opaque
/// strings, so this wraps a `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(String);

impl CartItemId {
    /// Create a new cart line ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CartItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CartItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for CartItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_is_transparent_on_the_wire() {
        let id: BookId = serde_json::from_str("7").unwrap();
        assert_eq!(id, BookId::new(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }

    #[test]
    fn test_negative_id_is_rejected() {
        assert!(serde_json::from_str::<OrderId>("-1").is_err());
    }

    #[test]
    fn test_id_from_str() {
        let id: AddressId = " 42 ".parse().unwrap();
        assert_eq!(id.as_u64(), 42);
        assert!("abc".parse::<AddressId>().is_err());
    }

    #[test]
    fn test_cart_item_id_is_a_string() {
        let id: CartItemId = serde_json::from_str("\"c-19\"").unwrap();
        assert_eq!(id.as_str(), "c-19");
        assert_eq!(id.to_string(), "c-19");
    }
}
