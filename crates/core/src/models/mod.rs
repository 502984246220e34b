//! Domain records exchanged with the marketplace backend.
//!
//! These are passive records with no behavior. Field names follow the
//! backend's camelCase wire format.

pub mod account;
pub mod address;
pub mod cart;
pub mod favorite;
pub mod order;
pub mod product;
pub mod used_book;

mod flag;

pub use account::{LoginRequest, RegisterRequest, UpdateUserInfoRequest, UploadImageData, UserDetail};
pub use address::{AddressInput, AddressItem};
pub use cart::{AddToCartRequest, Cart, CartItem, UpdateCartItemRequest};
pub use favorite::FavoriteItem;
pub use order::{CartCheckoutRequest, ImmediateCheckoutRequest, Order, OrderItem};
pub use product::Product;
pub use used_book::{CreateUsedBookRequest, UsedBookOrder};
