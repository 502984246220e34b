//! `cart` subcommands.

use bookmarket_client::BookmarketApi;
use bookmarket_core::{AddressId, BookId, CartCheckoutRequest, CartItemId};
use clap::Subcommand;
use serde_json::Value;

use super::{ok, to_json};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart
    List,
    /// Add a book
    Add {
        ub_id: BookId,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Change the quantity of a line
    Update { line: String, quantity: u32 },
    /// Remove a line
    Remove { line: String },
    /// Order the selected lines
    Checkout {
        /// Cart line ids, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        lines: Vec<String>,
        /// Shipping address id
        #[arg(short, long)]
        address: AddressId,
        /// Payment method, e.g. `ALIPAY`
        #[arg(short, long)]
        payment: String,
        /// Apply loyalty credit
        #[arg(long)]
        leaf: bool,
    },
}

pub async fn run(api: &BookmarketApi, action: CartAction) -> Result<Value, CliError> {
    match action {
        CartAction::List => to_json(&api.get_cart().await?),
        CartAction::Add { ub_id, quantity } => {
            if quantity == 0 {
                return Err(CliError::InvalidArgument(
                    "quantity must be at least 1".to_owned(),
                ));
            }
            api.add_to_cart(ub_id, quantity).await?;
            Ok(ok())
        }
        CartAction::Update { line, quantity } => {
            api.update_cart_item(&CartItemId::new(line), quantity).await?;
            Ok(ok())
        }
        CartAction::Remove { line } => {
            api.remove_cart_item(&CartItemId::new(line)).await?;
            Ok(ok())
        }
        CartAction::Checkout {
            lines,
            address,
            payment,
            leaf,
        } => {
            let request = CartCheckoutRequest {
                leaf,
                cart_item_ids: lines.into_iter().map(CartItemId::new).collect(),
                address_id: address,
                payment_method: payment,
            };
            api.checkout_cart(&request).await?;
            Ok(ok())
        }
    }
}
