//! `buy` and `orders` subcommands.

use bookmarket_client::BookmarketApi;
use bookmarket_core::{AddressId, BookId, ImmediateCheckoutRequest, OrderId, OrderStatus};
use clap::{Args, Subcommand};
use serde_json::Value;

use super::{ok, to_json};
use crate::error::CliError;

#[derive(Args)]
pub struct BuyArgs {
    ub_id: BookId,
    #[arg(short, long, default_value_t = 1)]
    quantity: u32,
    /// Shipping address id
    #[arg(short, long)]
    address: AddressId,
    /// Payment method, e.g. `ALIPAY`
    #[arg(short, long)]
    payment: String,
    /// Apply loyalty credit
    #[arg(long)]
    leaf: bool,
}

#[derive(Subcommand)]
pub enum OrdersAction {
    /// My orders
    List {
        /// Only orders in this status (`CREATED`, `PAID`, `SHIPPED`, `COMPLETED`, `CANCELLED`)
        #[arg(short, long)]
        status: Option<OrderStatus>,
    },
    /// Most recent orders
    Top,
    /// Start payment for an order
    Pay { order_id: OrderId },
}

pub async fn buy(api: &BookmarketApi, args: BuyArgs) -> Result<Value, CliError> {
    let request = ImmediateCheckoutRequest {
        leaf: args.leaf,
        ub_id: args.ub_id,
        quantity: args.quantity,
        address_id: args.address,
        payment_method: args.payment,
    };
    api.checkout_product(&request).await?;
    Ok(ok())
}

pub async fn run(api: &BookmarketApi, action: OrdersAction) -> Result<Value, CliError> {
    match action {
        OrdersAction::List { status } => to_json(&api.get_my_orders(status).await?),
        OrdersAction::Top => to_json(&api.get_top_orders().await?),
        OrdersAction::Pay { order_id } => {
            api.pay_order(order_id).await?;
            Ok(ok())
        }
    }
}
