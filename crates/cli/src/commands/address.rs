//! `address` subcommands.

use bookmarket_client::BookmarketApi;
use bookmarket_core::{AddressId, AddressInput, Telephone};
use clap::{Args, Subcommand};
use serde_json::{Value, json};

use super::{ok, to_json};
use crate::error::CliError;

#[derive(Args)]
pub struct AddressArgs {
    /// Recipient name
    #[arg(long)]
    consignee: String,
    #[arg(long)]
    telephone: String,
    /// Province, city and district
    #[arg(long)]
    region: String,
    /// Street address
    #[arg(long)]
    detail: String,
    /// Make this the default address
    #[arg(long)]
    default: bool,
}

impl AddressArgs {
    fn into_input(self) -> Result<AddressInput, CliError> {
        let telephone = Telephone::parse(&self.telephone)?;
        Ok(AddressInput {
            consignee: self.consignee,
            telephone: telephone.into(),
            region: self.region,
            detail: self.detail,
            is_default: self.default,
        })
    }
}

#[derive(Subcommand)]
pub enum AddressAction {
    /// My addresses
    List,
    /// Add an address
    Add(AddressArgs),
    /// Replace an address
    Update {
        id: AddressId,
        #[command(flatten)]
        address: AddressArgs,
    },
    /// Delete an address
    Delete { id: AddressId },
}

pub async fn run(api: &BookmarketApi, action: AddressAction) -> Result<Value, CliError> {
    match action {
        AddressAction::List => to_json(&api.get_addresses().await?),
        AddressAction::Add(args) => {
            let id = api.create_address(&args.into_input()?).await?;
            Ok(json!({ "id": id }))
        }
        AddressAction::Update { id, address } => {
            api.update_address(id, &address.into_input()?).await?;
            Ok(ok())
        }
        AddressAction::Delete { id } => {
            api.delete_address(id).await?;
            Ok(ok())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::commands::test_support::context;

    fn args() -> AddressArgs {
        AddressArgs {
            consignee: "Han Meimei".to_owned(),
            telephone: " 13900000000 ".to_owned(),
            region: "Beijing Haidian".to_owned(),
            detail: "5 Zhongguancun St".to_owned(),
            default: false,
        }
    }

    #[tokio::test]
    async fn test_add_prints_new_id() {
        let (server, ctx) = context().await;
        Mock::given(method("POST"))
            .and(path("/api/address"))
            .and(body_partial_json(json!({ "telephone": "13900000000" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "code": 200, "data": 8 })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let output = run(&ctx.api, AddressAction::Add(args())).await.unwrap();
        assert_eq!(output, json!({ "id": 8 }));
    }
}
