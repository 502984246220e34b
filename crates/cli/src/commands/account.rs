//! `login`, `logout`, `register`, `profile`.

use bookmarket_client::{ApiError, BookmarketApi};
use bookmarket_core::{LoginRequest, RegisterRequest, Telephone, UpdateUserInfoRequest};
use clap::{Args, Subcommand};
use secrecy::SecretString;
use serde_json::{Value, json};

use super::ok;
use crate::error::CliError;

#[derive(Args)]
pub struct AccountArgs {
    /// Telephone number
    #[arg(short, long)]
    telephone: String,

    /// Password
    #[arg(short, long, env = "BOOKMARKET_PASSWORD", hide_env_values = true)]
    password: SecretString,

    /// Token to store when the server issues it out of band
    #[arg(long)]
    token: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    #[command(flatten)]
    account: AccountArgs,

    /// Login name
    #[arg(short, long)]
    username: Option<String>,

    /// Display name
    #[arg(short, long)]
    name: Option<String>,

    /// Avatar URL
    #[arg(long)]
    avatar: Option<String>,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Update profile fields; unset fields are left unchanged
    Update {
        /// Login name (required by the server)
        #[arg(short, long)]
        username: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        telephone: Option<String>,
        /// New password
        #[arg(long)]
        password: Option<SecretString>,
    },
}

fn credentials(args: &AccountArgs) -> Result<(Telephone, SecretString), CliError> {
    let telephone = Telephone::parse(&args.telephone)?;
    Ok((telephone, args.password.clone()))
}

pub async fn login(api: &BookmarketApi, args: AccountArgs) -> Result<Value, CliError> {
    let (telephone, password) = credentials(&args)?;
    let request = LoginRequest {
        telephone,
        password,
    };

    let accepted = api.login_and_store(&request).await?;
    if accepted && let Some(token) = &args.token {
        api.session().set_token(token).map_err(ApiError::from)?;
    }

    Ok(json!({
        "loggedIn": accepted,
        "sessionStored": api.session().is_authenticated(),
    }))
}

pub fn logout(api: &BookmarketApi) -> Result<Value, CliError> {
    api.logout()?;
    Ok(ok())
}

pub async fn register(api: &BookmarketApi, args: RegisterArgs) -> Result<Value, CliError> {
    let (telephone, password) = credentials(&args.account)?;
    let request = RegisterRequest {
        telephone,
        password,
        username: args.username,
        name: args.name,
        avatar: args.avatar,
    };
    let created = api.register(&request).await?;
    Ok(json!({ "registered": created }))
}

pub async fn profile(api: &BookmarketApi, action: ProfileAction) -> Result<Value, CliError> {
    match action {
        ProfileAction::Update {
            username,
            name,
            avatar,
            email,
            location,
            telephone,
            password,
        } => {
            let request = UpdateUserInfoRequest {
                username,
                password,
                name,
                avatar,
                role: None,
                telephone: telephone.as_deref().map(Telephone::parse).transpose()?,
                email,
                location,
            };
            api.update_user_info(&request).await?;
            Ok(ok())
        }
    }
}
