//! Bookmarket client library.
//!
//! Access layer for the used-book marketplace backend, shared by every
//! front end:
//!
//! - [`session`] - the auth token and its persistent storage
//! - [`http`] - the shared HTTP client: token injection, envelope unwrapping,
//!   failure classification
//! - [`api`] - one typed method per backend operation
//! - [`router`] - navigation guard for login-only pages
//!
//! # Example
//!
//! ```rust,ignore
//! use bookmarket_client::{BookmarketApi, ClientConfig, SessionStore};
//!
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::persistent(&config.session_file);
//! let api = BookmarketApi::from_config(&config, session)?;
//!
//! let cart = api.get_cart().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod router;
pub mod session;

pub use api::BookmarketApi;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ErrorKind};
pub use http::{ApiClient, Envelope, RequestOptions, SuccessCodes};
pub use router::{Decision, Router};
pub use session::{SessionState, SessionStore};
