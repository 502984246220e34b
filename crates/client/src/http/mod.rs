//! HTTP access layer.
//!
//! # Architecture
//!
//! - One shared [`ApiClient`] per process, built from [`ClientConfig`](crate::config::ClientConfig)
//! - Base URL default `/api`, fixed 15 second timeout, JSON content type
//! - Outgoing: session token in the `token` header (not `Authorization`)
//! - Incoming: [`Envelope`] unwrapped against [`SuccessCodes`], HTTP
//!   failures classified into [`ApiError`](crate::error::ApiError)
//!
//! # Example
//!
//! ```rust,ignore
//! use bookmarket_client::http::{ApiClient, RequestOptions};
//!
//! let client = ApiClient::new(&config, session)?;
//! let envelope = client
//!     .get::<Vec<Product>>("/used_books/category", RequestOptions::new().query("category", "WENXUE"))
//!     .await?;
//! let products = envelope.into_data()?;
//! ```

mod client;
mod envelope;

pub use client::{ApiClient, Payload, Reply, RequestOptions, TOKEN_HEADER, cancellable};
pub use envelope::{Code, DEFAULT_FAILURE_MESSAGE, EmptySuccessCodes, Envelope, SuccessCodes};
