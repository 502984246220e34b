//! Bookmarket Core - Shared types library.
//!
//! This crate provides the domain types used by the marketplace client:
//! - `client` - HTTP access layer, API catalog and navigation guard
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere, including front ends
//! that bring their own transport.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, amounts, telephones, and statuses
//! - [`models`] - Entity and request records exchanged with the backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
