//! Core types for Bookmarket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amount;
pub mod id;
pub mod status;
pub mod telephone;

pub use amount::{Amount, AmountError};
pub use id::*;
pub use status::*;
pub use telephone::{Telephone, TelephoneError};
