//! Bistro Cart Core - Shared cart types.
//!
//! This crate provides the domain types used across all Bistro Cart components:
//! - `storefront` - Cart store, page controller, and rendering
//! - `cli` - Command-line driver for the cart pages
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no file access,
//! no rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices, line items, and the cart itself
//! - [`storage`] - The key-value slot trait carts are persisted through

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod storage;
pub mod types;

pub use storage::CartStorage;
pub use types::*;
