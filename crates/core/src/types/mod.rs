//! Core types for Bistro Cart.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod line_item;
pub mod price;

pub use cart::Cart;
pub use line_item::LineItem;
pub use price::{Price, PriceError};
