//! Bistro Cart Storefront library.
//!
//! The cart store, the page controller that wires page events to it, and the
//! views it renders. Nothing here depends on a real browser: storage goes
//! through [`bistro_cart_core::CartStorage`] and rendering through
//! [`view::PageView`].
//!
//! # Modules
//!
//! - [`store`] - Load, save, and clear the persisted cart
//! - [`storage`] - Memory and file storage backends
//! - [`controller`] - Add-to-cart, badge, checkout render, and submit handlers
//! - [`checkout`] - Checkout form, variants, and order receipts
//! - [`render`] - Checkout view models and HTML fragments
//! - [`view`] - The page abstraction and an in-memory page
//! - [`config`] - Environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod storage;
pub mod store;
pub mod view;

pub use controller::{AddOutcome, AddToCartTrigger, PageController, SkipReason, SubmitOutcome};
pub use error::{CartError, Result};
pub use store::CartStore;
