//! Integration tests for Bistro Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bistro-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end page flows over in-memory storage
//! - `file_persistence` - The cart surviving page loads through the file backend
//!
//! Shared fixtures live here.

#![cfg_attr(not(test), forbid(unsafe_code))]

use bistro_cart_core::CartStorage;
use bistro_cart_storefront::checkout::{CheckoutForm, CheckoutSettings};
use bistro_cart_storefront::view::HtmlPage;
use bistro_cart_storefront::{CartStore, PageController};

/// Load `page` over `storage`, running the page-load sync.
///
/// # Panics
///
/// Panics if the page fails to render.
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn open_page<S: CartStorage>(
    storage: S,
    page: HtmlPage,
    settings: CheckoutSettings,
) -> PageController<S, HtmlPage> {
    let mut controller = PageController::new(CartStore::new(storage), page, settings);
    controller.page_loaded().unwrap();
    controller
}

/// A delivery form with every field filled in.
#[must_use]
pub fn delivery_form() -> CheckoutForm {
    CheckoutForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Analytical Way".to_string(),
        ..CheckoutForm::default()
    }
}
