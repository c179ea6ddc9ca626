//! Checkout view models and HTML fragments.
//!
//! The cart is converted into display-ready strings first, then rendered
//! through an Askama template. Item names are autoescaped.

use askama::Template;
use bistro_cart_core::{Cart, LineItem, Price};

/// Text shown in place of the item list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is currently empty.";

/// Line item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutItemView {
    pub name: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Checkout display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutView {
    pub items: Vec<CheckoutItemView>,
    pub total: String,
}

impl CheckoutView {
    /// View of an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO.to_string(),
        }
    }
}

impl From<&Cart> for CheckoutView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.iter().map(CheckoutItemView::from).collect(),
            total: cart.total().to_string(),
        }
    }
}

impl From<&LineItem> for CheckoutItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name().to_owned(),
            quantity: item.quantity(),
            line_total: item.line_total().to_string(),
        }
    }
}

/// Checkout item list fragment.
#[derive(Template)]
#[template(path = "partials/checkout_items.html")]
pub struct CheckoutItemsTemplate<'a> {
    pub cart: &'a CheckoutView,
}

/// Render the checkout item list (or the empty-cart message) as HTML.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn checkout_items_html(view: &CheckoutView) -> askama::Result<String> {
    CheckoutItemsTemplate { cart: view }.render()
}
