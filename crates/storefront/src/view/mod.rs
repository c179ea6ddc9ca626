//! The page as seen by the controller.
//!
//! [`PageView`] is the seam between cart logic and whatever displays it. The
//! controller never inspects markup; it only asks which checkout elements
//! exist and pushes text, fragments, and notices.

mod html;

use core::fmt;

pub use html::HtmlPage;

use crate::checkout::CheckoutVariant;

/// A modal-style message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An item was added to the cart.
    Added { name: String },
    /// Checkout was submitted with required fields blank.
    MissingFields(CheckoutVariant),
    /// Checkout was submitted with nothing in the cart.
    EmptyCart,
    /// The (simulated) order went through.
    OrderPlaced,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { name } => write!(f, "{name} added to cart."),
            Self::MissingFields(variant) => f.write_str(variant.missing_fields_message()),
            Self::EmptyCart => {
                f.write_str("Your cart is empty. Please add items before checking out.")
            }
            Self::OrderPlaced => {
                f.write_str("Thanks! Your fake order has been placed for the project demo.")
            }
        }
    }
}

/// Rendering surface for one page.
pub trait PageView {
    /// Whether the page has an element to hold rendered line items.
    fn has_checkout_container(&self) -> bool;

    /// Whether the page has an element showing the grand total.
    fn has_checkout_total(&self) -> bool;

    /// Set the text of every badge on the page. Pages may have none.
    fn set_badges(&mut self, count: u64);

    /// Replace the checkout container contents with `html`.
    fn set_checkout_items(&mut self, html: &str);

    /// Set the grand total text.
    fn set_checkout_total(&mut self, text: &str);

    /// Show a notice to the user.
    fn show_notice(&mut self, notice: &Notice);

    /// Clear all checkout form fields.
    fn reset_checkout_form(&mut self);

    /// Leave the current page.
    fn navigate(&mut self, location: &str);
}

impl<T: PageView + ?Sized> PageView for &mut T {
    fn has_checkout_container(&self) -> bool {
        (**self).has_checkout_container()
    }

    fn has_checkout_total(&self) -> bool {
        (**self).has_checkout_total()
    }

    fn set_badges(&mut self, count: u64) {
        (**self).set_badges(count);
    }

    fn set_checkout_items(&mut self, html: &str) {
        (**self).set_checkout_items(html);
    }

    fn set_checkout_total(&mut self, text: &str) {
        (**self).set_checkout_total(text);
    }

    fn show_notice(&mut self, notice: &Notice) {
        (**self).show_notice(notice);
    }

    fn reset_checkout_form(&mut self) {
        (**self).reset_checkout_form();
    }

    fn navigate(&mut self, location: &str) {
        (**self).navigate(location);
    }
}
