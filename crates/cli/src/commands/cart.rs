//! Menu page commands.

use bistro_cart_storefront::config::CartConfig;
use bistro_cart_storefront::view::HtmlPage;
use bistro_cart_storefront::{AddOutcome, AddToCartTrigger, Result};

use super::{load_page, print_page};

/// Activate an add-to-cart trigger with the given attributes.
///
/// A malformed trigger is ignored; only the warning log says so.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn add(config: &CartConfig, name: Option<String>, price: Option<String>) -> Result<()> {
    let mut controller = load_page(config, HtmlPage::with_badges(1))?;

    let outcome = controller.add_to_cart(&AddToCartTrigger { name, price })?;
    if let AddOutcome::Added { name, quantity } = &outcome {
        tracing::debug!(%name, quantity, "Added to cart");
    }

    print_page(&controller);
    Ok(())
}

/// Print the current badge count.
///
/// # Errors
///
/// Returns an error if the page fails to load.
pub fn badge(config: &CartConfig) -> Result<()> {
    let controller = load_page(config, HtmlPage::with_badges(1))?;
    print_page(&controller);
    Ok(())
}

/// Remove the stored cart and show the zeroed badge.
///
/// # Errors
///
/// Returns an error if the storage file cannot be written.
pub fn clear(config: &CartConfig) -> Result<()> {
    let mut store = config.open_store();
    store.clear()?;
    tracing::info!(key = store.key(), "Cart cleared");

    badge(config)
}
