//! Checkout page commands.

use bistro_cart_storefront::checkout::CheckoutForm;
use bistro_cart_storefront::config::CartConfig;
use bistro_cart_storefront::view::HtmlPage;
use bistro_cart_storefront::{Result, SubmitOutcome};

use super::{load_page, print_page};

/// Render the checkout page.
///
/// # Errors
///
/// Returns an error if the checkout fragment fails to render.
pub fn show(config: &CartConfig) -> Result<()> {
    let controller = load_page(config, HtmlPage::checkout())?;
    print_page(&controller);
    Ok(())
}

/// Fill in and submit the checkout form.
///
/// # Errors
///
/// Returns an error if the cart cannot be cleared or the page fails to render.
pub fn submit(config: &CartConfig, form: &CheckoutForm) -> Result<()> {
    let mut controller = load_page(config, HtmlPage::checkout())?;
    if let Some(page_form) = controller.view_mut().form_mut() {
        page_form.clone_from(form);
    }

    let outcome = controller.submit_checkout(form)?;
    if let SubmitOutcome::Placed(receipt) = &outcome {
        println!("Order {} placed at {}", receipt.order_id, receipt.placed_at.to_rfc3339());
    }

    print_page(&controller);
    Ok(())
}
