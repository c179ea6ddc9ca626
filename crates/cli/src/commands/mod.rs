//! Command implementations.
//!
//! Every command builds a controller over the configured store and a fresh
//! page, runs the page-load sync, performs its action, and prints the page.

#![allow(clippy::print_stdout)]

use bistro_cart_core::CartStorage;
use bistro_cart_storefront::config::CartConfig;
use bistro_cart_storefront::storage::FileStorage;
use bistro_cart_storefront::view::HtmlPage;
use bistro_cart_storefront::{PageController, Result};

pub mod cart;
pub mod checkout;

/// Controller over the configured file store and `page`, with views synced.
fn load_page(config: &CartConfig, page: HtmlPage) -> Result<PageController<FileStorage, HtmlPage>> {
    let mut controller = PageController::new(config.open_store(), page, config.checkout.clone());
    controller.page_loaded()?;
    Ok(controller)
}

/// Print notices, badges, checkout views, and navigation, in that order.
fn print_page<S: CartStorage>(controller: &PageController<S, HtmlPage>) {
    let page = controller.view();

    for notice in page.notices() {
        println!("[notice] {notice}");
    }
    if let Some(badge) = page.badges().first() {
        println!("Cart ({badge})");
    }
    if let Some(items) = page.checkout_items() {
        println!("{}", items.trim());
    }
    if let Some(total) = page.checkout_total() {
        println!("Total: {total}");
    }
    if let Some(location) = page.location() {
        println!("-> {location}");
    }
}
