//! Page controller: cart event handlers bound to a page view.
//!
//! Each handler runs to completion against a freshly loaded cart and then
//! re-renders whatever views depend on it. Validation failures become
//! notices; only storage and template failures are returned as errors.

use bistro_cart_core::{CartStorage, LineItem, Price, PriceError};
use tracing::instrument;

use crate::checkout::{AfterOrder, CheckoutForm, CheckoutSettings, FormField, OrderReceipt};
use crate::error::Result;
use crate::render::{CheckoutView, checkout_items_html};
use crate::store::CartStore;
use crate::view::{Notice, PageView};

/// Raw attributes of an add-to-cart trigger element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddToCartTrigger {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl AddToCartTrigger {
    /// Trigger with both attributes present.
    #[must_use]
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price.into()),
        }
    }
}

/// Why a trigger activation was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingName,
    InvalidPrice(PriceError),
}

/// Result of activating an add-to-cart trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was added; `quantity` is its new quantity.
    Added { name: String, quantity: u32 },
    /// The trigger was malformed and the cart was left alone.
    Skipped(SkipReason),
}

/// Result of submitting the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The order was placed and the cart cleared.
    Placed(OrderReceipt),
    /// Rejected because the cart had nothing in it.
    EmptyCart,
    /// Rejected because required fields were blank.
    MissingFields(Vec<FormField>),
}

/// Binds a [`CartStore`] to a [`PageView`].
#[derive(Debug)]
pub struct PageController<S, V> {
    store: CartStore<S>,
    view: V,
    settings: CheckoutSettings,
}

impl<S: CartStorage, V: PageView> PageController<S, V> {
    /// Create a controller for one page.
    pub const fn new(store: CartStore<S>, view: V, settings: CheckoutSettings) -> Self {
        Self {
            store,
            view,
            settings,
        }
    }

    /// Returns the page view.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the page view mutably.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Returns the cart store.
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Sync every view with the stored cart, as done once when a page loads.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout fragment fails to render.
    pub fn page_loaded(&mut self) -> Result<()> {
        self.update_badges();
        self.render_checkout()?;
        Ok(())
    }

    /// Set every badge to the stored item count. Safe to call at any time.
    pub fn update_badges(&mut self) -> u64 {
        let count = self.store.item_count();
        self.view.set_badges(count);
        count
    }

    /// Handle activation of an add-to-cart trigger.
    ///
    /// A trigger without a name or with a price that is not a non-negative
    /// number is skipped with a warning and the cart is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, trigger: &AddToCartTrigger) -> Result<AddOutcome> {
        let name = match trigger.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => {
                tracing::warn!("Add-to-cart trigger missing data-name");
                return Ok(AddOutcome::Skipped(SkipReason::MissingName));
            }
        };

        let price = match Price::parse(trigger.price.as_deref().unwrap_or_default()) {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!(error = %e, "Add-to-cart trigger has invalid data-price");
                return Ok(AddOutcome::Skipped(SkipReason::InvalidPrice(e)));
            }
        };

        let cart = self.store.add_item(name, price)?;
        let quantity = cart.get(name).map_or(1, LineItem::quantity);

        self.view.set_badges(cart.item_count());
        self.view.show_notice(&Notice::Added {
            name: name.to_owned(),
        });

        Ok(AddOutcome::Added {
            name: name.to_owned(),
            quantity,
        })
    }

    /// Render the checkout item list and total.
    ///
    /// Returns `false` without rendering when the page lacks either the item
    /// container or the total element.
    ///
    /// # Errors
    ///
    /// Returns an error if the item list fails to render.
    pub fn render_checkout(&mut self) -> Result<bool> {
        if !self.view.has_checkout_container() || !self.view.has_checkout_total() {
            return Ok(false);
        }

        let cart = self.store.load();
        let view = CheckoutView::from(&cart);
        let html = checkout_items_html(&view)?;

        self.view.set_checkout_items(&html);
        self.view.set_checkout_total(&view.total);
        tracing::debug!(items = view.items.len(), total = %view.total, "Rendered checkout");
        Ok(true)
    }

    /// Handle checkout form submission.
    ///
    /// Rejects an empty cart first, then blank required fields; either way a
    /// notice is shown and nothing is stored. On success the cart is cleared,
    /// the confirmation notice is shown, and the page is reset or redirected
    /// according to the checkout settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be cleared or the reset page fails
    /// to render.
    #[instrument(skip(self, form))]
    pub fn submit_checkout(&mut self, form: &CheckoutForm) -> Result<SubmitOutcome> {
        let cart = self.store.load();
        if cart.is_empty() {
            self.view.show_notice(&Notice::EmptyCart);
            return Ok(SubmitOutcome::EmptyCart);
        }

        let variant = self.settings.variant;
        let missing = variant.missing_fields(form);
        if !missing.is_empty() {
            tracing::debug!(?missing, "Checkout rejected");
            self.view.show_notice(&Notice::MissingFields(variant));
            return Ok(SubmitOutcome::MissingFields(missing));
        }

        let receipt = OrderReceipt::issue(&cart);
        self.store.clear()?;
        tracing::info!(
            order_id = %receipt.order_id,
            items = receipt.item_count,
            total = %receipt.total,
            "Order placed"
        );
        self.view.show_notice(&Notice::OrderPlaced);

        match self.settings.after_order.clone() {
            AfterOrder::ResetInPlace => {
                self.view.reset_checkout_form();
                self.update_badges();
                self.render_checkout()?;
            }
            AfterOrder::Redirect { location } => self.view.navigate(&location),
        }

        Ok(SubmitOutcome::Placed(receipt))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutVariant;
    use crate::render::EMPTY_CART_MESSAGE;
    use crate::storage::MemoryStorage;
    use crate::view::HtmlPage;

    type Controller = PageController<MemoryStorage, HtmlPage>;

    fn controller(page: HtmlPage) -> Controller {
        PageController::new(
            CartStore::new(MemoryStorage::new()),
            page,
            CheckoutSettings::default(),
        )
    }

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            address: "1 Main St".to_string(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_add_to_cart_updates_badges_and_notifies() {
        let mut ctl = controller(HtmlPage::with_badges(2));
        let outcome = ctl.add_to_cart(&AddToCartTrigger::new("Burger", "9.50")).unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Added {
                name: "Burger".to_string(),
                quantity: 1
            }
        );
        assert_eq!(ctl.view().badges(), ["1", "1"]);
        assert_eq!(
            ctl.view().last_notice().map(ToString::to_string).as_deref(),
            Some("Burger added to cart.")
        );
    }

    #[test]
    fn test_add_to_cart_twice_increments() {
        let mut ctl = controller(HtmlPage::with_badges(1));
        let trigger = AddToCartTrigger::new("Burger", "9.50");
        ctl.add_to_cart(&trigger).unwrap();
        let outcome = ctl.add_to_cart(&trigger).unwrap();

        assert!(matches!(outcome, AddOutcome::Added { quantity: 2, .. }));
        assert_eq!(ctl.view().badges(), ["2"]);
    }

    #[test]
    fn test_trigger_without_name_is_skipped() {
        let mut ctl = controller(HtmlPage::with_badges(1));
        for name in [None, Some(String::new())] {
            let trigger = AddToCartTrigger {
                name,
                price: Some("9.50".to_string()),
            };
            let outcome = ctl.add_to_cart(&trigger).unwrap();
            assert_eq!(outcome, AddOutcome::Skipped(SkipReason::MissingName));
        }

        assert!(ctl.store().load().is_empty());
        assert!(ctl.view().notices().is_empty());
        assert_eq!(ctl.view().badges(), [""]);
    }

    #[test]
    fn test_trigger_with_bad_price_is_skipped() {
        let mut ctl = controller(HtmlPage::with_badges(1));
        for price in [None, Some("abc"), Some(""), Some("-3")] {
            let trigger = AddToCartTrigger {
                name: Some("Burger".to_string()),
                price: price.map(str::to_string),
            };
            let outcome = ctl.add_to_cart(&trigger).unwrap();
            assert!(
                matches!(outcome, AddOutcome::Skipped(SkipReason::InvalidPrice(_))),
                "price {price:?}"
            );
        }

        assert!(ctl.store().load().is_empty());
        assert!(ctl.view().notices().is_empty());
    }

    #[test]
    fn test_render_checkout_skipped_off_checkout_page() {
        let mut ctl = controller(HtmlPage::with_badges(1));
        ctl.add_to_cart(&AddToCartTrigger::new("Burger", "9.50")).unwrap();
        assert!(!ctl.render_checkout().unwrap());
    }

    #[test]
    fn test_render_checkout_empty() {
        let mut ctl = controller(HtmlPage::checkout());
        assert!(ctl.render_checkout().unwrap());

        assert!(ctl.view().checkout_items().unwrap().contains(EMPTY_CART_MESSAGE));
        assert_eq!(ctl.view().checkout_total(), Some("$0.00"));
    }

    #[test]
    fn test_render_checkout_with_items() {
        let mut ctl = controller(HtmlPage::checkout());
        ctl.add_to_cart(&AddToCartTrigger::new("Burger", "9.50")).unwrap();
        ctl.add_to_cart(&AddToCartTrigger::new("Fries", "3.25")).unwrap();
        ctl.render_checkout().unwrap();

        let items = ctl.view().checkout_items().unwrap();
        assert!(items.contains("<strong>Burger</strong>"));
        assert!(items.contains("<strong>Fries</strong>"));
        assert_eq!(ctl.view().checkout_total(), Some("$12.75"));
    }

    #[test]
    fn test_page_loaded_syncs_views() {
        let mut store = CartStore::new(MemoryStorage::new());
        store.add_item("Soda", Price::parse("2").unwrap()).unwrap();
        store.add_item("Soda", Price::parse("2").unwrap()).unwrap();

        let mut ctl = PageController::new(store, HtmlPage::checkout(), CheckoutSettings::default());
        ctl.page_loaded().unwrap();

        assert_eq!(ctl.view().badges(), ["2"]);
        assert_eq!(ctl.view().checkout_total(), Some("$4.00"));
    }

    #[test]
    fn test_submit_empty_cart_rejected() {
        let mut ctl = controller(HtmlPage::checkout());
        let outcome = ctl.submit_checkout(&filled_form()).unwrap();

        assert_eq!(outcome, SubmitOutcome::EmptyCart);
        assert_eq!(ctl.view().last_notice(), Some(&Notice::EmptyCart));
    }

    #[test]
    fn test_submit_missing_fields_keeps_cart() {
        let mut ctl = controller(HtmlPage::checkout());
        ctl.add_to_cart(&AddToCartTrigger::new("Burger", "9.50")).unwrap();

        let form = CheckoutForm {
            address: "  ".to_string(),
            ..filled_form()
        };
        let outcome = ctl.submit_checkout(&form).unwrap();

        assert_eq!(outcome, SubmitOutcome::MissingFields(vec![FormField::Address]));
        assert_eq!(
            ctl.view().last_notice(),
            Some(&Notice::MissingFields(CheckoutVariant::Delivery))
        );
        assert_eq!(ctl.store().item_count(), 1);
    }

    #[test]
    fn test_submit_success_resets_in_place() {
        let mut ctl = controller(HtmlPage::checkout());
        ctl.add_to_cart(&AddToCartTrigger::new("Burger", "9.50")).unwrap();
        ctl.add_to_cart(&AddToCartTrigger::new("Burger", "9.50")).unwrap();
        *ctl.view_mut().form_mut().unwrap() = filled_form();

        let form = ctl.view().form().cloned().unwrap();
        let outcome = ctl.submit_checkout(&form).unwrap();

        let SubmitOutcome::Placed(receipt) = outcome else {
            panic!("expected order to be placed");
        };
        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.total.to_string(), "$19.00");

        assert!(!ctl.store().storage().contains_key("cart"));
        assert_eq!(ctl.view().last_notice(), Some(&Notice::OrderPlaced));
        assert_eq!(ctl.view().badges(), ["0"]);
        assert!(ctl.view().checkout_items().unwrap().contains(EMPTY_CART_MESSAGE));
        assert_eq!(ctl.view().checkout_total(), Some("$0.00"));
        assert_eq!(ctl.view().form(), Some(&CheckoutForm::default()));
        assert_eq!(ctl.view().location(), None);
    }

    #[test]
    fn test_submit_success_redirects() {
        let settings = CheckoutSettings {
            variant: CheckoutVariant::Pickup,
            after_order: AfterOrder::Redirect {
                location: "index.html".to_string(),
            },
        };
        let mut ctl = PageController::new(
            CartStore::new(MemoryStorage::new()),
            HtmlPage::checkout(),
            settings,
        );
        ctl.add_to_cart(&AddToCartTrigger::new("Salad", "7")).unwrap();

        let form = CheckoutForm {
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            pickup_time: "18:30".to_string(),
            ..CheckoutForm::default()
        };
        let outcome = ctl.submit_checkout(&form).unwrap();

        assert!(matches!(outcome, SubmitOutcome::Placed(_)));
        assert_eq!(ctl.view().location(), Some("index.html"));
        assert!(ctl.store().load().is_empty());
    }
}
