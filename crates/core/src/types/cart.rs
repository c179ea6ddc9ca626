//! The cart: an ordered list of line items keyed by name.

use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::price::Price;

/// An ordered sequence of line items with no duplicate names.
///
/// Insertion order is preserved. Adding a name that is already present
/// increments that item's quantity instead of appending a second entry.
///
/// Serializes as a bare JSON array of `{name, price, quantity}` objects.
///
/// ## Examples
///
/// ```
/// use bistro_cart_core::{Cart, Price};
///
/// let burger = Price::parse("9.50").unwrap();
/// let mut cart = Cart::new();
/// cart.add_item("Burger", burger);
/// cart.add_item("Burger", burger);
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart.item_count(), 2);
/// assert_eq!(cart.total().to_string(), "$19.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `name`.
    ///
    /// If the name is already in the cart its quantity goes up by one and the
    /// recorded price is left untouched. Otherwise a new item with quantity
    /// one is appended.
    pub fn add_item(&mut self, name: impl Into<String>, price: Price) {
        let name = name.into();
        match self.items.iter_mut().find(|item| item.name() == name) {
            Some(existing) => existing.increment(),
            None => self.items.push(LineItem::new(name, price)),
        }
    }

    /// Builder-style variant of [`Cart::add_item`].
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, price: Price) -> Self {
        self.add_item(name, price);
        self
    }

    /// Sum of all quantities; 0 for an empty cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Look up an item by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Returns the items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns an iterator over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Number of distinct items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builds a cart from raw items, merging entries that share a name.
///
/// The first occurrence keeps its position and price; later duplicates only
/// contribute their quantity.
impl From<Vec<LineItem>> for Cart {
    fn from(raw: Vec<LineItem>) -> Self {
        let mut items: Vec<LineItem> = Vec::with_capacity(raw.len());
        for item in raw {
            match items.iter_mut().find(|seen| seen.name() == item.name()) {
                Some(seen) => seen.absorb(&item),
                None => items.push(item),
            }
        }
        Self { items }
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
