//! Line item type.

use serde::{Deserialize, Serialize};

use super::price::Price;

/// One product entry in a cart.
///
/// ## Constraints
///
/// - `quantity` is always at least 1
/// - `price` is the unit price recorded when the item was first added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredLineItem")]
pub struct LineItem {
    name: String,
    price: Price,
    quantity: u32,
}

/// Wire shape accepted when decoding a persisted line item.
///
/// Older carts may omit `quantity` or store `0`; both count as one.
#[derive(Deserialize)]
struct StoredLineItem {
    name: String,
    price: Price,
    #[serde(default)]
    quantity: Option<u32>,
}

impl From<StoredLineItem> for LineItem {
    fn from(stored: StoredLineItem) -> Self {
        Self {
            name: stored.name,
            price: stored.price,
            quantity: stored.quantity.filter(|q| *q > 0).unwrap_or(1),
        }
    }
}

impl LineItem {
    /// Create a line item with a quantity of one.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// Returns the item name, which is unique within a cart.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    pub(crate) const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) const fn absorb(&mut self, other: &Self) {
        self.quantity = self.quantity.saturating_add(other.quantity);
    }
}
