//! Cart store: the persisted cart behind one storage slot.
//!
//! Every operation reads the slot fresh; nothing is cached between calls.
//! Mutations are a read-modify-write of the whole cart.

use bistro_cart_core::{Cart, CartStorage, Price};

use crate::error::{CartError, Result};

/// Storage key the cart lives under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Loads and saves a [`Cart`] as JSON in a [`CartStorage`] slot.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store using the default `"cart"` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_CART_KEY)
    }

    /// Create a store using a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted cart.
    ///
    /// Never fails: a missing slot, an unreadable backend, or a blob that is
    /// not a valid cart all yield an empty cart.
    pub fn load(&self) -> Cart {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read cart storage");
                return Cart::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::debug!(key = %self.key, error = %e, "Ignoring malformed cart data");
            Cart::new()
        })
    }

    /// Persist the full cart, overwriting prior state.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or the backend write fails.
    pub fn save(&mut self, cart: &Cart) -> Result<()> {
        let json = serde_json::to_string(cart)?;
        self.storage
            .set_item(&self.key, &json)
            .map_err(CartError::storage)
    }

    /// Remove the persisted cart entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn clear(&mut self) -> Result<()> {
        self.storage
            .remove_item(&self.key)
            .map_err(CartError::storage)
    }

    /// Total quantity across the persisted cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.load().item_count()
    }

    /// Load, add one unit of `name`, and save.
    ///
    /// Returns the cart as persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the save fails; the stored cart is then unchanged.
    pub fn add_item(&mut self, name: impl Into<String>, price: Price) -> Result<Cart> {
        let mut cart = self.load();
        cart.add_item(name, price);
        self.save(&cart)?;
        Ok(cart)
    }
}
