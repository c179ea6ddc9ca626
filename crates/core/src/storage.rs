//! Key-value slot storage.
//!
//! Carts are persisted as a single string value under one key, the same
//! shape as a browser's `localStorage`. Backends implement [`CartStorage`];
//! the cart store in the storefront crate does the JSON encoding.

/// A string-keyed store of string values.
///
/// Handlers run one at a time, so the trait takes `&mut self` for writes and
/// needs no internal locking.
pub trait CartStorage {
    /// Backend failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove the value stored under `key`. Removing a missing key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), Self::Error>;
}

impl<T: CartStorage + ?Sized> CartStorage for &mut T {
    type Error = T::Error;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), Self::Error> {
        (**self).remove_item(key)
    }
}
