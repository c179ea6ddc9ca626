//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `BISTRO_CART_STORAGE_PATH` - Storage file (default: `.bistro-cart.json`)
//! - `BISTRO_CART_STORAGE_KEY` - Slot the cart is stored under (default: `cart`)
//! - `BISTRO_CART_CHECKOUT_VARIANT` - `delivery` or `pickup` (default: `delivery`)
//! - `BISTRO_CART_AFTER_ORDER` - `reset` or `redirect` (default: `reset`)
//! - `BISTRO_CART_LANDING_PAGE` - Redirect target (default: `index.html`)

use std::path::PathBuf;

use thiserror::Error;

use crate::checkout::{AfterOrder, CheckoutSettings, CheckoutVariant, DEFAULT_LANDING_PAGE};
use crate::storage::FileStorage;
use crate::store::{CartStore, DEFAULT_CART_KEY};

/// Storage file used when `BISTRO_CART_STORAGE_PATH` is unset.
pub const DEFAULT_STORAGE_PATH: &str = ".bistro-cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// File holding the storage slots
    pub storage_path: PathBuf,
    /// Key the cart is stored under
    pub storage_key: String,
    /// Checkout variant and post-order behavior
    pub checkout: CheckoutSettings,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: DEFAULT_CART_KEY.to_string(),
            checkout: CheckoutSettings::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the checkout variant or after-order mode is
    /// not recognized.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`CartConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_path = PathBuf::from(get_or_default(
            &lookup,
            "BISTRO_CART_STORAGE_PATH",
            DEFAULT_STORAGE_PATH,
        ));
        let storage_key = get_or_default(&lookup, "BISTRO_CART_STORAGE_KEY", DEFAULT_CART_KEY);

        let variant = get_or_default(&lookup, "BISTRO_CART_CHECKOUT_VARIANT", "delivery")
            .parse::<CheckoutVariant>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("BISTRO_CART_CHECKOUT_VARIANT".to_string(), e.to_string())
            })?;

        let landing_page = get_or_default(&lookup, "BISTRO_CART_LANDING_PAGE", DEFAULT_LANDING_PAGE);
        let after_order = AfterOrder::parse(
            &get_or_default(&lookup, "BISTRO_CART_AFTER_ORDER", "reset"),
            &landing_page,
        )
        .map_err(|e| ConfigError::InvalidEnvVar("BISTRO_CART_AFTER_ORDER".to_string(), e.to_string()))?;

        Ok(Self {
            storage_path,
            storage_key,
            checkout: CheckoutSettings {
                variant,
                after_order,
            },
        })
    }

    /// Open the cart store described by this configuration.
    #[must_use]
    pub fn open_store(&self) -> CartStore<FileStorage> {
        CartStore::with_key(FileStorage::new(&self.storage_path), &self.storage_key)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value. Blank values count as unset.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
