//! Checkout form, variants, and the simulated order receipt.
//!
//! Two checkout variants exist. Delivery asks for name, email, and address;
//! pickup asks for name, phone, and a pickup time. After a successful order
//! the page either resets in place or redirects to the landing page.

use core::fmt;
use std::str::FromStr;

use bistro_cart_core::{Cart, Price};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Landing page used by [`AfterOrder::Redirect`] unless configured otherwise.
pub const DEFAULT_LANDING_PAGE: &str = "index.html";

/// A single checkout form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Address,
    Phone,
    PickupTime,
}

impl FormField {
    /// Human-readable label used in notices.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::PickupTime => "pickup time",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values typed into the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub pickup_time: String,
}

impl CheckoutForm {
    /// Returns the raw value of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Address => &self.address,
            FormField::Phone => &self.phone,
            FormField::PickupTime => &self.pickup_time,
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which set of fields checkout requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutVariant {
    #[default]
    Delivery,
    Pickup,
}

impl CheckoutVariant {
    /// Fields that must be non-blank for this variant.
    #[must_use]
    pub const fn required_fields(self) -> &'static [FormField] {
        match self {
            Self::Delivery => &[FormField::Name, FormField::Email, FormField::Address],
            Self::Pickup => &[FormField::Name, FormField::Phone, FormField::PickupTime],
        }
    }

    /// Required fields that are empty after trimming whitespace.
    #[must_use]
    pub fn missing_fields(self, form: &CheckoutForm) -> Vec<FormField> {
        self.required_fields()
            .iter()
            .copied()
            .filter(|field| form.value(*field).trim().is_empty())
            .collect()
    }

    /// Notice text shown when required fields are missing.
    #[must_use]
    pub const fn missing_fields_message(self) -> &'static str {
        match self {
            Self::Delivery => "Please fill out name, email, and address to place your (fake) order.",
            Self::Pickup => {
                "Please fill out name, phone, and pickup time to place your (fake) order."
            }
        }
    }
}

/// Error parsing a [`CheckoutVariant`] or [`AfterOrder`] mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value '{value}', expected one of: {expected}")]
pub struct UnknownOption {
    value: String,
    expected: &'static str,
}

impl FromStr for CheckoutVariant {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delivery" => Ok(Self::Delivery),
            "pickup" => Ok(Self::Pickup),
            _ => Err(UnknownOption {
                value: s.to_owned(),
                expected: "delivery, pickup",
            }),
        }
    }
}

/// What the page does after an order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AfterOrder {
    /// Reset the form and re-render badge and checkout views.
    #[default]
    ResetInPlace,
    /// Navigate away to `location`.
    Redirect { location: String },
}

impl AfterOrder {
    /// Parse a mode name, using `landing_page` as the redirect target.
    ///
    /// # Errors
    ///
    /// Returns an error unless `mode` is `reset` or `redirect`.
    pub fn parse(mode: &str, landing_page: &str) -> Result<Self, UnknownOption> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(Self::ResetInPlace),
            "redirect" => Ok(Self::Redirect {
                location: landing_page.to_owned(),
            }),
            _ => Err(UnknownOption {
                value: mode.to_owned(),
                expected: "reset, redirect",
            }),
        }
    }
}

/// Checkout behavior for a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckoutSettings {
    pub variant: CheckoutVariant,
    pub after_order: AfterOrder,
}

/// Record of a simulated order. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub item_count: u64,
    pub total: Price,
}

impl OrderReceipt {
    /// Issue a receipt for `cart`.
    #[must_use]
    pub fn issue(cart: &Cart) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}
