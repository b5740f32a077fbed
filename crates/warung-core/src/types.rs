//! # Domain Types
//!
//! Core domain types for the storefront.
//!
//! A [`Product`] is created once from the catalog fetch and never mutated
//! afterwards; it lives for the page session. [`CustomerInfo`] is
//! transient checkout input, reset to configured defaults after a
//! successful order.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product from the catalog.
///
/// Prices arrive from the catalog as decimal source-currency amounts and
/// are converted to integer cents exactly once, at the fetch boundary.
/// Everything downstream works in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Price in cents of the source currency (non-negative).
    pub price_cents: i64,

    /// Category label, as supplied by the catalog.
    pub category: String,

    /// Image URL.
    pub image: String,

    /// Long-form description shown on the detail view.
    pub description: String,
}

impl Product {
    /// Creates a product with just the fields the cart math needs;
    /// category, image and description default to empty.
    ///
    /// Intended for tests and examples. Real products come from the
    /// catalog fetch.
    pub fn new(id: u64, title: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id,
            title: title.into(),
            price_cents,
            category: String::new(),
            image: String::new(),
            description: String::new(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Customer-supplied checkout fields.
///
/// Free-text strings; validation (non-empty after trimming) happens in
/// the order composer, in a fixed order. Not persisted beyond the single
/// checkout call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// Full name for the order greeting.
    pub name: String,

    /// Delivery address.
    pub address: String,

    /// WhatsApp phone number; non-digit characters are stripped when the
    /// destination address is built.
    pub phone: String,
}

impl CustomerInfo {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        CustomerInfo {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
