//! # Cart State
//!
//! Shared ownership wrapper around the cart, plus the derived view
//! snapshots consumers display.
//!
//! ## Thread Safety
//! The session processes one event at a time, but the cart is wrapped in
//! `Arc<Mutex<T>>` so a host shell can hold a handle next to the session
//! (for example a render thread reading totals). Only one party mutates
//! at a time.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use warung_core::cart::Cart;
use warung_core::money::{format_rupiah, ExchangeRate, Money};

/// Shared handle to the authoritative cart.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.total_item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&product));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Builds the display snapshot for the current cart contents.
    pub fn view(&self, rate: ExchangeRate) -> CartView {
        self.with_cart(|cart| CartView::build(cart, rate))
    }
}

// =============================================================================
// Derived View Snapshots
// =============================================================================

/// One cart line, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: u64,
    pub title: String,
    pub quantity: u32,
    /// Unit price in display currency, e.g. `Rp 150.000`.
    pub unit_price_display: String,
    /// Line subtotal in display currency.
    pub subtotal_display: String,
}

/// The cart as the renderer sees it: lines plus recomputed totals.
///
/// Built fresh after every mutation; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Sum of all line quantities (the cart badge number).
    pub total_item_count: u32,
    /// Grand total in display currency, e.g. `Rp 450.000`.
    pub total_display: String,
    pub is_empty: bool,
}

impl CartView {
    fn build(cart: &Cart, rate: ExchangeRate) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                product_id: line.product_id,
                title: line.title.clone(),
                quantity: line.quantity,
                unit_price_display: format_rupiah(
                    Money::from_cents(line.unit_price_cents).to_rupiah(rate),
                ),
                subtotal_display: format_rupiah(line.subtotal().to_rupiah(rate)),
            })
            .collect();

        CartView {
            lines,
            total_item_count: cart.total_item_count(),
            total_display: format_rupiah(cart.total_amount().to_rupiah(rate)),
            is_empty: cart.is_empty(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
