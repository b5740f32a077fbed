//! # Order Composition
//!
//! Turns the final cart plus customer-supplied fields into the outbound
//! WhatsApp order message.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  compose_order(customer, cart, rate)                                │
//! │       │                                                             │
//! │       ├── name empty?    → Err(NameRequired)     (short-circuit)    │
//! │       ├── address empty? → Err(AddressRequired)                     │
//! │       ├── phone empty?   → Err(PhoneRequired)                       │
//! │       ├── cart empty?    → Err(EmptyCart)                           │
//! │       │                                                             │
//! │       └── OK → OrderRequest {                                       │
//! │                  destination: digits-only phone,                    │
//! │                  message:     formatted order text,                 │
//! │               }                                                     │
//! │                  │                                                  │
//! │                  └── whatsapp_url() → https://wa.me/<dst>?text=…    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation order is fixed and the first failure wins; no partial
//! composition happens on the error path.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::CheckoutError;
use crate::money::{format_rupiah, ExchangeRate, Money};
use crate::types::CustomerInfo;

// =============================================================================
// Order Request
// =============================================================================

/// A composed order, ready for the outbound message sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Destination address: the customer phone number with every
    /// non-digit character stripped.
    pub destination: String,

    /// The plain-text order message (not yet URL-encoded).
    pub message: String,
}

impl OrderRequest {
    /// The message percent-encoded for use in a URL query parameter.
    pub fn encoded_message(&self) -> String {
        urlencoding::encode(&self.message).into_owned()
    }

    /// The full messaging-service link:
    /// `https://wa.me/<destination>?text=<encoded message>`.
    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.destination,
            self.encoded_message()
        )
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Validates the checkout input and composes the order message.
///
/// ## Validation Order
/// Fixed, first failure short-circuits:
/// 1. customer name (non-empty after trim)
/// 2. delivery address (non-empty after trim)
/// 3. phone number (non-empty after trim)
/// 4. cart non-empty
///
/// ## Message Format
/// The shop's Indonesian template: greeting, name, address, one line
/// per cart entry as `- {title} ({qty} pcs) = {Rp subtotal}`, then the
/// grand total and a closing thanks. All amounts are display currency
/// at the given fixed rate.
pub fn compose_order(
    customer: &CustomerInfo,
    cart: &Cart,
    rate: ExchangeRate,
) -> Result<OrderRequest, CheckoutError> {
    let name = customer.name.trim();
    if name.is_empty() {
        return Err(CheckoutError::NameRequired);
    }

    let address = customer.address.trim();
    if address.is_empty() {
        return Err(CheckoutError::AddressRequired);
    }

    let phone = customer.phone.trim();
    if phone.is_empty() {
        return Err(CheckoutError::PhoneRequired);
    }

    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let destination: String = phone.chars().filter(char::is_ascii_digit).collect();

    let mut message = String::from("Halo, saya ingin memesan produk berikut:\n\n");
    message.push_str(&format!("Nama: {}\n", name));
    message.push_str(&format!("Alamat: {}\n\n", address));
    message.push_str("Pesanan:\n");

    for line in cart.lines() {
        let subtotal = line.subtotal().to_rupiah(rate);
        message.push_str(&format!(
            "- {} ({} pcs) = {}\n",
            line.title,
            line.quantity,
            format_rupiah(subtotal)
        ));
    }

    let total = Money::from_cents(cart.total_amount_cents()).to_rupiah(rate);
    message.push_str(&format!("\nTotal: {}\n\n", format_rupiah(total)));
    message.push_str("Terima kasih.");

    Ok(OrderRequest {
        destination,
        message,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
