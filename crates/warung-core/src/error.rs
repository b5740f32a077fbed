//! # Error Types
//!
//! Domain-specific error types for warung-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message in the shop's language

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// A checkout validation failure.
///
/// Validation runs in a fixed order and short-circuits on the first
/// failure: name → address → phone → cart contents. No partial order
/// composition happens on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The customer name is empty after trimming.
    #[error("customer name is required")]
    NameRequired,

    /// The delivery address is empty after trimming.
    #[error("delivery address is required")]
    AddressRequired,

    /// The WhatsApp phone number is empty after trimming.
    #[error("phone number is required")]
    PhoneRequired,

    /// The cart has no lines; there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,
}

impl CheckoutError {
    /// The Indonesian toast text shown to the visitor for this failure.
    ///
    /// The `Display` impl stays English for logs; this is the
    /// user-facing string.
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckoutError::NameRequired => "Nama lengkap harus diisi",
            CheckoutError::AddressRequired => "Alamat pengiriman harus diisi",
            CheckoutError::PhoneRequired => "Nomor WhatsApp harus diisi",
            CheckoutError::EmptyCart => "Keranjang belanja kosong",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
