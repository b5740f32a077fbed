//! # warung-core: Pure Business Logic for the Warung Storefront
//!
//! This crate is the heart of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Warung Architecture                              │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Rendering layer (external)                     │   │
//! │  │   Product grid ──► Detail modal ──► Cart modal ──► Toast    │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │ UiEvent                            │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                  warung-app (session layer)                 │   │
//! │  │   dispatch, catalog fetch, notifications, order sink        │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │              ★ warung-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐       │   │
//! │  │   │  types  │  │  money  │  │  cart   │  │  order  │       │   │
//! │  │   │ Product │  │  Money  │  │  Cart   │  │ compose │       │   │
//! │  │   │Customer │  │ Rupiah  │  │CartLine │  │validate │       │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘       │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CustomerInfo)
//! - [`money`] - Money type with integer arithmetic and rupiah formatting
//! - [`cart`] - The cart state machine (lines, quantities, totals)
//! - [`order`] - Checkout validation and order-message composition
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, every time
//! 2. **No I/O**: network and file system access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use warung_core::cart::Cart;
//! use warung_core::money::{ExchangeRate, Money};
//! use warung_core::types::Product;
//!
//! let shirt = Product::new(1, "Kaos Polos", 1000); // $10.00
//!
//! let mut cart = Cart::new();
//! cart.add(&shirt);
//! cart.add(&shirt);
//! cart.increase(shirt.id);
//!
//! assert_eq!(cart.total_item_count(), 3);
//! assert_eq!(cart.total_amount_cents(), 3000); // $30.00
//!
//! // Display total at the fixed rate: Rp 450.000
//! let rupiah = Money::from_cents(cart.total_amount_cents())
//!     .to_rupiah(ExchangeRate::default());
//! assert_eq!(warung_core::money::format_rupiah(rupiah), "Rp 450.000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod order;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use error::CheckoutError;
pub use money::{ExchangeRate, Money};
pub use order::OrderRequest;
pub use types::{CustomerInfo, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed conversion rate between the catalog's source currency (USD) and
/// the display currency (IDR): 1 source unit = Rp 15.000.
///
/// ## Why a constant?
/// The storefront deliberately has no live exchange-rate feed; every
/// price the visitor sees is derived from this one factor, so the
/// single-item and cart-total displays can never disagree.
pub const IDR_PER_USD: i64 = 15_000;
