//! # State Module
//!
//! Application state for the session layer.
//!
//! ## Why Multiple State Types?
//! Instead of one struct containing everything, each concern gets its
//! own type:
//!
//! 1. **CartState**: the authoritative cart, shared-handle wrapped
//! 2. **CatalogState**: the immutable product snapshot, populated once
//! 3. **Config**: read-only after initialization
//!
//! The session owns one of each and has a defined initialization: empty
//! cart, empty catalog, customer form at configured defaults. There is
//! no teardown; state is session-scoped and ends with the page lifetime.

mod cart;
mod catalog;
mod config;

pub use cart::{CartLineView, CartState, CartView};
pub use catalog::CatalogState;
pub use config::{Config, DEFAULT_CATALOG_URL, NOTICE_DISMISS_AFTER};
