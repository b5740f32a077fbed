//! # View Boundary
//!
//! The seam between the session and whatever renders it.
//!
//! The renderer is a pure consumer: it receives a fresh [`ViewState`]
//! snapshot after every state mutation and re-renders synchronously. It
//! never reaches into the session's state; user intents come back in as
//! [`UiEvent`](crate::session::UiEvent)s.

use serde::{Deserialize, Serialize};

use warung_core::types::Product;

use crate::notify::Notice;
use crate::state::CartView;

/// Which overlay, if any, is open on top of the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Overlay {
    /// Just the product grid.
    None,
    /// The product-detail modal for one catalog id.
    ProductDetail(u64),
    /// The cart / checkout modal.
    Cart,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Catalog snapshot, in catalog order. Empty until the fetch
    /// completes (or forever, if it failed).
    pub products: Vec<Product>,

    /// The cart with display-currency amounts and recomputed totals.
    pub cart: CartView,

    /// Currently-open overlay.
    pub overlay: Overlay,
}

/// A synchronous rendering consumer.
pub trait ViewRenderer {
    /// Redraws from a full state snapshot. Called after every mutation.
    fn render(&mut self, view: &ViewState);

    /// Shows a transient notification (toast). The renderer owns the
    /// auto-dismiss timing.
    fn notify(&mut self, notice: &Notice);
}
