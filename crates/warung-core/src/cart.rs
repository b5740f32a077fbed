//! # Cart Module
//!
//! The in-memory shopping cart state machine.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                            │
//! │                                                                     │
//! │  Visitor Action           Operation             Cart Change         │
//! │  ──────────────           ─────────             ───────────         │
//! │                                                                     │
//! │  "Tambah ke Keranjang" ─► add(&product) ──────► qty += 1 or push    │
//! │                                                                     │
//! │  "+" in cart modal ─────► increase(id) ───────► qty += 1            │
//! │                                                                     │
//! │  "−" in cart modal ─────► decrease(id) ───────► qty -= 1,           │
//! │                                                 removed at qty 1    │
//! │                                                                     │
//! │  Trash icon ────────────► remove(id) ─────────► line deleted        │
//! │                                                                     │
//! │  Checkout success ──────► clear() ────────────► back to empty       │
//! │                                                                     │
//! │  Totals are recomputed on demand, never cached.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id, at any time
//! - Every line has quantity ≥ 1; a line that would reach 0 is removed
//! - Insertion order is preserved (first add determines position)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One product-plus-quantity entry in the cart.
///
/// ## Design Notes
/// - `product_id`: reference back to the catalog product
/// - `title` / `unit_price_cents`: frozen copies taken when the line is
///   created, so the cart displays consistent data for the whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog id of the product this line refers to.
    pub product_id: u64,

    /// Product title at time of adding (frozen).
    pub title: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart; always ≥ 1.
    pub quantity: u32,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line for a product with quantity 1.
    fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            title: product.title.clone(),
            unit_price_cents: product.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Line subtotal (unit price × quantity) in source-currency cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }

    /// Line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an insertion-ordered sequence of [`CartLine`].
///
/// Created empty at session start, mutated by visitor actions, cleared
/// after a successful checkout. The cart holds no rendering
/// responsibility; callers refresh any derived view after every
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented by 1; otherwise a new line with quantity 1 is
    /// appended. The catalog lookup happens in the caller, so a product
    /// reference here is always known.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine::from_product(product));
    }

    /// Increments the quantity of an existing line by 1.
    ///
    /// Silent no-op if the product is not in the cart.
    pub fn increase(&mut self, product_id: u64) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity += 1;
        }
    }

    /// Decrements the quantity of an existing line by 1.
    ///
    /// A line at quantity 1 is removed instead; the cart never retains a
    /// zero-quantity line. Silent no-op if the product is not in the
    /// cart.
    pub fn decrease(&mut self, product_id: u64) {
        let Some(idx) = self.lines.iter().position(|l| l.product_id == product_id) else {
            return;
        };
        if self.lines[idx].quantity > 1 {
            self.lines[idx].quantity -= 1;
        } else {
            self.lines.remove(idx);
        }
    }

    /// Removes the line for a product, preserving the order of the
    /// remaining lines. Silent no-op if absent.
    pub fn remove(&mut self, product_id: u64) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Removes all lines, returning the cart to empty.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for a product, if present.
    pub fn line(&self, product_id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: u64) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total item count: the sum of all line quantities (the cart badge
    /// number). 0 for an empty cart. Recomputed on every call.
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Total amount in source-currency cents: Σ (unit price × quantity).
    /// 0 for an empty cart. Recomputed on every call; display conversion
    /// happens in the currency formatter.
    pub fn total_amount_cents(&self) -> i64 {
        self.lines.iter().map(CartLine::subtotal_cents).sum()
    }

    /// Total amount as Money.
    #[inline]
    pub fn total_amount(&self) -> Money {
        Money::from_cents(self.total_amount_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents)
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 999));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.total_amount_cents(), 999);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 999);

        cart.add(&p);
        cart.add(&p);

        // Still one line, never a duplicate per product id
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_item_count(), 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, 100));
        cart.add(&product(1, 200));
        cart.add(&product(3, 100)); // bumps qty, keeps position
        cart.add(&product(2, 300));

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500));

        cart.increase(1);
        cart.increase(1);
        assert_eq!(cart.line(1).unwrap().quantity, 3);

        cart.decrease(1);
        assert_eq!(cart.line(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_decrease_at_quantity_one_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500));

        cart.decrease(1);

        assert!(cart.line(1).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increase_decrease_remove_unknown_are_no_ops() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500));

        cart.increase(99);
        cart.decrease(99);
        cart.remove(99);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500));
        cart.add(&product(1, 500));

        let before: Vec<(u64, u32)> = cart
            .lines()
            .iter()
            .map(|l| (l.product_id, l.quantity))
            .collect();

        cart.add(&product(2, 300));
        cart.remove(2);

        let after: Vec<(u64, u32)> = cart
            .lines()
            .iter()
            .map(|l| (l.product_id, l.quantity))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500)); // qty 2 below
        cart.add(&product(1, 500));
        cart.add(&product(2, 2000));

        cart.remove(1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id, 2);
        assert_eq!(cart.total_item_count(), 1);
        assert_eq!(cart.total_amount_cents(), 2000);
    }

    #[test]
    fn test_totals_recomputed_after_every_mutation() {
        let mut cart = Cart::new();
        let p1 = product(1, 1000);
        let p2 = product(2, 250);

        cart.add(&p1);
        assert_eq!((cart.total_item_count(), cart.total_amount_cents()), (1, 1000));

        cart.add(&p2);
        cart.increase(2);
        assert_eq!((cart.total_item_count(), cart.total_amount_cents()), (3, 1500));

        cart.decrease(1);
        assert_eq!((cart.total_item_count(), cart.total_amount_cents()), (2, 500));

        cart.clear();
        assert_eq!((cart.total_item_count(), cart.total_amount_cents()), (0, 0));
    }

    /// Quantity never reaches zero and product ids stay unique under an
    /// arbitrary mixed operation sequence.
    #[test]
    fn test_invariants_hold_under_mixed_sequence() {
        let mut cart = Cart::new();
        let products: Vec<Product> = (1..=4).map(|id| product(id, id as i64 * 100)).collect();

        for step in 0u64..200 {
            let p = &products[(step % 4) as usize];
            match step % 7 {
                0 | 1 => cart.add(p),
                2 => cart.increase(p.id),
                3 | 4 => cart.decrease(p.id),
                5 => cart.remove(p.id),
                _ => cart.increase(step), // mostly-unknown id, no-op
            }

            let mut seen = std::collections::HashSet::new();
            for line in cart.lines() {
                assert!(line.quantity >= 1, "zero-quantity line survived");
                assert!(seen.insert(line.product_id), "duplicate product line");
            }
            assert_eq!(
                cart.total_item_count(),
                cart.lines().iter().map(|l| l.quantity).sum::<u32>()
            );
        }
    }

    /// add(1); add(1); increase(1) → one line, qty 3, $30.00 total.
    #[test]
    fn test_single_product_accumulation() {
        let mut cart = Cart::new();
        let p = product(1, 1000);

        cart.add(&p);
        cart.add(&p);
        cart.increase(1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 3);
        assert_eq!(cart.total_amount_cents(), 3000);
    }

    #[test]
    fn test_line_freezes_title_and_price() {
        let mut cart = Cart::new();
        let mut p = Product::new(1, "Kaos Polos", 1000);
        cart.add(&p);

        // Later catalog mutation must not affect the existing line
        p.price_cents = 9999;
        p.title = "Kaos Mahal".to_string();

        let line = cart.line(1).unwrap();
        assert_eq!(line.unit_price_cents, 1000);
        assert_eq!(line.title, "Kaos Polos");
    }
}
