//! # Catalog State
//!
//! The product catalog snapshot for the session.
//!
//! Populated exactly once at startup from the catalog fetch; stays empty
//! when the fetch fails. Products are immutable for the rest of the
//! session, so reads hand out references freely.

use warung_core::types::Product;

/// The session's catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl CatalogState {
    /// Creates an empty catalog (the pre-fetch / fetch-failed state).
    pub fn new() -> Self {
        CatalogState {
            products: Vec::new(),
        }
    }

    /// Installs the fetched product list. Called once at startup.
    pub fn populate(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Looks up a product by catalog id.
    pub fn get(&self, product_id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// The full product list, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
