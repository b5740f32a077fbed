//! # Catalog Source
//!
//! The one-shot product catalog fetch.
//!
//! The fetch runs exactly once at startup and has two terminal outcomes:
//! a populated catalog, or an error that leaves the catalog empty. No
//! retry, no cancellation, no timeout beyond what the network stack
//! reports.
//!
//! Prices arrive as decimal source-currency amounts; this module is the
//! only place they are converted to integer cents.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use warung_core::types::Product;

// =============================================================================
// Errors
// =============================================================================

/// Failure of the catalog fetch. Reported to the visitor once via the
/// notification channel; the catalog stays empty.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request failed in transit or the body was not valid JSON.
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("catalog endpoint returned HTTP {status}")]
    Status { status: u16 },
}

// =============================================================================
// Wire Format
// =============================================================================

/// One product record as the catalog API returns it.
///
/// Unknown fields (ratings and the like) are ignored.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: u64,
    title: String,
    /// Decimal price in the source currency, e.g. `10.99`.
    price: f64,
    category: String,
    image: String,
    #[serde(default)]
    description: String,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: record.id,
            title: record.title,
            price_cents: price_to_cents(record.price),
            category: record.category,
            image: record.image,
            description: record.description,
        }
    }
}

/// Decimal source-currency price → integer cents, round half up.
/// The single float-to-integer crossing in the whole system.
fn price_to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

// =============================================================================
// Client
// =============================================================================

/// Fetches the product catalog from the remote API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Creates a client for the given catalog endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        CatalogClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches the full product list.
    ///
    /// Single-shot: callers invoke this once at startup and treat an
    /// error as "catalog unavailable for this session".
    pub async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        debug!(endpoint = %self.endpoint, "fetching product catalog");

        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
            });
        }

        let records: Vec<ProductRecord> = response.json().await?;
        debug!(count = records.len(), "catalog fetched");

        Ok(records.into_iter().map(Product::from).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_price_to_cents() {
        assert_eq!(price_to_cents(10.0), 1000);
        assert_eq!(price_to_cents(10.99), 1099);
        assert_eq!(price_to_cents(0.1), 10);
        assert_eq!(price_to_cents(0.0), 0);
        // Float dust must not shave a cent off
        assert_eq!(price_to_cents(109.95), 10995);
    }

    #[tokio::test]
    async fn test_fetch_parses_catalog() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(serde_json::json!([
                {
                    "id": 1,
                    "title": "Kaos Polos",
                    "price": 10.99,
                    "category": "men's clothing",
                    "image": "https://example.com/kaos.jpg",
                    "description": "Katun halus",
                    "rating": { "rate": 4.1, "count": 259 }
                },
                {
                    "id": 2,
                    "title": "Topi",
                    "price": 5.0,
                    "category": "accessories",
                    "image": "https://example.com/topi.jpg",
                    "description": ""
                }
            ]));
        });

        let client = CatalogClient::new(server.url("/products"));
        let products = client.fetch().await.unwrap();
        mock.assert();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].price_cents, 1099);
        assert_eq!(products[0].category, "men's clothing");
        assert_eq!(products[1].price_cents, 500);
    }

    #[tokio::test]
    async fn test_fetch_reports_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(500);
        });

        let client = CatalogClient::new(server.url("/products"));
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_fetch_reports_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200).body("not json");
        });

        let client = CatalogClient::new(server.url("/products"));
        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Request(_)));
    }
}
