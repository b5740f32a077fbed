//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`WARUNG_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex is
//! needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use warung_core::money::ExchangeRate;
use warung_core::types::CustomerInfo;

/// The public catalog endpoint the storefront reads at startup.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// How long a transient notification stays visible before auto-dismiss.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Catalog endpoint fetched once at startup.
    pub catalog_url: String,

    /// Fixed source→display currency conversion rate.
    pub exchange_rate: ExchangeRate,

    /// Values the checkout form is reset to after a successful order.
    ///
    /// The default literals look like leftover test data; they are kept
    /// configurable pending product-owner confirmation (see DESIGN.md).
    pub customer_defaults: CustomerInfo,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            exchange_rate: ExchangeRate::default(),
            customer_defaults: CustomerInfo::new("yohan", "pulung", "085707808522"),
        }
    }
}

impl Config {
    /// Creates a Config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `WARUNG_CATALOG_URL`: override the catalog endpoint
    /// - `WARUNG_EXCHANGE_RATE`: override the rupiah-per-dollar rate
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(url) = std::env::var("WARUNG_CATALOG_URL") {
            config.catalog_url = url;
        }

        if let Ok(rate_str) = std::env::var("WARUNG_EXCHANGE_RATE") {
            if let Ok(rate) = rate_str.parse::<i64>() {
                config.exchange_rate = ExchangeRate::rupiah_per_dollar(rate);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warung_core::IDR_PER_USD;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.exchange_rate.rupiah_per_unit(), IDR_PER_USD);
        assert_eq!(config.customer_defaults.name, "yohan");
        assert_eq!(config.customer_defaults.phone, "085707808522");
    }
}
