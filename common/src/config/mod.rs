//! Static storefront configuration.
//!
//! The storefront has no environment or file based configuration: a
//! `StoreConfig` is compiled in (usually `StoreConfig::default()`) and shared
//! read-only by the normalizer, the view models and the contact builder.

use serde::{Deserialize, Serialize};

/// Marker left in the feed URL by the spreadsheet setup template.
const UNCONFIGURED_FEED_MARKER: &str = "YOUR_SHEET_ID";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// CSV export URL of the product spreadsheet. `None` serves the sample catalog.
    pub feed_url: Option<String>,
    pub store_name: String,
    /// First line of every inquiry message.
    pub greeting: String,
    pub contact: ContactConfig,
    /// Quantities at or below this value are reported as low stock.
    pub low_stock_threshold: u32,
    /// When false, stock badges and stock lines disappear and every product
    /// counts as in stock.
    pub track_stock: bool,
    pub currency_symbol: String,
    pub show_discount: bool,
    pub card_placeholder_image: String,
    pub popup_placeholder_image: String,
    pub popup_close_delay_ms: u32,
    pub fade_duration_ms: u32,
}

/// External messaging target used for inquiries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub base_url: String,
    pub recipient: String,
}

/// The two knobs that decide a product's stock status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPolicy {
    pub track_stock: bool,
    pub low_stock_threshold: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            store_name: "Sanjay Cloth Centre".to_string(),
            greeting: "Hi! I'm interested in this product from Sanjay Cloth Centre:".to_string(),
            contact: ContactConfig::default(),
            low_stock_threshold: 5,
            track_stock: true,
            currency_symbol: "₹".to_string(),
            show_discount: true,
            card_placeholder_image: "https://via.placeholder.com/300x280?text=No+Image".to_string(),
            popup_placeholder_image: "https://via.placeholder.com/450x450?text=No+Image"
                .to_string(),
            popup_close_delay_ms: 500,
            fade_duration_ms: 500,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me".to_string(),
            recipient: "918972714744".to_string(),
        }
    }
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            track_stock: true,
            low_stock_threshold: 5,
        }
    }
}

impl StoreConfig {
    pub fn stock_policy(&self) -> StockPolicy {
        StockPolicy {
            track_stock: self.track_stock,
            low_stock_threshold: self.low_stock_threshold,
        }
    }

    /// The feed URL, unless it is missing, blank or still the setup placeholder.
    pub fn configured_feed_url(&self) -> Option<&str> {
        self.feed_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && !url.contains(UNCONFIGURED_FEED_MARKER))
    }

    /// Prefixes an amount with the currency symbol, e.g. `₹1299` or `₹1299.5`.
    pub fn format_price(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}
