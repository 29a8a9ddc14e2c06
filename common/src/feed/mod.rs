//! Feed loading: CSV text in, a complete catalog out.
//!
//! The storefront makes a single fetch attempt. Whatever goes wrong with it
//! (transport, status, format, empty result) ends in the sample catalog plus
//! an advisory, never in an empty page.

use std::fmt;

use crate::config::StockPolicy;
use crate::error::FeedError;
use crate::model::product::ProductRecord;

pub mod csv;
pub mod normalize;
pub mod sample;

use self::csv::parse_csv;
use self::normalize::normalize_rows;
use self::sample::sample_catalog;

/// Shown in place of the grid contents after a failed feed load.
pub const FALLBACK_ADVISORY: &str =
    "Unable to load products from the product feed. Showing our sample collection instead.";

/// Where the current catalog came from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Feed,
    /// No feed configured.
    Sample,
    /// The feed failed and the sample catalog replaced it.
    Fallback(FeedError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub products: Vec<ProductRecord>,
    pub source: CatalogSource,
}

impl LoadedCatalog {
    pub fn sample(policy: StockPolicy) -> Self {
        Self {
            products: sample_catalog(policy),
            source: CatalogSource::Sample,
        }
    }

    pub fn advisory(&self) -> Option<&'static str> {
        match self.source {
            CatalogSource::Fallback(_) => Some(FALLBACK_ADVISORY),
            CatalogSource::Feed | CatalogSource::Sample => None,
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Feed => f.write_str("feed"),
            CatalogSource::Sample => f.write_str("sample"),
            CatalogSource::Fallback(err) => write!(f, "sample (fallback: {})", err),
        }
    }
}

/// Parses and normalizes feed text.
///
/// # Errors
///
/// [`FeedError::InsufficientLines`] from the parser, or
/// [`FeedError::NoProducts`] when no row survives normalization.
pub fn catalog_from_csv(text: &str, policy: StockPolicy) -> Result<Vec<ProductRecord>, FeedError> {
    let rows = parse_csv(text)?;
    let products = normalize_rows(&rows, policy);
    if products.is_empty() {
        return Err(FeedError::NoProducts);
    }
    Ok(products)
}

/// Turns the outcome of the one fetch attempt into the catalog to display.
pub fn resolve_feed(fetched: Result<String, FeedError>, policy: StockPolicy) -> LoadedCatalog {
    match fetched.and_then(|text| catalog_from_csv(&text, policy)) {
        Ok(products) => LoadedCatalog {
            products,
            source: CatalogSource::Feed,
        },
        Err(err) => LoadedCatalog {
            products: sample_catalog(policy),
            source: CatalogSource::Fallback(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Product ID,Product Name,Category,Description,Colors Available,Image URLs,Original Price,Selling Price,Stock Quantity";

    #[test]
    fn good_feed_is_used_as_is() {
        let text = format!("{HEADER}\n9,Dupatta,women,light,Red,u1,300,250,4\n");
        let loaded = resolve_feed(Ok(text), StockPolicy::default());
        assert_eq!(loaded.source, CatalogSource::Feed);
        assert_eq!(loaded.products.len(), 1);
        assert_eq!(loaded.advisory(), None);
    }

    #[test]
    fn every_failure_falls_back_to_sample() {
        let failures = [
            Err(FeedError::Transport("offline".into())),
            Err(FeedError::Status(404)),
            Ok(HEADER.to_string()),
            Ok(format!("{HEADER}\n,missing id,men,,,,,,")),
        ];
        let expected = [
            FeedError::Transport("offline".into()),
            FeedError::Status(404),
            FeedError::InsufficientLines { found: 1 },
            FeedError::NoProducts,
        ];

        for (fetched, err) in failures.into_iter().zip(expected) {
            let loaded = resolve_feed(fetched, StockPolicy::default());
            assert_eq!(loaded.source, CatalogSource::Fallback(err));
            assert_eq!(loaded.products.len(), 4);
            assert_eq!(loaded.advisory(), Some(FALLBACK_ADVISORY));
        }
    }

    #[test]
    fn unconfigured_feed_serves_sample_quietly() {
        let loaded = LoadedCatalog::sample(StockPolicy::default());
        assert_eq!(loaded.source, CatalogSource::Sample);
        assert_eq!(loaded.products.len(), 4);
        assert_eq!(loaded.advisory(), None);
    }
}
