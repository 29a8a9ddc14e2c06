use thiserror::Error;

/// Reasons a product feed could not produce a catalog.
///
/// Every variant is recoverable: the storefront swaps in the sample catalog
/// and shows an advisory instead of the grid contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Transport(String),

    #[error("feed responded with HTTP status {0}")]
    Status(u16),

    #[error("invalid CSV format: expected a header and at least one data row, found {found} line(s)")]
    InsufficientLines { found: usize },

    #[error("no products found in feed")]
    NoProducts,
}
