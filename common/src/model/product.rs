use serde::{Deserialize, Serialize};

use crate::config::StockPolicy;

/// A product as shown in the catalog, built once by the normalizer.
///
/// `image_groups[i]` holds the pictures for `colors[i]`. The two lists are not
/// required to line up; use [`ProductRecord::image_group`] to read a group so a
/// missing one comes back empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub colors: Vec<String>,
    pub image_groups: Vec<Vec<String>>,
    pub original_price: f64,
    pub selling_price: f64,
    pub stock_quantity: u32,
    pub discount_percentage: u32,
    pub stock_status: StockStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl ProductRecord {
    /// Images for the color at `index`; empty when there is no such group.
    pub fn image_group(&self, index: usize) -> &[String] {
        self.image_groups
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First image of the first color group.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_group(0).first().map(String::as_str)
    }

    /// True when a positive original price is struck through next to a lower selling price.
    pub fn is_marked_down(&self) -> bool {
        self.original_price > self.selling_price && self.original_price > 0.0
    }

    pub fn is_out_of_stock(&self, track_stock: bool) -> bool {
        track_stock && self.stock_status == StockStatus::OutOfStock
    }

    /// Case-insensitive exact category match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

/// Whole-number percentage saved; 0 when `original <= selling` or `original <= 0`.
pub fn discount_percentage(original: f64, selling: f64) -> u32 {
    if original > selling && original > 0.0 {
        ((original - selling) / original * 100.0).round() as u32
    } else {
        0
    }
}

impl StockStatus {
    pub fn classify(quantity: u32, policy: StockPolicy) -> Self {
        if !policy.track_stock {
            StockStatus::InStock
        } else if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= policy.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// CSS class used by stock badges and stock lines.
    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out-of-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::InStock => "in-stock",
        }
    }

    pub fn label(self, quantity: u32) -> String {
        match self {
            StockStatus::OutOfStock => "Out of Stock".to_string(),
            StockStatus::LowStock => format!("Only {} Left!", quantity),
            StockStatus::InStock if quantity > 10 => "In Stock".to_string(),
            StockStatus::InStock => format!("{} Available", quantity),
        }
    }
}
