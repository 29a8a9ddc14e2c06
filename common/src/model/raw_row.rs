/// Column titles understood by the normalizer.
///
/// Lookups ignore case, spaces, underscores and hyphens, so a feed may use
/// `Product ID`, `ProductID` or `product_id` for the same column.
pub mod columns {
    pub const PRODUCT_ID: &str = "Product ID";
    pub const PRODUCT_NAME: &str = "Product Name";
    pub const CATEGORY: &str = "Category";
    pub const DESCRIPTION: &str = "Description";
    pub const COLORS_AVAILABLE: &str = "Colors Available";
    pub const IMAGE_URLS: &str = "Image URLs";
    pub const ORIGINAL_PRICE: &str = "Original Price";
    pub const SELLING_PRICE: &str = "Selling Price";
    /// Older sheets only carry this column; it backs up `Selling Price`.
    pub const BASE_PRICE: &str = "Base Price";
    pub const STOCK_QUANTITY: &str = "Stock Quantity";
}

/// One CSV data line keyed by its header titles, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.push((column.into(), value.into()));
    }

    /// Value of the first column whose normalized title matches `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(title, _)| same_column(title, column))
            .map(|(_, value)| value.as_str())
    }

    /// Like [`RawRow::get`], but missing columns read as an empty string.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(title, _)| title.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn same_column(a: &str, b: &str) -> bool {
    column_key(a).eq(column_key(b))
}

fn column_key(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
}
