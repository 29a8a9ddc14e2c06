//! The in-memory catalog and category filtering.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::model::product::ProductRecord;

/// Token used by filter controls for "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Holds the current catalog. Replacing it swaps the whole sequence at once,
/// so readers holding a previous snapshot keep seeing that snapshot intact.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogStore {
    products: Rc<[ProductRecord]>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CatalogStore {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn replace_all(&mut self, products: Vec<ProductRecord>) {
        self.products = products.into();
    }

    pub fn all(&self) -> &[ProductRecord] {
        &self.products
    }

    /// A cheap handle on the current sequence.
    pub fn snapshot(&self) -> Rc<[ProductRecord]> {
        Rc::clone(&self.products)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products passing `filter`, in catalog order.
    pub fn visible(&self, filter: &CategoryFilter) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    /// Distinct non-empty categories in first-seen order; the first spelling wins.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in self.products.iter() {
            let category = product.category.trim();
            if category.is_empty() {
                continue;
            }
            let lowered = category.to_lowercase();
            if !categories.iter().any(|seen| seen.to_lowercase() == lowered) {
                categories.push(category);
            }
        }
        categories
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &ProductRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => product.in_category(category),
        }
    }

    /// Value for the `data-filter` attribute of a filter control.
    pub fn token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Category(token.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
