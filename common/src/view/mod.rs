//! Display-ready data for product cards and the product detail view.
//!
//! The frontend turns these into markup; every decision about what is shown
//! (badges, struck-through prices, disabled buttons, placeholders) is made here
//! so it can be tested without a browser.

use crate::catalog::{CatalogStore, CategoryFilter};
use crate::config::StoreConfig;
use crate::model::product::ProductRecord;
use crate::selection::Selection;

pub const EMPTY_GRID_MESSAGE: &str = "No products found matching current filters.";
pub const LOADING_MESSAGE: &str = "Loading product catalog...";

const INQUIRE_LABEL: &str = "Inquire on WhatsApp";
const OUT_OF_STOCK_LABEL: &str = "Out of Stock";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Upper-cased category shown above the name.
    pub category_label: String,
    pub description: String,
    /// First picture of the first color, or the placeholder.
    pub primary_image: String,
    /// `None` when stock tracking is off.
    pub stock_badge: Option<StockBadge>,
    /// e.g. `20% OFF`; `None` without a discount or when discounts are hidden.
    pub discount_badge: Option<String>,
    pub price: PriceBlock,
    pub swatches: Vec<Swatch>,
    pub contact: ContactButton,
    /// `N units available` / `Currently out of stock`; detail view only.
    pub stock_detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockBadge {
    pub css_class: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBlock {
    /// Struck-through original price.
    pub original: Option<String>,
    pub selling: String,
    pub discount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub index: usize,
    pub name: String,
    /// Lower-cased color name, used as the `data-color` hook for styling.
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactButton {
    pub enabled: bool,
    pub label: &'static str,
}

impl ProductView {
    pub fn card(product: &ProductRecord, config: &StoreConfig) -> Self {
        Self::build(product, config, &config.card_placeholder_image, None)
    }

    pub fn detail(product: &ProductRecord, config: &StoreConfig) -> Self {
        let stock_detail = config.track_stock.then(|| {
            if product.stock_quantity > 0 {
                format!("{} units available", product.stock_quantity)
            } else {
                "Currently out of stock".to_string()
            }
        });
        Self::build(product, config, &config.popup_placeholder_image, stock_detail)
    }

    fn build(
        product: &ProductRecord,
        config: &StoreConfig,
        placeholder: &str,
        stock_detail: Option<String>,
    ) -> Self {
        let discount = (config.show_discount && product.discount_percentage > 0)
            .then(|| format!("{}% OFF", product.discount_percentage));
        let out_of_stock = product.is_out_of_stock(config.track_stock);

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            category_label: product.category.to_uppercase(),
            description: product.description.clone(),
            primary_image: Selection::new()
                .displayed_image(product, placeholder)
                .to_string(),
            stock_badge: config.track_stock.then(|| StockBadge {
                css_class: product.stock_status.css_class(),
                text: product.stock_status.label(product.stock_quantity),
            }),
            discount_badge: discount.clone(),
            price: PriceBlock {
                original: product
                    .is_marked_down()
                    .then(|| config.format_price(product.original_price)),
                selling: config.format_price(product.selling_price),
                discount,
            },
            swatches: product
                .colors
                .iter()
                .enumerate()
                .map(|(index, name)| Swatch {
                    index,
                    name: name.clone(),
                    token: name.to_lowercase(),
                })
                .collect(),
            contact: ContactButton {
                enabled: !out_of_stock,
                label: if out_of_stock {
                    OUT_OF_STOCK_LABEL
                } else {
                    INQUIRE_LABEL
                },
            },
            stock_detail,
        }
    }
}

/// A visible product with its card contents.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCard<'a> {
    pub product: &'a ProductRecord,
    pub view: ProductView,
}

/// One card per visible product, in catalog order.
pub fn render_grid<'a>(
    store: &'a CatalogStore,
    filter: &CategoryFilter,
    config: &StoreConfig,
) -> Vec<GridCard<'a>> {
    store
        .visible(filter)
        .into_iter()
        .map(|product| GridCard {
            product,
            view: ProductView::card(product, config),
        })
        .collect()
}
