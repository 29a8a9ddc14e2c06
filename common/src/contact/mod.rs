//! Pre-filled inquiry messages and the messaging link that carries them.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::catalog::CatalogStore;
use crate::config::StoreConfig;
use crate::model::product::ProductRecord;

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DETAILS_LIST: &str = "\n• Available sizes\n• Delivery options\n• Material details";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOrigin {
    Card,
    Popup,
}

/// What the UI should do for one contact click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    /// Opened in a new browsing context.
    pub url: String,
    /// Close the detail view this long after opening `url`.
    pub close_popup_after_ms: Option<u32>,
}

/// Looks up `product_id` and prepares the contact link; `None` for unknown ids.
pub fn build_contact(
    store: &CatalogStore,
    product_id: &str,
    origin: ContactOrigin,
    config: &StoreConfig,
) -> Option<ContactRequest> {
    let product = store.find(product_id)?;
    Some(ContactRequest {
        url: contact_url(product, config),
        close_popup_after_ms: match origin {
            ContactOrigin::Popup => Some(config.popup_close_delay_ms),
            ContactOrigin::Card => None,
        },
    })
}

pub fn contact_url(product: &ProductRecord, config: &StoreConfig) -> String {
    let message = compose_message(product, config);
    format!(
        "{}/{}?text={}",
        config.contact.base_url.trim_end_matches('/'),
        config.contact.recipient,
        utf8_percent_encode(&message, URI_COMPONENT)
    )
}

pub fn compose_message(product: &ProductRecord, config: &StoreConfig) -> String {
    let price = if product.is_marked_down() {
        format!(
            "{} ({}% OFF from {})",
            config.format_price(product.selling_price),
            product.discount_percentage,
            config.format_price(product.original_price)
        )
    } else {
        config.format_price(product.selling_price)
    };

    let mut message = format!(
        "{}\n\n📦 Product: {}\n📂 Category: {}\n💰 Price: {}",
        config.greeting, product.name, product.category, price
    );
    if config.track_stock {
        message.push_str("\n📦 Stock: ");
        message.push_str(&product.stock_status.label(product.stock_quantity));
    }
    message.push_str("\n\n");

    if product.is_out_of_stock(config.track_stock) {
        message.push_str(
            "Please notify me when this item is back in stock. Also, please share details about:",
        );
    } else {
        message.push_str("Please share more details about:");
    }
    message.push_str(DETAILS_LIST);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::sample::sample_catalog;

    fn store(config: &StoreConfig) -> CatalogStore {
        CatalogStore::new(sample_catalog(config.stock_policy()))
    }

    #[test]
    fn message_for_discounted_product_in_stock() {
        let config = StoreConfig::default();
        let store = store(&config);
        let message = compose_message(store.find("001").unwrap(), &config);
        assert_eq!(
            message,
            "Hi! I'm interested in this product from Sanjay Cloth Centre:\n\n\
             📦 Product: Premium Cotton Shirt\n\
             📂 Category: men\n\
             💰 Price: ₹1299 (28% OFF from ₹1799)\n\
             📦 Stock: In Stock\n\n\
             Please share more details about:\n\
             • Available sizes\n\
             • Delivery options\n\
             • Material details"
        );
    }

    #[test]
    fn out_of_stock_asks_for_restock_notice() {
        let config = StoreConfig::default();
        let store = store(&config);
        let message = compose_message(store.find("004").unwrap(), &config);
        assert!(message.contains("📦 Stock: Out of Stock"));
        assert!(message.contains("Please notify me when this item is back in stock."));
    }

    #[test]
    fn untracked_stock_omits_stock_line() {
        let config = StoreConfig {
            track_stock: false,
            ..StoreConfig::default()
        };
        let store = store(&config);
        let message = compose_message(store.find("004").unwrap(), &config);
        assert!(!message.contains("Stock:"));
        assert!(message.contains("Please share more details about:"));
    }

    #[test]
    fn plain_price_without_markdown() {
        let config = StoreConfig::default();
        let mut product = sample_catalog(config.stock_policy()).remove(2);
        product.original_price = 0.0;
        let message = compose_message(&product, &config);
        assert!(message.contains("💰 Price: ₹499\n"));
    }

    #[test]
    fn url_is_encoded_like_a_uri_component() {
        let config = StoreConfig {
            greeting: "Hi (again)! it's me".into(),
            ..StoreConfig::default()
        };
        let store = store(&config);
        let url = contact_url(store.find("003").unwrap(), &config);
        assert!(url.starts_with("https://wa.me/918972714744?text=Hi%20(again)!%20it's%20me%0A%0A"));
        assert!(url.contains("%E2%82%B9499"));
        assert!(!url[url.find('?').unwrap()..].contains(' '));
    }

    #[test]
    fn popup_contact_closes_after_delay() {
        let config = StoreConfig::default();
        let store = store(&config);

        let card = build_contact(&store, "002", ContactOrigin::Card, &config).unwrap();
        assert_eq!(card.close_popup_after_ms, None);
        let popup = build_contact(&store, "002", ContactOrigin::Popup, &config).unwrap();
        assert_eq!(popup.close_popup_after_ms, Some(500));
        assert_eq!(card.url, popup.url);

        assert_eq!(build_contact(&store, "999", ContactOrigin::Popup, &config), None);
    }
}
