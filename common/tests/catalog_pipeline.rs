use common::catalog::{CatalogStore, CategoryFilter};
use common::config::StoreConfig;
use common::contact::{build_contact, compose_message, ContactOrigin};
use common::error::FeedError;
use common::feed::{catalog_from_csv, resolve_feed, CatalogSource, FALLBACK_ADVISORY};
use common::model::product::StockStatus;
use common::selection::{Direction, Selection, SelectionEvent};
use common::view::{render_grid, ProductView};

const COMPACT_HEADER: &str =
    "ProductID,ProductName,Category,Description,ColorsAvailable,ImageURLs,OriginalPrice,SellingPrice,StockQuantity";

#[test]
fn single_row_feed_yields_one_discounted_low_stock_record() {
    let config = StoreConfig::default();
    let text = format!("{COMPACT_HEADER}\n1,Shirt,men,desc,Red;Blue,u1|u2;u3,1000,800,3");

    let products = catalog_from_csv(&text, config.stock_policy()).unwrap();
    assert_eq!(products.len(), 1);

    let shirt = &products[0];
    assert_eq!(shirt.discount_percentage, 20);
    assert_eq!(shirt.stock_status, StockStatus::LowStock);
    assert_eq!(shirt.colors, vec!["Red", "Blue"]);
    assert_eq!(
        shirt.image_groups,
        vec![vec!["u1".to_string(), "u2".to_string()], vec!["u3".to_string()]]
    );
}

#[test]
fn valid_rows_survive_in_order() {
    let config = StoreConfig::default();
    let mut text = String::from(COMPACT_HEADER);
    for id in 1..=6 {
        text.push_str(&format!("\n{id},Item {id},kids,\"soft, warm\",,,{},{},{}", id * 100, id * 90, id));
    }
    text.push_str("\n7,too,short");

    let products = catalog_from_csv(&text, config.stock_policy()).unwrap();
    let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert!(products.iter().all(|p| p.description == "soft, warm"));
}

#[test]
fn unreachable_feed_serves_the_sample_catalog_with_one_advisory() {
    let config = StoreConfig::default();
    let loaded = resolve_feed(
        Err(FeedError::Transport("failed to fetch".into())),
        config.stock_policy(),
    );

    assert_eq!(
        loaded.source,
        CatalogSource::Fallback(FeedError::Transport("failed to fetch".into()))
    );
    let ids: Vec<_> = loaded.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["001", "002", "003", "004"]);
    assert_eq!(loaded.advisory(), Some(FALLBACK_ADVISORY));
}

#[test]
fn selecting_a_color_without_pictures_shows_placeholder() {
    let config = StoreConfig::default();
    let text = format!("{COMPACT_HEADER}\n1,Shirt,men,desc,Red;Blue,u1|u2,1000,800,3");
    let store = CatalogStore::new(catalog_from_csv(&text, config.stock_policy()).unwrap());
    let shirt = store.find("1").unwrap();

    let selection = Selection::new().apply(SelectionEvent::SelectColor(1), shirt);
    assert_eq!(
        selection.displayed_image(shirt, &config.popup_placeholder_image),
        config.popup_placeholder_image
    );
    assert_eq!(selection.navigation(shirt), None);

    let back = selection.apply(SelectionEvent::SelectColor(0), shirt);
    let back = back.apply(SelectionEvent::Advance(Direction::Prev), shirt);
    assert_eq!(back.displayed_image(shirt, &config.popup_placeholder_image), "u2");
}

#[test]
fn grid_rerender_is_stable_and_contact_follows_lookup() {
    let config = StoreConfig::default();
    let loaded = resolve_feed(Err(FeedError::Status(500)), config.stock_policy());
    let store = CatalogStore::new(loaded.products);
    let filter: CategoryFilter = "women".parse().unwrap();

    let first = render_grid(&store, &filter, &config);
    let second = render_grid(&store, &filter, &config);
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|card| card.view.id.as_str()).collect::<Vec<_>>(),
        vec!["002", "004"]
    );
    assert_eq!(first[0].view, ProductView::card(store.find("002").unwrap(), &config));

    let contact = build_contact(&store, "004", ContactOrigin::Card, &config).unwrap();
    assert!(contact.url.starts_with("https://wa.me/918972714744?text="));
    assert!(build_contact(&store, "missing", ContactOrigin::Card, &config).is_none());
}

#[test]
fn free_item_shows_full_discount_everywhere() {
    let config = StoreConfig::default();
    let text = format!("{COMPACT_HEADER}\n1,Shirt,men,desc,Red,u1,1000,free,3");

    let products = catalog_from_csv(&text, config.stock_policy()).unwrap();
    let shirt = &products[0];
    assert_eq!(shirt.selling_price, 0.0);
    assert_eq!(shirt.discount_percentage, 100);

    let view = ProductView::card(shirt, &config);
    assert_eq!(view.discount_badge.as_deref(), Some("100% OFF"));
    assert_eq!(view.price.original.as_deref(), Some("₹1000"));
    assert_eq!(view.price.selling, "₹0");

    assert!(compose_message(shirt, &config).contains("💰 Price: ₹0 (100% OFF from ₹1000)"));
}
