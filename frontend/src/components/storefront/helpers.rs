//! Browser-side helpers for the storefront component.
//!
//! - **Feed fetch**: the one request for the product CSV.
//! - **Contact target**: opening the messaging link in a new browsing context.
//! - **Keyboard**: a document-level Escape binding that closes the detail view.
//! - **Debug handle**: a JSON snapshot of config and catalog on `window.storefront`.
//!
//! Every DOM lookup is optional; a missing window or document turns the
//! helper into a no-op.

use common::catalog::CatalogStore;
use common::config::StoreConfig;
use common::error::FeedError;
use common::feed::CatalogSource;
use common::model::product::ProductRecord;
use gloo_console::warn;
use gloo_net::http::Request;
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;
use yew::Callback;

/// Fetches the feed body. Non-2xx responses are errors.
pub async fn fetch_feed(url: &str) -> Result<String, FeedError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FeedError::Transport(err.to_string()))?;

    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|err| FeedError::Transport(err.to_string()))
}

pub fn open_in_new_context(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            warn!(format!("Could not open {}", url));
        }
    }
}

/// Calls `on_escape` whenever Escape is pressed anywhere on the page.
///
/// The returned closure must be kept alive for as long as the binding should
/// work, and passed to [`unbind_escape_key`] when it is no longer needed.
pub fn bind_escape_key(on_escape: Callback<()>) -> Option<Closure<dyn Fn(KeyboardEvent)>> {
    let document = web_sys::window()?.document()?;
    let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            on_escape.emit(());
        }
    });
    document
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}

pub fn unbind_escape_key(listener: &Closure<dyn Fn(KeyboardEvent)>) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document
            .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .ok();
    }
}

#[derive(Serialize)]
struct DebugSnapshot<'a> {
    config: &'a StoreConfig,
    products: &'a [ProductRecord],
    source: String,
}

/// JSON text of the debug snapshot.
fn debug_snapshot_json(
    config: &StoreConfig,
    catalog: &CatalogStore,
    source: &CatalogSource,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&DebugSnapshot {
        config,
        products: catalog.all(),
        source: source.to_string(),
    })
}

/// Publishes the loaded catalog on `window.storefront` for console inspection.
pub fn publish_debug_handle(config: &StoreConfig, catalog: &CatalogStore, source: &CatalogSource) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let json = match debug_snapshot_json(config, catalog, source) {
        Ok(json) => json,
        Err(err) => {
            warn!(format!("Could not serialize the storefront debug handle: {}", err));
            return;
        }
    };
    let value = match js_sys::JSON::parse(&json) {
        Ok(value) => value,
        Err(err) => {
            warn!("Could not parse the storefront debug handle:", err);
            return;
        }
    };

    match Reflect::set(&window, &JsValue::from_str("storefront"), &value) {
        Ok(true) => {}
        Ok(false) => warn!("window.storefront is read-only; debug handle not published"),
        Err(err) => warn!("Could not publish the storefront debug handle:", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::feed::LoadedCatalog;
    use common::error::FeedError;

    #[test]
    fn debug_snapshot_carries_config_products_and_source() {
        let config = StoreConfig::default();
        let loaded = LoadedCatalog::sample(config.stock_policy());
        let catalog = CatalogStore::new(loaded.products);
        let source = CatalogSource::Fallback(FeedError::Status(404));

        let json = debug_snapshot_json(&config, &catalog, &source).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config"]["store_name"], config.store_name.as_str());
        assert_eq!(value["products"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["products"][0]["id"], "001");
        assert_eq!(value["source"], source.to_string().as_str());
    }
}
