//! Storefront root: loads the catalog once, renders the filter bar, the
//! product grid and the product detail popup.
//!
//! Follows the same split as the other components: `state` holds runtime data,
//! `update` applies messages, `view` renders, `helpers` wraps browser APIs.

use std::rc::Rc;

use common::config::StoreConfig;
use common::feed::{resolve_feed, LoadedCatalog};
use gloo_console::{log, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::{bind_escape_key, fetch_feed, unbind_escape_key};
pub use messages::Msg;
pub use props::StorefrontProps;
pub use state::StorefrontComponent;

use crate::popup_sheet::product_popup_sheet::unlock_page_scroll;

impl Component for StorefrontComponent {
    type Message = Msg;
    type Properties = StorefrontProps;

    fn create(ctx: &Context<Self>) -> Self {
        StorefrontComponent::new(Rc::clone(&ctx.props().config))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.escape_listener = bind_escape_key(ctx.link().callback(|_| Msg::ClosePopup));
            load_catalog(ctx.link().clone(), Rc::clone(&self.config));
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(listener) = self.escape_listener.take() {
            unbind_escape_key(&listener);
        }
        if self.popup.is_some() {
            unlock_page_scroll();
        }
    }
}

/// Makes the single feed request, or serves the sample catalog when no feed is configured.
fn load_catalog(link: yew::html::Scope<StorefrontComponent>, config: Rc<StoreConfig>) {
    let policy = config.stock_policy();
    match config.configured_feed_url() {
        None => {
            warn!("Product feed not configured. Loading sample catalog.");
            link.send_message(Msg::CatalogLoaded(LoadedCatalog::sample(policy)));
        }
        Some(url) => {
            let url = url.to_string();
            log!(format!("Loading products from {}", url));
            spawn_local(async move {
                let fetched = fetch_feed(&url).await;
                link.send_message(Msg::CatalogLoaded(resolve_feed(fetched, policy)));
            });
        }
    }
}
