//! Update function for the storefront component.
//!
//! Each message mutates the state and reports whether the view must re-render.
//! Timers (grid fade, delayed popup close) post follow-up messages back.

use common::contact::build_contact;
use common::feed::CatalogSource;
use common::selection::Selection;
use gloo_console::{error, log};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::popup_sheet::product_popup_sheet::{lock_page_scroll, unlock_page_scroll};

use super::helpers::{open_in_new_context, publish_debug_handle};
use super::messages::Msg;
use super::state::{PopupState, StorefrontComponent};

pub fn update(
    component: &mut StorefrontComponent,
    ctx: &Context<StorefrontComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::CatalogLoaded(loaded) => {
            match &loaded.source {
                CatalogSource::Feed => {
                    log!(format!("Loaded {} products from the feed", loaded.products.len()))
                }
                CatalogSource::Sample => log!("Sample catalog loaded"),
                CatalogSource::Fallback(err) => {
                    error!(format!("Error loading products: {}", err));
                    log!("Sample catalog loaded as fallback");
                }
            }

            component.advisory = loaded.advisory();
            component.catalog.replace_all(loaded.products);
            component.loading = false;
            component.render_pass += 1;
            publish_debug_handle(&component.config, &component.catalog, &loaded.source);
            true
        }
        Msg::SetFilter(filter) => {
            component.filter = filter;
            component.advisory = None;
            component.render_pass += 1;
            component.fading = true;

            let pass = component.render_pass;
            let delay = component.config.fade_duration_ms;
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(delay).await;
                link.send_message(Msg::FadeFinished(pass));
            });
            true
        }
        Msg::FadeFinished(pass) => {
            if pass != component.render_pass || !component.fading {
                return false;
            }
            component.fading = false;
            true
        }
        Msg::OpenPopup(product_id) => {
            if component.catalog.find(&product_id).is_none() {
                return false;
            }
            component.popup = Some(PopupState {
                product_id,
                selection: Selection::new(),
            });
            lock_page_scroll();
            true
        }
        Msg::ClosePopup => {
            if component.popup.take().is_none() {
                return false;
            }
            unlock_page_scroll();
            true
        }
        Msg::PopupSelection(event) => {
            let Some(popup) = component.popup.as_mut() else {
                return false;
            };
            let Some(product) = component.catalog.find(&popup.product_id) else {
                return false;
            };
            let next = popup.selection.apply(event, product);
            if next == popup.selection {
                return false;
            }
            popup.selection = next;
            true
        }
        Msg::Contact { product_id, origin } => {
            let Some(request) =
                build_contact(&component.catalog, &product_id, origin, &component.config)
            else {
                return false;
            };

            log!(format!("Opening contact link for product {}", product_id));
            open_in_new_context(&request.url);

            if let Some(delay) = request.close_popup_after_ms {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    link.send_message(Msg::ClosePopup);
                });
            }
            false
        }
    }
}
