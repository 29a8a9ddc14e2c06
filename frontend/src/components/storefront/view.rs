//! View rendering for the storefront component: navigation, filter bar, the
//! product grid (or its loading/empty/advisory states) and the detail popup.

use std::rc::Rc;

use common::contact::ContactOrigin;
use common::view::{render_grid, EMPTY_GRID_MESSAGE, LOADING_MESSAGE};
use yew::html::Scope;
use yew::prelude::*;

use crate::catalog_grid::CatalogGrid;
use crate::components::filter_bar::FilterBar;
use crate::components::product_card::ProductCard;
use crate::components::site_nav::SiteNav;

use super::dialogs::product::product_dialog;
use super::messages::Msg;
use super::state::StorefrontComponent;

pub fn view(component: &StorefrontComponent, ctx: &Context<StorefrontComponent>) -> Html {
    let link = ctx.link();
    let categories: Vec<String> = component
        .catalog
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect();

    html! {
        <div class="storefront-root">
            <SiteNav store_name={component.config.store_name.clone()} />
            <section class="products-section" id="products">
                <FilterBar
                    {categories}
                    active={component.filter.clone()}
                    on_select={link.callback(Msg::SetFilter)}
                />
                { build_grid(component, link) }
            </section>
            { product_dialog(component, link) }
        </div>
    }
}

fn build_grid(component: &StorefrontComponent, link: &Scope<StorefrontComponent>) -> Html {
    if component.loading {
        return html! {
            <CatalogGrid>
                <div class="loading-message">
                    <div class="loading-spinner"></div>
                    <p>{ LOADING_MESSAGE }</p>
                </div>
            </CatalogGrid>
        };
    }

    let cards = render_grid(&component.catalog, &component.filter, &component.config);
    let placeholder = AttrValue::from(component.config.card_placeholder_image.clone());
    let on_open = link.callback(Msg::OpenPopup);
    let on_contact = link.callback(|product_id| Msg::Contact {
        product_id,
        origin: ContactOrigin::Card,
    });

    html! {
        <CatalogGrid fading={component.fading}>
            {
                match component.advisory {
                    Some(message) => html! {
                        <div class="loading-message advisory">
                            <p class="advisory-text">{ message }</p>
                        </div>
                    },
                    None => html! {},
                }
            }
            {
                if cards.is_empty() {
                    html! {
                        <div class="loading-message">
                            <p>{ EMPTY_GRID_MESSAGE }</p>
                        </div>
                    }
                } else {
                    cards
                        .into_iter()
                        .map(|card| {
                            let key = format!("{}-{}", component.render_pass, card.view.id);
                            html! {
                                <ProductCard
                                    {key}
                                    product={Rc::new(card.product.clone())}
                                    view={Rc::new(card.view)}
                                    placeholder={placeholder.clone()}
                                    on_open={on_open.clone()}
                                    on_contact={on_contact.clone()}
                                />
                            }
                        })
                        .collect::<Html>()
                }
            }
        </CatalogGrid>
    }
}
